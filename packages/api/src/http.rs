//! # REST client
//!
//! [`HttpApi`] calls the backend at `{base_url}/api/...` with `reqwest`. Every
//! request carries `Authorization: Bearer <token>` when a token is stored.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `login` | `POST /api/auth/login` |
//! | `validate_token` | `GET /api/auth/validate` |
//! | `get_user_info` | `GET /api/auth/me` |
//! | `get_daily_reports` | `GET /api/daily-reports/my?page&size&status&yearMonth` |
//! | `get_subordinate_reports` | `GET /api/daily-reports/subordinates?status` |
//! | `create_daily_report` | `POST /api/daily-reports` |
//! | `get_daily_report` | `GET /api/daily-reports/{id}` |
//! | `update_daily_report` | `PUT /api/daily-reports/{id}` |
//! | `delete_daily_report` | `DELETE /api/daily-reports/{id}` |
//!
//! Non-success statuses become [`ApiError`] through [`ApiError::from_status`],
//! using the `message` or `error` field of a JSON error body when present.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{
    DailyReport, KeyValueStore, LoginResponse, ReportDraft, ReportListParams, ReportStatus,
    TokenStore, UserInfo,
};

use crate::error::{ApiError, ApiResult};
use crate::ReportApi;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Client for the REST backend.
#[derive(Clone, Debug)]
pub struct HttpApi<K> {
    client: Client,
    base_url: String,
    tokens: TokenStore<K>,
}

impl<K: KeyValueStore> HttpApi<K> {
    pub fn new(base_url: &str, tokens: TokenStore<K>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with the stored token, if any.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method.clone(), self.url(path));
        tracing::debug!("API request: {} {}", method, path);
        match self.tokens.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request with an explicit token, for the token checks.
    fn request_with_token(&self, path: &str, token: &str) -> RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(token)
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("API request failed: {}", e);
            ApiError::from(e)
        })?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(error_from_response(response).await)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.send(builder).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message.or(body.error),
        Err(_) => None,
    };
    let error = ApiError::from_status(status, message);
    tracing::warn!("API call returned {}: {}", status, error);
    error
}

/// The login endpoint answers bad credentials with 400 as well as 401.
fn login_error(status: u16, error: ApiError) -> ApiError {
    match status {
        400 | 401 => ApiError::Unauthorized,
        _ => error,
    }
}

impl<K: KeyValueStore> ReportApi for HttpApi<K> {
    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let builder = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&LoginRequest { username, password });
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Login request failed: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(login_error(status, error_from_response(response).await));
        }
        let response: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if response.token.is_empty() {
            return Err(ApiError::Decode("login response carried no token".to_string()));
        }
        tracing::info!("Logged in as {}", response.username);
        Ok(response)
    }

    async fn validate_token(&self, token: &str) -> bool {
        match self
            .request_with_token("/api/auth/validate", token)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::error!("Token validation failed: {}", e);
                false
            }
        }
    }

    async fn get_user_info(&self, token: &str) -> Option<UserInfo> {
        let builder = self.request_with_token("/api/auth/me", token);
        match self.send_json(builder).await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Could not load user info: {}", e);
                None
            }
        }
    }

    async fn get_daily_reports(&self, params: &ReportListParams) -> ApiResult<Vec<DailyReport>> {
        let builder = self
            .request(Method::GET, "/api/daily-reports/my")
            .query(&params.to_query());
        let reports: Vec<DailyReport> = self.send_json(builder).await?;
        tracing::debug!("Loaded {} reports", reports.len());
        Ok(reports)
    }

    async fn get_subordinate_reports(
        &self,
        status: Option<ReportStatus>,
    ) -> ApiResult<Vec<DailyReport>> {
        let mut builder = self.request(Method::GET, "/api/daily-reports/subordinates");
        if let Some(status) = status {
            builder = builder.query(&[("status", status.as_str())]);
        }
        self.send_json(builder).await
    }

    async fn create_daily_report(&self, draft: &ReportDraft) -> ApiResult<DailyReport> {
        let builder = self.request(Method::POST, "/api/daily-reports").json(draft);
        let report: DailyReport = self.send_json(builder).await?;
        tracing::info!("Created report {}", report.id);
        Ok(report)
    }

    async fn update_daily_report(&self, id: i64, draft: &ReportDraft) -> ApiResult<DailyReport> {
        let builder = self
            .request(Method::PUT, &format!("/api/daily-reports/{id}"))
            .json(draft);
        let report: DailyReport = self.send_json(builder).await?;
        tracing::info!("Updated report {} ({})", id, report.status.as_str());
        Ok(report)
    }

    async fn delete_daily_report(&self, id: i64) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &format!("/api/daily-reports/{id}")))
            .await?;
        tracing::info!("Deleted report {}", id);
        Ok(())
    }

    async fn get_daily_report(&self, id: i64) -> ApiResult<Option<DailyReport>> {
        let builder = self.request(Method::GET, &format!("/api/daily-reports/{id}"));
        match self.send_json(builder).await {
            Ok(report) => Ok(Some(report)),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
