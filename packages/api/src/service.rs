use std::time::Duration;

use store::{
    ApiMode, AppConfig, DailyReport, KeyValueStore, LoginResponse, ReportDraft, ReportListParams,
    ReportStatus, TokenStore, UserInfo,
};

use crate::error::ApiResult;
use crate::{HttpApi, MockApi, ReportApi};

/// The backend chosen at startup. Pages only ever see this type.
#[derive(Clone, Debug)]
pub enum ApiService<K> {
    Mock(MockApi<K>),
    Http(HttpApi<K>),
}

impl<K: KeyValueStore + Clone> ApiService<K> {
    /// Build the backend `config` asks for, reading tokens from `storage`.
    pub fn from_config(config: &AppConfig, storage: K) -> Self {
        let tokens = TokenStore::new(storage);
        match config.api.mode {
            ApiMode::Mock => {
                tracing::info!("Using mock API ({}ms latency)", config.mock.latency_ms);
                ApiService::Mock(
                    MockApi::new(tokens).with_latency(Duration::from_millis(config.mock.latency_ms)),
                )
            }
            ApiMode::Http => {
                tracing::info!("Using REST API at {}", config.base_url());
                ApiService::Http(HttpApi::new(config.base_url(), tokens))
            }
        }
    }

    pub fn mode(&self) -> ApiMode {
        match self {
            ApiService::Mock(_) => ApiMode::Mock,
            ApiService::Http(_) => ApiMode::Http,
        }
    }
}

impl<K: KeyValueStore> ReportApi for ApiService<K> {
    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        match self {
            ApiService::Mock(api) => api.login(username, password).await,
            ApiService::Http(api) => api.login(username, password).await,
        }
    }

    async fn validate_token(&self, token: &str) -> bool {
        match self {
            ApiService::Mock(api) => api.validate_token(token).await,
            ApiService::Http(api) => api.validate_token(token).await,
        }
    }

    async fn get_user_info(&self, token: &str) -> Option<UserInfo> {
        match self {
            ApiService::Mock(api) => api.get_user_info(token).await,
            ApiService::Http(api) => api.get_user_info(token).await,
        }
    }

    async fn get_daily_reports(&self, params: &ReportListParams) -> ApiResult<Vec<DailyReport>> {
        match self {
            ApiService::Mock(api) => api.get_daily_reports(params).await,
            ApiService::Http(api) => api.get_daily_reports(params).await,
        }
    }

    async fn get_subordinate_reports(
        &self,
        status: Option<ReportStatus>,
    ) -> ApiResult<Vec<DailyReport>> {
        match self {
            ApiService::Mock(api) => api.get_subordinate_reports(status).await,
            ApiService::Http(api) => api.get_subordinate_reports(status).await,
        }
    }

    async fn create_daily_report(&self, draft: &ReportDraft) -> ApiResult<DailyReport> {
        match self {
            ApiService::Mock(api) => api.create_daily_report(draft).await,
            ApiService::Http(api) => api.create_daily_report(draft).await,
        }
    }

    async fn update_daily_report(&self, id: i64, draft: &ReportDraft) -> ApiResult<DailyReport> {
        match self {
            ApiService::Mock(api) => api.update_daily_report(id, draft).await,
            ApiService::Http(api) => api.update_daily_report(id, draft).await,
        }
    }

    async fn delete_daily_report(&self, id: i64) -> ApiResult<()> {
        match self {
            ApiService::Mock(api) => api.delete_daily_report(id).await,
            ApiService::Http(api) => api.delete_daily_report(id).await,
        }
    }

    async fn get_daily_report(&self, id: i64) -> ApiResult<Option<DailyReport>> {
        match self {
            ApiService::Mock(api) => api.get_daily_report(id).await,
            ApiService::Http(api) => api.get_daily_report(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use store::MemoryStore;

    use super::*;

    #[test]
    fn default_config_selects_mock() {
        let service = ApiService::from_config(&AppConfig::default(), MemoryStore::new());
        assert_eq!(service.mode(), ApiMode::Mock);
    }

    #[test]
    fn http_mode_selects_rest_client() {
        let config = AppConfig::from_toml("[api]\nmode = \"http\"\n").unwrap();
        let service = ApiService::from_config(&config, MemoryStore::new());
        assert_eq!(service.mode(), ApiMode::Http);
    }

    #[tokio::test]
    async fn delegates_to_the_selected_backend() {
        let mut config = AppConfig::default();
        config.mock.latency_ms = 0;
        let storage = MemoryStore::new();
        let service = ApiService::from_config(&config, storage.clone());

        let response = service.login("manager", "password").await.unwrap();
        assert!(service.validate_token(&response.token).await);

        TokenStore::new(storage).set(&response.token).unwrap();
        let team = service.get_subordinate_reports(None).await.unwrap();
        assert!(!team.is_empty());
    }
}
