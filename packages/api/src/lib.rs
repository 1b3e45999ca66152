//! # API crate: the backend façade for the daily report client
//!
//! Every page talks to the backend through the [`ReportApi`] trait. Two
//! implementations exist, and one is chosen when the app starts:
//!
//! | Implementation | Backend |
//! |----------------|---------|
//! | [`MockApi`] | In-memory users and reports with simulated latency. The default, so the client runs without a server. |
//! | [`HttpApi`] | The REST backend at `{base_url}/api/...`, bearer-authenticated with the stored token. |
//!
//! [`ApiService`] wraps both behind one type and is built from
//! [`store::AppConfig`] by [`ApiService::from_config`].
//!
//! Futures returned by the trait are not `Send`: on wasm they run on the
//! browser's single thread, and natively the UI spawns them locally.

use std::future::Future;

use store::{DailyReport, LoginResponse, ReportDraft, ReportListParams, ReportStatus, UserInfo};

mod delay;
pub mod error;
pub mod http;
pub mod mock;
pub mod service;

pub use error::{ApiError, ApiResult};
pub use http::HttpApi;
pub use mock::MockApi;
pub use service::ApiService;

/// Operations the pages need from the backend.
pub trait ReportApi {
    /// Exchange credentials for a token and the user's profile.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = ApiResult<LoginResponse>>;

    /// Whether `token` is still accepted. Never fails: any error reads as `false`.
    fn validate_token(&self, token: &str) -> impl Future<Output = bool>;

    /// Profile of the user `token` belongs to, or `None` if it is not valid.
    fn get_user_info(&self, token: &str) -> impl Future<Output = Option<UserInfo>>;

    /// The caller's own reports, newest first.
    fn get_daily_reports(
        &self,
        params: &ReportListParams,
    ) -> impl Future<Output = ApiResult<Vec<DailyReport>>>;

    /// Reports of the caller's team, newest first.
    fn get_subordinate_reports(
        &self,
        status: Option<ReportStatus>,
    ) -> impl Future<Output = ApiResult<Vec<DailyReport>>>;

    fn create_daily_report(
        &self,
        draft: &ReportDraft,
    ) -> impl Future<Output = ApiResult<DailyReport>>;

    fn update_daily_report(
        &self,
        id: i64,
        draft: &ReportDraft,
    ) -> impl Future<Output = ApiResult<DailyReport>>;

    fn delete_daily_report(&self, id: i64) -> impl Future<Output = ApiResult<()>>;

    /// `None` when the report does not exist.
    fn get_daily_report(&self, id: i64) -> impl Future<Output = ApiResult<Option<DailyReport>>>;
}
