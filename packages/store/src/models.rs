//! # Domain models for users and daily reports
//!
//! These types cross the client/backend boundary as JSON, so every struct uses
//! `camelCase` field names to match the REST API.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRole`] | Role of a user. Serialised as `admin` / `supervisor` / `subordinate`; the backend's Japanese labels (`管理者`, `上長`, `部下`) are accepted on input. |
//! | [`UserInfo`] | Snapshot of the logged-in user held by the session. |
//! | [`UserPatch`] | Partial update applied to a [`UserInfo`] by `SessionStore::update_user`. |
//! | [`ReportStatus`] | `draft` or `submitted`. |
//! | [`DailyReport`] | A report as returned by the backend. |
//! | [`ReportDraft`] | Body of create and update requests. |
//! | [`ReportListParams`] | Query parameters for listing reports. |
//! | [`LoginResponse`] | Token plus user fields returned by the login endpoint. |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "admin", alias = "管理者")]
    Admin,
    #[serde(rename = "supervisor", alias = "上長")]
    Supervisor,
    #[serde(rename = "subordinate", alias = "部下")]
    Subordinate,
}

impl UserRole {
    /// Human-readable role name.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Supervisor => "Supervisor",
            UserRole::Subordinate => "Member",
        }
    }

    /// Whether this role may open the supervisor dashboard.
    pub fn can_review_team(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Supervisor)
    }
}

/// The logged-in user, as stored in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to the username if it is not set.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Numeric user id, as used by [`DailyReport::user_id`].
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.parse().ok()
    }
}

/// Fields to overwrite on the current user. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub display_name: Option<String>,
}

impl UserPatch {
    pub fn display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Shallow-merge this patch into `user`.
    pub fn apply_to(self, user: &mut UserInfo) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(display_name) = self.display_name {
            user.display_name = Some(display_name);
        }
    }
}

/// Lifecycle status of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Submitted,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Submitted => "Submitted",
        }
    }

    /// Wire value, also used for `<select>` option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Submitted => "submitted",
        }
    }

    /// The status a draft↔submitted transition leads to.
    pub fn toggled(&self) -> Self {
        match self {
            ReportStatus::Draft => ReportStatus::Submitted,
            ReportStatus::Submitted => ReportStatus::Draft,
        }
    }
}

/// A daily report owned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub title: String,
    pub work_content: String,
    pub status: ReportStatus,
    /// Calendar date the report covers (`YYYY-MM-DD`).
    pub report_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    pub created_at: String,
    /// Missing from the backend's list projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl DailyReport {
    /// Author name shown on cards: display name, else username.
    pub fn author_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    pub fn is_owned_by(&self, user: &UserInfo) -> bool {
        user.numeric_id() == Some(self.user_id)
    }

    /// Owners and admins may edit or delete a report.
    pub fn can_be_modified_by(&self, user: &UserInfo) -> bool {
        self.is_owned_by(user) || user.role == UserRole::Admin
    }

    /// Request body that reproduces this report with a different status.
    pub fn draft_with_status(&self, status: ReportStatus) -> ReportDraft {
        ReportDraft {
            title: self.title.clone(),
            work_content: self.work_content.clone(),
            report_date: self.report_date,
            status,
        }
    }
}

/// Body of the create and update requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub title: String,
    pub work_content: String,
    pub report_date: NaiveDate,
    pub status: ReportStatus,
}

/// Query parameters for the report list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    /// `YYYY-MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_month: Option<String>,
}

impl ReportListParams {
    pub fn with_status(mut self, status: ReportStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// Query pairs in the order the backend documents them.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(year_month) = &self.year_month {
            query.push(("yearMonth", year_month.clone()));
        }
        query
    }
}

/// Response of the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl LoginResponse {
    /// Split into the user snapshot and the token stored by the session.
    pub fn into_parts(self) -> (UserInfo, String) {
        let display_name = self
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.username.clone());
        let user = UserInfo {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            display_name: Some(display_name),
        };
        (user, self.token)
    }
}
