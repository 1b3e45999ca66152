//! # In-memory backend
//!
//! [`MockApi`] serves every [`ReportApi`] call from seeded data so the client
//! runs without a server. It follows the REST backend's rules closely enough
//! for the pages to behave the same in both modes:
//!
//! - Users `admin`, `manager`, `employee1` and `employee2` all log in with the
//!   password `password`. `manager` supervises both employees.
//! - Tokens look like `mock-jwt-token-{userId}-{millis}`. A token is valid when
//!   it names a seeded user.
//! - A user has at most one report per date.
//! - Reports are visible to their owner, the owner's supervisor and admins.
//!   Only the owner or an admin may change or delete one.
//! - `submittedAt` is stamped on the draft to submitted transition and kept
//!   when a report is withdrawn.
//! - Lists are sorted by `createdAt`, newest first.
//!
//! Every call waits for the configured latency before touching state. State is
//! shared between clones.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use store::{
    DailyReport, KeyValueStore, LoginResponse, ReportDraft, ReportListParams, ReportStatus,
    TokenStore, UserInfo, UserRole,
};

use crate::delay::sleep;
use crate::error::{ApiError, ApiResult};
use crate::ReportApi;

const TOKEN_PREFIX: &str = "mock-jwt-token-";
const MOCK_PASSWORD: &str = "password";

struct MockUser {
    id: i64,
    username: &'static str,
    email: &'static str,
    role: UserRole,
    display_name: &'static str,
    supervisor_id: Option<i64>,
}

impl MockUser {
    fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            username: self.username.to_string(),
            email: self.email.to_string(),
            role: self.role,
            display_name: Some(self.display_name.to_string()),
        }
    }

    fn supervises(&self, user_id: i64) -> bool {
        USERS
            .iter()
            .any(|u| u.id == user_id && u.supervisor_id == Some(self.id))
    }

    fn can_view(&self, report: &DailyReport) -> bool {
        report.user_id == self.id || self.role == UserRole::Admin || self.supervises(report.user_id)
    }

    fn can_modify(&self, report: &DailyReport) -> bool {
        report.user_id == self.id || self.role == UserRole::Admin
    }
}

static USERS: [MockUser; 4] = [
    MockUser {
        id: 1,
        username: "admin",
        email: "admin@example.com",
        role: UserRole::Admin,
        display_name: "System Administrator",
        supervisor_id: None,
    },
    MockUser {
        id: 2,
        username: "manager",
        email: "manager@example.com",
        role: UserRole::Supervisor,
        display_name: "Ichiro Suzuki",
        supervisor_id: None,
    },
    MockUser {
        id: 3,
        username: "employee1",
        email: "emp1@example.com",
        role: UserRole::Subordinate,
        display_name: "Taro Tanaka",
        supervisor_id: Some(2),
    },
    MockUser {
        id: 4,
        username: "employee2",
        email: "emp2@example.com",
        role: UserRole::Subordinate,
        display_name: "Hanako Sato",
        supervisor_id: Some(2),
    },
];

fn user_by_id(id: i64) -> Option<&'static MockUser> {
    USERS.iter().find(|u| u.id == id)
}

/// Resolve `mock-jwt-token-{id}-{millis}` to its user.
fn user_for_token(token: &str) -> Option<&'static MockUser> {
    let rest = token.strip_prefix(TOKEN_PREFIX)?;
    let id = rest.split('-').next()?.parse().ok()?;
    user_by_id(id)
}

fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

fn sort_newest_first(reports: &mut [DailyReport]) {
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

struct MockState {
    reports: Vec<DailyReport>,
    next_id: i64,
}

/// Seeded in-memory implementation of [`ReportApi`].
pub struct MockApi<K> {
    tokens: TokenStore<K>,
    state: Arc<Mutex<MockState>>,
    latency: Duration,
}

impl<K: Clone> Clone for MockApi<K> {
    fn clone(&self) -> Self {
        Self {
            tokens: self.tokens.clone(),
            state: self.state.clone(),
            latency: self.latency,
        }
    }
}

impl<K> std::fmt::Debug for MockApi<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockApi")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl<K: KeyValueStore> MockApi<K> {
    /// Mock backend with seeded data and a 300ms delay per call.
    pub fn new(tokens: TokenStore<K>) -> Self {
        let reports = seed_reports();
        let next_id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            tokens,
            state: Arc::new(Mutex::new(MockState { reports, next_id })),
            latency: Duration::from_millis(300),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The user the stored token belongs to.
    fn current_user(&self) -> ApiResult<&'static MockUser> {
        self.tokens
            .get()
            .as_deref()
            .and_then(user_for_token)
            .ok_or(ApiError::Unauthorized)
    }
}

impl<K: KeyValueStore> ReportApi for MockApi<K> {
    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        sleep(self.latency).await;
        let user = USERS
            .iter()
            .find(|u| u.username == username)
            .filter(|_| password == MOCK_PASSWORD)
            .ok_or_else(|| {
                tracing::warn!("Mock login rejected for {}", username);
                ApiError::Unauthorized
            })?;

        let token = format!("{TOKEN_PREFIX}{}-{}", user.id, Utc::now().timestamp_millis());
        tracing::info!("Mock login: {}", user.username);
        Ok(LoginResponse {
            token,
            id: user.id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            role: user.role,
            display_name: Some(user.display_name.to_string()),
        })
    }

    async fn validate_token(&self, token: &str) -> bool {
        sleep(self.latency).await;
        user_for_token(token).is_some()
    }

    async fn get_user_info(&self, token: &str) -> Option<UserInfo> {
        sleep(self.latency).await;
        user_for_token(token).map(MockUser::info)
    }

    async fn get_daily_reports(&self, params: &ReportListParams) -> ApiResult<Vec<DailyReport>> {
        sleep(self.latency).await;
        let user = self.current_user()?;

        let mut reports: Vec<DailyReport> = self
            .state()
            .reports
            .iter()
            .filter(|r| r.user_id == user.id)
            .filter(|r| params.status.map_or(true, |s| r.status == s))
            .filter(|r| {
                params
                    .year_month
                    .as_deref()
                    .map_or(true, |ym| store::dates::year_month(r.report_date) == ym)
            })
            .cloned()
            .collect();
        sort_newest_first(&mut reports);

        if let (Some(page), Some(size)) = (params.page, params.size.filter(|s| *s > 0)) {
            let start = page as usize * size as usize;
            reports = reports.into_iter().skip(start).take(size as usize).collect();
        }
        Ok(reports)
    }

    async fn get_subordinate_reports(
        &self,
        status: Option<ReportStatus>,
    ) -> ApiResult<Vec<DailyReport>> {
        sleep(self.latency).await;
        let user = self.current_user()?;
        if !user.role.can_review_team() {
            return Err(ApiError::Forbidden);
        }

        let mut reports: Vec<DailyReport> = self
            .state()
            .reports
            .iter()
            .filter(|r| r.user_id != user.id && user.can_view(r))
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        sort_newest_first(&mut reports);
        Ok(reports)
    }

    async fn create_daily_report(&self, draft: &ReportDraft) -> ApiResult<DailyReport> {
        sleep(self.latency).await;
        let user = self.current_user()?;
        let mut state = self.state();

        if state
            .reports
            .iter()
            .any(|r| r.user_id == user.id && r.report_date == draft.report_date)
        {
            tracing::warn!("Duplicate report date {} for {}", draft.report_date, user.username);
            return Err(ApiError::Rejected(
                "A report for this date already exists".to_string(),
            ));
        }

        let now = now_iso();
        let report = DailyReport {
            id: state.next_id,
            user_id: user.id,
            username: user.username.to_string(),
            display_name: Some(user.display_name.to_string()),
            title: draft.title.clone(),
            work_content: draft.work_content.clone(),
            status: draft.status,
            report_date: draft.report_date,
            submitted_at: (draft.status == ReportStatus::Submitted).then(|| now.clone()),
            created_at: now.clone(),
            updated_at: Some(now),
        };
        state.next_id += 1;
        state.reports.push(report.clone());
        tracing::info!("Mock created report {}", report.id);
        Ok(report)
    }

    async fn update_daily_report(&self, id: i64, draft: &ReportDraft) -> ApiResult<DailyReport> {
        sleep(self.latency).await;
        let user = self.current_user()?;
        let mut state = self.state();

        let index = state
            .reports
            .iter()
            .position(|r| r.id == id && user.can_modify(r))
            .ok_or(ApiError::NotFound)?;
        let owner = state.reports[index].user_id;

        if state
            .reports
            .iter()
            .any(|r| r.id != id && r.user_id == owner && r.report_date == draft.report_date)
        {
            return Err(ApiError::Rejected(
                "A report for this date already exists".to_string(),
            ));
        }

        let now = now_iso();
        let report = &mut state.reports[index];
        if report.status == ReportStatus::Draft && draft.status == ReportStatus::Submitted {
            report.submitted_at = Some(now.clone());
        }
        report.title = draft.title.clone();
        report.work_content = draft.work_content.clone();
        report.report_date = draft.report_date;
        report.status = draft.status;
        report.updated_at = Some(now);

        tracing::info!("Mock updated report {} ({})", id, report.status.as_str());
        Ok(report.clone())
    }

    async fn delete_daily_report(&self, id: i64) -> ApiResult<()> {
        sleep(self.latency).await;
        let user = self.current_user()?;
        let mut state = self.state();

        let index = state
            .reports
            .iter()
            .position(|r| r.id == id && user.can_modify(r))
            .ok_or(ApiError::NotFound)?;
        state.reports.remove(index);
        tracing::info!("Mock deleted report {}", id);
        Ok(())
    }

    async fn get_daily_report(&self, id: i64) -> ApiResult<Option<DailyReport>> {
        sleep(self.latency).await;
        let user = self.current_user()?;
        Ok(self
            .state()
            .reports
            .iter()
            .find(|r| r.id == id && user.can_view(r))
            .cloned())
    }
}

struct Seed {
    id: i64,
    user_id: i64,
    title: &'static str,
    work_content: &'static str,
    status: ReportStatus,
    report_date: (i32, u32, u32),
    created_at: &'static str,
    updated_at: &'static str,
}

static SEEDS: [Seed; 10] = [
    Seed {
        id: 1,
        user_id: 3,
        title: "Refactoring the report list components",
        work_content: "Worked on the front end of the daily report system. Memoised the report list so cards no longer re-render on every keystroke, moved the form fields to the new composite components and updated the tests; all eleven cases pass. Tomorrow: the confirmation dialog for deletes.",
        status: ReportStatus::Submitted,
        report_date: (2024, 12, 20),
        created_at: "2024-12-20T17:45:00.000Z",
        updated_at: "2024-12-20T18:30:00.000Z",
    },
    Seed {
        id: 2,
        user_id: 3,
        title: "Backend API integration tests",
        work_content: "Ran integration tests against the daily report API. The JWT login flow works end to end, CORS is configured correctly and the database connection is stable.",
        status: ReportStatus::Draft,
        report_date: (2024, 12, 21),
        created_at: "2024-12-21T16:20:00.000Z",
        updated_at: "2024-12-21T16:20:00.000Z",
    },
    Seed {
        id: 3,
        user_id: 3,
        title: "Database design review meeting",
        work_content: "Morning: design review of the users and daily_reports tables, covering indexes and the supervisor hierarchy. Afternoon: loaded test data and removed an N+1 query. Response times are within target.",
        status: ReportStatus::Submitted,
        report_date: (2024, 12, 19),
        created_at: "2024-12-19T17:30:00.000Z",
        updated_at: "2024-12-19T19:15:00.000Z",
    },
    Seed {
        id: 4,
        user_id: 3,
        title: "Improving the test environment",
        work_content: "Reworked the test runner configuration to stop flaky async timeouts, fixed the provider integration test and extracted reusable test utilities.",
        status: ReportStatus::Draft,
        report_date: (2024, 12, 18),
        created_at: "2024-12-18T15:45:00.000Z",
        updated_at: "2024-12-18T17:10:00.000Z",
    },
    Seed {
        id: 5,
        user_id: 3,
        title: "CI/CD pipeline and Docker setup",
        work_content: "Set up a CI pipeline that builds and tests every pull request. Reworked the compose file for the front end, backend and database, and switched to multi-stage builds, cutting deploy time by 30%. Next week: monitoring.",
        status: ReportStatus::Submitted,
        report_date: (2024, 12, 13),
        created_at: "2024-12-13T17:15:00.000Z",
        updated_at: "2024-12-13T18:00:00.000Z",
    },
    Seed {
        id: 6,
        user_id: 3,
        title: "Tightening type safety",
        work_content: "Finished migrating the shared types, replaced loose unions with tagged variants and brought lint errors down from 232 to 3.",
        status: ReportStatus::Submitted,
        report_date: (2024, 11, 20),
        created_at: "2024-11-20T16:30:00.000Z",
        updated_at: "2024-11-20T17:45:00.000Z",
    },
    Seed {
        id: 7,
        user_id: 3,
        title: "Accessibility and WCAG compliance",
        work_content: "Brought the app up to WCAG 2.1 AA: labelled the loading spinner for screen readers, improved keyboard navigation and fixed colour contrast. Verified with assistive technology.",
        status: ReportStatus::Submitted,
        report_date: (2024, 12, 15),
        created_at: "2024-12-15T17:20:00.000Z",
        updated_at: "2024-12-15T19:00:00.000Z",
    },
    Seed {
        id: 8,
        user_id: 3,
        title: "Sorting out today's tasks...",
        work_content: "Collecting the tasks from this morning's stand-up. Still in progress, details to follow.",
        status: ReportStatus::Draft,
        report_date: (2024, 12, 22),
        created_at: "2024-12-22T09:30:00.000Z",
        updated_at: "2024-12-22T09:30:00.000Z",
    },
    Seed {
        id: 9,
        user_id: 4,
        title: "Customer onboarding call",
        work_content: "Walked the new customer through account setup and collected their reporting requirements for the next sprint.",
        status: ReportStatus::Submitted,
        report_date: (2024, 12, 20),
        created_at: "2024-12-20T18:05:00.000Z",
        updated_at: "2024-12-20T18:40:00.000Z",
    },
    Seed {
        id: 10,
        user_id: 4,
        title: "Release notes draft",
        work_content: "Started the release notes for version 1.2, listing the new search form and the supervisor dashboard.",
        status: ReportStatus::Draft,
        report_date: (2024, 12, 21),
        created_at: "2024-12-21T17:40:00.000Z",
        updated_at: "2024-12-21T17:40:00.000Z",
    },
];

fn seed_reports() -> Vec<DailyReport> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            let author = user_by_id(seed.user_id)?;
            let (y, m, d) = seed.report_date;
            Some(DailyReport {
                id: seed.id,
                user_id: author.id,
                username: author.username.to_string(),
                display_name: Some(author.display_name.to_string()),
                title: seed.title.to_string(),
                work_content: seed.work_content.to_string(),
                status: seed.status,
                report_date: NaiveDate::from_ymd_opt(y, m, d)?,
                submitted_at: (seed.status == ReportStatus::Submitted)
                    .then(|| seed.updated_at.to_string()),
                created_at: seed.created_at.to_string(),
                updated_at: Some(seed.updated_at.to_string()),
            })
        })
        .collect()
}
