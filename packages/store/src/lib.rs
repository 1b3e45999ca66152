pub mod config;
pub mod dates;
pub mod filter;
pub mod models;
pub mod session;
pub mod validation;

mod kv;
pub use kv::{KeyValueStore, StorageError};

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ApiMode, AppConfig, ConfigError};
pub use filter::{filter_reports, SearchCriteria, StatusFilter};
pub use models::{
    DailyReport, LoginResponse, ReportDraft, ReportListParams, ReportStatus, UserInfo, UserPatch,
    UserRole,
};
pub use session::{Session, SessionStore, TokenStore};
pub use validation::{Field, FieldErrors, LoginForm, ReportForm};
