//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod actions;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod dialog;
pub use dialog::{run_confirmed, ConfirmDialog, DeleteTarget, DialogCell, DialogTarget, StatusChangeTarget};

mod guard;
pub use guard::{resolve_access, GuardState, SessionGuard};

pub mod messages;

mod notifications;
pub use notifications::NoticeLevel;

mod session;
pub use session::{
    use_api, use_app, use_session, use_tokens, AppApi, AppContext, AppSession, PlatformStorage,
    SessionProvider,
};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
