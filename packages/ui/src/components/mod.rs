//! Presentational building blocks shared by the page views.

mod button;
pub use button::{Button, ButtonVariant};

mod fields;
pub use fields::{TextAreaField, TextField};

mod modal;
pub use modal::ConfirmModal;

mod page;
pub use page::PageHeader;

mod report_card;
pub use report_card::ReportCard;

mod search;
pub use search::{SearchForm, StatusFilterSelect};

mod states;
pub use states::{EmptyState, ErrorState, LoadingState};

mod status_badge;
pub use status_badge::StatusBadge;

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
