//! Page views. Platform packages wrap these and supply navigation callbacks.

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod report_detail;
pub use report_detail::ReportDetailView;

mod report_form;
pub use report_form::ReportFormView;

mod report_list;
pub use report_list::ReportListView;

mod supervisor;
pub use supervisor::SupervisorDashboardView;

/// Progress of a backend load driven by `use_resource`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub(crate) fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
