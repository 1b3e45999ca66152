mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod report;
pub use report::{ReportCreate, ReportDetail, ReportEdit, ReportList};

mod supervisor;
pub use supervisor::Supervisor;
