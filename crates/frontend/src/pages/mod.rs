//! Page components.

mod dashboard;
mod denied;
mod home;

pub use dashboard::DashboardPage;
pub use denied::DeniedPage;
pub use home::HomePage;
