pub mod dashboard_service;
pub mod page_service;

pub use dashboard_service::DashboardService;
pub use page_service::{PageController, ViewState};
