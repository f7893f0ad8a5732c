pub mod api;
pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;

pub use config::{FetchConfig, ServerConfig};
pub use services::{DashboardService, PageController, ViewState};
pub use utils::errors::{FetchError, Operation};
