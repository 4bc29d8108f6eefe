// Library for tests and the binary to access modules

pub mod aggregation;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod grouping;
pub mod models;
pub mod parser;
pub mod session;
pub mod upload;
pub mod version;

pub use dashboard::{DashboardState, DashboardView, ViewStatus};
pub use error::DashboardError;
pub use session::UploadSession;
