pub mod config;
pub mod error;
pub mod fixtures;
pub mod pipeline;
pub mod process;
pub mod rank;
pub mod report;
pub mod schema;
pub mod selftest;

pub use config::ReportConfig;
pub use error::ReportError;
pub use pipeline::{execute, run, run_with};
pub use schema::Record;
