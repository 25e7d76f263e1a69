pub mod document;
pub mod number;
pub mod render;
pub mod report;
pub mod status;

pub mod error;

pub use error::{ScanError, ScanResult};
pub use report::StatusReport;
