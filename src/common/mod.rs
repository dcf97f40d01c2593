mod api;
mod error;
mod report;

pub use api::{version_date, version_number, version_string};
pub use error::{Error, ErrorKind, Result};
pub use report::Report;
