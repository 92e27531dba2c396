//! Console observability for batch runs.

mod logger;

pub use logger::{Logger, Severity};
