//! Small, independent helpers: class-name joining, prefix patterns, device
//! detection, text downloads and URL query parameters.
//!
//! None of these share state with each other or with the scheduler.

pub mod class_names;
pub mod device;
pub mod download;
pub mod pattern;
pub mod query;

pub use class_names::class_names;
pub use device::is_desktop;
pub use download::TextDownload;
pub use pattern::prefix_pattern;
pub use query::{delete_query_keys, log_query, parse_query, query_rows};
