//! Service modules around the formatter.
//!
//! Song sources (the local library) and request validation live here, outside
//! the pure formatting core.

pub mod library;
pub mod request;
