//! Domain model: reference tables, request validation, wire-query
//! building and the result envelope. No I/O happens in this module.

pub mod envelope;
pub mod error;
pub mod request;
pub mod tables;

pub use error::NewsError;
pub use request::{HeadlinesRequest, SearchRequest, WireQuery};
