//! Configuration module for the coin tracker.

mod api;
mod debug;

pub use api::{ApiSettings, PAPRIKA, PaprikaConfig, QUERY, QueryConfig};
pub use debug::DF;
