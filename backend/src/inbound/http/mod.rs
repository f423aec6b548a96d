//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod experiments;
pub mod health;
pub mod meta;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
