//! HTTP gateway in front of the MyFantasyLeague export API.
//!
//! Each route maps its query onto upstream parameter names, adds the
//! configured credentials and returns the upstream JSON as is.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use client::{MflClient, QueryParams, Target};
pub use config::Config;
pub use routes::router;
