//! MongoDB connector
//!
//! Builds the single process-wide [`Client`] from a [`MongoConfig`] and
//! provides a ping-based health probe.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, connect, connect_from_config, connect_from_config_with_retry};
pub use health::ping;

pub use mongodb::{Client, Collection, Database};
