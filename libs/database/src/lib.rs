//! Database connectors for the event registration services
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, startup retry, ping probe
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "speintSpace");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let events = client.database(config.database()).collection::<Document>("events");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry_with_backoff};
