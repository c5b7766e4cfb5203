//! Event registration API
//!
//! ```text
//! browser (Vite frontends, cookie session)
//!   ↓
//! api::router ─ POST /jwt, POST /logout, GET /
//!   ├─ domain_events         /events...
//!   └─ domain_registrations  /registrations...
//!   ↓
//! DocumentService → MongoDocumentRepository → MongoDB
//! ```

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

pub use config::Config;
pub use state::AppState;
