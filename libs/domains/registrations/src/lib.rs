//! Registrations Domain
//!
//! Every route over the `registrations` collection needs a valid session;
//! none is scoped to an owner.
//!
//! | Method | Path |
//! |---|---|
//! | GET | `/registrations` |
//! | GET | `/registrations/{id}` |
//! | POST | `/registrations` |
//! | PUT | `/registrations/{id}` |
//! | DELETE | `/registrations/{id}` |

pub mod handlers;

pub use handlers::{ApiDoc, router};
