//! Roster Store
//!
//! MongoDB-backed persistence for the roster user directory.
//!
//! This crate owns the stored document shape, the codec between stored and
//! wire representations, and the [`UserStore`] seam the HTTP layer talks to.
//! Production code uses [`MongoStore`]; tests substitute
//! [`memory::MemoryStore`].
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_store::{connect, UserInput, UserRecord, UserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = connect("mongodb://localhost:27017", "roster").await?;
//!
//! let record = UserRecord::new(UserInput {
//!     name: "Ada".to_string(),
//!     ..UserInput::default()
//! });
//! let id = store.insert(record).await?;
//!
//! let users = store.list().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod model;
mod store;

pub mod memory;
pub mod mongo;

pub use error::{Result, StoreError};
pub use model::{FieldError, User, UserInput, UserRecord};
pub use mongo::{connect, MongoStore};
pub use store::UserStore;
