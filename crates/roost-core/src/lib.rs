//! Roost Core - Profile Data Model
//!
//! This crate holds the read-only records the profile engine consumes:
//!
//! - `Account`, `AccountState`, `Acct` - the profile subject and its handle
//! - `Relationship`, `RelationshipState` - the viewer → subject edge, or its absence
//! - `Session`, `Permissions` - the viewer identity and capability bitmask
//! - `ProfileConfig` - instance-level settings (home domain, admin paths)
//!
//! # Architecture
//!
//! This is the bottom layer of the workspace. It performs no I/O except for
//! `ProfileConfig::load_from_file`, which the CLI uses; the engine crates take
//! an already-loaded config.
//!
//! # Example
//!
//! ```ignore
//! use roost_core::{Account, Acct, RelationshipState};
//!
//! let acct = Acct::parse("alice@remote.example")?;
//! assert!(acct.is_remote_for("home.example"));
//!
//! // Relationship not fetched yet
//! let relationship = RelationshipState::Unknown;
//! ```

pub mod account;
pub mod config;
pub mod errors;
pub mod identifiers;
pub mod relationship;
pub mod session;

pub use account::{Account, AccountState, Acct};
pub use config::ProfileConfig;
pub use errors::CoreError;
pub use identifiers::AccountId;
pub use relationship::{Relationship, RelationshipState};
pub use session::{Permissions, Session};
