//! Roost Dispatch - Relationship Action Execution
//!
//! The profile engine decides which controls exist; this crate runs the one
//! the viewer picks:
//!
//! - `confirm`: turns a selected control into an `ApprovedAction`, routing
//!   dangerous entries through a `PendingConfirmation` first
//! - `gate`: `ActionGate` serializes requests per (viewer, subject, field)
//!   and keeps an optimistic relationship overlay
//! - `transport`: the `RelationshipTransport` seam plus an in-memory
//!   implementation
//!
//! # Example
//!
//! ```ignore
//! use roost_dispatch::{select, ActionGate, ActionTarget, MemoryTransport, Selection};
//!
//! let gate = ActionGate::new(MemoryTransport::new());
//! let approved = match select(&item) {
//!     Selection::Ready(approved) => approved,
//!     Selection::NeedsConfirmation(pending) => pending.confirm(),
//! };
//! let target = ActionTarget::from_session(&session, subject_id)?;
//! let relationship = gate.dispatch(approved, target).await?;
//! ```

pub mod confirm;
pub mod errors;
pub mod gate;
pub mod optimistic;
pub mod transport;

pub use confirm::{
    select, select_primary, select_row, select_toggle, ApprovedAction, PendingConfirmation,
    Selection,
};
pub use errors::{DispatchError, DispatchResult, TransportError};
pub use gate::ActionGate;
pub use optimistic::optimistic_apply;
pub use transport::{ActionRequest, ActionTarget, MemoryTransport, RelationshipTransport};
