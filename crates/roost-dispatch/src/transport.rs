//! Relationship transport abstraction
//!
//! The gate is generic over how a relationship change reaches the server.
//! Implementations perform one request and return the authoritative
//! relationship the server reports afterwards.

use crate::errors::{DispatchError, DispatchResult, TransportError};
use crate::optimistic::optimistic_apply;
use async_trait::async_trait;
use parking_lot::Mutex;
use roost_core::{AccountId, Relationship, Session};
use roost_profile::{ActionKey, RelationshipField};
use std::collections::{HashMap, VecDeque};

/// Viewer and subject an action is aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionTarget {
    /// Acting account
    pub viewer: AccountId,
    /// Profile subject
    pub subject: AccountId,
    /// Subject approves followers manually
    pub subject_locked: bool,
}

impl ActionTarget {
    /// Target `subject` as the session's viewer.
    pub fn from_session(session: &Session, subject: AccountId) -> DispatchResult<Self> {
        match (&session.viewer_account_id, session.signed_in) {
            (Some(viewer), true) => Ok(Self {
                viewer: viewer.clone(),
                subject,
                subject_locked: false,
            }),
            _ => Err(DispatchError::SignedOut),
        }
    }

    /// Set whether the subject is locked.
    pub fn locked(mut self, locked: bool) -> Self {
        self.subject_locked = locked;
        self
    }
}

/// One relationship request as handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Acting account
    pub viewer: AccountId,
    /// Profile subject
    pub subject: AccountId,
    /// Handler key
    pub action: ActionKey,
    /// Subject approves followers manually
    pub subject_locked: bool,
}

impl ActionRequest {
    /// Build a request for `action` against `target`.
    pub fn new(target: ActionTarget, action: ActionKey) -> Self {
        Self {
            viewer: target.viewer,
            subject: target.subject,
            action,
            subject_locked: target.subject_locked,
        }
    }

    /// The relationship field this request writes.
    pub fn field(&self) -> Option<RelationshipField> {
        self.action.field()
    }
}

/// Performs relationship requests against the server.
#[async_trait]
pub trait RelationshipTransport: Send + Sync {
    /// Perform `request` and return the resulting relationship.
    async fn perform(&self, request: &ActionRequest) -> Result<Relationship, TransportError>;
}

// ============================================================================
// In-Memory Transport
// ============================================================================

/// Transport backed by an in-process relationship table.
///
/// Applies each request with the same rules as the optimistic overlay, so a
/// successful request always confirms what the gate predicted. Failures can
/// be queued with `fail_next`.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    relationships: Mutex<HashMap<(AccountId, AccountId), Relationship>>,
    failures: Mutex<VecDeque<TransportError>>,
    log: Mutex<Vec<ActionRequest>>,
}

impl MemoryTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the server-side relationship for a pair.
    pub fn insert(&self, viewer: AccountId, subject: AccountId, relationship: Relationship) {
        self.relationships
            .lock()
            .insert((viewer, subject), relationship);
    }

    /// Server-side relationship for a pair.
    pub fn relationship(&self, viewer: &AccountId, subject: &AccountId) -> Relationship {
        self.relationships
            .lock()
            .get(&(viewer.clone(), subject.clone()))
            .cloned()
            .unwrap_or_default()
    }

    /// Make the next request fail with `err`.
    pub fn fail_next(&self, err: TransportError) {
        self.failures.lock().push_back(err);
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ActionRequest> {
        self.log.lock().clone()
    }
}

#[async_trait]
impl RelationshipTransport for MemoryTransport {
    async fn perform(&self, request: &ActionRequest) -> Result<Relationship, TransportError> {
        self.log.lock().push(request.clone());
        if let Some(err) = self.failures.lock().pop_front() {
            return Err(err);
        }

        let mut relationships = self.relationships.lock();
        let entry = relationships
            .entry((request.viewer.clone(), request.subject.clone()))
            .or_default();
        *entry = optimistic_apply(entry, request.action, request.subject_locked);
        Ok(entry.clone())
    }
}
