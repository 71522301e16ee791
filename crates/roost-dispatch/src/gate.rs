//! Serialized action gate
//!
//! `ActionGate` runs relationship requests through a transport with two
//! guarantees:
//!
//! - At most one request per (viewer, subject, field) is in flight. Later
//!   requests for the same key wait their turn in arrival order, or fail fast
//!   with `try_dispatch`.
//! - The local relationship flips optimistically while a request runs. A
//!   successful reply replaces it with the server's answer; a failure rolls
//!   it back to the last authoritative state. `reconcile` always wins over
//!   optimism.
//!
//! The gate never cancels requests; a request once admitted runs to
//! completion.

use crate::confirm::ApprovedAction;
use crate::errors::{DispatchError, DispatchResult};
use crate::optimistic::optimistic_apply;
use crate::transport::{ActionRequest, ActionTarget, RelationshipTransport};
use parking_lot::{Mutex, RwLock};
use roost_core::{AccountId, Relationship, RelationshipState};
use roost_profile::RelationshipField;
use std::collections::HashMap;
use std::sync::Arc;

type PairKey = (AccountId, AccountId);
type FieldKey = (AccountId, AccountId, RelationshipField);

/// Local view of one (viewer, subject) relationship.
#[derive(Debug, Clone, Default)]
struct Entry {
    /// Last state confirmed by the server
    authoritative: RelationshipState,
    /// What the UI shows, including optimistic changes
    current: RelationshipState,
}

impl Entry {
    fn settled(state: RelationshipState) -> Self {
        Self {
            authoritative: state.clone(),
            current: state,
        }
    }
}

/// Serializes relationship requests and tracks optimistic state.
pub struct ActionGate<T> {
    transport: T,
    locks: Mutex<HashMap<FieldKey, Arc<tokio::sync::Mutex<()>>>>,
    store: RwLock<HashMap<PairKey, Entry>>,
}

impl<T: RelationshipTransport> ActionGate<T> {
    /// Create a gate over `transport`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            locks: Mutex::new(HashMap::new()),
            store: RwLock::new(HashMap::new()),
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Relationship as the UI should currently show it.
    pub fn snapshot(&self, viewer: &AccountId, subject: &AccountId) -> RelationshipState {
        self.store
            .read()
            .get(&(viewer.clone(), subject.clone()))
            .map(|entry| entry.current.clone())
            .unwrap_or_default()
    }

    /// Record a freshly fetched relationship, discarding any optimism.
    pub fn reconcile(&self, viewer: AccountId, subject: AccountId, relationship: Relationship) {
        tracing::debug!(%viewer, %subject, "relationship reconciled");
        self.store
            .write()
            .insert((viewer, subject), Entry::settled(relationship.into()));
    }

    /// Dispatch an approved action, waiting for any in-flight request on the
    /// same field to finish first.
    pub async fn dispatch(
        &self,
        approved: ApprovedAction,
        target: ActionTarget,
    ) -> DispatchResult<Relationship> {
        let (request, key) = Self::request(&approved, target)?;
        let lock = self.field_lock(&key);
        let result = {
            let _guard = lock.lock().await;
            self.run(&request).await
        };
        drop(lock);
        self.release(&key);
        result
    }

    /// Dispatch an approved action, failing with `InFlight` if a request on
    /// the same field is already running.
    pub async fn try_dispatch(
        &self,
        approved: ApprovedAction,
        target: ActionTarget,
    ) -> DispatchResult<Relationship> {
        let (request, key) = Self::request(&approved, target)?;
        let lock = self.field_lock(&key);
        let result = match lock.try_lock() {
            Ok(_guard) => self.run(&request).await,
            Err(_) => {
                tracing::debug!(action = %request.action, subject = %request.subject, "request already in flight");
                Err(DispatchError::InFlight)
            }
        };
        drop(lock);
        self.release(&key);
        result
    }

    /// Check if a request on `field` is running or queued.
    pub fn is_in_flight(&self, viewer: &AccountId, subject: &AccountId, field: RelationshipField) -> bool {
        self.locks
            .lock()
            .get(&(viewer.clone(), subject.clone(), field))
            .is_some_and(|lock| lock.try_lock().is_err())
    }

    fn request(approved: &ApprovedAction, target: ActionTarget) -> DispatchResult<(ActionRequest, FieldKey)> {
        let request = ActionRequest::new(target, approved.action());
        let field = request
            .field()
            .ok_or(DispatchError::NotRelational(request.action))?;
        let key = (request.viewer.clone(), request.subject.clone(), field);
        Ok((request, key))
    }

    fn field_lock(&self, key: &FieldKey) -> Arc<tokio::sync::Mutex<()>> {
        self.locks.lock().entry(key.clone()).or_default().clone()
    }

    /// Drop the lock entry once nobody holds or waits on it.
    fn release(&self, key: &FieldKey) {
        let mut locks = self.locks.lock();
        if locks.get(key).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(key);
        }
    }

    async fn run(&self, request: &ActionRequest) -> DispatchResult<Relationship> {
        let pair = (request.viewer.clone(), request.subject.clone());
        self.apply_optimistic(&pair, request);

        tracing::debug!(action = %request.action, subject = %request.subject, "dispatching relationship request");
        match self.transport.perform(request).await {
            Ok(relationship) => {
                self.store
                    .write()
                    .insert(pair, Entry::settled(relationship.clone().into()));
                Ok(relationship)
            }
            Err(err) => {
                tracing::warn!(action = %request.action, subject = %request.subject, error = %err, "relationship request failed, rolling back");
                if let Some(entry) = self.store.write().get_mut(&pair) {
                    entry.current = entry.authoritative.clone();
                }
                Err(err.into())
            }
        }
    }

    fn apply_optimistic(&self, pair: &PairKey, request: &ActionRequest) {
        let mut store = self.store.write();
        let entry = store.entry(pair.clone()).or_default();
        if let RelationshipState::Loaded(current) = &entry.current {
            let next = optimistic_apply(current, request.action, request.subject_locked);
            entry.current = RelationshipState::Loaded(next);
        }
    }
}

impl<T> std::fmt::Debug for ActionGate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionGate")
            .field("pending_keys", &self.locks.lock().len())
            .field("relationships", &self.store.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::{select, select_primary, Selection};
    use crate::transport::MemoryTransport;
    use roost_core::Session;
    use roost_profile::{ActionKey, MenuItem, PrimaryAction};

    fn target() -> ActionTarget {
        ActionTarget::from_session(&Session::signed_in("100"), AccountId::new("1")).unwrap()
    }

    fn approve(action: ActionKey) -> ApprovedAction {
        match select(&MenuItem::new(action)) {
            Selection::Ready(approved) => approved,
            Selection::NeedsConfirmation(pending) => pending.confirm(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_stores_authoritative_state() {
        let gate = ActionGate::new(MemoryTransport::new());
        let follow = PrimaryAction::FollowToggle {
            following: false,
            requires_approval: false,
        };
        let Selection::Ready(approved) = select_primary(&follow) else {
            panic!("follow needs no confirmation");
        };

        let rel = gate.dispatch(approved, target()).await.unwrap();
        assert!(rel.following);
        let snapshot = gate.snapshot(&AccountId::new("100"), &AccountId::new("1"));
        assert_eq!(snapshot.loaded(), Some(&rel));
    }

    #[tokio::test]
    async fn test_non_relational_action_is_rejected() {
        let gate = ActionGate::new(MemoryTransport::new());
        let err = gate.dispatch(approve(ActionKey::Report), target()).await.unwrap_err();
        assert_eq!(err, DispatchError::NotRelational(ActionKey::Report));
        assert!(gate.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_relationship_gets_no_optimism() {
        let gate = ActionGate::new(MemoryTransport::new());
        gate.transport().fail_next(crate::errors::TransportError::network("offline"));
        let result = gate.dispatch(approve(ActionKey::Mute), target()).await;
        assert!(result.is_err());
        let snapshot = gate.snapshot(&AccountId::new("100"), &AccountId::new("1"));
        assert_eq!(snapshot, RelationshipState::Unknown);
    }

    #[test]
    fn test_signed_out_target() {
        let err = ActionTarget::from_session(&Session::anonymous(), AccountId::new("1")).unwrap_err();
        assert_eq!(err, DispatchError::SignedOut);
    }

    #[tokio::test]
    async fn test_lock_entries_are_released() {
        let gate = ActionGate::new(MemoryTransport::new());
        gate.dispatch(approve(ActionKey::Mute), target()).await.unwrap();
        assert!(gate.locks.lock().is_empty());
        assert!(!gate.is_in_flight(&AccountId::new("100"), &AccountId::new("1"), RelationshipField::Mute));
    }
}
