//! Primary action resolver
//!
//! Picks the single principal control of a profile header. The decision
//! table is evaluated top to bottom and the first match wins:
//!
//! 1. signed out, or viewing oneself → none
//! 2. redacted → none
//! 3. relationship not loaded → none
//! 4. blocking → unblock
//! 5. moved and not following → none
//! 6. follow request pending → withdraw request
//! 7. otherwise → follow toggle
//!
//! Blocking dominates a stale `requested` flag, and a move dominates both
//! through the redaction rule.

use crate::actions::ActionKey;
use crate::classify::Flags;
use crate::visibility::Visibility;
use roost_core::{Account, Session};
use serde::Serialize;

/// The principal control of a profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimaryAction {
    /// Lift the viewer's block
    Unblock,
    /// Withdraw the pending follow request
    WithdrawRequest,
    /// Follow/unfollow button; the follow-button collaborator owns the
    /// request cycle
    FollowToggle {
        /// Viewer currently follows the subject
        following: bool,
        /// A new follow will be a request awaiting approval
        requires_approval: bool,
    },
}

impl PrimaryAction {
    /// Handler key dispatched when the control is activated.
    pub fn action_key(&self) -> ActionKey {
        match self {
            Self::Unblock => ActionKey::Unblock,
            Self::WithdrawRequest => ActionKey::WithdrawRequest,
            Self::FollowToggle {
                following: true, ..
            } => ActionKey::Unfollow,
            Self::FollowToggle {
                following: false, ..
            } => ActionKey::Follow,
        }
    }
}

/// Resolve the primary action.
pub fn resolve_primary(
    account: &Account,
    flags: &Flags,
    visibility: &Visibility,
    session: &Session,
) -> Option<PrimaryAction> {
    if !session.signed_in || flags.is_self {
        return None;
    }
    if visibility.redacted {
        return None;
    }
    let relation = flags.relation.known()?;

    if relation.blocking {
        return Some(PrimaryAction::Unblock);
    }
    if flags.state.moved_to().is_some() && !relation.following {
        return None;
    }
    if relation.requested {
        return Some(PrimaryAction::WithdrawRequest);
    }

    Some(PrimaryAction::FollowToggle {
        following: relation.following,
        requires_approval: account.locked,
    })
}
