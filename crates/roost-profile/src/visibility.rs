//! Visibility gate
//!
//! Decides whether the subject must be rendered redacted before any action
//! logic runs, and whether relationship-dependent controls may be surfaced
//! at all.

use crate::classify::{Flags, RelationFlags};
use roost_core::{Account, Session};
use serde::Serialize;

/// Why a profile is redacted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RedactionReasons {
    /// Subject is suspended
    pub suspended: bool,
    /// Caller marked the subject as hidden from this viewer
    pub hidden: bool,
    /// Subject moved and the viewer is not known to follow it
    pub moved: bool,
}

impl RedactionReasons {
    /// Check if any reason applies.
    pub fn any(&self) -> bool {
        self.suspended || self.hidden || self.moved
    }
}

/// Output of the visibility gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Visibility {
    /// Avatar, header and relationship-dependent primary actions are withheld
    pub redacted: bool,
    /// Individual redaction causes
    pub reasons: RedactionReasons,
    /// Timeline and featured tabs should show their empty state
    pub empty_timeline: bool,
}

impl Visibility {
    /// Check if relationship state must not be observable through controls.
    ///
    /// Suspension and hiding conceal the relationship; a move only withholds
    /// the primary action and header media.
    pub fn conceals_relationship(&self) -> bool {
        self.reasons.suspended || self.reasons.hidden
    }
}

/// Run the gate for a classified subject.
pub fn gate(account: &Account, flags: &Flags) -> Visibility {
    let reasons = RedactionReasons {
        suspended: flags.state.is_suspended(),
        hidden: flags.hidden,
        moved: flags.state.moved_to().is_some() && !flags.relation.is_following(),
    };
    let blocked_by = flags.relation.known().map(|r| r.blocked_by).unwrap_or(false);

    if reasons.any() {
        tracing::trace!(account = %account.id, ?reasons, "profile redacted");
    }

    Visibility {
        redacted: reasons.any(),
        reasons,
        empty_timeline: reasons.suspended || reasons.hidden || blocked_by,
    }
}

/// Relationship flags that controls may be derived from.
///
/// `None` when the viewer is signed out, is the subject, the relationship has
/// not loaded, or the gate conceals the relationship.
pub fn actionable_relation<'a>(
    flags: &'a Flags,
    visibility: &Visibility,
    session: &Session,
) -> Option<&'a RelationFlags> {
    if !session.signed_in || flags.is_self || visibility.conceals_relationship() {
        return None;
    }
    flags.relation.known()
}
