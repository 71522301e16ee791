//! Relationship classifier
//!
//! Normalizes the raw account, relationship and session records into the
//! canonical `Flags` every other component reads. Total: malformed handles
//! and missing relationships degrade into explicit states instead of errors.

use roost_core::{Account, AccountState, Acct, ProfileConfig, Relationship, RelationshipState, Session};
use serde::Serialize;

/// Where the subject's account lives relative to the viewer's server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Remoteness {
    /// Hosted on the viewer's server
    Local,
    /// Hosted elsewhere; `domain` is absent when the handle could not be parsed
    Remote {
        /// Parsed origin domain
        domain: Option<String>,
    },
}

impl Remoteness {
    /// Check if the subject is remote.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// The parsed origin domain of a remote subject.
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Remote { domain } => domain.as_deref(),
        }
    }
}

/// Relationship flags as seen by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RelationFlags {
    /// Viewer follows subject
    pub following: bool,
    /// Viewer's follow request is pending
    pub requested: bool,
    /// Subject follows viewer
    pub followed_by: bool,
    /// Subject requested to follow viewer
    pub requested_by: bool,
    /// Viewer blocks subject
    pub blocking: bool,
    /// Subject blocks viewer
    pub blocked_by: bool,
    /// Viewer mutes subject
    pub muting: bool,
    /// Mute extends to notifications
    pub muting_notifications: bool,
    /// Viewer blocks subject's domain
    pub domain_blocking: bool,
    /// Subject's boosts are shown
    pub showing_reblogs: bool,
    /// Viewer is notified of subject's posts
    pub notifying: bool,
    /// Subject is featured on viewer's profile
    pub endorsed: bool,
    /// Accounts follow each other, or a follow back is pending
    pub mutual: bool,
}

impl From<&Relationship> for RelationFlags {
    fn from(rel: &Relationship) -> Self {
        Self {
            following: rel.following,
            requested: rel.requested,
            followed_by: rel.followed_by,
            requested_by: rel.requested_by,
            blocking: rel.blocking,
            blocked_by: rel.blocked_by,
            muting: rel.muting,
            muting_notifications: rel.muting_notifications,
            domain_blocking: rel.domain_blocking,
            showing_reblogs: rel.showing_reblogs,
            notifying: rel.notifying,
            endorsed: rel.endorsed,
            mutual: rel.is_mutual(),
        }
    }
}

/// Three-valued relationship: not loaded, or loaded with concrete flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "flags", rename_all = "snake_case")]
pub enum Relation {
    /// Not yet loaded; relationship-dependent controls are suppressed
    Unknown,
    /// Loaded flags
    Known(RelationFlags),
}

impl Relation {
    /// The loaded flags, if any.
    pub fn known(&self) -> Option<&RelationFlags> {
        match self {
            Self::Unknown => None,
            Self::Known(flags) => Some(flags),
        }
    }

    /// Check if the viewer is known to follow the subject.
    pub fn is_following(&self) -> bool {
        self.known().map(|r| r.following).unwrap_or(false)
    }
}

/// Canonical input to the visibility gate, resolver and menu builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flags {
    /// The viewer is looking at their own profile
    pub is_self: bool,
    /// Local or remote, with the parsed domain
    pub remoteness: Remoteness,
    /// Suspension and move state
    pub state: AccountState,
    /// Loaded relationship or `Unknown`
    pub relation: Relation,
    /// The caller marked the subject as hidden from this viewer
    pub hidden: bool,
}

impl Flags {
    /// Check if the subject is remote.
    pub fn is_remote(&self) -> bool {
        self.remoteness.is_remote()
    }

    /// Check if the subject is suspended or has moved.
    pub fn is_suspended_or_moved(&self) -> bool {
        self.state.is_suspended_or_moved()
    }

    /// Mark the subject as hidden from the viewer.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Classify the subject relative to the viewer.
pub fn classify(
    account: &Account,
    relationship: &RelationshipState,
    session: &Session,
    config: &ProfileConfig,
) -> Flags {
    Flags {
        is_self: session.is_viewer(&account.id),
        remoteness: remoteness(account, &config.local_domain),
        state: account.state(),
        relation: relationship
            .loaded()
            .map_or(Relation::Unknown, |rel| Relation::Known(rel.into())),
        hidden: false,
    }
}

fn remoteness(account: &Account, local_domain: &str) -> Remoteness {
    if !account.has_domain_segment() {
        return Remoteness::Local;
    }

    match Acct::parse(&account.acct) {
        Ok(acct) if acct.is_remote_for(local_domain) => Remoteness::Remote {
            domain: acct.domain,
        },
        Ok(_) => Remoteness::Local,
        Err(err) => {
            tracing::debug!(account = %account.id, error = %err, "unparseable acct, treating as remote");
            Remoteness::Remote { domain: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roost_core::AccountId;

    fn config() -> ProfileConfig {
        ProfileConfig::for_domain("home.example")
    }

    #[test]
    fn test_local_account() {
        let account = Account::local("1", "alice");
        let flags = classify(&account, &RelationshipState::Unknown, &Session::anonymous(), &config());
        assert_eq!(flags.remoteness, Remoteness::Local);
        assert!(!flags.is_self);
        assert_eq!(flags.relation, Relation::Unknown);
    }

    #[test]
    fn test_qualified_local_handle_is_local() {
        let account = Account::remote("1", "alice", "HOME.example");
        let flags = classify(&account, &RelationshipState::Unknown, &Session::anonymous(), &config());
        assert_eq!(flags.remoteness, Remoteness::Local);
    }

    #[test]
    fn test_remote_account() {
        let account = Account::remote("2", "bob", "remote.example");
        let flags = classify(&account, &RelationshipState::Unknown, &Session::anonymous(), &config());
        assert_eq!(flags.remoteness.domain(), Some("remote.example"));
        assert!(flags.is_remote());
    }

    #[test]
    fn test_malformed_remote_has_no_domain() {
        let mut account = Account::local("3", "carol");
        account.acct = "carol@".to_string();
        let flags = classify(&account, &RelationshipState::Unknown, &Session::anonymous(), &config());
        assert_eq!(flags.remoteness, Remoteness::Remote { domain: None });
    }

    #[test]
    fn test_self_and_known_relation() {
        let account = Account::local("4", "dave");
        let rel = Relationship {
            following: true,
            followed_by: true,
            ..Relationship::default()
        };
        let flags = classify(&account, &rel.into(), &Session::signed_in("4"), &config());
        assert!(flags.is_self);
        let known = flags.relation.known().unwrap();
        assert!(known.mutual);
        assert!(flags.relation.is_following());
    }

    #[test]
    fn test_state_carried_through() {
        let mut account = Account::local("5", "erin");
        account.moved = Some(AccountId::new("6"));
        let flags = classify(&account, &RelationshipState::Unknown, &Session::anonymous(), &config());
        assert!(flags.is_suspended_or_moved());
        assert_eq!(flags.state.moved_to(), Some(&AccountId::new("6")));
    }
}
