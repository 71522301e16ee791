//! Header toggle controls (notification bell, boost visibility)

use crate::actions::ActionKey;
use crate::classify::Flags;
use crate::visibility::{actionable_relation, Visibility};
use roost_core::Session;
use serde::Serialize;

/// A two-state control; `action` flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ToggleSpec {
    /// Handler that flips the toggle
    pub action: ActionKey,
    /// Current state
    pub active: bool,
}

/// Optional header toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Toggles {
    /// Post notification bell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<ToggleSpec>,
    /// Boost visibility in the home feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reblog_visibility: Option<ToggleSpec>,
}

impl Toggles {
    /// Check if no toggle is shown.
    pub fn is_empty(&self) -> bool {
        self.notify.is_none() && self.reblog_visibility.is_none()
    }
}

/// Resolve the toggles for a classified subject.
pub fn resolve_toggles(flags: &Flags, visibility: &Visibility, session: &Session) -> Toggles {
    if visibility.redacted {
        return Toggles::default();
    }
    let Some(rel) = actionable_relation(flags, visibility, session) else {
        return Toggles::default();
    };

    let notify = (rel.following || rel.requested).then(|| ToggleSpec {
        action: if rel.notifying {
            ActionKey::DisableNotifications
        } else {
            ActionKey::EnableNotifications
        },
        active: rel.notifying,
    });

    let reblog_visibility = (rel.following && !rel.muting).then(|| ToggleSpec {
        action: if rel.showing_reblogs {
            ActionKey::HideReblogs
        } else {
            ActionKey::ShowReblogs
        },
        active: rel.showing_reblogs,
    });

    Toggles {
        notify,
        reblog_visibility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::visibility::gate;
    use roost_core::{Account, ProfileConfig, Relationship, RelationshipState};

    fn toggles_for(rel: RelationshipState, session: &Session) -> Toggles {
        let account = Account::local("1", "alice");
        let flags = classify(&account, &rel, session, &ProfileConfig::default());
        let visibility = gate(&account, &flags);
        resolve_toggles(&flags, &visibility, session)
    }

    #[test]
    fn test_following_shows_both_toggles() {
        let rel = Relationship {
            notifying: true,
            ..Relationship::following()
        };
        let toggles = toggles_for(rel.into(), &Session::signed_in("2"));
        assert_eq!(
            toggles.notify,
            Some(ToggleSpec {
                action: ActionKey::DisableNotifications,
                active: true
            })
        );
        assert_eq!(
            toggles.reblog_visibility,
            Some(ToggleSpec {
                action: ActionKey::HideReblogs,
                active: true
            })
        );
    }

    #[test]
    fn test_requested_shows_bell_only() {
        let rel = Relationship {
            requested: true,
            ..Relationship::default()
        };
        let toggles = toggles_for(rel.into(), &Session::signed_in("2"));
        assert!(toggles.notify.is_some());
        assert!(toggles.reblog_visibility.is_none());
    }

    #[test]
    fn test_muted_followee_has_no_reblog_toggle() {
        let rel = Relationship {
            muting: true,
            ..Relationship::following()
        };
        let toggles = toggles_for(rel.into(), &Session::signed_in("2"));
        assert!(toggles.reblog_visibility.is_none());
        assert!(toggles.notify.is_some());
    }

    #[test]
    fn test_unknown_or_self_has_no_toggles() {
        assert!(toggles_for(RelationshipState::Unknown, &Session::signed_in("2")).is_empty());
        assert!(toggles_for(Relationship::following().into(), &Session::signed_in("1")).is_empty());
    }
}
