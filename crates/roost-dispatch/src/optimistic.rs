//! Optimistic relationship overlay
//!
//! Predicts the relationship a request will produce so controls can flip
//! before the server answers. Side effects follow the server's rules: a
//! block severs follows in both directions, a domain block drops the
//! viewer's follow, a new mute also mutes notifications.

use roost_core::Relationship;
use roost_profile::ActionKey;

/// Predict the relationship after `action` succeeds.
///
/// Actions that do not touch the relationship return it unchanged.
pub fn optimistic_apply(rel: &Relationship, action: ActionKey, subject_locked: bool) -> Relationship {
    let mut next = rel.clone();
    match action {
        ActionKey::Follow if subject_locked => next.requested = true,
        ActionKey::Follow => {
            next.following = true;
            next.requested = false;
            next.showing_reblogs = true;
        }
        ActionKey::Unfollow => {
            next.following = false;
            next.requested = false;
            next.notifying = false;
        }
        ActionKey::WithdrawRequest => next.requested = false,
        ActionKey::HideReblogs => next.showing_reblogs = false,
        ActionKey::ShowReblogs => next.showing_reblogs = true,
        ActionKey::EnableNotifications => next.notifying = true,
        ActionKey::DisableNotifications => next.notifying = false,
        ActionKey::Mute => {
            next.muting = true;
            next.muting_notifications = true;
        }
        ActionKey::Unmute => {
            next.muting = false;
            next.muting_notifications = false;
        }
        ActionKey::MuteNotifications => next.muting_notifications = true,
        ActionKey::UnmuteNotifications => next.muting_notifications = false,
        ActionKey::Block => {
            next.blocking = true;
            next.following = false;
            next.requested = false;
            next.followed_by = false;
            next.notifying = false;
            next.endorsed = false;
        }
        ActionKey::Unblock => next.blocking = false,
        ActionKey::BlockDomain => {
            next.domain_blocking = true;
            next.following = false;
            next.requested = false;
        }
        ActionKey::UnblockDomain => next.domain_blocking = false,
        ActionKey::Endorse => next.endorsed = true,
        ActionKey::Unendorse => next.endorsed = false,
        ActionKey::RemoveFromFollowers => next.followed_by = false,
        ActionKey::Mention
        | ActionKey::DirectMention
        | ActionKey::OpenOriginalPage
        | ActionKey::ChangeLanguages
        | ActionKey::ManageLists
        | ActionKey::Report
        | ActionKey::ModerateAccount
        | ActionKey::ModerateDomain => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_locked_account_requests() {
        let next = optimistic_apply(&Relationship::default(), ActionKey::Follow, true);
        assert!(next.requested);
        assert!(!next.following);
    }

    #[test]
    fn test_block_severs_follows() {
        let rel = Relationship {
            followed_by: true,
            endorsed: true,
            ..Relationship::following()
        };
        let next = optimistic_apply(&rel, ActionKey::Block, false);
        assert!(next.blocking);
        assert!(!next.following && !next.followed_by && !next.endorsed);
    }

    #[test]
    fn test_mute_then_unmute() {
        let muted = optimistic_apply(&Relationship::default(), ActionKey::Mute, false);
        assert!(muted.muting && muted.muting_notifications);
        let unmuted = optimistic_apply(&muted, ActionKey::Unmute, false);
        assert_eq!(unmuted, Relationship::default());
    }

    #[test]
    fn test_non_relational_action_is_identity() {
        let rel = Relationship::following();
        assert_eq!(optimistic_apply(&rel, ActionKey::Report, false), rel);
    }
}
