//! Action vocabulary
//!
//! `ActionKey` is the opaque handler identifier carried by every control the
//! engine emits. Callers resolve it to a concrete dispatchable action; the
//! engine never invokes it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handler identifier for a profile control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKey {
    /// Compose a public mention
    Mention,
    /// Compose a private mention
    DirectMention,
    /// Navigate to the profile on its origin server
    OpenOriginalPage,
    /// Stop showing the subject's boosts
    HideReblogs,
    /// Resume showing the subject's boosts
    ShowReblogs,
    /// Open the subscribed-languages dialog
    ChangeLanguages,
    /// Feature the subject on the viewer's profile
    Endorse,
    /// Stop featuring the subject
    Unendorse,
    /// Open the list membership dialog
    ManageLists,
    /// Force the subject to unfollow the viewer
    RemoveFromFollowers,
    /// Mute the subject
    Mute,
    /// Unmute the subject
    Unmute,
    /// Block the subject
    Block,
    /// Unblock the subject
    Unblock,
    /// Open the report flow
    Report,
    /// Block the subject's domain
    BlockDomain,
    /// Unblock the subject's domain
    UnblockDomain,
    /// Open the account moderation interface
    ModerateAccount,
    /// Open the instance moderation interface
    ModerateDomain,
    /// Follow, or request to follow, the subject
    Follow,
    /// Unfollow the subject
    Unfollow,
    /// Withdraw a pending follow request
    WithdrawRequest,
    /// Notify the viewer when the subject posts
    EnableNotifications,
    /// Stop post notifications
    DisableNotifications,
    /// Extend an existing mute to notifications
    MuteNotifications,
    /// Let notifications through an existing mute
    UnmuteNotifications,
}

impl ActionKey {
    /// Message id of the control's label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Mention => "account.mention",
            Self::DirectMention => "account.direct",
            Self::OpenOriginalPage => "account.open_original_page",
            Self::HideReblogs => "account.hide_reblogs",
            Self::ShowReblogs => "account.show_reblogs",
            Self::ChangeLanguages => "account.languages",
            Self::Endorse => "account.endorse",
            Self::Unendorse => "account.unendorse",
            Self::ManageLists => "account.add_or_remove_from_list",
            Self::RemoveFromFollowers => "account.remove_from_followers",
            Self::Mute => "account.mute",
            Self::Unmute => "account.unmute",
            Self::Block => "account.block",
            Self::Unblock => "account.unblock",
            Self::Report => "account.report",
            Self::BlockDomain => "account.block_domain",
            Self::UnblockDomain => "account.unblock_domain",
            Self::ModerateAccount => "status.admin_account",
            Self::ModerateDomain => "status.admin_domain",
            Self::Follow => "account.follow",
            Self::Unfollow => "account.unfollow",
            Self::WithdrawRequest => "account.cancel_follow_request",
            Self::EnableNotifications => "account.enable_notifications",
            Self::DisableNotifications => "account.disable_notifications",
            Self::MuteNotifications => "account.mute_notifications_short",
            Self::UnmuteNotifications => "account.unmute_notifications_short",
        }
    }

    /// The relationship field this action writes, if any.
    ///
    /// Actions without a field (compose, report, navigation) never touch the
    /// relationship record.
    pub fn field(self) -> Option<RelationshipField> {
        match self {
            Self::Follow | Self::Unfollow | Self::WithdrawRequest => Some(RelationshipField::Follow),
            Self::HideReblogs | Self::ShowReblogs => Some(RelationshipField::Reblogs),
            Self::EnableNotifications | Self::DisableNotifications => {
                Some(RelationshipField::Notify)
            }
            Self::Mute | Self::Unmute | Self::MuteNotifications | Self::UnmuteNotifications => {
                Some(RelationshipField::Mute)
            }
            Self::Block | Self::Unblock => Some(RelationshipField::Block),
            Self::BlockDomain | Self::UnblockDomain => Some(RelationshipField::DomainBlock),
            Self::Endorse | Self::Unendorse => Some(RelationshipField::Endorse),
            Self::RemoveFromFollowers => Some(RelationshipField::Follower),
            Self::Mention
            | Self::DirectMention
            | Self::OpenOriginalPage
            | Self::ChangeLanguages
            | Self::ManageLists
            | Self::Report
            | Self::ModerateAccount
            | Self::ModerateDomain => None,
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_key())
    }
}

/// The part of a relationship an action writes.
///
/// Requests touching the same field of the same (viewer, subject) pair must
/// not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipField {
    /// `following` / `requested`
    Follow,
    /// `showing_reblogs`
    Reblogs,
    /// `notifying`
    Notify,
    /// `muting` / `muting_notifications`
    Mute,
    /// `blocking`
    Block,
    /// `domain_blocking`
    DomainBlock,
    /// `endorsed`
    Endorse,
    /// `followed_by`
    Follower,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_actions_share_field() {
        assert_eq!(ActionKey::Mute.field(), ActionKey::Unmute.field());
        assert_eq!(ActionKey::Block.field(), ActionKey::Unblock.field());
        assert_eq!(ActionKey::Follow.field(), ActionKey::WithdrawRequest.field());
        assert_ne!(ActionKey::Mute.field(), ActionKey::Block.field());
    }

    #[test]
    fn test_non_relational_actions() {
        assert!(ActionKey::Report.field().is_none());
        assert!(ActionKey::Mention.field().is_none());
        assert!(ActionKey::ModerateDomain.field().is_none());
    }

    #[test]
    fn test_serialized_name() {
        let json = serde_json::to_string(&ActionKey::RemoveFromFollowers).unwrap();
        assert_eq!(json, "\"remove_from_followers\"");
    }
}
