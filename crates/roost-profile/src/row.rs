//! Compact account row controls
//!
//! Account lists (followers, search results, mute and block lists) render a
//! single button per row instead of the full header. The list decides which
//! action a plain row offers through `DefaultRowAction`.

use crate::actions::ActionKey;
use crate::menu::{ConfirmationKind, MenuItem};
use roost_core::{Account, RelationshipState, Session};
use serde::{Deserialize, Serialize};

/// Action a list offers for accounts with no notable relationship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultRowAction {
    /// Follow button (most lists)
    #[default]
    Follow,
    /// Mute button (mute pickers)
    Mute,
    /// Block button (block pickers)
    Block,
}

/// The button rendered on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowButton {
    /// The follow-button collaborator
    FollowButton,
    /// Link to the viewer's own profile settings
    EditProfile,
    /// Unblock
    Unblock,
    /// Unmute
    Unmute,
    /// Mute
    Mute,
    /// Block
    Block,
}

impl RowButton {
    /// Handler key, for buttons not owned by a collaborator.
    pub fn action_key(self) -> Option<ActionKey> {
        match self {
            Self::FollowButton | Self::EditProfile => None,
            Self::Unblock => Some(ActionKey::Unblock),
            Self::Unmute => Some(ActionKey::Unmute),
            Self::Mute => Some(ActionKey::Mute),
            Self::Block => Some(ActionKey::Block),
        }
    }
}

/// Controls for one account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowControls {
    /// Main button
    pub button: RowButton,
    /// Overflow items next to the button
    pub menu: Vec<MenuItem>,
}

impl RowControls {
    fn button(button: RowButton) -> Self {
        Self {
            button,
            menu: Vec::new(),
        }
    }
}

/// Resolve the controls of an account row.
pub fn resolve_row(
    account: &Account,
    relationship: &RelationshipState,
    session: &Session,
    default_action: DefaultRowAction,
) -> RowControls {
    if session.is_viewer(&account.id) {
        return RowControls::button(RowButton::EditProfile);
    }
    let rel = match relationship.loaded() {
        Some(rel) if session.signed_in => rel,
        _ => return RowControls::button(RowButton::FollowButton),
    };

    if rel.requested {
        return RowControls::button(RowButton::FollowButton);
    }
    if rel.blocking {
        return RowControls::button(RowButton::Unblock);
    }
    if rel.muting {
        let toggle = if rel.muting_notifications {
            ActionKey::UnmuteNotifications
        } else {
            ActionKey::MuteNotifications
        };
        return RowControls {
            button: RowButton::Unmute,
            menu: vec![MenuItem::new(toggle)],
        };
    }

    match default_action {
        DefaultRowAction::Mute => RowControls::button(RowButton::Mute),
        DefaultRowAction::Block => RowControls::button(RowButton::Block),
        DefaultRowAction::Follow => RowControls::button(RowButton::FollowButton),
    }
}

/// Confirmation prompt the row button must pass through, if any.
pub fn row_confirmation(button: RowButton) -> Option<ConfirmationKind> {
    match button {
        RowButton::Mute => Some(ConfirmationKind::Mute),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roost_core::Relationship;

    fn row(rel: RelationshipState, default_action: DefaultRowAction) -> RowControls {
        resolve_row(&Account::local("1", "alice"), &rel, &Session::signed_in("2"), default_action)
    }

    #[test]
    fn test_self_row() {
        let controls = resolve_row(
            &Account::local("1", "alice"),
            &RelationshipState::Unknown,
            &Session::signed_in("1"),
            DefaultRowAction::Block,
        );
        assert_eq!(controls.button, RowButton::EditProfile);
    }

    #[test]
    fn test_unknown_relationship_row() {
        let controls = row(RelationshipState::Unknown, DefaultRowAction::Block);
        assert_eq!(controls.button, RowButton::FollowButton);
    }

    #[test]
    fn test_requested_beats_blocking() {
        let rel = Relationship {
            requested: true,
            blocking: true,
            ..Relationship::default()
        };
        assert_eq!(row(rel.into(), DefaultRowAction::Follow).button, RowButton::FollowButton);
    }

    #[test]
    fn test_muting_row_offers_notification_toggle() {
        let rel = Relationship {
            muting: true,
            muting_notifications: true,
            ..Relationship::default()
        };
        let controls = row(rel.into(), DefaultRowAction::Follow);
        assert_eq!(controls.button, RowButton::Unmute);
        assert_eq!(controls.menu.len(), 1);
        assert_eq!(controls.menu[0].action, ActionKey::UnmuteNotifications);
    }

    #[test]
    fn test_default_actions() {
        let rel = RelationshipState::Loaded(Relationship::default());
        assert_eq!(row(rel.clone(), DefaultRowAction::Mute).button, RowButton::Mute);
        assert_eq!(row(rel.clone(), DefaultRowAction::Block).button, RowButton::Block);
        assert_eq!(row(rel, DefaultRowAction::Follow).button, RowButton::FollowButton);
        assert_eq!(row_confirmation(RowButton::Mute), Some(ConfirmationKind::Mute));
        assert_eq!(row_confirmation(RowButton::Block), None);
    }
}
