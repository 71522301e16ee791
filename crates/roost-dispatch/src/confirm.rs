//! Confirmation gating
//!
//! Selecting a control yields a `Selection`. Entries that carry a prompt come
//! back as `PendingConfirmation`, and the only way to turn one into an
//! `ApprovedAction` is `confirm`. The gate only accepts `ApprovedAction`, so a
//! confirmation-gated entry cannot be dispatched straight from the menu.

use roost_profile::{
    row_confirmation, ActionKey, Confirmation, MenuItem, PrimaryAction, RowButton, ToggleSpec,
};

/// An action cleared for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedAction {
    action: ActionKey,
}

impl ApprovedAction {
    /// The approved handler key.
    pub fn action(&self) -> ActionKey {
        self.action
    }
}

/// An action waiting on the viewer's answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending confirmation must be confirmed or cancelled"]
pub struct PendingConfirmation {
    action: ActionKey,
    prompt: Confirmation,
}

impl PendingConfirmation {
    /// The action awaiting confirmation.
    pub fn action(&self) -> ActionKey {
        self.action
    }

    /// The prompt to show.
    pub fn prompt(&self) -> &Confirmation {
        &self.prompt
    }

    /// The viewer accepted the prompt.
    pub fn confirm(self) -> ApprovedAction {
        tracing::debug!(action = %self.action, "confirmation accepted");
        ApprovedAction {
            action: self.action,
        }
    }

    /// The viewer dismissed the prompt.
    pub fn cancel(self) {
        tracing::debug!(action = %self.action, "confirmation cancelled");
    }
}

/// Outcome of selecting a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Dispatch immediately
    Ready(ApprovedAction),
    /// Show the prompt first
    NeedsConfirmation(PendingConfirmation),
}

impl Selection {
    fn new(action: ActionKey, prompt: Option<Confirmation>) -> Self {
        match prompt {
            Some(prompt) => Self::NeedsConfirmation(PendingConfirmation { action, prompt }),
            None => Self::Ready(ApprovedAction { action }),
        }
    }

    /// The selected handler key.
    pub fn action(&self) -> ActionKey {
        match self {
            Self::Ready(approved) => approved.action,
            Self::NeedsConfirmation(pending) => pending.action,
        }
    }
}

/// Select a menu item.
pub fn select(item: &MenuItem) -> Selection {
    Selection::new(item.action, item.confirmation)
}

/// Select the primary action.
pub fn select_primary(primary: &PrimaryAction) -> Selection {
    Selection::new(primary.action_key(), None)
}

/// Select a header toggle.
pub fn select_toggle(toggle: &ToggleSpec) -> Selection {
    Selection::new(toggle.action, None)
}

/// Select a row button. Buttons owned by another control yield `None`.
pub fn select_row(button: RowButton) -> Option<Selection> {
    let action = button.action_key()?;
    let prompt = row_confirmation(button).map(|kind| kind.prompt());
    Some(Selection::new(action, prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use roost_profile::ConfirmationKind;

    #[test]
    fn test_plain_item_is_ready() {
        let selection = select(&MenuItem::new(ActionKey::Unmute));
        assert_matches!(selection, Selection::Ready(approved) if approved.action() == ActionKey::Unmute);
    }

    #[test]
    fn test_confirmed_item_needs_confirmation() {
        let item = MenuItem::new(ActionKey::Block)
            .dangerous()
            .confirmed_by(ConfirmationKind::Block);
        let Selection::NeedsConfirmation(pending) = select(&item) else {
            panic!("block must be confirmed");
        };
        assert_eq!(pending.prompt().kind, ConfirmationKind::Block);
        assert_eq!(pending.confirm().action(), ActionKey::Block);
    }

    #[test]
    fn test_primary_follow_toggle() {
        let primary = PrimaryAction::FollowToggle {
            following: true,
            requires_approval: false,
        };
        assert_eq!(select_primary(&primary).action(), ActionKey::Unfollow);
    }

    #[test]
    fn test_row_buttons() {
        assert!(select_row(RowButton::FollowButton).is_none());
        assert_matches!(select_row(RowButton::Mute), Some(Selection::NeedsConfirmation(_)));
        assert_matches!(select_row(RowButton::Unblock), Some(Selection::Ready(_)));
    }
}
