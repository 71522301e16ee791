//! Viewer session and capability bitmask

use crate::identifiers::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Administrative capability bitmask.
///
/// Bit positions match the server's role flags. Checks are plain bitwise-AND
/// tests: no flag implies another, including `ADMINISTRATOR`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(u64);

impl Permissions {
    /// No capabilities
    pub const NONE: Self = Self(0);
    /// Full administrator role flag
    pub const ADMINISTRATOR: Self = Self(1 << 0);
    /// Access to operational tooling
    pub const DEVOPS: Self = Self(1 << 1);
    /// View the moderation audit log
    pub const VIEW_AUDIT_LOG: Self = Self(1 << 2);
    /// View the admin dashboard
    pub const VIEW_DASHBOARD: Self = Self(1 << 3);
    /// Handle reports
    pub const MANAGE_REPORTS: Self = Self(1 << 4);
    /// Moderate remote instances
    pub const MANAGE_FEDERATION: Self = Self(1 << 5);
    /// Change server settings
    pub const MANAGE_SETTINGS: Self = Self(1 << 6);
    /// Manage e-mail and IP blocks
    pub const MANAGE_BLOCKS: Self = Self(1 << 7);
    /// Review trending content and hashtags
    pub const MANAGE_TAXONOMIES: Self = Self(1 << 8);
    /// Review moderation appeals
    pub const MANAGE_APPEALS: Self = Self(1 << 9);
    /// Moderate user accounts
    pub const MANAGE_USERS: Self = Self(1 << 10);
    /// Manage invite links
    pub const MANAGE_INVITES: Self = Self(1 << 11);
    /// Edit server rules
    pub const MANAGE_RULES: Self = Self(1 << 12);
    /// Publish announcements
    pub const MANAGE_ANNOUNCEMENTS: Self = Self(1 << 13);
    /// Manage custom emoji
    pub const MANAGE_CUSTOM_EMOJIS: Self = Self(1 << 14);
    /// Manage webhooks
    pub const MANAGE_WEBHOOKS: Self = Self(1 << 15);
    /// Invite new users
    pub const INVITE_USERS: Self = Self(1 << 16);
    /// Edit roles below one's own
    pub const MANAGE_ROLES: Self = Self(1 << 17);
    /// Disable two-factor and reset sessions of users
    pub const MANAGE_USER_ACCESS: Self = Self(1 << 18);
    /// Delete user data
    pub const DELETE_USER_DATA: Self = Self(1 << 19);
    /// View other users' feeds
    pub const VIEW_FEEDS: Self = Self(1 << 20);

    /// Wrap a bitmask.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Wrap a signed bitmask as delivered by loosely typed clients.
    ///
    /// Negative values carry no capability.
    pub fn from_raw(raw: i64) -> Self {
        u64::try_from(raw).map_or(Self::NONE, Self)
    }

    /// The raw bits.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Check that every bit of `flag` is set.
    pub const fn contains(self, flag: Self) -> bool {
        flag.0 != 0 && self.0 & flag.0 == flag.0
    }

    /// Check if no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Permissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permissions({:#x})", self.0)
    }
}

/// The viewer's session identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Viewer is signed in
    #[serde(default)]
    pub signed_in: bool,
    /// Viewer's own account id, absent for anonymous viewers
    #[serde(default)]
    pub viewer_account_id: Option<AccountId>,
    /// Viewer's capability bitmask
    #[serde(default)]
    pub permissions: Permissions,
}

impl Session {
    /// An anonymous, signed-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in session with no administrative capability.
    pub fn signed_in(viewer: impl Into<AccountId>) -> Self {
        Self {
            signed_in: true,
            viewer_account_id: Some(viewer.into()),
            permissions: Permissions::NONE,
        }
    }

    /// Replace the capability bitmask.
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Check a capability; signed-out sessions hold none.
    pub fn can(&self, flag: Permissions) -> bool {
        self.signed_in && self.permissions.contains(flag)
    }

    /// Check if the viewer is the given account.
    pub fn is_viewer(&self, account: &AccountId) -> bool {
        self.viewer_account_id.as_ref() == Some(account)
    }
}
