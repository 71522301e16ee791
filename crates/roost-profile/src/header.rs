//! Header facets
//!
//! Which parts of the profile header may render, derived from the same flags
//! and gate output as the controls. Layout and styling stay with the caller.

use crate::classify::Flags;
use crate::visibility::Visibility;
use roost_core::{Account, ProfileConfig, Session};
use serde::Serialize;

/// Badge shown under the profile name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountBadge {
    /// Automated account
    Bot,
    /// Group actor
    Group,
}

/// Search engine directive for the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotsDirective {
    /// `all`
    Index,
    /// `noindex`
    NoIndex,
}

impl RobotsDirective {
    /// Value of the robots meta tag.
    pub fn as_meta(self) -> &'static str {
        match self {
            Self::Index => "all",
            Self::NoIndex => "noindex",
        }
    }
}

/// Render switches for the profile header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HeaderFacets {
    /// Avatar and header image
    pub show_media: bool,
    /// "Account has moved" notice
    pub show_moved_notice: bool,
    /// "In memoriam" notice
    pub show_memorial_notice: bool,
    /// Incoming follow request note
    pub show_follow_request_note: bool,
    /// Followers the viewer knows
    pub show_familiar_followers: bool,
    /// Viewer's private note field
    pub show_account_note: bool,
    /// Bio and profile fields
    pub show_bio: bool,
    /// Posts/replies/media tabs
    pub show_tabs: bool,
    /// The overflow menu button
    pub show_menu: bool,
    /// Bell, share and primary controls
    pub show_controls: bool,
    /// Lock icon for approval-required accounts
    pub locked: bool,
    /// Bot or group badge
    pub badge: Option<AccountBadge>,
    /// Robots meta directive
    pub robots: RobotsDirective,
    /// Document title
    pub page_title: String,
}

/// Derive the header facets.
pub fn header_facets(
    account: &Account,
    flags: &Flags,
    visibility: &Visibility,
    session: &Session,
    config: &ProfileConfig,
) -> HeaderFacets {
    let hidden = visibility.reasons.hidden;
    let concealed = visibility.conceals_relationship();
    let engaged_viewer = session.signed_in && !flags.is_self && !concealed;
    let requested_by = flags.relation.known().map(|r| r.requested_by).unwrap_or(false);

    let badge = if account.bot {
        Some(AccountBadge::Bot)
    } else if account.group {
        Some(AccountBadge::Group)
    } else {
        None
    };

    let robots = if !account.has_domain_segment() && !account.noindex {
        RobotsDirective::Index
    } else {
        RobotsDirective::NoIndex
    };

    HeaderFacets {
        show_media: !visibility.redacted,
        show_moved_notice: flags.state.moved_to().is_some() && !hidden,
        show_memorial_notice: account.memorial && !hidden,
        show_follow_request_note: requested_by && !flags.is_self && !visibility.redacted,
        show_familiar_followers: engaged_viewer,
        show_account_note: engaged_viewer,
        show_bio: !concealed,
        show_tabs: !hidden,
        show_menu: !flags.is_self,
        show_controls: !hidden,
        locked: account.locked,
        badge,
        robots,
        page_title: page_title(account, config),
    }
}

/// `"Display Name (@user@domain)"`, falling back to the username when the
/// display name is blank.
pub fn page_title(account: &Account, config: &ProfileConfig) -> String {
    let prefix = match account.display_name.trim() {
        "" => account.username.as_str(),
        name => name,
    };
    if account.has_domain_segment() {
        format!("{prefix} (@{})", account.acct)
    } else {
        format!("{prefix} (@{}@{})", account.acct, config.local_domain)
    }
}
