//! Menu builder
//!
//! Assembles the secondary-action menu of a profile header. The menu is a
//! fold over an ordered table of section builders. Each builder is a pure
//! function of the `SectionContext` returning zero or more items; the fold
//! inserts exactly one separator between contributing sections of different
//! groups, so separators are never leading, trailing, or doubled.

use crate::actions::ActionKey;
use crate::classify::{Flags, RelationFlags};
use crate::visibility::{actionable_relation, Visibility};
use roost_core::{Account, Permissions, ProfileConfig, Session};
use serde::Serialize;

// ============================================================================
// Menu Types
// ============================================================================

/// One row of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    /// Visual break between groups
    Separator,
    /// A selectable action
    Item(MenuItem),
}

impl MenuEntry {
    /// Check if this entry is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    /// The item, if this entry is not a separator.
    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            Self::Separator => None,
            Self::Item(item) => Some(item),
        }
    }
}

/// A selectable menu action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Message id of the label
    pub label_key: &'static str,
    /// Handler resolved by the caller
    pub action: ActionKey,
    /// Destructive or sensitive action
    pub dangerous: bool,
    /// Link target for navigation entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Prompt that must be accepted before the action is dispatched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
}

impl MenuItem {
    /// A plain, non-dangerous item.
    pub fn new(action: ActionKey) -> Self {
        Self {
            label_key: action.label_key(),
            action,
            dangerous: false,
            href: None,
            confirmation: None,
        }
    }

    /// A navigation item.
    pub fn link(action: ActionKey, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::new(action)
        }
    }

    /// Mark the item as dangerous.
    pub fn dangerous(mut self) -> Self {
        self.dangerous = true;
        self
    }

    /// Route selection through a confirmation prompt.
    pub fn confirmed_by(mut self, kind: ConfirmationKind) -> Self {
        self.confirmation = Some(kind.prompt());
        self
    }

    /// Check if selecting the item needs a confirmation step.
    pub fn requires_confirmation(&self) -> bool {
        self.confirmation.is_some()
    }
}

/// Kinds of confirmation prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationKind {
    /// Remove the subject from the viewer's followers
    RemoveFollower,
    /// Mute dialog (duration, notifications)
    Mute,
    /// Block dialog
    Block,
    /// Domain block dialog
    BlockDomain,
}

impl ConfirmationKind {
    /// Message ids of the prompt.
    pub fn prompt(self) -> Confirmation {
        let (title_key, message_key, confirm_key) = match self {
            Self::RemoveFollower => (
                "confirmations.remove_from_followers.title",
                "confirmations.remove_from_followers.message",
                "confirmations.remove_from_followers.confirm",
            ),
            Self::Mute => (
                "confirmations.mute.title",
                "confirmations.mute.message",
                "confirmations.mute.confirm",
            ),
            Self::Block => (
                "confirmations.block.title",
                "confirmations.block.message",
                "confirmations.block.confirm",
            ),
            Self::BlockDomain => (
                "confirmations.domain_block.title",
                "confirmations.domain_block.message",
                "confirmations.domain_block.confirm",
            ),
        };
        Confirmation {
            kind: self,
            title_key,
            message_key,
            confirm_key,
        }
    }
}

/// Confirmation prompt attached to a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Confirmation {
    /// Prompt kind
    pub kind: ConfirmationKind,
    /// Message id of the title
    pub title_key: &'static str,
    /// Message id of the body
    pub message_key: &'static str,
    /// Message id of the confirm button
    pub confirm_key: &'static str,
}

/// Section groups; a separator falls between contributing groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuGroup {
    /// Mentions
    Engagement,
    /// Link to the origin server
    Origin,
    /// Boost visibility and languages of a followed account
    FollowPreferences,
    /// Endorsement and lists of a followed account
    Curation,
    /// Follower removal, mute, block, report
    Relationship,
    /// Domain block
    Domain,
    /// Moderation links
    Admin,
}

// ============================================================================
// Section Builders
// ============================================================================

/// Inputs shared by every section builder.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    /// Profile subject
    pub account: &'a Account,
    /// Classified flags
    pub flags: &'a Flags,
    /// Gate output
    pub visibility: &'a Visibility,
    /// Viewer session
    pub session: &'a Session,
    /// Instance configuration
    pub config: &'a ProfileConfig,
}

impl<'a> SectionContext<'a> {
    fn relation(&self) -> Option<&'a RelationFlags> {
        actionable_relation(self.flags, self.visibility, self.session)
    }

    fn remote_domain(&self, section: &'static str) -> Option<&'a str> {
        if !self.flags.is_remote() {
            return None;
        }
        let domain = self.flags.remoteness.domain();
        if domain.is_none() {
            tracing::debug!(account = %self.account.id, section, "omitting entry: remote domain unparseable");
        }
        domain
    }
}

type SectionBuilder = fn(&SectionContext<'_>) -> Vec<MenuItem>;

/// Sections in menu order.
const SECTIONS: &[(MenuGroup, SectionBuilder)] = &[
    (MenuGroup::Engagement, direct_engagement),
    (MenuGroup::Origin, remote_origin),
    (MenuGroup::FollowPreferences, following_preferences),
    (MenuGroup::Curation, following_curation),
    (MenuGroup::Relationship, followed_by),
    (MenuGroup::Relationship, mute),
    (MenuGroup::Relationship, block),
    (MenuGroup::Relationship, report),
    (MenuGroup::Domain, domain),
    (MenuGroup::Admin, admin),
];

fn direct_engagement(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    if !ctx.session.signed_in || ctx.flags.state.is_suspended() {
        return Vec::new();
    }
    vec![
        MenuItem::new(ActionKey::Mention),
        MenuItem::new(ActionKey::DirectMention),
    ]
}

fn remote_origin(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    if !ctx.flags.is_remote() {
        return Vec::new();
    }
    match ctx.account.url.as_deref().filter(|url| is_web_url(url)) {
        Some(url) => vec![MenuItem::link(ActionKey::OpenOriginalPage, url)],
        None => {
            tracing::debug!(account = %ctx.account.id, "omitting original page: missing or malformed url");
            Vec::new()
        }
    }
}

fn following_preferences(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    match ctx.relation() {
        Some(rel) if rel.following && !rel.muting => {
            let reblogs = if rel.showing_reblogs {
                ActionKey::HideReblogs
            } else {
                ActionKey::ShowReblogs
            };
            vec![
                MenuItem::new(reblogs),
                MenuItem::new(ActionKey::ChangeLanguages),
            ]
        }
        _ => Vec::new(),
    }
}

fn following_curation(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    match ctx.relation() {
        Some(rel) if rel.following => {
            let endorse = if rel.endorsed {
                ActionKey::Unendorse
            } else {
                ActionKey::Endorse
            };
            vec![
                MenuItem::new(endorse),
                MenuItem::new(ActionKey::ManageLists),
            ]
        }
        _ => Vec::new(),
    }
}

fn followed_by(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    match ctx.relation() {
        Some(rel) if rel.followed_by => vec![MenuItem::new(ActionKey::RemoveFromFollowers)
            .dangerous()
            .confirmed_by(ConfirmationKind::RemoveFollower)],
        _ => Vec::new(),
    }
}

fn mute(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    match ctx.relation() {
        Some(rel) if rel.muting => vec![MenuItem::new(ActionKey::Unmute)],
        Some(_) => vec![MenuItem::new(ActionKey::Mute)
            .dangerous()
            .confirmed_by(ConfirmationKind::Mute)],
        None => Vec::new(),
    }
}

fn block(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    match ctx.relation() {
        Some(rel) if rel.blocking => vec![MenuItem::new(ActionKey::Unblock)],
        Some(_) => vec![MenuItem::new(ActionKey::Block)
            .dangerous()
            .confirmed_by(ConfirmationKind::Block)],
        None => Vec::new(),
    }
}

fn report(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    let eligible = ctx.session.signed_in
        && !ctx.flags.is_self
        && ctx.flags.relation.known().is_some()
        && !ctx.flags.state.is_suspended();
    if !eligible {
        return Vec::new();
    }
    vec![MenuItem::new(ActionKey::Report).dangerous()]
}

fn domain(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    let Some(rel) = ctx.relation() else {
        return Vec::new();
    };
    if ctx.remote_domain("domain").is_none() {
        return Vec::new();
    }
    if rel.domain_blocking {
        vec![MenuItem::new(ActionKey::UnblockDomain)]
    } else {
        vec![MenuItem::new(ActionKey::BlockDomain)
            .dangerous()
            .confirmed_by(ConfirmationKind::BlockDomain)]
    }
}

fn admin(ctx: &SectionContext<'_>) -> Vec<MenuItem> {
    if !ctx.session.signed_in || ctx.flags.is_self {
        return Vec::new();
    }

    let prefix = ctx.config.admin_prefix();
    let mut items = Vec::new();

    if ctx.session.can(Permissions::MANAGE_USERS) {
        items.push(MenuItem::link(
            ActionKey::ModerateAccount,
            format!("{prefix}/accounts/{}", ctx.account.id),
        ));
    }
    if ctx.session.can(Permissions::MANAGE_FEDERATION) {
        if let Some(domain) = ctx.remote_domain("admin") {
            items.push(MenuItem::link(
                ActionKey::ModerateDomain,
                format!("{prefix}/instances/{domain}"),
            ));
        }
    }
    items
}

fn is_web_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace))
}

// ============================================================================
// Reducer
// ============================================================================

#[derive(Default)]
struct MenuAccumulator {
    entries: Vec<MenuEntry>,
    last_group: Option<MenuGroup>,
}

impl MenuAccumulator {
    fn push_section(mut self, group: MenuGroup, items: Vec<MenuItem>) -> Self {
        if items.is_empty() {
            return self;
        }
        if matches!(self.last_group, Some(last) if last != group) {
            self.entries.push(MenuEntry::Separator);
        }
        self.entries.extend(items.into_iter().map(MenuEntry::Item));
        self.last_group = Some(group);
        self
    }
}

/// Build the menu for a classified subject.
pub fn build_menu(ctx: &SectionContext<'_>) -> Vec<MenuEntry> {
    let menu = SECTIONS
        .iter()
        .fold(MenuAccumulator::default(), |acc, (group, build)| {
            let items = build(ctx);
            tracing::trace!(?group, count = items.len(), "menu section");
            acc.push_section(*group, items)
        });
    menu.entries
}

/// Menu items in order, without separators.
pub fn menu_actions(menu: &[MenuEntry]) -> Vec<ActionKey> {
    menu.iter()
        .filter_map(MenuEntry::item)
        .map(|item| item.action)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::visibility::gate;
    use roost_core::{Relationship, RelationshipState};

    fn menu_for(account: &Account, rel: RelationshipState, session: &Session) -> Vec<MenuEntry> {
        let config = ProfileConfig::for_domain("home.example");
        let flags = classify(account, &rel, session, &config);
        let visibility = gate(account, &flags);
        build_menu(&SectionContext {
            account,
            flags: &flags,
            visibility: &visibility,
            session,
            config: &config,
        })
    }

    #[test]
    fn test_signed_out_local_menu_is_empty() {
        let account = Account::local("1", "alice");
        assert!(menu_for(&account, RelationshipState::Unknown, &Session::anonymous()).is_empty());
    }

    #[test]
    fn test_plain_relationship_menu() {
        let account = Account::local("1", "alice");
        let menu = menu_for(&account, Relationship::default().into(), &Session::signed_in("2"));
        assert_eq!(
            menu_actions(&menu),
            vec![
                ActionKey::Mention,
                ActionKey::DirectMention,
                ActionKey::Mute,
                ActionKey::Block,
                ActionKey::Report,
            ]
        );
        assert_eq!(menu[2], MenuEntry::Separator);
        assert_eq!(menu.len(), 6);
    }

    #[test]
    fn test_following_but_muting_skips_preferences() {
        let account = Account::local("1", "alice");
        let rel = Relationship {
            following: true,
            muting: true,
            showing_reblogs: true,
            ..Relationship::default()
        };
        let actions = menu_actions(&menu_for(&account, rel.into(), &Session::signed_in("2")));
        assert!(!actions.contains(&ActionKey::HideReblogs));
        assert!(!actions.contains(&ActionKey::ChangeLanguages));
        assert!(actions.contains(&ActionKey::Endorse));
        assert!(actions.contains(&ActionKey::ManageLists));
        assert!(actions.contains(&ActionKey::Unmute));
    }

    #[test]
    fn test_remove_follower_requires_confirmation() {
        let account = Account::local("1", "alice");
        let rel = Relationship {
            followed_by: true,
            ..Relationship::default()
        };
        let menu = menu_for(&account, rel.into(), &Session::signed_in("2"));
        let item = menu
            .iter()
            .filter_map(MenuEntry::item)
            .find(|item| item.action == ActionKey::RemoveFromFollowers)
            .unwrap();
        assert!(item.dangerous);
        assert_eq!(
            item.confirmation.map(|c| c.kind),
            Some(ConfirmationKind::RemoveFollower)
        );
    }

    #[test]
    fn test_unmute_and_unblock_are_not_dangerous() {
        let account = Account::local("1", "alice");
        let rel = Relationship {
            muting: true,
            blocking: true,
            ..Relationship::default()
        };
        let menu = menu_for(&account, rel.into(), &Session::signed_in("2"));
        for item in menu.iter().filter_map(MenuEntry::item) {
            if matches!(item.action, ActionKey::Unmute | ActionKey::Unblock) {
                assert!(!item.dangerous);
                assert!(!item.requires_confirmation());
            }
        }
    }

    #[test]
    fn test_remote_origin_link() {
        let mut account = Account::remote("1", "bob", "remote.example");
        account.url = Some("https://remote.example/@bob".to_string());
        let menu = menu_for(&account, RelationshipState::Unknown, &Session::anonymous());
        assert_eq!(menu.len(), 1);
        let item = menu[0].item().unwrap();
        assert_eq!(item.action, ActionKey::OpenOriginalPage);
        assert_eq!(item.href.as_deref(), Some("https://remote.example/@bob"));
    }

    #[test]
    fn test_malformed_url_omits_origin_link() {
        let mut account = Account::remote("1", "bob", "remote.example");
        account.url = Some("javascript:alert(1)".to_string());
        assert!(menu_for(&account, RelationshipState::Unknown, &Session::anonymous()).is_empty());
    }

    #[test]
    fn test_unparseable_domain_omits_domain_entries() {
        let mut account = Account::local("1", "bob");
        account.acct = "bob@".to_string();
        let session =
            Session::signed_in("2").with_permissions(Permissions::MANAGE_FEDERATION);
        let actions = menu_actions(&menu_for(&account, Relationship::default().into(), &session));
        assert!(!actions.contains(&ActionKey::BlockDomain));
        assert!(!actions.contains(&ActionKey::ModerateDomain));
        assert!(actions.contains(&ActionKey::Block));
    }

    #[test]
    fn test_admin_links() {
        let account = Account::remote("7", "bob", "remote.example");
        let session = Session::signed_in("2")
            .with_permissions(Permissions::MANAGE_USERS | Permissions::MANAGE_FEDERATION);
        let menu = menu_for(&account, Relationship::default().into(), &session);
        let hrefs: Vec<_> = menu
            .iter()
            .filter_map(MenuEntry::item)
            .filter_map(|item| item.href.as_deref())
            .collect();
        assert_eq!(
            hrefs,
            vec!["/admin/accounts/7", "/admin/instances/remote.example"]
        );
    }

    #[test]
    fn test_suspended_menu_keeps_only_independent_sections() {
        let mut account = Account::local("1", "alice");
        account.suspended = true;
        let session = Session::signed_in("2").with_permissions(Permissions::MANAGE_USERS);
        let menu = menu_for(&account, Relationship::default().into(), &session);
        assert_eq!(menu_actions(&menu), vec![ActionKey::ModerateAccount]);
    }

    #[test]
    fn test_web_url_check() {
        assert!(is_web_url("https://remote.example/@bob"));
        assert!(is_web_url("http://remote.example"));
        assert!(!is_web_url("https://"));
        assert!(!is_web_url("ftp://remote.example"));
        assert!(!is_web_url("https://remote.example/a b"));
    }
}
