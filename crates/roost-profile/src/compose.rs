//! Composition facade
//!
//! Runs the classifier, the visibility gate and the resolvers, and returns
//! one immutable `Decision` per input tuple. The output is a deterministic
//! function of the input; calling `decide` twice yields equal decisions.

use crate::classify::{classify, Flags};
use crate::header::{header_facets, HeaderFacets};
use crate::menu::{build_menu, MenuEntry, SectionContext};
use crate::primary::{resolve_primary, PrimaryAction};
use crate::row::{resolve_row, DefaultRowAction, RowControls};
use crate::tags::{relationship_tags, RelationshipTag};
use crate::toggles::{resolve_toggles, Toggles};
use crate::visibility::{gate, Visibility};
use roost_core::{Account, ProfileConfig, RelationshipState, Session};
use serde::{Deserialize, Serialize};

/// Everything the engine needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Profile subject
    pub account: Account,
    /// Viewer → subject relationship, or `Unknown`
    #[serde(default)]
    pub relationship: RelationshipState,
    /// Viewer session
    #[serde(default)]
    pub session: Session,
    /// Caller marks the subject as hidden from this viewer
    #[serde(default)]
    pub hidden: bool,
}

impl ProfileInput {
    /// Input for an anonymous viewer.
    pub fn anonymous(account: Account) -> Self {
        Self {
            account,
            relationship: RelationshipState::Unknown,
            session: Session::anonymous(),
            hidden: false,
        }
    }

    /// Input for a signed-in viewer.
    pub fn new(account: Account, relationship: impl Into<RelationshipState>, session: Session) -> Self {
        Self {
            account,
            relationship: relationship.into(),
            session,
            hidden: false,
        }
    }

    /// Mark the subject as hidden.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// The engine's structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Principal control, if any
    pub primary_action: Option<PrimaryAction>,
    /// Bell and boost-visibility toggles
    pub toggles: Toggles,
    /// Ordered overflow menu
    pub menu: Vec<MenuEntry>,
    /// Profile is rendered redacted
    pub redacted: bool,
    /// Gate output with the redaction causes
    pub visibility: Visibility,
    /// Relationship tags
    pub tags: Vec<RelationshipTag>,
    /// Header render switches
    pub header: HeaderFacets,
}

/// Stateless profile decision engine bound to an instance configuration.
#[derive(Debug, Clone, Default)]
pub struct ProfileEngine {
    config: ProfileConfig,
}

impl ProfileEngine {
    /// Create an engine for the given configuration.
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    /// The bound configuration.
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Classify the input.
    pub fn classify(&self, input: &ProfileInput) -> Flags {
        classify(
            &input.account,
            &input.relationship,
            &input.session,
            &self.config,
        )
        .with_hidden(input.hidden)
    }

    /// Compose the full decision for one render.
    pub fn decide(&self, input: &ProfileInput) -> Decision {
        let account = &input.account;
        let session = &input.session;
        let flags = self.classify(input);
        let visibility = gate(account, &flags);

        let ctx = SectionContext {
            account,
            flags: &flags,
            visibility: &visibility,
            session,
            config: &self.config,
        };

        let decision = Decision {
            primary_action: resolve_primary(account, &flags, &visibility, session),
            toggles: resolve_toggles(&flags, &visibility, session),
            menu: build_menu(&ctx),
            redacted: visibility.redacted,
            visibility,
            tags: relationship_tags(&flags, &visibility),
            header: header_facets(account, &flags, &visibility, session, &self.config),
        };

        tracing::debug!(
            account = %account.id,
            primary = ?decision.primary_action,
            menu_len = decision.menu.len(),
            redacted = decision.redacted,
            "profile decision composed"
        );
        decision
    }

    /// Resolve the compact row controls for the same input.
    pub fn row(&self, input: &ProfileInput, default_action: DefaultRowAction) -> RowControls {
        resolve_row(
            &input.account,
            &input.relationship,
            &input.session,
            default_action,
        )
    }
}

/// Compose a decision with a one-off engine.
pub fn decide(input: &ProfileInput, config: &ProfileConfig) -> Decision {
    ProfileEngine::new(config.clone()).decide(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionKey;
    use crate::menu::menu_actions;
    use roost_core::Relationship;

    #[test]
    fn test_anonymous_local_decision() {
        let engine = ProfileEngine::new(ProfileConfig::for_domain("home.example"));
        let decision = engine.decide(&ProfileInput::anonymous(Account::local("1", "alice")));
        assert!(decision.primary_action.is_none());
        assert!(decision.menu.is_empty());
        assert!(decision.toggles.is_empty());
        assert!(!decision.redacted);
        assert!(decision.header.show_media);
    }

    #[test]
    fn test_hidden_input_redacts() {
        let engine = ProfileEngine::default();
        let input = ProfileInput::new(
            Account::local("1", "alice"),
            Relationship::following(),
            Session::signed_in("2"),
        )
        .hidden(true);
        let decision = engine.decide(&input);
        assert!(decision.redacted);
        assert!(decision.primary_action.is_none());
        assert!(decision.tags.is_empty());
        assert_eq!(
            menu_actions(&decision.menu),
            vec![ActionKey::Mention, ActionKey::DirectMention, ActionKey::Report]
        );
    }

    #[test]
    fn test_decision_serializes() {
        let engine = ProfileEngine::default();
        let input = ProfileInput::new(
            Account::local("1", "alice"),
            Relationship::default(),
            Session::signed_in("2"),
        );
        let json = serde_json::to_value(engine.decide(&input)).unwrap();
        assert_eq!(json["primary_action"]["kind"], "follow_toggle");
        assert_eq!(json["menu"][2]["kind"], "separator");
        assert_eq!(json["menu"][0]["action"], "mention");
    }

    #[test]
    fn test_input_deserializes_with_defaults() {
        let json = r#"{"account":{"id":"1","username":"alice","acct":"alice"}}"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, ProfileInput::anonymous(Account::local("1", "alice")));
    }
}
