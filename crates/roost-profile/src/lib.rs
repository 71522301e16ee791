//! Roost Profile - Action & Menu Composition
//!
//! Given a profile subject, the viewer's relationship to it and the viewer's
//! session, this crate derives every control of a profile header:
//!
//! - `PrimaryAction`: the single principal control (follow, withdraw, unblock)
//! - `MenuEntry` list: the ordered overflow menu with separators, dangerous
//!   markings and confirmation prompts
//! - `Toggles`: notification bell and boost visibility
//! - `Visibility`: the redaction gate for suspended, hidden or moved subjects
//!
//! plus the relationship tags, header render switches and compact list-row
//! controls that derive from the same inputs.
//!
//! # Architecture
//!
//! Data flows one way and every stage is a pure function:
//!
//! ```text
//! inputs → classify → { gate, resolve_primary, build_menu, ... } → Decision
//! ```
//!
//! Nothing here performs I/O or returns an error. Missing relationships
//! degrade to `Relation::Unknown`; malformed handles and URLs drop the entries
//! that would need them.
//!
//! # Example
//!
//! ```ignore
//! use roost_core::{Account, ProfileConfig, Relationship, Session};
//! use roost_profile::{ProfileEngine, ProfileInput};
//!
//! let engine = ProfileEngine::new(ProfileConfig::for_domain("home.example"));
//! let input = ProfileInput::new(
//!     Account::local("1", "alice"),
//!     Relationship::following(),
//!     Session::signed_in("2"),
//! );
//! let decision = engine.decide(&input);
//! ```

pub mod actions;
pub mod classify;
pub mod compose;
pub mod header;
pub mod menu;
pub mod primary;
pub mod row;
pub mod tags;
pub mod toggles;
pub mod visibility;

pub use actions::{ActionKey, RelationshipField};
pub use classify::{classify, Flags, Relation, RelationFlags, Remoteness};
pub use compose::{decide, Decision, ProfileEngine, ProfileInput};
pub use header::{header_facets, page_title, AccountBadge, HeaderFacets, RobotsDirective};
pub use menu::{
    build_menu, menu_actions, Confirmation, ConfirmationKind, MenuEntry, MenuGroup, MenuItem,
    SectionContext,
};
pub use primary::{resolve_primary, PrimaryAction};
pub use row::{resolve_row, row_confirmation, DefaultRowAction, RowButton, RowControls};
pub use tags::{relationship_tags, RelationshipTag};
pub use toggles::{resolve_toggles, ToggleSpec, Toggles};
pub use visibility::{actionable_relation, gate, RedactionReasons, Visibility};
