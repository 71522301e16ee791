//! Viewer → subject relationship records

use serde::{Deserialize, Serialize};

/// The directed relationship from the viewer to the profile subject.
///
/// Exactly one instance exists per (viewer, subject) pair at a time. Every
/// field defaults to `false` so partial payloads decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    /// Viewer follows subject
    pub following: bool,
    /// Viewer has a pending follow request to subject
    pub requested: bool,
    /// Subject follows viewer
    pub followed_by: bool,
    /// Subject has a pending follow request to viewer
    pub requested_by: bool,
    /// Viewer blocks subject
    pub blocking: bool,
    /// Subject blocks viewer
    pub blocked_by: bool,
    /// Viewer mutes subject
    pub muting: bool,
    /// Viewer's mute also hides notifications
    pub muting_notifications: bool,
    /// Viewer blocks the subject's domain
    pub domain_blocking: bool,
    /// Viewer sees the subject's boosts in their home feed
    pub showing_reblogs: bool,
    /// Viewer is notified when subject posts
    pub notifying: bool,
    /// Viewer features subject on their own profile
    pub endorsed: bool,
    /// Viewer's private note on subject
    pub note: String,
}

impl Relationship {
    /// Relationship of a viewer who follows the subject with boosts shown.
    pub fn following() -> Self {
        Self {
            following: true,
            showing_reblogs: true,
            ..Self::default()
        }
    }

    /// Check if the two accounts follow each other (or are about to).
    pub fn is_mutual(&self) -> bool {
        self.followed_by && (self.following || self.requested)
    }
}

/// A relationship that may not have been fetched yet.
///
/// `Unknown` is not the same as a loaded relationship with every flag
/// cleared: relationship-dependent controls are suppressed for `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "relationship", rename_all = "snake_case")]
pub enum RelationshipState {
    /// Not yet loaded, or the viewer is anonymous
    #[default]
    Unknown,
    /// Loaded from the relationship store
    Loaded(Relationship),
}

impl RelationshipState {
    /// The loaded relationship, if any.
    pub fn loaded(&self) -> Option<&Relationship> {
        match self {
            Self::Unknown => None,
            Self::Loaded(relationship) => Some(relationship),
        }
    }

    /// Check if the relationship has been loaded.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl From<Option<Relationship>> for RelationshipState {
    fn from(relationship: Option<Relationship>) -> Self {
        relationship.map_or(Self::Unknown, Self::Loaded)
    }
}

impl From<Relationship> for RelationshipState {
    fn from(relationship: Relationship) -> Self {
        Self::Loaded(relationship)
    }
}
