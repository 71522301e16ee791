//! Relationship tags shown next to the profile name

use crate::classify::Flags;
use crate::visibility::Visibility;
use serde::Serialize;

/// A short relationship label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipTag {
    /// Accounts follow each other
    Mutual,
    /// Subject follows viewer
    FollowsYou,
    /// Subject requested to follow viewer
    RequestsToFollowYou,
    /// Viewer blocks subject
    Blocking,
    /// Viewer mutes subject
    Muting,
    /// Viewer blocks subject's domain
    DomainBlocking,
}

impl RelationshipTag {
    /// Message id of the tag label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Mutual => "account.mutual",
            Self::FollowsYou => "account.follows_you",
            Self::RequestsToFollowYou => "account.requests_to_follow_you",
            Self::Blocking => "account.blocking",
            Self::Muting => "account.muting",
            Self::DomainBlocking => "account.domain_blocking",
        }
    }
}

/// Tags for a classified subject: at most one follow tag, then block/mute tags.
pub fn relationship_tags(flags: &Flags, visibility: &Visibility) -> Vec<RelationshipTag> {
    if flags.is_self || visibility.conceals_relationship() {
        return Vec::new();
    }
    let Some(rel) = flags.relation.known() else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    if rel.mutual {
        tags.push(RelationshipTag::Mutual);
    } else if rel.followed_by {
        tags.push(RelationshipTag::FollowsYou);
    } else if rel.requested_by {
        tags.push(RelationshipTag::RequestsToFollowYou);
    }

    if rel.blocking {
        tags.push(RelationshipTag::Blocking);
    }
    if rel.muting {
        tags.push(RelationshipTag::Muting);
    }
    if rel.domain_blocking {
        tags.push(RelationshipTag::DomainBlocking);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::visibility::gate;
    use roost_core::{Account, ProfileConfig, Relationship, Session};

    fn tags_for(rel: Relationship, viewer: &str) -> Vec<RelationshipTag> {
        let account = Account::local("1", "alice");
        let session = Session::signed_in(viewer);
        let flags = classify(&account, &rel.into(), &session, &ProfileConfig::default());
        relationship_tags(&flags, &gate(&account, &flags))
    }

    #[test]
    fn test_mutual_wins_over_follows_you() {
        let rel = Relationship {
            following: true,
            followed_by: true,
            requested_by: true,
            ..Relationship::default()
        };
        assert_eq!(tags_for(rel, "2"), vec![RelationshipTag::Mutual]);
    }

    #[test]
    fn test_tag_order() {
        let rel = Relationship {
            requested_by: true,
            blocking: true,
            muting: true,
            domain_blocking: true,
            ..Relationship::default()
        };
        assert_eq!(
            tags_for(rel, "2"),
            vec![
                RelationshipTag::RequestsToFollowYou,
                RelationshipTag::Blocking,
                RelationshipTag::Muting,
                RelationshipTag::DomainBlocking,
            ]
        );
    }

    #[test]
    fn test_no_tags_for_self() {
        let rel = Relationship {
            followed_by: true,
            ..Relationship::default()
        };
        assert!(tags_for(rel, "1").is_empty());
    }
}
