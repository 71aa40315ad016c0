// src/domain/identity.rs
//! Typed identifiers and kind-aware identity comparison.
//!
//! Every entity kind gets its own UUID newtype so an `AuthorId` can never be
//! passed where an `ArticleId` is expected. When identities of different kinds
//! meet at runtime (for example in generic persistence code) they are compared
//! through [`EntityId`], which carries an explicit [`EntityKind`] tag next to
//! the value.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Article,
    Author,
    ArticleTag,
    ArticleAuthor,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Author => "Author",
            Self::ArticleTag => "ArticleTag",
            Self::ArticleAuthor => "ArticleAuthor",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-tagged identity. Two values are equal iff kind and value both match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    kind: EntityKind,
    value: Uuid,
}

impl EntityId {
    pub const fn new(kind: EntityKind, value: Uuid) -> Self {
        Self { kind, value }
    }

    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    pub const fn value(&self) -> Uuid {
        self.value
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

pub trait Identifier: Copy + Eq + fmt::Debug {
    const KIND: EntityKind;

    fn as_uuid(&self) -> Uuid;

    fn entity_id(&self) -> EntityId {
        EntityId::new(Self::KIND, self.as_uuid())
    }
}

/// An object with a stable identity across state changes.
pub trait Entity {
    type Id: Identifier;

    fn id(&self) -> Self::Id;
}

/// Identity equality across arbitrary entity kinds.
pub fn same_identity<A: Entity + ?Sized, B: Entity + ?Sized>(left: &A, right: &B) -> bool {
    left.id().entity_id() == right.id().entity_id()
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh random identifier.
            pub fn new_unique() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl Identifier for $name {
            const KIND: EntityKind = $kind;

            fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> DomainResult<Self> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|err| {
                        DomainError::validation(format!("invalid {} id: {err}", $kind))
                    })
            }
        }
    };
}

entity_id!(ArticleId, EntityKind::Article);
entity_id!(AuthorId, EntityKind::Author);
entity_id!(ArticleTagId, EntityKind::ArticleTag);
entity_id!(ArticleAuthorId, EntityKind::ArticleAuthor);

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub<I>(I);

    impl<I: Identifier> Entity for Stub<I> {
        type Id = I;

        fn id(&self) -> I {
            self.0
        }
    }

    #[test]
    fn same_kind_and_value_are_the_same_identity() {
        let raw = Uuid::new_v4();
        let left = Stub(ArticleId::from_uuid(raw));
        let right = Stub(ArticleId::from_uuid(raw));
        assert!(same_identity(&left, &right));
    }

    #[test]
    fn different_kinds_never_match_even_with_equal_values() {
        let raw = Uuid::new_v4();
        let article = Stub(ArticleId::from_uuid(raw));
        let author = Stub(AuthorId::from_uuid(raw));
        assert!(!same_identity(&article, &author));
        assert_ne!(
            ArticleId::from_uuid(raw).entity_id(),
            AuthorId::from_uuid(raw).entity_id()
        );
    }

    #[test]
    fn same_kind_different_values_differ() {
        let left = Stub(ArticleTagId::new_unique());
        let right = Stub(ArticleTagId::new_unique());
        assert!(!same_identity(&left, &right));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<ArticleId>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("Article")));
    }

    #[test]
    fn parse_round_trips_display() {
        let id = AuthorId::new_unique();
        let parsed: AuthorId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
