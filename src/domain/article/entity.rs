// src/domain/article/entity.rs
use crate::domain::article::events::ArticleEvent;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleTitle, PublicationStatus, TagName,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::{AggregateRoot, EventLog};
use crate::domain::identity::{
    ArticleAuthorId, ArticleId, ArticleTagId, AuthorId, Entity, same_identity,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Link between an article and one of its authors. Owned by [`Article`].
#[derive(Debug, Clone)]
pub struct ArticleAuthor {
    id: ArticleAuthorId,
    article_id: ArticleId,
    author_id: AuthorId,
}

impl ArticleAuthor {
    fn attach(article_id: ArticleId, author_id: AuthorId) -> Self {
        Self {
            id: ArticleAuthorId::new_unique(),
            article_id,
            author_id,
        }
    }

    pub const fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub const fn author_id(&self) -> AuthorId {
        self.author_id
    }
}

impl Entity for ArticleAuthor {
    type Id = ArticleAuthorId;

    fn id(&self) -> ArticleAuthorId {
        self.id
    }
}

impl PartialEq for ArticleAuthor {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self, other)
    }
}

impl Eq for ArticleAuthor {}

/// Tag attached to an article. Owned by [`Article`].
#[derive(Debug, Clone)]
pub struct ArticleTag {
    id: ArticleTagId,
    article_id: ArticleId,
    name: TagName,
}

impl ArticleTag {
    fn attach(article_id: ArticleId, name: TagName) -> Self {
        Self {
            id: ArticleTagId::new_unique(),
            article_id,
            name,
        }
    }

    pub const fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub const fn name(&self) -> &TagName {
        &self.name
    }
}

impl Entity for ArticleTag {
    type Id = ArticleTagId;

    fn id(&self) -> ArticleTagId {
        self.id
    }
}

impl PartialEq for ArticleTag {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self, other)
    }
}

impl Eq for ArticleTag {}

/// Stored shape of an article, used by repositories to rebuild the aggregate.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub authors: Vec<ArticleAuthorRecord>,
    pub tags: Vec<ArticleTagRecord>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArticleAuthorRecord {
    pub id: ArticleAuthorId,
    pub author_id: AuthorId,
}

#[derive(Debug, Clone)]
pub struct ArticleTagRecord {
    pub id: ArticleTagId,
    pub name: String,
}

/// Aggregate root for a publishable article.
///
/// All state changes go through the methods below; each either succeeds and
/// leaves every invariant intact or fails without touching the article.
#[derive(Debug, Clone)]
pub struct Article {
    id: ArticleId,
    title: ArticleTitle,
    content: ArticleContent,
    status: PublicationStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    authors: Vec<ArticleAuthor>,
    tags: Vec<ArticleTag>,
    events: EventLog<ArticleEvent>,
}

impl Article {
    pub fn create(
        id: ArticleId,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: AuthorId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = ArticleTitle::new(title)?;
        let content = ArticleContent::new(content)?;

        let mut article = Self {
            id,
            title,
            content,
            status: PublicationStatus::Draft,
            created_at: now,
            updated_at: None,
            published_at: None,
            authors: vec![ArticleAuthor::attach(id, author_id)],
            tags: Vec::new(),
            events: EventLog::default(),
        };
        article.events.record(ArticleEvent::Created {
            article_id: id,
            occurred_at: now,
        });
        Ok(article)
    }

    /// Rebuild a stored article. No events are recorded.
    pub fn rehydrate(record: ArticleRecord) -> DomainResult<Self> {
        let ArticleRecord {
            id,
            title,
            content,
            status,
            created_at,
            updated_at,
            published_at,
            authors,
            tags,
        } = record;

        match (status, published_at) {
            (PublicationStatus::Published, None) => {
                return Err(DomainError::invariant(
                    "published article is missing its publication timestamp",
                ));
            }
            (PublicationStatus::Draft, Some(_)) => {
                return Err(DomainError::invariant(
                    "draft article cannot carry a publication timestamp",
                ));
            }
            _ => {}
        }

        if authors.is_empty() {
            return Err(DomainError::invariant("article must have at least one author"));
        }
        let mut seen_authors = HashSet::new();
        let authors = authors
            .into_iter()
            .map(|record| {
                if !seen_authors.insert(record.author_id) {
                    return Err(DomainError::invariant(format!(
                        "author {} is listed twice",
                        record.author_id
                    )));
                }
                Ok(ArticleAuthor {
                    id: record.id,
                    article_id: id,
                    author_id: record.author_id,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let mut seen_tags = HashSet::new();
        let tags = tags
            .into_iter()
            .map(|record| {
                let name = TagName::new(record.name)?;
                if !seen_tags.insert(name.clone()) {
                    return Err(DomainError::invariant(format!("tag '{name}' is listed twice")));
                }
                Ok(ArticleTag {
                    id: record.id,
                    article_id: id,
                    name,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            id,
            title: ArticleTitle::new(title)?,
            content: ArticleContent::new(content)?,
            status,
            created_at,
            updated_at,
            published_at,
            authors,
            tags,
            events: EventLog::default(),
        })
    }

    pub const fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub const fn content(&self) -> &ArticleContent {
        &self.content
    }

    pub const fn status(&self) -> PublicationStatus {
        self.status
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub const fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn authors(&self) -> &[ArticleAuthor] {
        &self.authors
    }

    pub fn tags(&self) -> &[ArticleTag] {
        &self.tags
    }

    pub fn author_ids(&self) -> impl Iterator<Item = AuthorId> + '_ {
        self.authors.iter().map(ArticleAuthor::author_id)
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &TagName> + '_ {
        self.tags.iter().map(ArticleTag::name)
    }

    pub fn has_tag(&self, name: &TagName) -> bool {
        self.tags.iter().any(|tag| &tag.name == name)
    }

    pub fn update_title(&mut self, title: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        self.title = ArticleTitle::new(title)?;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn update_content(
        &mut self,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.content = ArticleContent::new(content)?;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn add_author(&mut self, author_id: AuthorId) -> DomainResult<()> {
        if self.authors.iter().any(|a| a.author_id == author_id) {
            return Err(DomainError::conflict(format!(
                "author {author_id} is already assigned to this article"
            )));
        }
        self.authors.push(ArticleAuthor::attach(self.id, author_id));
        Ok(())
    }

    pub fn remove_author(&mut self, author_id: AuthorId) -> DomainResult<()> {
        if self.authors.len() <= 1 {
            return Err(DomainError::invariant(
                "cannot remove the last author from the article",
            ));
        }
        let position = self
            .authors
            .iter()
            .position(|a| a.author_id == author_id)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "author {author_id} is not assigned to this article"
                ))
            })?;
        self.authors.remove(position);
        Ok(())
    }

    pub fn add_tag(&mut self, name: TagName) -> DomainResult<()> {
        if self.has_tag(&name) {
            return Err(DomainError::conflict(format!(
                "tag '{name}' is already assigned to this article"
            )));
        }
        self.tags.push(ArticleTag::attach(self.id, name));
        Ok(())
    }

    pub fn remove_tag(&mut self, name: &TagName) -> DomainResult<()> {
        let position = self
            .tags
            .iter()
            .position(|tag| &tag.name == name)
            .ok_or_else(|| {
                DomainError::not_found(format!("tag '{name}' is not assigned to this article"))
            })?;
        self.tags.remove(position);
        Ok(())
    }

    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == PublicationStatus::Published {
            return Err(DomainError::invariant("article is already published"));
        }
        self.status = PublicationStatus::Published;
        self.published_at = Some(now);
        self.events.record(ArticleEvent::Published {
            article_id: self.id,
            occurred_at: now,
        });
        Ok(())
    }

    /// Back to draft. Unlike [`Article::publish`] this raises no event.
    pub fn unpublish(&mut self) -> DomainResult<()> {
        if self.status != PublicationStatus::Published {
            return Err(DomainError::invariant("article is not published"));
        }
        self.status = PublicationStatus::Draft;
        self.published_at = None;
        Ok(())
    }
}

impl Entity for Article {
    type Id = ArticleId;

    fn id(&self) -> ArticleId {
        self.id
    }
}

impl AggregateRoot for Article {
    type Event = ArticleEvent;

    fn pending_events(&self) -> &[ArticleEvent] {
        self.events.pending()
    }

    fn drain_events(&mut self) -> Vec<ArticleEvent> {
        self.events.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn sample_article() -> Article {
        Article::create(
            ArticleId::new_unique(),
            "Test Article",
            "Test Content",
            AuthorId::new_unique(),
            now(),
        )
        .unwrap()
    }

    #[test]
    fn create_starts_as_draft_with_one_author_and_created_event() {
        let id = ArticleId::new_unique();
        let author = AuthorId::new_unique();
        let article = Article::create(id, "Intro", "Hello", author, now()).unwrap();

        assert_eq!(article.id(), id);
        assert_eq!(article.status(), PublicationStatus::Draft);
        assert_eq!(article.created_at(), now());
        assert!(article.updated_at().is_none());
        assert!(article.published_at().is_none());
        assert_eq!(article.author_ids().collect::<Vec<_>>(), vec![author]);
        assert_eq!(article.authors()[0].article_id(), id);
        assert!(article.tags().is_empty());
        assert_eq!(
            article.pending_events(),
            &[ArticleEvent::Created {
                article_id: id,
                occurred_at: now()
            }]
        );
    }

    #[test]
    fn create_rejects_blank_title_or_content() {
        for (title, content) in [("", "body"), ("   ", "body"), ("title", ""), ("title", " \t ")] {
            let result = Article::create(
                ArticleId::new_unique(),
                title,
                content,
                AuthorId::new_unique(),
                now(),
            );
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn update_title_and_content_stamp_updated_at() {
        let mut article = sample_article();
        let later = now() + Duration::minutes(5);

        article.update_title("New title", later).unwrap();
        article.update_content("New content", later).unwrap();

        assert_eq!(article.title().as_str(), "New title");
        assert_eq!(article.content().as_str(), "New content");
        assert_eq!(article.updated_at(), Some(later));
        assert_eq!(article.status(), PublicationStatus::Draft);
    }

    #[test]
    fn invalid_update_leaves_article_untouched() {
        let mut article = sample_article();
        let later = now() + Duration::minutes(5);

        assert!(matches!(
            article.update_title("  ", later),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            article.update_content("", later),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(article.title().as_str(), "Test Article");
        assert_eq!(article.content().as_str(), "Test Content");
        assert!(article.updated_at().is_none());
    }

    #[test]
    fn publish_sets_state_and_records_event() {
        let mut article = sample_article();
        article.drain_events();
        let at = now() + Duration::hours(1);

        article.publish(at).unwrap();

        assert_eq!(article.status(), PublicationStatus::Published);
        assert_eq!(article.published_at(), Some(at));
        assert_eq!(
            article.pending_events(),
            &[ArticleEvent::Published {
                article_id: article.id(),
                occurred_at: at
            }]
        );
    }

    #[test]
    fn publishing_twice_fails_without_changing_state() {
        let mut article = sample_article();
        let first = now() + Duration::hours(1);
        article.publish(first).unwrap();

        let err = article.publish(first + Duration::hours(1)).unwrap_err();

        assert!(matches!(err, DomainError::InvariantViolation(msg) if msg.contains("already published")));
        assert_eq!(article.published_at(), Some(first));
        assert_eq!(article.pending_events().len(), 2);
    }

    #[test]
    fn unpublish_returns_to_draft() {
        let mut article = sample_article();
        article.publish(now()).unwrap();

        article.unpublish().unwrap();

        assert_eq!(article.status(), PublicationStatus::Draft);
        assert!(article.published_at().is_none());
    }

    // Unpublish deliberately raises no event, unlike publish. This test pins
    // that asymmetry so a change to it is a conscious decision.
    #[test]
    fn unpublish_records_no_event() {
        let mut article = sample_article();
        article.publish(now()).unwrap();
        article.drain_events();

        article.unpublish().unwrap();

        assert!(article.pending_events().is_empty());
    }

    #[test]
    fn unpublishing_a_draft_fails() {
        let mut article = sample_article();
        let err = article.unpublish().unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(msg) if msg.contains("not published")));
        assert_eq!(article.status(), PublicationStatus::Draft);
    }

    #[test]
    fn duplicate_normalized_tag_is_a_conflict() {
        let mut article = sample_article();
        article.add_tag(TagName::new("Foo").unwrap()).unwrap();

        let err = article.add_tag(TagName::new(" foo ").unwrap()).unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(article.tags().len(), 1);
        assert_eq!(article.tags()[0].name().as_str(), "foo");
    }

    #[test]
    fn remove_tag_by_normalized_name() {
        let mut article = sample_article();
        article.add_tag(TagName::new("news").unwrap()).unwrap();

        article.remove_tag(&TagName::new("NEWS").unwrap()).unwrap();

        assert!(article.tags().is_empty());
    }

    #[test]
    fn removing_absent_tag_is_not_found() {
        let mut article = sample_article();
        let err = article.remove_tag(&TagName::new("ghost").unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn removing_sole_author_is_rejected() {
        let mut article = sample_article();
        let only = article.author_ids().next().unwrap();

        let err = article.remove_author(only).unwrap_err();

        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(article.author_ids().collect::<Vec<_>>(), vec![only]);
    }

    #[test]
    fn removing_non_last_author_succeeds() {
        let mut article = sample_article();
        let first = article.author_ids().next().unwrap();
        let second = AuthorId::new_unique();
        article.add_author(second).unwrap();

        article.remove_author(first).unwrap();

        assert_eq!(article.author_ids().collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn adding_existing_author_is_a_conflict() {
        let mut article = sample_article();
        let existing = article.author_ids().next().unwrap();
        assert!(matches!(
            article.add_author(existing),
            Err(DomainError::Conflict(_))
        ));
        assert_eq!(article.authors().len(), 1);
    }

    #[test]
    fn removing_unknown_author_is_not_found() {
        let mut article = sample_article();
        article.add_author(AuthorId::new_unique()).unwrap();
        assert!(matches!(
            article.remove_author(AuthorId::new_unique()),
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(article.authors().len(), 2);
    }

    #[test]
    fn drain_is_exactly_once() {
        let mut article = sample_article();
        article.publish(now()).unwrap();

        let drained = article.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(article.drain_events().is_empty());
    }

    #[test]
    fn rehydrate_rejects_inconsistent_publication_state() {
        let record = ArticleRecord {
            id: ArticleId::new_unique(),
            title: "t".into(),
            content: "c".into(),
            status: PublicationStatus::Published,
            created_at: now(),
            updated_at: None,
            published_at: None,
            authors: vec![ArticleAuthorRecord {
                id: ArticleAuthorId::new_unique(),
                author_id: AuthorId::new_unique(),
            }],
            tags: vec![],
        };
        assert!(matches!(
            Article::rehydrate(record),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn rehydrate_requires_an_author_and_records_no_events() {
        let mut record = ArticleRecord {
            id: ArticleId::new_unique(),
            title: "t".into(),
            content: "c".into(),
            status: PublicationStatus::Draft,
            created_at: now(),
            updated_at: None,
            published_at: None,
            authors: vec![],
            tags: vec![ArticleTagRecord {
                id: ArticleTagId::new_unique(),
                name: "rust".into(),
            }],
        };
        assert!(Article::rehydrate(record.clone()).is_err());

        record.authors.push(ArticleAuthorRecord {
            id: ArticleAuthorId::new_unique(),
            author_id: AuthorId::new_unique(),
        });
        let article = Article::rehydrate(record).unwrap();
        assert!(article.pending_events().is_empty());
        assert_eq!(article.tags()[0].article_id(), article.id());
    }

    #[test]
    fn owned_entities_compare_by_identity() {
        let article = sample_article();
        let mut clone = article.clone();
        clone.add_author(AuthorId::new_unique()).unwrap();

        assert_eq!(article.authors()[0], clone.authors()[0]);
        assert_ne!(clone.authors()[0], clone.authors()[1]);
    }
}
