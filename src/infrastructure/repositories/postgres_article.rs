// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleAuthorId, ArticleAuthorRecord, ArticleId, ArticlePage, ArticleRecord,
    ArticleRepository, ArticleTagId, ArticleTagRecord, AuthorId, TagName,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::AggregateRoot;
use crate::domain::identity::Entity;
use crate::infrastructure::events::EventDispatcher;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::collections::HashMap;
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "id, title, content, status, created_at, updated_at, published_at";

/// Stores each article across `articles`, `article_authors` and `article_tags`
/// inside one transaction.
#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    dispatcher: EventDispatcher,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool, dispatcher: EventDispatcher) -> Self {
        Self { pool, dispatcher }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: Uuid,
    article_id: Uuid,
    author_id: Uuid,
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: Uuid,
    article_id: Uuid,
    name: String,
}

#[derive(Default)]
struct Children {
    authors: Vec<ArticleAuthorRecord>,
    tags: Vec<ArticleTagRecord>,
}

fn into_article(row: ArticleRow, children: Children) -> DomainResult<Article> {
    Article::rehydrate(ArticleRecord {
        id: ArticleId::from_uuid(row.id),
        title: row.title,
        content: row.content,
        status: row.status.parse()?,
        created_at: row.created_at,
        updated_at: row.updated_at,
        published_at: row.published_at,
        authors: children.authors,
        tags: children.tags,
    })
}

fn offset(page_number: u32, page_size: u32) -> i64 {
    i64::from(page_number.saturating_sub(1)) * i64::from(page_size)
}

impl PostgresArticleRepository {
    async fn load_children(&self, ids: &[Uuid]) -> DomainResult<HashMap<Uuid, Children>> {
        let mut children: HashMap<Uuid, Children> = HashMap::new();
        if ids.is_empty() {
            return Ok(children);
        }

        let authors = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, article_id, author_id FROM article_authors
             WHERE article_id = ANY($1)
             ORDER BY article_id, position",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let tags = sqlx::query_as::<_, TagRow>(
            "SELECT id, article_id, name FROM article_tags
             WHERE article_id = ANY($1)
             ORDER BY article_id, position",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        for row in authors {
            children
                .entry(row.article_id)
                .or_default()
                .authors
                .push(ArticleAuthorRecord {
                    id: ArticleAuthorId::from_uuid(row.id),
                    author_id: AuthorId::from_uuid(row.author_id),
                });
        }
        for row in tags {
            children
                .entry(row.article_id)
                .or_default()
                .tags
                .push(ArticleTagRecord {
                    id: ArticleTagId::from_uuid(row.id),
                    name: row.name,
                });
        }

        Ok(children)
    }

    async fn assemble(&self, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut children = self.load_children(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let owned = children.remove(&row.id).unwrap_or_default();
                into_article(row, owned)
            })
            .collect()
    }

    async fn write_children(
        tx: &mut Transaction<'_, Postgres>,
        article: &Article,
    ) -> DomainResult<()> {
        let article_id = Uuid::from(article.id());

        for (position, author) in (0_i32..).zip(article.authors()) {
            sqlx::query(
                "INSERT INTO article_authors (id, article_id, author_id, position)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::from(author.id()))
            .bind(article_id)
            .bind(Uuid::from(author.author_id()))
            .bind(position)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
        }

        for (position, tag) in (0_i32..).zip(article.tags()) {
            sqlx::query(
                "INSERT INTO article_tags (id, article_id, name, position)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::from(tag.id()))
            .bind(article_id)
            .bind(tag.name().as_str())
            .bind(position)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
        }

        Ok(())
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn get_all(&self, page_number: u32, page_size: u32) -> DomainResult<ArticlePage> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             ORDER BY created_at, id
             LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page_size))
        .bind(offset(page_number, page_size))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ArticlePage {
            items: self.assemble(rows).await?,
            total_count: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn get_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a
             WHERE EXISTS (
                 SELECT 1 FROM article_tags t WHERE t.article_id = a.id AND t.name = $1
             )
             ORDER BY created_at, id"
        ))
        .bind(tag.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.assemble(rows).await
    }

    async fn add(&self, mut article: Article) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO articles (id, title, content, status, created_at, updated_at, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(Uuid::from(article.id()))
        .bind(article.title().as_str())
        .bind(article.content().as_str())
        .bind(article.status().as_str())
        .bind(article.created_at())
        .bind(article.updated_at())
        .bind(article.published_at())
        .execute(&mut *tx)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::Conflict(_) => {
                DomainError::conflict(format!("article {} already exists", article.id()))
            }
            other => other,
        })?;

        Self::write_children(&mut tx, &article).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.dispatcher.dispatch(article.drain_events()).await;
        Ok(article)
    }

    async fn update(&self, article: &mut Article) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let article_id = Uuid::from(article.id());

        let result = sqlx::query(
            "UPDATE articles
             SET title = $2, content = $3, status = $4, updated_at = $5, published_at = $6
             WHERE id = $1",
        )
        .bind(article_id)
        .bind(article.title().as_str())
        .bind(article.content().as_str())
        .bind(article.status().as_str())
        .bind(article.updated_at())
        .bind(article.published_at())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "article {} not found",
                article.id()
            )));
        }

        sqlx::query("DELETE FROM article_authors WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        Self::write_children(&mut tx, article).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.dispatcher.dispatch(article.drain_events()).await;
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // children go with the row via ON DELETE CASCADE
        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::offset;

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(3, 10), 20);
    }

    #[test]
    fn offset_clamps_page_zero() {
        assert_eq!(offset(0, 10), 0);
    }
}
