use crate::domain::events::DomainEvent;
use crate::domain::identity::{ArticleId, Identifier};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArticleEvent {
    Created {
        article_id: ArticleId,
        occurred_at: DateTime<Utc>,
    },
    Published {
        article_id: ArticleId,
        occurred_at: DateTime<Utc>,
    },
}

impl ArticleEvent {
    pub const fn article_id(&self) -> ArticleId {
        match self {
            Self::Created { article_id, .. } | Self::Published { article_id, .. } => *article_id,
        }
    }
}

impl DomainEvent for ArticleEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Created { .. } => "ArticleCreated",
            Self::Published { .. } => "ArticlePublished",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        self.article_id().as_uuid()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Created { occurred_at, .. } | Self::Published { occurred_at, .. } => *occurred_at,
        }
    }
}
