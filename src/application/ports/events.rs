// src/application/ports/events.rs
use crate::domain::article::ArticleEvent;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Receives domain events after the save that produced them has committed.
///
/// A failure here never undoes the save; dispatchers log it and move on.
#[async_trait]
pub trait DomainEventPublisher: Send + Sync {
    async fn publish(&self, event: &ArticleEvent) -> DomainResult<()>;
}
