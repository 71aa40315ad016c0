// src/infrastructure/events.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::ports::events::DomainEventPublisher,
    domain::{article::ArticleEvent, errors::DomainResult, events::DomainEvent},
};

/// Hands drained aggregate events to the publisher in the order they were recorded.
#[derive(Clone)]
pub struct EventDispatcher {
    publisher: Arc<dyn DomainEventPublisher>,
}

impl EventDispatcher {
    pub fn new(publisher: Arc<dyn DomainEventPublisher>) -> Self {
        Self { publisher }
    }

    /// Publishes one aggregate's drained events in recording order.
    ///
    /// Runs after the save has committed, so a publisher failure is logged and
    /// the remaining events are still delivered.
    pub async fn dispatch(&self, events: Vec<ArticleEvent>) {
        for event in &events {
            if let Err(err) = self.publisher.publish(event).await {
                tracing::warn!(
                    error = %err,
                    event = event.name(),
                    aggregate_id = %event.aggregate_id(),
                    "failed to publish domain event"
                );
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(Arc::new(TracingEventPublisher))
    }
}

/// Writes each event to the log. The default sink when nothing else listens.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventPublisher;

#[async_trait]
impl DomainEventPublisher for TracingEventPublisher {
    async fn publish(&self, event: &ArticleEvent) -> DomainResult<()> {
        tracing::info!(
            event = event.name(),
            aggregate_id = %event.aggregate_id(),
            occurred_at = %event.occurred_at(),
            "domain event"
        );
        Ok(())
    }
}
