// tests/support/mocks/events.rs
use articles_core::application::ports::events::DomainEventPublisher;
use articles_core::domain::article::ArticleEvent;
use articles_core::domain::errors::{DomainError, DomainResult};
use articles_core::domain::events::DomainEvent;
use async_trait::async_trait;
use std::sync::Mutex;

/// Keeps every published event for later assertions.
#[derive(Default)]
pub struct CapturingPublisher {
    events: Mutex<Vec<ArticleEvent>>,
}

impl CapturingPublisher {
    pub fn events(&self) -> Vec<ArticleEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(DomainEvent::name).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl DomainEventPublisher for CapturingPublisher {
    async fn publish(&self, event: &ArticleEvent) -> DomainResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Rejects every event.
#[derive(Default)]
pub struct FailingPublisher;

#[async_trait]
impl DomainEventPublisher for FailingPublisher {
    async fn publish(&self, _event: &ArticleEvent) -> DomainResult<()> {
        Err(DomainError::persistence("event sink unavailable"))
    }
}
