// src/domain/events.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub trait DomainEvent: Clone + Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;
    fn aggregate_id(&self) -> Uuid;
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Pending events of one aggregate instance, kept in the order they were raised.
#[derive(Debug, Clone)]
pub struct EventLog<E> {
    pending: Vec<E>,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E> EventLog<E> {
    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hand out everything recorded so far and start over empty.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }
}

/// Capability implemented by every aggregate root so persistence code can
/// harvest raised events without knowing the concrete aggregate.
pub trait AggregateRoot {
    type Event: DomainEvent;

    fn pending_events(&self) -> &[Self::Event];

    fn drain_events(&mut self) -> Vec<Self::Event>;
}
