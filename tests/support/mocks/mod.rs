// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod events;
pub mod repos;
pub mod time;

pub use events::{CapturingPublisher, FailingPublisher};
pub use repos::{FailingRepo, SlowRepo};
pub use time::{FixedClock, fixed_now};
