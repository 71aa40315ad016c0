pub mod article;
pub mod errors;
pub mod events;
pub mod identity;
