//! Article management core: a multi-author article aggregate with tags and a
//! draft/published lifecycle, exposed over HTTP.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
