// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
}
