// src/application/error.rs
use crate::domain::errors::DomainError;
use crate::domain::identity::EntityKind;
use std::{collections::BTreeMap, fmt};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Per-field messages collected while validating a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// Record `message` under `field` when `failed` holds.
    pub fn check(&mut self, failed: bool, field: &'static str, message: impl Into<String>) {
        if failed {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub const fn fields(&self) -> &BTreeMap<&'static str, Vec<String>> {
        &self.fields
    }

    pub fn into_result(self) -> ApplicationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(ValidationErrors),

    #[error("{entity} ({id}) was not found")]
    NotFound { entity: EntityKind, id: String },
}

impl ApplicationError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, msg);
        Self::Validation(errors)
    }

    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
