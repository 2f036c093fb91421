//! Edit session for a single record.
//!
//! `Closed → Open(buffer) → Closed`. Cancel discards the buffer; save runs the configured
//! [`EditValidator`] and hands the buffer back for write-back by id.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::record::{RecordId, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Role,
}

impl EditField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Role];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }
}

impl Display for EditField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Working copy of one record's editable fields. The id is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl EditBuffer {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Email => &self.email,
            EditField::Role => &self.role,
        }
    }

    pub fn set_field(&mut self, field: EditField, value: String) {
        match field {
            EditField::Name => self.name = value,
            EditField::Email => self.email = value,
            EditField::Role => self.role = value,
        }
    }

    /// Copies name, email and role onto `record`. The id is left untouched.
    pub fn apply_to(&self, record: &mut UserRecord) {
        record.name.clone_from(&self.name);
        record.email.clone_from(&self.email);
        record.role.clone_from(&self.role);
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: EditField,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: EditField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Hook consulted before an edit is written back.
pub trait EditValidator {
    fn validate(&self, buffer: &EditBuffer) -> Result<(), ValidationError>;
}

impl<F> EditValidator for F
where
    F: Fn(&EditBuffer) -> Result<(), ValidationError>,
{
    fn validate(&self, buffer: &EditBuffer) -> Result<(), ValidationError> {
        self(buffer)
    }
}

/// Accepts every buffer, empty strings included.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl EditValidator for AcceptAll {
    fn validate(&self, _buffer: &EditBuffer) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        buffer: EditBuffer,
        error: Option<ValidationError>,
    },
}

impl EditSession {
    pub fn open(record: &UserRecord) -> Self {
        Self::Open {
            buffer: EditBuffer::from_record(record),
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            Self::Open { buffer, .. } => Some(buffer),
            Self::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Open { error, .. } => error.as_ref(),
            Self::Closed => None,
        }
    }

    /// Updates one field of the open buffer; a stale validation error is dropped.
    pub fn set_field(&mut self, field: EditField, value: String) {
        if let Self::Open { buffer, error } = self {
            buffer.set_field(field, value);
            *error = None;
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Validates and closes the session, returning the buffer to write back.
    ///
    /// A rejected buffer keeps the session open with the error attached.
    pub fn save(&mut self, validator: &dyn EditValidator) -> Option<EditBuffer> {
        let Self::Open { buffer, error } = self else {
            return None;
        };

        if let Err(rejected) = validator.validate(buffer) {
            *error = Some(rejected);
            return None;
        }

        match std::mem::take(self) {
            Self::Open { buffer, .. } => Some(buffer),
            Self::Closed => None,
        }
    }
}

/// Writes `buffer` onto the record with the same id. Returns whether one was found.
pub fn apply_edit(records: &mut [UserRecord], buffer: &EditBuffer) -> bool {
    match records.iter_mut().find(|record| record.id == buffer.id()) {
        Some(record) => {
            buffer.apply_to(record);
            true
        }
        None => false,
    }
}
