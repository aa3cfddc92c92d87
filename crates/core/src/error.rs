//! Error model.
//!
//! Two channels, kept strictly apart:
//!
//! - [`ErrorMap`] carries **expected validation failures** as data, addressed
//!   by field path, so the boundary can render every violation at once.
//! - [`FormError`] signals a **caller contract violation** (stale index,
//!   unparseable path). These indicate a boundary bug and are never shown to
//!   the end user.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::path::FieldPath;

/// Result type for orchestrator and controller operations.
pub type FormResult<T> = Result<T, FormError>;

/// Structural failure of a boundary call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A position did not resolve to a live entry (e.g. a stale index).
    #[error("position {position} out of range for {len} entries")]
    OutOfRange { position: usize, len: usize },

    /// A field path could not be parsed, or is not writable.
    #[error("unknown field path: {0}")]
    UnknownPath(String),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl FormError {
    pub fn out_of_range(position: usize, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    pub fn unknown_path(path: impl Into<String>) -> Self {
        Self::UnknownPath(path.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// What a field value violated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    Required,
    TooShort,
    TooLong,
    InvalidFormat,
    EmptyCollection,
    DuplicateKey,
}

/// One violation together with its fixed-locale message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(kind: ValidationKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

/// Path-addressed validation failures.
///
/// Iteration order is deterministic. An empty map means the draft is
/// submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldPath, Vec<ValidationError>>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: FieldPath, error: ValidationError) {
        self.0.entry(path).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of field paths carrying at least one violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Violations recorded for `path`; empty slice when the field is clean.
    pub fn get(&self, path: &FieldPath) -> &[ValidationError] {
        self.0.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, path: &FieldPath, kind: ValidationKind) -> bool {
        self.get(path).iter().any(|e| e.kind == kind)
    }

    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &[ValidationError])> {
        self.0.iter().map(|(path, errors)| (path, errors.as_slice()))
    }
}
