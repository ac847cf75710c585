// File: src/error.rs
// Purpose: Validation error map

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::field::Field;

/// Which kind of rule produced a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// A rule on one field in isolation
    FieldConstraint,
    /// A rule spanning several fields; attached to each of them
    CrossField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

/// Every violation found in one submission, keyed by field
///
/// Fields iterate in form order. Within a field, violations keep the order
/// they were found: field constraints first, then cross-field rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("registration is invalid: {} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, Vec<Violation>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, kind: ViolationKind, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(Violation {
            kind,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields carrying at least one violation
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// First message for a field, the one shown inline
    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors
            .get(&field)
            .and_then(|violations| violations.first())
            .map(|v| v.message.as_str())
    }

    /// All violations for a field
    pub fn get_errors(&self, field: Field) -> &[Violation] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn messages(&self, field: Field) -> Vec<&str> {
        self.get_errors(field)
            .iter()
            .map(|v| v.message.as_str())
            .collect()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[Violation])> + '_ {
        self.errors.iter().map(|(field, v)| (*field, v.as_slice()))
    }

    /// Plain map of field name to messages
    pub fn into_map(self) -> HashMap<String, Vec<String>> {
        self.errors
            .into_iter()
            .map(|(field, violations)| {
                (
                    field.as_str().to_string(),
                    violations.into_iter().map(|v| v.message).collect(),
                )
            })
            .collect()
    }
}
