//! Constraint validation
//!
//! A single pure function checks a candidate field set against the schema for
//! its entity kind and against a freshly loaded document snapshot. Nothing in
//! here touches transport or storage; callers decide what to do with the
//! returned violations.
//!
//! Precedence: any unknown field fails fast before field-level checks run;
//! then each declared field is checked for shape (required on create,
//! optional on update), and uniqueness rules re-scan the current collections
//! only when the shape check passed.
//! Uniqueness comparisons use the raw candidate strings with no trimming or
//! case folding, and do not exclude the entity being updated.

mod schema;

pub use schema::{EntitySchema, FieldRule, FieldSpec, UniqueRule, schema_for};

use crate::core::{Document, EntityKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Candidate field set as decoded from a request body
pub type FieldMap = Map<String, Value>;

/// Whether the candidate is a full create payload or a partial update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

/// A single field-rule failure reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a candidate field set against the current document
///
/// Returns every triggered violation; an empty vector means the candidate may
/// be applied. The document is the snapshot the caller is about to mutate —
/// uniqueness is only as fresh as that snapshot.
#[must_use]
pub fn validate(kind: EntityKind, fields: &FieldMap, doc: &Document, mode: Mode) -> Vec<Violation> {
    let schema = schema_for(kind);

    // Unknown fields short-circuit everything else.
    let unknown: Vec<Violation> = fields
        .keys()
        .filter(|name| !schema.allows(name.as_str()))
        .map(|name| Violation::new(name.as_str(), format!("Invalid field: {name}")))
        .collect();
    if !unknown.is_empty() {
        return unknown;
    }

    let mut violations = Vec::new();
    for spec in schema.fields {
        match fields.get(spec.name) {
            None => {
                if mode == Mode::Create {
                    violations.push(Violation::new(spec.name, spec.required_message));
                }
            },
            Some(value) => match check_rule(spec.rule, spec.required_message, value) {
                Err(message) => violations.push(Violation::new(spec.name, message)),
                Ok(()) => {
                    if let Some(unique) = spec.unique {
                        if let Some(message) = check_unique(unique, value, doc) {
                            violations.push(Violation::new(spec.name, message));
                        }
                    }
                },
            },
        }
    }
    violations
}

/// Shape check for one field value
fn check_rule(rule: FieldRule, required_message: &str, value: &Value) -> Result<(), String> {
    match rule {
        FieldRule::Text => {
            if value.as_str().is_some_and(|s| !s.trim().is_empty()) {
                Ok(())
            } else {
                Err(required_message.to_string())
            }
        },
        FieldRule::Members => {
            let Some(items) = value.as_array() else {
                return Err("Members should be an array".to_string());
            };
            if items
                .iter()
                .all(|item| item.as_str().is_some_and(|s| !s.trim().is_empty()))
            {
                Ok(())
            } else {
                Err("All members must be non-empty strings".to_string())
            }
        },
        FieldRule::Email => {
            let trimmed = value.as_str().map(str::trim).unwrap_or_default();
            if !EMAIL_RE.is_match(trimmed) {
                Err("Invalid email format".to_string())
            } else if !trimmed.ends_with("@gmail.com") {
                Err("Email must be a Gmail address".to_string())
            } else {
                Ok(())
            }
        },
        FieldRule::Phone => {
            let trimmed = value.as_str().map(str::trim).unwrap_or_default();
            if trimmed.len() != 10 {
                Err("Phone number must be 10 digits".to_string())
            } else if !trimmed.chars().all(|c| c.is_ascii_digit()) {
                Err("Phone number must contain only digits".to_string())
            } else {
                Ok(())
            }
        },
        FieldRule::Integer(message) => {
            if value.as_i64().is_some() {
                Ok(())
            } else {
                Err(message.to_string())
            }
        },
    }
}

/// Uniqueness check against the current collections
///
/// Runs only after the shape check passed, so the value accessors here cannot
/// miss. Comparisons are raw: no trimming, no case normalization.
fn check_unique(rule: UniqueRule, value: &Value, doc: &Document) -> Option<String> {
    match rule {
        UniqueRule::TeamName => {
            let name = value.as_str()?;
            doc.teams
                .iter()
                .any(|team| team.name == name)
                .then(|| "Team name already exists".to_string())
        },
        UniqueRule::TeamMembers => {
            let candidates = value.as_array()?;
            let existing: Vec<&str> = doc
                .teams
                .iter()
                .flat_map(|team| team.members.iter().map(String::as_str))
                .collect();
            let duplicates: Vec<&str> = candidates
                .iter()
                .filter_map(Value::as_str)
                .filter(|member| existing.contains(member))
                .collect();
            (!duplicates.is_empty()).then(|| {
                format!(
                    "Members {} are already in other teams",
                    duplicates.join(", ")
                )
            })
        },
        UniqueRule::UserEmail => {
            let email = value.as_str()?;
            doc.users
                .iter()
                .any(|user| user.email_id == email)
                .then(|| "Email ID already exists".to_string())
        },
        UniqueRule::UserPhone => {
            let phno = value.as_str()?;
            doc.users
                .iter()
                .any(|user| user.phno == phno)
                .then(|| "Phone number already exists".to_string())
        },
        UniqueRule::UserEmployeeId => {
            let employee_id = value.as_i64()?;
            doc.users
                .iter()
                .any(|user| user.employee_id == employee_id)
                .then(|| "Employee ID already exists".to_string())
        },
    }
}
