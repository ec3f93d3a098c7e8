//! Test utilities for ticket-desk
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Document, Team, Ticket, User};
use crate::storage::FileStorage;
use crate::validation::FieldMap;
use serde_json::json;
use tempfile::TempDir;

/// Test fixture wrapping a temporary data file and a store over it
pub struct TestStore {
    pub temp_dir: TempDir,
    pub storage: FileStorage,
}

impl TestStore {
    /// Create a store over a fresh, empty document
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join("data.json"));
        storage.save(&Document::default()).expect("Failed to seed document");

        Self { temp_dir, storage }
    }

    /// Create a store pre-populated with one entity of each kind
    pub fn with_sample_data() -> Self {
        let fixture = Self::new();
        fixture
            .storage
            .save(&sample_document())
            .expect("Failed to seed sample document");
        fixture
    }
}

/// A document holding one team, one user, and one ticket, all with id 1
pub fn sample_document() -> Document {
    Document {
        teams: vec![Team {
            id: 1,
            name: "Platform".to_string(),
            members: vec!["alice".to_string(), "bob".to_string()],
        }],
        users: vec![User {
            id: 1,
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email_id: "asha.rao@gmail.com".to_string(),
            phno: "9876543210".to_string(),
            employee_id: 101,
            designation: "Engineer".to_string(),
            team_id: 1,
        }],
        tickets: vec![Ticket {
            id: 1,
            title: "Login broken".to_string(),
            description: "500 on submit".to_string(),
            team: "Platform".to_string(),
            status: "open".to_string(),
            assignee: "alice".to_string(),
            reporter: "bob".to_string(),
        }],
    }
}

/// Valid create payload for a team
pub fn team_fields(name: &str, members: &[&str]) -> FieldMap {
    let value = json!({ "name": name, "members": members });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Valid create payload for a user
pub fn user_fields(email: &str, phno: &str, employee_id: i64) -> FieldMap {
    let value = json!({
        "firstName": "Ravi",
        "lastName": "Kumar",
        "emailId": email,
        "phno": phno,
        "employeeId": employee_id,
        "designation": "QA",
        "teamId": 1
    });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Valid create payload for a ticket
pub fn ticket_fields(title: &str) -> FieldMap {
    let value = json!({
        "title": title,
        "description": "500 on submit",
        "team": "Platform",
        "status": "open",
        "assignee": "alice",
        "reporter": "bob"
    });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let fixture = TestStore::new();
        assert_eq!(fixture.storage.load().unwrap(), Document::default());
    }

    #[test]
    fn test_sample_data_is_loadable() {
        let fixture = TestStore::with_sample_data();
        let doc = fixture.storage.load().unwrap();
        assert_eq!(doc.teams.len(), 1);
        assert_eq!(doc.users.len(), 1);
        assert_eq!(doc.tickets.len(), 1);
    }
}
