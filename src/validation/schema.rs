//! Static field schemas
//!
//! Each entity kind declares its allowed field set once: field name, shape
//! rule, the message used when a required field is missing, and an optional
//! cross-collection uniqueness rule. The validator walks these tables
//! generically; no per-route validation code exists anywhere else.

use crate::core::EntityKind;

/// Shape rule for a single field
#[derive(Debug, Clone, Copy)]
pub enum FieldRule {
    /// Non-empty string after trimming; reuses the field's required message
    Text,
    /// Array of non-empty strings (team member lists)
    Members,
    /// Email shape, domain restricted to gmail.com
    Email,
    /// Exactly ten numeric digits
    Phone,
    /// JSON integer, with the given message on mismatch
    Integer(&'static str),
}

/// Uniqueness rule evaluated against the current document
#[derive(Debug, Clone, Copy)]
pub enum UniqueRule {
    /// No existing team may carry the candidate name
    TeamName,
    /// No candidate member may appear in any team's member list
    TeamMembers,
    /// No existing user may carry the candidate email
    UserEmail,
    /// No existing user may carry the candidate phone number
    UserPhone,
    /// No existing user may carry the candidate employee id
    UserEmployeeId,
}

/// One entry in an entity's allowed field set
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
    pub required_message: &'static str,
    pub unique: Option<UniqueRule>,
}

/// The full allowed field set for one entity kind
///
/// `id` is deliberately absent from every schema: it is assigned by the
/// repository and rejected as an unknown field when supplied by a caller.
#[derive(Debug)]
pub struct EntitySchema {
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Whether the given field name belongs to this schema
    #[must_use]
    pub fn allows(&self, field: &str) -> bool {
        self.fields.iter().any(|spec| spec.name == field)
    }
}

static TEAM_SCHEMA: EntitySchema = EntitySchema {
    fields: &[
        FieldSpec {
            name: "name",
            rule: FieldRule::Text,
            required_message: "Team name is required",
            unique: Some(UniqueRule::TeamName),
        },
        FieldSpec {
            name: "members",
            rule: FieldRule::Members,
            required_message: "Members should be an array",
            unique: Some(UniqueRule::TeamMembers),
        },
    ],
};

static USER_SCHEMA: EntitySchema = EntitySchema {
    fields: &[
        FieldSpec {
            name: "firstName",
            rule: FieldRule::Text,
            required_message: "First name is required",
            unique: None,
        },
        FieldSpec {
            name: "lastName",
            rule: FieldRule::Text,
            required_message: "Last name is required",
            unique: None,
        },
        FieldSpec {
            name: "emailId",
            rule: FieldRule::Email,
            required_message: "Email ID is required",
            unique: Some(UniqueRule::UserEmail),
        },
        FieldSpec {
            name: "phno",
            rule: FieldRule::Phone,
            required_message: "Phone number is required",
            unique: Some(UniqueRule::UserPhone),
        },
        FieldSpec {
            name: "employeeId",
            rule: FieldRule::Integer("Employee ID must be an integer"),
            required_message: "Employee ID is required",
            unique: Some(UniqueRule::UserEmployeeId),
        },
        FieldSpec {
            name: "designation",
            rule: FieldRule::Text,
            required_message: "Designation is required",
            unique: None,
        },
        FieldSpec {
            name: "teamId",
            rule: FieldRule::Integer("Team ID must be an integer"),
            required_message: "Team ID is required",
            unique: None,
        },
    ],
};

static TICKET_SCHEMA: EntitySchema = EntitySchema {
    fields: &[
        FieldSpec {
            name: "title",
            rule: FieldRule::Text,
            required_message: "Title is required and cannot be empty",
            unique: None,
        },
        FieldSpec {
            name: "description",
            rule: FieldRule::Text,
            required_message: "Description is required and cannot be empty",
            unique: None,
        },
        FieldSpec {
            name: "team",
            rule: FieldRule::Text,
            required_message: "Team is required and cannot be empty",
            unique: None,
        },
        FieldSpec {
            name: "status",
            rule: FieldRule::Text,
            required_message: "Status is required and cannot be empty",
            unique: None,
        },
        FieldSpec {
            name: "assignee",
            rule: FieldRule::Text,
            required_message: "Assignee is required and cannot be empty",
            unique: None,
        },
        FieldSpec {
            name: "reporter",
            rule: FieldRule::Text,
            required_message: "Reporter is required and cannot be empty",
            unique: None,
        },
    ],
};

/// Look up the schema for an entity kind
#[must_use]
pub const fn schema_for(kind: EntityKind) -> &'static EntitySchema {
    match kind {
        EntityKind::Team => &TEAM_SCHEMA,
        EntityKind::User => &USER_SCHEMA,
        EntityKind::Ticket => &TICKET_SCHEMA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_never_an_allowed_field() {
        for kind in [EntityKind::Team, EntityKind::User, EntityKind::Ticket] {
            assert!(!schema_for(kind).allows("id"), "{kind} schema allows id");
        }
    }

    #[test]
    fn test_allowed_fields_match_entity_shapes() {
        let team = schema_for(EntityKind::Team);
        assert!(team.allows("name"));
        assert!(team.allows("members"));
        assert!(!team.allows("title"));

        let user = schema_for(EntityKind::User);
        for field in [
            "firstName",
            "lastName",
            "emailId",
            "phno",
            "employeeId",
            "designation",
            "teamId",
        ] {
            assert!(user.allows(field), "user schema misses {field}");
        }

        let ticket = schema_for(EntityKind::Ticket);
        for field in ["title", "description", "team", "status", "assignee", "reporter"] {
            assert!(ticket.allows(field), "ticket schema misses {field}");
        }
        assert!(!ticket.allows("priority"));
    }
}
