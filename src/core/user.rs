use super::{Document, Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// A user record
///
/// Serialized in camelCase (`firstName`, `emailId`, ...); the wire and
/// on-disk formats are the same and must stay stable. `team_id` is a soft
/// reference to a team's id; it is never checked against the teams collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub phno: String,
    pub employee_id: i64,
    pub designation: String,
    pub team_id: i64,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection(doc: &Document) -> &[Self] {
        &doc.users
    }

    fn collection_mut(doc: &mut Document) -> &mut Vec<Self> {
        &mut doc.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_format_is_camel_case() {
        let user = User {
            id: 1,
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email_id: "asha.rao@gmail.com".to_string(),
            phno: "9876543210".to_string(),
            employee_id: 101,
            designation: "Engineer".to_string(),
            team_id: 1,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "firstName": "Asha",
                "lastName": "Rao",
                "emailId": "asha.rao@gmail.com",
                "phno": "9876543210",
                "employeeId": 101,
                "designation": "Engineer",
                "teamId": 1
            })
        );
    }
}
