use super::{Document, Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// A team: unique name, and a member list no other team may share names with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub members: Vec<String>,
}

impl Entity for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection(doc: &Document) -> &[Self] {
        &doc.teams
    }

    fn collection_mut(doc: &mut Document) -> &mut Vec<Self> {
        &mut doc.teams
    }
}
