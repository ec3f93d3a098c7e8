use super::{Document, Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// A ticket
///
/// `team` is free text; it is not matched against the teams collection.
/// `status` is likewise free text rather than an enum, preserving whatever
/// workflow names callers already use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub team: String,
    pub status: String,
    pub assignee: String,
    pub reporter: String,
}

impl Entity for Ticket {
    const KIND: EntityKind = EntityKind::Ticket;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection(doc: &Document) -> &[Self] {
        &doc.tickets
    }

    fn collection_mut(doc: &mut Document) -> &mut Vec<Self> {
        &mut doc.tickets
    }
}
