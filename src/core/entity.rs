//! The entity seam: kinds and the collection-access trait

use super::Document;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// The three entity kinds held by a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    User,
    Ticket,
}

impl EntityKind {
    /// Human-readable name, as used in error messages ("Team not found")
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Team => "Team",
            Self::User => "User",
            Self::Ticket => "Ticket",
        }
    }

    /// Top-level key of this kind's collection in the persisted document
    #[must_use]
    pub const fn collection_name(self) -> &'static str {
        match self {
            Self::Team => "teams",
            Self::User => "users",
            Self::Ticket => "tickets",
        }
    }

    /// Name of the id path parameter for this kind's routes
    #[must_use]
    pub const fn id_param(self) -> &'static str {
        match self {
            Self::Team => "teamId",
            Self::User => "userId",
            Self::Ticket => "ticketId",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One record within a document collection
///
/// Implementors tie a concrete type to its kind and expose its collection
/// inside the document, so repository and handler code can be written once.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The kind tag for this entity type
    const KIND: EntityKind;

    /// The entity's assigned id
    fn id(&self) -> i64;

    /// This kind's collection within the document, in storage order
    fn collection(doc: &Document) -> &[Self];

    /// Mutable access to this kind's collection
    fn collection_mut(doc: &mut Document) -> &mut Vec<Self>;
}
