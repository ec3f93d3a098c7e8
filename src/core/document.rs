//! The root aggregate persisted as one JSON file

use super::{Team, Ticket, User};
use serde::{Deserialize, Serialize};

/// The whole dataset: three ordered collections, loaded and saved wholesale
///
/// All three keys are required when deserializing; a file missing any of them
/// is not a valid document. The serialized shape
/// `{ "teams": [...], "users": [...], "tickets": [...] }` is the on-disk
/// interchange format and must stay stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub teams: Vec<Team>,
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
}
