//! Core domain model for ticket-desk
//!
//! The root aggregate is [`Document`]: three ordered collections (teams,
//! users, tickets) that are always loaded and persisted wholesale. The
//! [`Entity`] trait is the seam that lets a single generic repository and a
//! single generic handler set serve all three kinds.

mod document;
mod entity;
mod team;
mod ticket;
mod user;

pub use document::Document;
pub use entity::{Entity, EntityKind};
pub use team::Team;
pub use ticket::Ticket;
pub use user::User;
