//! Data models for the Zendesk API.
//!
//! This module contains type definitions for the Zendesk resources the
//! client touches: users, tickets and their custom fields, uploads,
//! and the flattened ticket projection.

mod flat_ticket;
mod ticket;
mod upload;
mod user;

pub use flat_ticket::*;
pub use ticket::*;
pub use upload::*;
pub use user::*;
