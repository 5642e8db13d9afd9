//! sea-orm entities for the auth service database.

pub mod auth_codes;
pub mod outbox_events;
pub mod sessions;
pub mod users;
