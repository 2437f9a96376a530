//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity supports patches

pub mod app_settings;
pub mod booking;
pub mod favorite;
pub mod hotel;
pub mod notification;
pub mod role;
pub mod room;
pub mod session;
pub mod suite;
pub mod user;
