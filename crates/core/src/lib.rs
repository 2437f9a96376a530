//! Mahjooz domain logic.
//!
//! Pure types, constants, and validation rules shared by the persistence
//! and API layers. Nothing in this crate performs I/O.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod notification;
pub mod pricing;
pub mod roles;
pub mod settings;
pub mod types;
