//! HTTP request handlers.
//!
//! Handlers are thin: extract and validate input, call domain validation
//! from `mahjooz_core`, delegate persistence to `mahjooz_db` repositories,
//! and map the result into a response. Anything reusable lives below this
//! layer.
//!
//! - [`auth`] - registration, login, guest sessions, token refresh
//! - [`hotel`] - public catalog reads and admin catalog management
//! - [`booking`] - quotes, booking submission, lifecycle transitions
//! - [`favorite`] - per-user favorite hotels
//! - [`notification`] - in-app notifications and broadcasts
//! - [`settings`] - the application settings singleton
//! - [`admin`] - dashboard stats and user management

pub mod admin;
pub mod auth;
pub mod booking;
pub mod favorite;
pub mod hotel;
pub mod notification;
pub mod settings;
