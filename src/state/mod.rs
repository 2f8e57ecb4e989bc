//! Shared client-side state models.

pub mod auth;
