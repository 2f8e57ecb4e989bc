//! Reusable UI components for the admin pages.

pub mod admin_layout;
pub mod stat_card;
