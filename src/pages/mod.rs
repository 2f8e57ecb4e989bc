//! Admin panel routes. Every page except login sits inside
//! [`crate::components::admin_layout::AdminLayout`].

pub mod comments;
pub mod contacts;
pub mod dashboard;
pub mod gallery;
pub mod login;
pub mod news;
pub mod school_info;
pub mod schedule;
pub mod users;
