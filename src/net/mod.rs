//! Backend communication: session store, authenticated HTTP pipeline,
//! per-resource call groups, and wire types.

pub mod api;
pub mod http;
pub mod session;
pub mod types;
