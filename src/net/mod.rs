//! Network layer: wire types, the authenticated request pipeline, and the
//! typed per-resource API services.
//!
//! DESIGN
//! ======
//! Every service function returns the backend's uniform envelope
//! ([`types::ApiResponse`]); transport failures are normalized into
//! `{success: false, message}` at the pipeline boundary, so callers never
//! have to distinguish an HTTP failure from an application-level one.

pub mod auth;
pub mod client;
pub mod comments;
pub mod news;
pub mod reactions;
pub mod token;
pub mod types;
