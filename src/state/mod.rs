//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only entity with real lifecycle semantics. Components
//! read it through the `RwSignal<SessionState>` provided via context; every
//! mutation goes through the [`session::SessionController`], which is the
//! single owner of the write path.

pub mod session;
