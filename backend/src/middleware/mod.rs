//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route: correlation
//! identifiers and role gating.

pub mod access_gate;
pub mod trace;

pub use access_gate::AccessGate;
pub use trace::Trace;
