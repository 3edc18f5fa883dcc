//! HTTP server for the recorded-session viewer.
//!
//! Serves one session at a time: a server-rendered page with the session
//! metadata and step timeline, plus a per-step JSON endpoint the page's
//! controller pages through.

pub mod api;
pub mod app_state;

pub use app_state::AppState;
