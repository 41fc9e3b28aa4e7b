//! Render module
//!
//! Plain-text rendering of listings, detail pages and wizard sessions for
//! clients that do not ask for JSON.

pub mod renderer;

pub use renderer::{render_experience, render_listing, render_session, render_vendor};
