//! Agentum link previews.
//!
//! Serves shareable pages for profiles (`/entity/@username`) and events
//! (`/event/{id}`) with social-preview metadata and a deep link into the
//! mobile app, plus the Apple app site association for universal links.
//! Records are read from the Supabase REST API on every request; nothing is
//! stored or cached here.

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod render;
pub mod supabase;
