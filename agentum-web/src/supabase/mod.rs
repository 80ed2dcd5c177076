//! Read-only access to the Supabase REST (PostgREST) interface.

mod client;
mod query;


pub use client::{Lookup, SupabaseClient};
pub use query::RecordQuery;
