//! Property tests for Runcast.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics" and "validated values stay normalized".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/project_id.rs"]
mod project_id;

#[path = "properties/domain_name.rs"]
mod domain_name;

#[path = "properties/shell_quote.rs"]
mod shell_quote;
