// src/lib.rs
// counsel - relay between the legal-assistant chat UI and its automation webhook

pub mod config;
pub mod error;
pub mod extract;
pub mod http;
pub mod relay;

pub use error::{CounselError, Result};
