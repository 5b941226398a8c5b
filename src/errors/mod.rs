//! Error types and error handling for the front end.
//!
//! This module defines the error surfaced by the parser. It includes:
//!
//! - The error structure carrying the offending token and its position
//! - Specific error variants for each malformed construct
//! - Error naming, tips and display functionality

pub mod errors;
