//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics recorded while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for expectation, expression and numeric failures
//! - Error names and suggestions for reporting

pub mod errors;

#[cfg(test)]
mod tests;
