//! # Ordanet
//!
//! Extracts synonym pairs from The Icelandic Wordweb (Orðanet) RDF dump and
//! writes them as `WORD1=WORD2(normal)` lines for library-catalog systems.
//!
//! ## Pipeline
//!
//! - [`record`] - Escape normalization and blank-line record splitting
//! - [`synonym`] - Sense index and synonymy relation resolution
//! - [`extractor`] - Configured end-to-end runs
//! - [`cli`] - The `ordanet` command line

pub mod analysis;
pub mod cli;
pub mod error;
pub mod extractor;
pub mod record;
pub mod synonym;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
