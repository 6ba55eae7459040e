//! Text analysis applied to the raw dump before record parsing.
//!
//! # Components
//!
//! - [`char_filter`] - Character-level normalization of the raw text

pub mod char_filter;
