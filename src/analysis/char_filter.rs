//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw dump before it is split into records, so
//! every pattern applied later sees the normalized text.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Literal substring replacement (numeric
//!   escapes, line endings)
//!
//! # Examples
//!
//! ```
//! use ordanet::analysis::char_filter::CharFilter;
//! use ordanet::analysis::char_filter::mapping::MappingCharFilter;
//!
//! let filter = MappingCharFilter::numeric_escapes().unwrap();
//! let (output, _) = filter.filter("a&#160;b &#60;x&#47;&#62;");
//! assert_eq!(output, "a b <x/>");
//! ```

/// Trait for character filters applied to the raw dump text.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and the number of replacements made.
    fn filter(&self, input: &str) -> (String, usize);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
