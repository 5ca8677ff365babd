//! # Script normalizers
//!
//! Text normalization backends used before scoring transcriptions:
//!
//! * [`BasicNormalizer`]: language-agnostic cleanup (case, brackets, symbols).
//! * [`EnglishNormalizer`]: basic cleanup plus English-specific rewrites.
//! * [`IndicNormalizer`]: Unicode-level normalization for nine Indic scripts,
//!   driven by an [`IndicConfig`].
//!
//! Every backend implements [`TextNormalizer`]. Instances are immutable and cheap
//! to build, so callers construct one per request.
//!
//! ```rust
//! use lipi_scripts::{BasicNormalizer, TextNormalizer};
//!
//! let normalizer = BasicNormalizer::new(true, false);
//! assert_eq!(normalizer.apply("Café [noise] au lait!").unwrap(), "cafe au lait");
//! ```

mod basic;
mod english;
mod error;
mod indic;
mod text;

pub use crate::basic::BasicNormalizer;
pub use crate::english::EnglishNormalizer;
pub use crate::error::{ScriptError, ScriptErrorExt};
pub use crate::indic::{IndicConfig, IndicNormalizer, NasalsPolicy, Script};

use std::fmt::Debug;

/// A configured text transformation.
pub trait TextNormalizer: Debug + Send + Sync {
    /// Normalizes `text`.
    ///
    /// # Errors
    /// Returns [`ScriptError::MalformedInput`] when the input cannot be processed.
    fn apply(&self, text: &str) -> Result<String, ScriptError>;
}
