//! Sentence segmentation for Russian news text.
//!
//! Scraped article text is normalized, periods that do not end a sentence
//! (abbreviations, initials, enumerations) are masked behind a reversible
//! marker, a pluggable boundary detector extracts candidate spans over the
//! masked text, and a merge pass repairs the detector's false splits. A
//! separate utility regroups arbitrary text chunks to a minimum size.
//!
//! ```
//! use fraza_core::{AbbreviationSet, Segmenter};
//!
//! let abbreviations = AbbreviationSet::from_lines(["руб.", "см."]);
//! let segmenter = Segmenter::new(abbreviations);
//! let sentences = segmenter
//!     .detect_sentences("Автор: А. Б. Иванов. Текст далее.")
//!     .unwrap();
//! assert_eq!(sentences, vec!["Автор: А. Б. Иванов.", "Текст далее."]);
//! ```

#![warn(missing_docs)]

pub mod abbreviations;
pub mod chunk;
pub mod detector;
pub mod error;
pub mod mask;
pub mod normalize;
pub mod segmenter;

pub use abbreviations::AbbreviationSet;
pub use chunk::{merge_short_chunks, split_paragraphs};
pub use detector::{BoundaryDetector, DetectorError, RuleDetector, Serialized, Span};
pub use error::{CoreError, Result};
pub use mask::{mask, unmask, DOT_MARKER};
pub use normalize::normalize;
pub use segmenter::{Segmenter, SegmenterBuilder};
