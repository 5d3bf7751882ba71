//! The pluggable sentence-boundary capability and its built-in rule
//! implementation.
//!
//! The segmentation pipeline only depends on the [`BoundaryDetector`]
//! contract: ordered, non-overlapping character spans over the masked text.
//! A statistical model is plugged in by implementing the same trait; tests
//! use deterministic fakes.

use std::sync::Mutex;
use thiserror::Error;

/// Errors a boundary-detection implementation may signal.
///
/// The pipeline does not attempt recovery on either kind: masked text
/// without real spans cannot be segmented, so the failure surfaces to the
/// caller. Retry policy, if any, belongs to the caller as well.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// The detector (e.g. a model backend) is not available
    #[error("detector unavailable: {0}")]
    Unavailable(String),

    /// The detector ran but failed to produce spans
    #[error("inference failed: {0}")]
    Inference(String),
}

/// A half-open character range `[start, end)` identifying one candidate
/// sentence inside a specific text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// First character of the candidate sentence
    pub start: usize,
    /// One past the last character of the candidate sentence
    pub end: usize,
}

impl Span {
    /// Create a span over `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Extract the covered substring of `text`, or `None` when the span
    /// falls outside it. Offsets are characters, not bytes.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        if self.end < self.start {
            return None;
        }
        let start = char_to_byte(text, self.start)?;
        let end = char_to_byte(text, self.end)?;
        text.get(start..end)
    }
}

/// Byte offset of character position `pos`; `pos` equal to the character
/// count maps to the end of the string.
fn char_to_byte(text: &str, pos: usize) -> Option<usize> {
    let mut seen = 0;
    for (idx, _) in text.char_indices() {
        if seen == pos {
            return Some(idx);
        }
        seen += 1;
    }
    (seen == pos).then_some(text.len())
}

/// A sentence-boundary capability over masked text.
///
/// Implementations must return spans ordered by `start` and non-overlapping;
/// whitespace between sentences is simply left uncovered. Implementations
/// safe for concurrent inference should be `Sync`; a non-reentrant one can
/// be wrapped in [`Serialized`].
pub trait BoundaryDetector {
    /// Detect candidate sentence spans over `text`.
    fn detect(&self, text: &str) -> Result<Vec<Span>, DetectorError>;
}

/// Deterministic rule-based detector used when no statistical model is
/// wired in.
///
/// A span closes at a terminator character that is followed by whitespace
/// and an uppercase or non-alphabetic sentence opener, or by the end of the
/// input. On masked text the troublesome periods are already hidden, so
/// this is sufficient for production use and is the default.
#[derive(Debug, Clone)]
pub struct RuleDetector {
    terminators: Vec<char>,
}

impl Default for RuleDetector {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '!', '?', '…'],
        }
    }
}

impl RuleDetector {
    /// Create a detector with the default terminator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom terminator set.
    pub fn with_terminators(terminators: Vec<char>) -> Self {
        Self { terminators }
    }

    fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }
}

impl BoundaryDetector for RuleDetector {
    fn detect(&self, text: &str) -> Result<Vec<Span>, DetectorError> {
        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        let mut start: Option<usize> = None;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if start.is_none() {
                if !ch.is_whitespace() {
                    start = Some(i);
                }
                i += 1;
                continue;
            }
            if !self.is_terminator(ch) {
                i += 1;
                continue;
            }

            // Absorb a closing quote or parenthesis into the sentence.
            let mut end = i + 1;
            while end < chars.len() && matches!(chars[end], '"' | ')') {
                end += 1;
            }

            // A boundary needs whitespace after the terminator and an
            // opener that looks like a sentence start; "15.5" has neither.
            let mut next = end;
            while next < chars.len() && chars[next].is_whitespace() {
                next += 1;
            }
            let is_boundary = if next == chars.len() {
                true
            } else if next == end {
                false
            } else {
                let opener = chars[next];
                opener.is_uppercase() || !opener.is_alphabetic()
            };

            if is_boundary {
                if let Some(s) = start.take() {
                    spans.push(Span::new(s, end));
                }
                i = next;
            } else {
                i = end;
            }
        }

        // Trailing text without a terminator still forms a span.
        if let Some(s) = start {
            spans.push(Span::new(s, chars.len()));
        }
        Ok(spans)
    }
}

/// Adapter serializing calls to a non-reentrant detector.
///
/// Wraps the inner implementation in a mutex so the shared-reference
/// contract holds while masking and merging stay fully parallel.
#[derive(Debug)]
pub struct Serialized<D> {
    inner: Mutex<D>,
}

impl<D> Serialized<D> {
    /// Wrap `inner` so that only one thread at a time may run inference.
    pub fn new(inner: D) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}

impl<D: BoundaryDetector> BoundaryDetector for Serialized<D> {
    fn detect(&self, text: &str) -> Result<Vec<Span>, DetectorError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| DetectorError::Unavailable("detector mutex poisoned".into()))?;
        inner.detect(text)
    }
}
