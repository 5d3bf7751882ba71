//! The sentence segmentation pipeline.

use crate::abbreviations::AbbreviationSet;
use crate::detector::{BoundaryDetector, RuleDetector, Span};
use crate::error::{CoreError, Result};
use crate::mask;
use crate::normalize::normalize;
use std::path::PathBuf;
use tracing::debug;

/// Characters that end a clause rather than a sentence; a candidate after
/// one of these is a detector false positive.
const CLAUSE_TAILS: &[char] = &[',', ';', ':', '—', '-'];

/// Candidates at or below this character count are stray fragments.
const FRAGMENT_MAX_CHARS: usize = 3;

/// Splits raw article text into clean sentences.
///
/// Pipeline: normalize, mask non-terminating periods, run the boundary
/// detector over the masked text, unmask each extracted span, then repair
/// detector false positives by merging candidates into their predecessor.
/// All state is read-only after construction, so a shared reference is safe
/// to use from many threads at once (given a `Sync` detector).
pub struct Segmenter {
    abbreviations: AbbreviationSet,
    detector: Box<dyn BoundaryDetector + Send + Sync>,
}

impl Segmenter {
    /// Create a segmenter over `abbreviations` with the built-in
    /// [`RuleDetector`].
    pub fn new(abbreviations: AbbreviationSet) -> Self {
        Self {
            abbreviations,
            detector: Box::new(RuleDetector::new()),
        }
    }

    /// Start building a segmenter with a custom detector or abbreviation
    /// source.
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// The abbreviation set this segmenter masks with.
    pub fn abbreviations(&self) -> &AbbreviationSet {
        &self.abbreviations
    }

    /// Mask non-terminating periods in `text`. Exposed for callers that
    /// feed the masked form to an external system.
    pub fn mask(&self, text: &str) -> String {
        mask::mask(text, &self.abbreviations)
    }

    /// Restore periods masked by [`Segmenter::mask`].
    pub fn unmask(&self, text: &str) -> String {
        mask::unmask(text)
    }

    /// Split `text` into sentences in document order.
    ///
    /// Blank input yields an empty list. A detector failure or a span list
    /// violating the ordering/non-overlap contract is surfaced as an error;
    /// no partial sentence list is returned in that case.
    pub fn detect_sentences(&self, text: &str) -> Result<Vec<String>> {
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let masked = self.mask(&cleaned);
        let spans = self.detector.detect(&masked)?;
        validate_spans(&spans, masked.chars().count())?;

        let candidates: Vec<String> = spans
            .iter()
            .filter_map(|span| span.slice(&masked))
            .map(|part| self.unmask(part.trim()))
            .collect();

        let sentences = merge_candidates(candidates);
        debug!(
            spans = spans.len(),
            sentences = sentences.len(),
            "segmented text"
        );
        Ok(sentences)
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("abbreviations", &self.abbreviations.len())
            .finish_non_exhaustive()
    }
}

/// Fluent builder for [`Segmenter`].
///
/// The abbreviation source is mandatory: building without one is a
/// configuration error, never an implicit empty set.
#[derive(Default)]
pub struct SegmenterBuilder {
    abbreviations: Option<AbbreviationSet>,
    abbreviations_path: Option<PathBuf>,
    detector: Option<Box<dyn BoundaryDetector + Send + Sync>>,
}

impl SegmenterBuilder {
    /// Use an already-constructed abbreviation set.
    pub fn abbreviations(mut self, set: AbbreviationSet) -> Self {
        self.abbreviations = Some(set);
        self
    }

    /// Load the abbreviation set from a line-delimited file at build time.
    /// A read failure fails the build.
    pub fn abbreviations_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.abbreviations_path = Some(path.into());
        self
    }

    /// Replace the built-in rule detector, e.g. with a statistical model
    /// backend.
    pub fn detector<D>(mut self, detector: D) -> Self
    where
        D: BoundaryDetector + Send + Sync + 'static,
    {
        self.detector = Some(Box::new(detector));
        self
    }

    /// Build the segmenter.
    pub fn build(self) -> Result<Segmenter> {
        let abbreviations = match (self.abbreviations, self.abbreviations_path) {
            (Some(set), _) => set,
            (None, Some(path)) => AbbreviationSet::from_path(path)?,
            (None, None) => {
                return Err(CoreError::Config(
                    "an abbreviation source is required".into(),
                ))
            }
        };
        Ok(Segmenter {
            abbreviations,
            detector: self
                .detector
                .unwrap_or_else(|| Box::new(RuleDetector::new())),
        })
    }
}

impl std::fmt::Debug for SegmenterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmenterBuilder")
            .field("abbreviations", &self.abbreviations.as_ref().map(|s| s.len()))
            .field("abbreviations_path", &self.abbreviations_path)
            .finish_non_exhaustive()
    }
}

/// Enforce the detector contract: in-bounds, ordered by start,
/// non-overlapping.
fn validate_spans(spans: &[Span], total_chars: usize) -> Result<()> {
    for span in spans {
        if span.end < span.start || span.end > total_chars {
            return Err(CoreError::InvalidSpans {
                reason: format!(
                    "span [{}, {}) out of bounds for {total_chars} characters",
                    span.start, span.end
                ),
            });
        }
    }
    for pair in spans.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(CoreError::InvalidSpans {
                reason: format!(
                    "span [{}, {}) overlaps span [{}, {})",
                    pair[1].start, pair[1].end, pair[0].start, pair[0].end
                ),
            });
        }
    }
    Ok(())
}

/// Repair detector false positives left to right.
///
/// Each decision compares only the previously emitted sentence with the
/// next candidate. Blank candidates are dropped; the first real candidate
/// is always emitted as-is.
fn merge_candidates(candidates: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate = candidate.trim().to_string();
        if candidate.is_empty() {
            continue;
        }
        let merge = merged
            .last()
            .is_some_and(|previous| should_merge(previous, &candidate));
        if merge {
            if let Some(previous) = merged.last_mut() {
                *previous = format!("{previous} {candidate}").trim().to_string();
            }
        } else {
            merged.push(candidate);
        }
    }
    merged
}

/// Whether `candidate` is a false split off the end of `previous`.
fn should_merge(previous: &str, candidate: &str) -> bool {
    if let Some(tail) = previous.chars().rev().find(|c| !c.is_whitespace()) {
        if CLAUSE_TAILS.contains(&tail) {
            return true;
        }
    }
    if let Some(first_letter) = candidate.chars().find(|c| c.is_alphabetic()) {
        if first_letter.is_lowercase() {
            return true;
        }
    }
    candidate.chars().count() <= FRAGMENT_MAX_CHARS
}
