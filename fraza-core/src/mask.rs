//! Reversible masking of periods that do not terminate a sentence.
//!
//! Boundary detectors split on `.`; abbreviations, initials and enumerations
//! would produce false boundaries. Masking rewrites those periods into
//! [`DOT_MARKER`] before detection, and [`unmask`] restores them inside each
//! extracted span. Masking runs as an ordered list of rewrite passes; the
//! order is load-bearing: specific constructions go first so the generic
//! short-token passes cannot re-split them, and a pass never matches the
//! marker text inserted by an earlier one.

use crate::abbreviations::AbbreviationSet;
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// Marker substituted for a masked period. Chosen to be a sequence that does
/// not occur in natural article text.
pub const DOT_MARKER: &str = "<DOT>";

/// Fixed compounds that must win over the generic letter rules.
const COMPOUNDS: &[&str] = &["т.д.", "т.е.", "т.п."];

type MaskPass = fn(&str, &AbbreviationSet) -> String;

/// The rewrite pipeline, applied strictly in this order.
const PASSES: &[(&str, MaskPass)] = &[
    ("compounds", mask_compounds),
    ("initials", mask_initials),
    ("enumerations", mask_enumerations),
    ("dictionary", mask_dictionary),
    ("single-letters", mask_single_letters),
    ("short-tokens", mask_short_tokens),
];

/// Rewrite every non-terminating period in `text` into [`DOT_MARKER`].
///
/// Every character other than the targeted periods (and whitespace inside
/// initials runs) is preserved byte-for-byte. An empty input is returned
/// unchanged.
pub fn mask(text: &str, abbreviations: &AbbreviationSet) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = text.to_string();
    for (name, pass) in PASSES.iter().copied() {
        let next = pass(&out, abbreviations);
        if next != out {
            trace!(pass = name, "masking pass rewrote text");
            out = next;
        }
    }
    out
}

/// Restore [`DOT_MARKER`] back to literal periods.
///
/// A second fixed-point pass re-inserts the single space between adjacent
/// initials that the masking step collapsed ("В.К." becomes "В. К."). The
/// loop is bounded by the character count so it terminates on any input.
pub fn unmask(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = text.replace(DOT_MARKER, ".");
    let max_rounds = out.chars().count().max(1);
    for _ in 0..max_rounds {
        let next = initials_pair_re()
            .replace_all(&out, "${1}. ${2}.")
            .into_owned();
        if next == out {
            break;
        }
        out = next;
    }
    out
}

fn masked_literal(abbreviation: &str) -> String {
    abbreviation.replace('.', DOT_MARKER)
}

/// Pass 1: literal compounds "т.д.", "т.е.", "т.п.".
fn mask_compounds(text: &str, _abbreviations: &AbbreviationSet) -> String {
    let mut out = text.to_string();
    for compound in COMPOUNDS {
        if out.contains(compound) {
            out = out.replace(compound, &masked_literal(compound));
        }
    }
    out
}

/// Pass 2: initials runs ("А. Б." or "А. Б. В.") collapse into one
/// marker-joined token with the internal whitespace removed.
fn mask_initials(text: &str, _abbreviations: &AbbreviationSet) -> String {
    initials_run_re()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            dot_gap_re().replace_all(&caps[0], DOT_MARKER).into_owned()
        })
        .into_owned()
}

/// Pass 3: enumerations like "35." — a digit run plus period, unless the
/// period starts a decimal fraction ("15.5" stays intact).
fn mask_enumerations(text: &str, _abbreviations: &AbbreviationSet) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in enumeration_re().find_iter(text) {
        let followed_by_digit = text[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());
        out.push_str(&text[last..m.start()]);
        if followed_by_digit {
            out.push_str(m.as_str());
        } else {
            out.push_str(&m.as_str()[..m.as_str().len() - 1]);
            out.push_str(DOT_MARKER);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Pass 4: literal dictionary entries. Substring substitution, not pattern
/// matching, so entries never need regex escaping.
fn mask_dictionary(text: &str, abbreviations: &AbbreviationSet) -> String {
    let mut out = text.to_string();
    for abbreviation in abbreviations.iter() {
        if !abbreviation.contains('.') {
            continue;
        }
        if out.contains(abbreviation) {
            out = out.replace(abbreviation, &masked_literal(abbreviation));
        }
    }
    out
}

/// Pass 5: a lone letter plus period ("я."), unless it opens a remaining
/// initials-like pair — those are left for the pair itself to resolve.
fn mask_single_letters(text: &str, _abbreviations: &AbbreviationSet) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in single_letter_re().find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if initials_tail_re().is_match(&text[m.end()..]) {
            out.push_str(m.as_str());
        } else {
            out.push_str(&m.as_str()[..m.as_str().len() - 1]);
            out.push_str(DOT_MARKER);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Pass 6: two- or three-letter tokens plus period ("ул.", "руб" variants
/// not present in the dictionary).
fn mask_short_tokens(text: &str, _abbreviations: &AbbreviationSet) -> String {
    short_token_re()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let m = &caps[0];
            format!("{}{}", &m[..m.len() - 1], DOT_MARKER)
        })
        .into_owned()
}

fn initials_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:[А-ЯЁ]\.)(?:\s*[А-ЯЁ]\.)+").expect("hardcoded pattern compiles")
    })
}

fn dot_gap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\s*").expect("hardcoded pattern compiles"))
}

fn enumeration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d+\.").expect("hardcoded pattern compiles"))
}

fn single_letter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[А-ЯЁа-яё]\.").expect("hardcoded pattern compiles"))
}

fn initials_tail_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[А-ЯЁа-яё]\.").expect("hardcoded pattern compiles"))
}

fn short_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[А-ЯЁа-яё]{2,3}\.").expect("hardcoded pattern compiles"))
}

fn initials_pair_re() -> &'static Regex {
    // Glued pairs only; spaced pairs must not match, or a chain of three or
    // more initials would stall at its first pair instead of converging.
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([А-ЯЁ])\.([А-ЯЁ])\.").expect("hardcoded pattern compiles"))
}
