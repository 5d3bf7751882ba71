//! Chunk utilities independent of the sentence pipeline.

/// Split scraped article text into paragraph chunks.
///
/// Carriage returns behave as line feeds; blank lines separate paragraphs
/// and runs of them collapse. Consecutive non-blank lines join into one
/// chunk separated by a single newline, each chunk trimmed. Empty input
/// yields an empty list.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in text.replace('\r', "\n").split('\n') {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

/// Merge chunks shorter than `min_size` characters into their predecessor.
///
/// Blank chunks are dropped. A short chunk joins the last emitted chunk
/// space-separated; anything else starts a new chunk with its text trimmed.
/// The first non-blank chunk is always emitted as-is, short or not, since
/// there is nothing before it to merge into. No default `min_size` is
/// assumed.
pub fn merge_short_chunks<I, S>(chunks: I, min_size: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<String> = Vec::new();
    for chunk in chunks {
        let chunk = chunk.as_ref();
        if chunk.trim().is_empty() {
            continue;
        }
        let merge = !merged.is_empty() && chunk.chars().count() < min_size;
        if merge {
            if let Some(last) = merged.last_mut() {
                *last = format!("{last} {chunk}").trim().to_string();
            }
        } else {
            merged.push(chunk.trim().to_string());
        }
    }
    merged
}
