//! Unicode and whitespace normalization for scraped article text.

use unicode_normalization::UnicodeNormalization;

/// Normalize raw article text into a canonical single-line form.
///
/// Applies NFC composition, replaces control and format characters with
/// spaces, maps en/em dashes to `-` and guillemet/curly quotes to `"`,
/// collapses whitespace runs to a single space and trims the ends. The
/// function is idempotent and returns an empty input unchanged.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut prev_was_space = false;
    for ch in text.nfc() {
        let ch = match ch {
            '\u{2013}' | '\u{2014}' => '-',
            '«' | '»' | '\u{201C}' | '\u{201D}' => '"',
            _ => ch,
        };
        if ch.is_whitespace() || is_dropped(ch) {
            // Stray controls become a space, like any other separator,
            // so adjacent words do not fuse.
            if !prev_was_space && !out.is_empty() {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }

    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Control and format characters that never survive normalization.
///
/// `\r`, `\n` and `\t` are whitespace and take the collapse path instead.
fn is_dropped(ch: char) -> bool {
    if ch.is_control() {
        return !matches!(ch, '\r' | '\n' | '\t');
    }
    // Zero-width and directional marks common in scraped pages
    matches!(
        ch,
        '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{200E}' | '\u{200F}'
            | '\u{2060}' | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(
            normalize("  Первое   слово\n\nвторое\t слово  "),
            "Первое слово второе слово"
        );
    }

    #[test]
    fn maps_dashes_and_quotes() {
        assert_eq!(
            normalize("«Текст» – и “цитата” — конец"),
            "\"Текст\" - и \"цитата\" - конец"
        );
    }

    #[test]
    fn strips_control_and_format_characters() {
        assert_eq!(normalize("сло\u{0007}во"), "сло во");
        assert_eq!(normalize("сло\u{200B}во"), "сло во");
        assert_eq!(normalize("\u{FEFF}Текст"), "Текст");
    }

    #[test]
    fn composes_to_nfc() {
        // е + combining diaeresis composes to ё
        assert_eq!(normalize("е\u{0308}ж"), "ёж");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn idempotent_on_typical_article_text() {
        let once = normalize("Вчера — в 15:00 «Интерфакс»\nсообщил…  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn already_normalized_text_is_unchanged() {
        let text = "Обычное предложение без сюрпризов.";
        assert_eq!(normalize(text), text);
    }
}
