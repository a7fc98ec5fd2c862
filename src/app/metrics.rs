/// Derived counts for the current text buffer.
///
/// Never stored independently of the buffer - always recomputed from it
/// through [`compute`]. All character counts are Unicode scalar values
/// (`str::chars()`), which matches how the counts behave for text containing
/// surrogate-pair characters: "𩸽" is one character, not two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Every character, whitespace included.
    pub chars_with_spaces: usize,
    /// Characters after stripping `\r` and `\n`.
    pub chars_without_newlines: usize,
    /// Characters after stripping all whitespace.
    pub chars_without_spaces: usize,
    /// Segments produced by splitting on `\n`. Empty text is one line.
    pub line_count: usize,
    pub bytes_utf8: usize,
    pub bytes_utf16: usize,
    /// 400-character manuscript pages (genkou youshi), newlines excluded.
    pub manuscript_pages: usize,
}

/// Characters per manuscript page.
const MANUSCRIPT_PAGE_CHARS: usize = 400;

/// Compute all counts for `text`. Pure; total for any input including "".
pub fn compute(text: &str) -> Metrics {
    let chars_with_spaces = text.chars().count();
    let chars_without_newlines = text
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .count();
    let chars_without_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

    // split("\n") on "" yields one (empty) segment, so an empty buffer
    // counts as one line, and a trailing newline adds a line.
    let line_count = text.split('\n').count();

    let bytes_utf8 = text.len();
    let bytes_utf16 = text.encode_utf16().count() * 2;

    let manuscript_pages = chars_without_newlines.div_ceil(MANUSCRIPT_PAGE_CHARS);

    Metrics {
        chars_with_spaces,
        chars_without_newlines,
        chars_without_spaces,
        line_count,
        bytes_utf8,
        bytes_utf16,
        manuscript_pages,
    }
}

impl Default for Metrics {
    fn default() -> Self {
        compute("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let m = compute("");
        assert_eq!(m.chars_with_spaces, 0);
        assert_eq!(m.chars_without_newlines, 0);
        assert_eq!(m.chars_without_spaces, 0);
        assert_eq!(m.line_count, 1);
        assert_eq!(m.bytes_utf8, 0);
        assert_eq!(m.bytes_utf16, 0);
        assert_eq!(m.manuscript_pages, 0);
    }

    #[test]
    fn test_hello_world() {
        let m = compute("Hello World\n");
        assert_eq!(m.chars_with_spaces, 12);
        assert_eq!(m.chars_without_newlines, 11);
        assert_eq!(m.chars_without_spaces, 10);
        assert_eq!(m.line_count, 2);
    }

    #[test]
    fn test_chars_with_spaces_is_codepoint_count() {
        for s in ["", "abc", "a b\tc", "こんにちは 世界\n", "𩸽の刺身"] {
            assert_eq!(compute(s).chars_with_spaces, s.chars().count());
        }
    }

    #[test]
    fn test_chars_without_spaces_matches_stripped_text() {
        for s in ["", " a b ", "tab\there", "line\none", "　全角　空白　"] {
            let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(compute(s).chars_without_spaces, stripped.chars().count());
        }
    }

    #[test]
    fn test_line_count_matches_split_segments() {
        assert_eq!(compute("a\nb").line_count, 2);
        assert_eq!(compute("a\n").line_count, 2);
        assert_eq!(compute("a\n\n").line_count, 3);
        assert_eq!(compute("\n").line_count, 2);
    }

    #[test]
    fn test_whitespace_stripping() {
        let m = compute(" a\tb \r\n c ");
        assert_eq!(m.chars_without_spaces, 3);
        // carriage return and newline go, tab and spaces stay
        assert_eq!(m.chars_without_newlines, 8);
    }

    #[test]
    fn test_character_counts_are_codepoints() {
        // multibyte in UTF-8, still one character each
        let m = compute("こんにちは");
        assert_eq!(m.chars_with_spaces, 5);
        assert_eq!(m.bytes_utf8, 15);
        assert_eq!(m.bytes_utf16, 10);

        // outside the BMP: one codepoint, two UTF-16 units
        let m = compute("𩸽");
        assert_eq!(m.chars_with_spaces, 1);
        assert_eq!(m.bytes_utf8, 4);
        assert_eq!(m.bytes_utf16, 4);
    }

    #[test]
    fn test_manuscript_pages() {
        assert_eq!(compute(&"あ".repeat(399)).manuscript_pages, 1);
        assert_eq!(compute(&"あ".repeat(400)).manuscript_pages, 1);
        assert_eq!(compute(&"あ".repeat(401)).manuscript_pages, 2);
        // newlines don't count toward a page
        let text = format!("{}\n{}", "a".repeat(200), "b".repeat(200));
        assert_eq!(compute(&text).manuscript_pages, 1);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let text = "some text\nwith lines\n";
        assert_eq!(compute(text), compute(text));
    }

    #[test]
    fn test_default_is_empty_metrics() {
        assert_eq!(Metrics::default(), compute(""));
        assert_eq!(Metrics::default().line_count, 1);
    }
}
