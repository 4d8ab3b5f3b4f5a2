/// Controls how the lines of a word-list source become words.
///
/// The default keeps every line, blank ones included, which matches reading the
/// file line by line and stripping trailing whitespace.
///
/// ```
/// use libanagram::anagram::WordListOptions;
///
/// let opts = WordListOptions::default().skip_blank_lines(true).comment_prefix('#');
/// assert!(opts.skips("   "));
/// assert!(opts.skips("  # header"));
/// assert!(!opts.skips("listen"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordListOptions {
    skip_blank_lines: bool,
    comment_prefix: Option<char>,
}

impl WordListOptions {
    /// Drop lines that are empty once trailing whitespace is stripped.
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Drop lines whose first non-whitespace character is `prefix`.
    pub fn comment_prefix(mut self, prefix: impl Into<Option<char>>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Returns true if `line` (already stripped of trailing whitespace) should not
    /// become a word.
    pub fn skips(&self, line: &str) -> bool {
        (self.skip_blank_lines && line.trim_end().is_empty()) || self.is_comment(line)
    }

    fn is_comment(&self, line: &str) -> bool {
        self.comment_prefix
            .is_some_and(|prefix| line.trim_start().starts_with(prefix))
    }
}
