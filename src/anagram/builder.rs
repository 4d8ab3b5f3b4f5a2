use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use log::{debug, info};

use super::bucket::Bucket;
use super::error::LoadError;
use super::index::AnagramIndex;
use super::normalize::normalize;
use super::options::WordListOptions;

/// Trait for types that can be added to an index as a word.
///
/// Implemented for the common string types so that [`IndexBuilder::add_word`]
/// and [`build_index`] accept them directly without manual conversion.
pub trait IntoWord {
    /// Converts this word into an owned string.
    fn into_word(self) -> String;
}

impl IntoWord for &str {
    fn into_word(self) -> String {
        self.to_owned()
    }
}

impl IntoWord for &&str {
    fn into_word(self) -> String {
        (*self).to_owned()
    }
}

impl IntoWord for String {
    fn into_word(self) -> String {
        self
    }
}

impl IntoWord for &String {
    fn into_word(self) -> String {
        self.clone()
    }
}

/// A builder for constructing an [`AnagramIndex`] incrementally.
///
/// Words can be added in any order. Each word goes into the bucket of its
/// normalized form, after any words already in that bucket.
///
/// ```
/// use libanagram::anagram::IndexBuilder;
///
/// let mut builder = IndexBuilder::new();
/// builder.add_word("stop");
/// builder.add_word(String::from("pots"));
/// let index = builder.build();
/// assert_eq!(index.find_anagrams("tops").unwrap().collect::<Vec<_>>(), ["stop", "pots"]);
/// ```
#[derive(Default)]
pub struct IndexBuilder {
    words: Vec<String>,
    buckets: HashMap<Box<str>, Bucket>,
}

impl IndexBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        IndexBuilder::default()
    }

    /// Adds a word to the index being constructed.
    ///
    /// The word is kept exactly as given. Adding the same word twice stores it twice.
    pub fn add_word(&mut self, word: impl IntoWord) {
        let word = word.into_word();
        let position = self.words.len();
        self.buckets
            .entry_ref(normalize(&word).as_str())
            .or_insert_with(Bucket::new)
            .push(position);
        self.words.push(word);
    }

    /// Returns the number of words added so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word has been added.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Finalizes the index.
    pub fn build(self) -> AnagramIndex {
        let IndexBuilder { words, buckets } = self;
        info!(
            "built anagram index: {} words in {} buckets",
            words.len(),
            buckets.len()
        );
        AnagramIndex::from_parts(words, buckets)
    }
}

/// Builds an index from an iterator of words.
///
/// Each word must implement [`IntoWord`], so `&str`, `String` and references to
/// them are all accepted. An empty iterator yields an empty index.
///
/// # Examples
///
/// ```
/// use libanagram::anagram::build_index;
///
/// let index = build_index(vec![String::from("eat"), String::from("tea")]);
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.bucket_count(), 1);
/// ```
pub fn build_index<W: IntoWord>(words: impl IntoIterator<Item = W>) -> AnagramIndex {
    let mut builder = IndexBuilder::new();
    for word in words {
        builder.add_word(word);
    }
    builder.build()
}

/// Builds an index from a word-list source with one word per line.
///
/// Trailing whitespace, line terminators included, is stripped from every line.
/// Which lines are kept is decided by `options`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if reading fails or a line is not valid UTF-8. No
/// index is returned in that case, even if some lines were read.
///
/// # Examples
///
/// ```
/// use libanagram::anagram::{build_index_from_reader, WordListOptions};
///
/// let source = "# fruit\nlemon\nmelon\n\n";
/// let opts = WordListOptions::default().comment_prefix('#').skip_blank_lines(true);
/// let index = build_index_from_reader(source.as_bytes(), &opts).unwrap();
/// assert_eq!(index.words().collect::<Vec<_>>(), ["lemon", "melon"]);
/// ```
pub fn build_index_from_reader(
    mut reader: impl BufRead,
    options: &WordListOptions,
) -> Result<AnagramIndex, LoadError> {
    let mut builder = IndexBuilder::new();

    // Instead of using BufRead::lines() we call read_line repeatedly, which lets us
    // reuse one buffer instead of allocating a new string for every line.
    let mut buf = String::with_capacity(80);
    let mut line = 0;
    loop {
        line += 1;
        match reader.read_line(&mut buf) {
            Ok(0) => break,
            Err(source) => return Err(LoadError::Read { line, source }),
            _ => {}
        }
        let word = buf.trim_end();
        if !options.skips(word) {
            builder.add_word(word);
        }
        buf.clear();
    }
    Ok(builder.build())
}

/// Builds an index from a word-list file with one word per line.
///
/// See [`build_index_from_reader`] for how lines are turned into words.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be opened and
/// [`LoadError::Read`] if reading it fails.
///
/// # Examples
///
/// ```no_run
/// use libanagram::anagram::{build_index_from_file, WordListOptions};
///
/// let index = build_index_from_file("dict.txt", &WordListOptions::default()).unwrap();
/// ```
pub fn build_index_from_file(
    path: impl AsRef<Path>,
    options: &WordListOptions,
) -> Result<AnagramIndex, LoadError> {
    let path = path.as_ref();
    debug!("loading word list from {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    build_index_from_reader(BufReader::new(file), options)
}
