use hashbrown::HashMap;
use log::trace;

use super::bucket::{Anagrams, Bucket};
use super::error::QueryError;
use super::normalize::normalize;

/// An immutable anagram index over a word list.
///
/// Every word of the source list sits in exactly one bucket, keyed by its
/// [normalized form](super::normalize::normalize). Buckets keep the order the
/// words had in the source list, and duplicates are kept as separate entries.
///
/// Build one with [`build_index`](super::builder::build_index),
/// [`build_index_from_file`](super::builder::build_index_from_file) or an
/// [`IndexBuilder`](super::builder::IndexBuilder). There is no way to change an
/// index once built, so it can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use libanagram::anagram::build_index;
///
/// let index = build_index(["listen", "enlist", "silent", "banana"]);
/// let matches: Vec<&str> = index.find_anagrams("Tinsel").unwrap().collect();
/// assert_eq!(matches, ["listen", "enlist", "silent"]);
/// ```
pub struct AnagramIndex {
    words: Vec<String>,
    buckets: HashMap<Box<str>, Bucket>,
}

impl AnagramIndex {
    pub(crate) fn from_parts(words: Vec<String>, buckets: HashMap<Box<str>, Bucket>) -> Self {
        debug_assert_eq!(buckets.values().map(Bucket::len).sum::<usize>(), words.len());
        AnagramIndex { words, buckets }
    }

    /// Returns the words of the source list that are anagrams of `query`.
    ///
    /// Matching ignores case. The query itself is not filtered out: it is returned
    /// if, and only if, the source list literally contains it. No match is not an
    /// error, the returned iterator is simply empty.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyQuery`] if `query` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use libanagram::anagram::{build_index, QueryError};
    ///
    /// let index = build_index(["eat", "tea", "eat"]);
    /// assert_eq!(index.find_anagrams("ATE").unwrap().collect::<Vec<_>>(), ["eat", "tea", "eat"]);
    /// assert_eq!(index.find_anagrams("zzzzz").unwrap().len(), 0);
    /// assert_eq!(index.find_anagrams("").unwrap_err(), QueryError::EmptyQuery);
    /// ```
    pub fn find_anagrams(&self, query: &str) -> Result<Anagrams<'_>, QueryError> {
        if query.is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        let key = normalize(query);
        let anagrams = self.anagrams_of_key(&key);
        trace!("query {query:?} (key {key:?}) matched {} words", anagrams.len());
        Ok(anagrams)
    }

    /// Returns the bucket stored under an already normalized `key`.
    ///
    /// `key` is used as is. Passing a string that is not the output of
    /// [`normalize`] will find nothing unless it happens to be in normal form.
    pub fn anagrams_of_key(&self, key: &str) -> Anagrams<'_> {
        match self.buckets.get(key) {
            Some(bucket) => Anagrams::new(&self.words, bucket),
            None => Anagrams::empty(&self.words),
        }
    }

    /// Returns `true` if the source list contains exactly this word (case-sensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.anagrams_of_key(&normalize(word)).any(|w| w == word)
    }

    /// Returns all words of the source list, in source order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Returns every bucket as `(key, words)`, ordered by the first appearance of
    /// the key in the source list.
    pub fn buckets(&self) -> Vec<(&str, Anagrams<'_>)> {
        let mut buckets: Vec<_> = self.buckets.iter().collect();
        buckets.sort_unstable_by_key(|(_, bucket)| bucket.positions()[0]);
        buckets
            .into_iter()
            .map(|(key, bucket)| (&**key, Anagrams::new(&self.words, bucket)))
            .collect()
    }

    /// Returns the number of words in the index, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the index was built from an empty word list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of distinct normalized keys.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl std::fmt::Debug for AnagramIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnagramIndex")
            .field("word_count", &self.len())
            .field("bucket_count", &self.bucket_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::super::builder::build_index;
    use super::*;

    fn find<'i>(index: &'i AnagramIndex, query: &str) -> Vec<&'i str> {
        index.find_anagrams(query).unwrap().collect()
    }

    #[test]
    fn matches_keep_source_order() {
        let index = build_index(["listen", "enlist", "silent", "banana"]);
        assert_eq!(find(&index, "tinsel"), ["listen", "enlist", "silent"]);
    }

    #[test]
    fn unrelated_words_are_excluded() {
        let index = build_index(["listen", "enlist", "silent", "banana"]);
        assert!(!find(&index, "tinsel").contains(&"banana"));
        assert_eq!(find(&index, "Nabana"), ["banana"]);
    }

    #[test]
    fn duplicates_are_returned() {
        let index = build_index(["eat", "tea", "eat"]);
        assert_eq!(find(&index, "ate"), ["eat", "tea", "eat"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.bucket_count(), 1);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let index = build_index(["listen", "banana"]);
        let res = index.find_anagrams("zzzzz");
        assert!(res.is_ok());
        assert_eq!(res.unwrap().len(), 0);
    }

    #[test]
    fn empty_index_finds_nothing() {
        let index = build_index::<&str>([]);
        assert!(index.is_empty());
        assert_eq!(index.bucket_count(), 0);
        assert!(find(&index, "anything").is_empty());
    }

    #[test]
    fn empty_query_is_rejected() {
        let index = build_index(["", "a"]);
        assert_eq!(index.find_anagrams("").unwrap_err(), QueryError::EmptyQuery);
        // The raw key lookup is total and still finds the blank entry.
        assert_eq!(index.anagrams_of_key("").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn query_is_not_excluded_from_its_own_results() {
        let index = build_index(["tea", "eat"]);
        assert_eq!(find(&index, "eat"), ["tea", "eat"]);
        // Not in the list, so not in the results.
        assert_eq!(find(&index, "ate"), ["tea", "eat"]);
    }

    #[test]
    fn query_case_is_irrelevant() {
        let index = build_index(["Listen", "SILENT"]);
        assert_eq!(find(&index, "TINSEL"), ["Listen", "SILENT"]);
        assert_eq!(find(&index, "tinsel"), ["Listen", "SILENT"]);
    }

    #[test]
    fn contains_is_literal() {
        let index = build_index(["Listen", "silent"]);
        assert!(index.contains("Listen"));
        assert!(!index.contains("listen"));
        assert!(!index.contains("enlist"));
    }

    #[test]
    fn every_word_is_in_its_own_bucket() {
        let words = ["stop", "pots", "tops", "opts", "cat", "act", "dog"];
        let index = build_index(words);
        for word in words {
            let key = normalize(word);
            assert_eq!(index.anagrams_of_key(&key).filter(|w| *w == word).count(), 1);
        }
        let total: usize = index.buckets().iter().map(|(_, b)| b.len()).sum();
        assert_eq!(total, words.len());
    }

    #[test]
    fn buckets_ordered_by_first_appearance() {
        let index = build_index(["dog", "cat", "god", "act", "bird"]);
        let buckets: Vec<(&str, Vec<&str>)> = index
            .buckets()
            .into_iter()
            .map(|(key, words)| (key, words.collect()))
            .collect();
        assert_eq!(
            buckets,
            [
                ("dgo", vec!["dog", "god"]),
                ("act", vec!["cat", "act"]),
                ("bdir", vec!["bird"]),
            ]
        );
    }

    #[test]
    fn words_in_source_order() {
        let index = build_index(["b", "a", "b"]);
        assert_eq!(index.words().collect::<Vec<_>>(), ["b", "a", "b"]);
    }

    #[test]
    fn debug_shows_counts() {
        let index = build_index(["eat", "tea", "dog"]);
        assert_eq!(
            format!("{index:?}"),
            "AnagramIndex { word_count: 3, bucket_count: 2 }"
        );
    }

    #[test]
    fn anagram_index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnagramIndex>();
    }

    #[test]
    fn concurrent_readers() {
        let index = build_index(["listen", "enlist", "silent"]);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(find(&index, "tinsel").len(), 3));
            }
        });
    }
}
