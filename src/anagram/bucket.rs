use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use smallvec::SmallVec;

/// Positions of the words sharing one normalized key, in source order.
///
/// Most keys in a natural-language word list have one or two words, so the
/// positions are stored inline until a third anagram shows up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Bucket {
    positions: SmallVec<[usize; 2]>,
}

impl Bucket {
    /// Creates an empty bucket.
    pub(crate) fn new() -> Self {
        Bucket::default()
    }

    /// Appends the position of a word.
    ///
    /// Positions must be pushed in increasing order.
    pub(crate) fn push(&mut self, position: usize) {
        debug_assert!(self.positions.last().is_none_or(|&last| last < position));
        self.positions.push(position);
    }

    /// Returns the number of words in this bucket.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns the stored positions.
    #[inline]
    pub(crate) fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// An iterator over the words of one bucket, in the order they appeared in the
/// source word list.
///
/// Returned by [`AnagramIndex::find_anagrams`](super::index::AnagramIndex::find_anagrams)
/// and friends.
#[derive(Clone)]
pub struct Anagrams<'i> {
    words: &'i [String],
    positions: slice::Iter<'i, usize>,
}

impl<'i> Anagrams<'i> {
    pub(crate) fn new(words: &'i [String], bucket: &'i Bucket) -> Self {
        Anagrams {
            words,
            positions: bucket.positions().iter(),
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty(words: &'i [String]) -> Self {
        Anagrams {
            words,
            positions: slice::Iter::default(),
        }
    }
}

impl<'i> Iterator for Anagrams<'i> {
    type Item = &'i str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(|&pos| self.words[pos].as_str())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl DoubleEndedIterator for Anagrams<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.positions.next_back().map(|&pos| self.words[pos].as_str())
    }
}

impl ExactSizeIterator for Anagrams<'_> {}

impl FusedIterator for Anagrams<'_> {}

impl fmt::Debug for Anagrams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
