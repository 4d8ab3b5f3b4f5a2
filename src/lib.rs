//! # libanagram
//!
//! Anagram lookup over word lists.
//!
//! A word list is read once into an [`AnagramIndex`](anagram::AnagramIndex), which
//! groups the words by their canonical key: the word lowercased, with its characters
//! sorted. Looking up a query is then a single hash lookup on the query's key, and
//! the matches come back in the order they had in the word list.
//!
//! ## Features
//!
//! - **Stable**: matches keep source order, and duplicate words are kept
//! - **Case-insensitive**: `"Tinsel"` and `"tinsel"` find the same words
//! - **Immutable**: a built index never changes and is `Send + Sync`
//! - **Loaders**: build from any iterator of strings, a `BufRead`, or a file
//!
//! ## Quick Start
//!
//! ```
//! use libanagram::anagram::build_index;
//!
//! let index = build_index(["listen", "enlist", "silent", "banana"]);
//! let matches: Vec<&str> = index.find_anagrams("tinsel").unwrap().collect();
//! assert_eq!(matches, ["listen", "enlist", "silent"]);
//! ```
//!
//! Loading a word list with one word per line:
//!
//! ```no_run
//! use libanagram::anagram::{build_index_from_file, WordListOptions};
//!
//! let opts = WordListOptions::default().comment_prefix('#');
//! let index = build_index_from_file("dict.txt", &opts).unwrap();
//! for word in index.find_anagrams("stop").unwrap() {
//!     println!("{word}");
//! }
//! ```
//!
//! The query word is only part of its own result if the word list contains it;
//! filter it out yourself if you need to.

#![warn(missing_docs)]

/// Anagram index: normalization, builder, loaders and queries.
pub mod anagram;

pub use anagram::{AnagramIndex, Anagrams, LoadError, QueryError, WordListOptions};
