/// Builder and word-list loaders for constructing an index.
pub mod builder;
/// Bucket storage and the iterator over a bucket's words.
pub mod bucket;
/// Errors returned while loading word lists and answering queries.
pub mod error;
/// The immutable anagram index.
pub mod index;
/// Canonical anagram keys.
pub mod normalize;
/// Options controlling how word-list lines become words.
pub mod options;

pub use bucket::Anagrams;
pub use builder::{
    build_index, build_index_from_file, build_index_from_reader, IndexBuilder, IntoWord,
};
pub use error::{LoadError, QueryError};
pub use index::AnagramIndex;
pub use normalize::{is_anagram, normalize};
pub use options::WordListOptions;
