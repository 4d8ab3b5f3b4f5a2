use smallvec::SmallVec;

/// Returns the canonical anagram key of `word`.
///
/// The word is lowercased (full Unicode mapping, as [`str::to_lowercase`]) and its
/// characters are then sorted in ascending code-point order. Two words are anagrams
/// of each other exactly when their keys are equal.
///
/// This function is total: any string, including the empty string, has a key.
///
/// # Examples
///
/// ```
/// use libanagram::anagram::normalize::normalize;
///
/// assert_eq!(normalize("Listen"), "eilnst");
/// assert_eq!(normalize("Silent"), normalize("enlist"));
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(word: &str) -> String {
    let mut chars: SmallVec<[char; 32]> = word.to_lowercase().chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Returns true if `a` and `b` are anagrams of each other.
///
/// ```
/// use libanagram::anagram::normalize::is_anagram;
///
/// assert!(is_anagram("Dormitory", "dirtyroom"));
/// assert!(!is_anagram("banana", "bandana"));
/// ```
pub fn is_anagram(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
