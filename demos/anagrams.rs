//! Example: grouping a word list into anagram families.
//!
//! This shows the index from both ends: answering individual queries, and
//! walking every bucket to print the word families that have more than one
//! member.
//!
//! Run with: cargo run --example anagrams

use libanagram::anagram::{build_index, AnagramIndex};

/// Returns the anagram families with at least `min_size` members.
fn families(index: &AnagramIndex, min_size: usize) -> Vec<Vec<&str>> {
    index
        .buckets()
        .into_iter()
        .filter(|(_, words)| words.len() >= min_size)
        .map(|(_, words)| words.collect())
        .collect()
}

fn main() {
    let words = [
        "listen", "enlist", "silent", "banana", "stop", "pots", "tops", "cat", "act", "dog",
    ];
    let index = build_index(words);

    // Queries
    println!("Queries:");
    for query in ["Tinsel", "spot", "tac", "zzzzz"] {
        let matches: Vec<&str> = index.find_anagrams(query).unwrap().collect();
        println!("  {query}: {matches:?}");
    }

    // Families
    println!("\nFamilies:");
    for family in families(&index, 2) {
        println!("  {}", family.join(", "));
    }

    println!("\n{index:?}");
}
