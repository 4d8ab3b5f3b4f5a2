use clap::ValueEnum;
use serde_json::json;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per query.
    Text,
    /// A JSON array with one object per query.
    Json,
}

/// The matches found for one query word.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryResult<'a> {
    pub query: &'a str,
    pub anagrams: Vec<&'a str>,
}

impl<'a> QueryResult<'a> {
    /// Collects the matches for `query`, dropping the query itself (ignoring case)
    /// when `exclude_self` is set.
    pub fn new(query: &'a str, anagrams: impl Iterator<Item = &'a str>, exclude_self: bool) -> Self {
        let anagrams = if exclude_self {
            let query_lower = query.to_lowercase();
            anagrams.filter(|w| w.to_lowercase() != query_lower).collect()
        } else {
            anagrams.collect()
        };
        QueryResult { query, anagrams }
    }
}

/// Renders all results in the given format, without a trailing newline.
pub fn render(results: &[QueryResult<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => results
            .iter()
            .map(|r| format!("Anagrams of {} are: {}", r.query, quoted_list(&r.anagrams)))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let json_results: Vec<serde_json::Value> = results
                .iter()
                .map(|r| json!({ "query": r.query, "anagrams": r.anagrams }))
                .collect();
            format!("{:#}", serde_json::Value::Array(json_results))
        }
    }
}

/// Formats words as a single-quoted list, e.g. `['eat', 'tea']`.
fn quoted_list(words: &[&str]) -> String {
    let items: Vec<String> = words
        .iter()
        .map(|w| format!("'{}'", w.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", items.join(", "))
}
