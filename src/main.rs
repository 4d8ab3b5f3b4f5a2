mod cli;
mod logging;
mod output;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use libanagram::anagram::build_index_from_file;

use crate::cli::Cli;
use crate::output::QueryResult;

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let index = build_index_from_file(&cli.wordlist, &cli.word_list_options())
        .context("Failed to load word list")?;

    let queries = if cli.words.is_empty() {
        vec![prompt_for_word()?]
    } else {
        cli.words.clone()
    };

    let mut results = Vec::with_capacity(queries.len());
    for query in &queries {
        let anagrams = index
            .find_anagrams(query)
            .with_context(|| format!("Cannot look up {query:?}"))?;
        results.push(QueryResult::new(query, anagrams, cli.exclude_self));
    }

    println!("{}", output::render(&results, cli.format));
    Ok(())
}

/// Asks for a single word on stdin. The prompt goes to stderr so stdout only
/// carries results.
fn prompt_for_word() -> Result<String> {
    eprint!("Enter a word to find its anagrams: ");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read query from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
