use std::path::PathBuf;

use clap::Parser;
use libanagram::WordListOptions;

use crate::output::OutputFormat;

/// Jumble - list the words of a word list that are anagrams of a query
#[derive(Parser, Debug)]
#[command(name = "jumble", version, about)]
pub struct Cli {
    /// Path to the word list, one word per line.
    #[arg(long, short = 'w', env = "JUMBLE_WORDLIST", default_value = "dict.txt")]
    pub wordlist: PathBuf,

    /// Ignore blank lines in the word list.
    #[arg(long)]
    pub skip_blank_lines: bool,

    /// Ignore word-list lines starting with this character.
    #[arg(long, value_name = "CHAR")]
    pub comment_prefix: Option<char>,

    /// Leave the query word itself out of its matches.
    #[arg(long)]
    pub exclude_self: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Words to find anagrams of. Prompts for one when omitted.
    pub words: Vec<String>,
}

impl Cli {
    /// Word-list loading options selected on the command line.
    pub fn word_list_options(&self) -> WordListOptions {
        WordListOptions::default()
            .skip_blank_lines(self.skip_blank_lines)
            .comment_prefix(self.comment_prefix)
    }
}
