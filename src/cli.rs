use anyhow::{Context, Result};
use clap::Parser;
use profanity_filter::{Options, ProfanityFilter};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Censors profanity in the given text, or in stdin if no text is given.
#[derive(Parser)]
#[command(name = "profanity", version, about)]
struct Cli {
    /// Replacement for each censored character
    #[arg(long, default_value = "_")]
    censor_char: String,

    /// Fixed replacement length (negative: length of the matched word)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    censor_length: isize,

    /// Also censor words inside other words
    #[arg(long)]
    no_word_boundaries: bool,

    /// Word to use instead of the default list (repeatable)
    #[arg(long = "custom", value_name = "WORD")]
    custom_censor_list: Vec<String>,

    /// Word to use in addition to the active list (repeatable)
    #[arg(long = "extra", value_name = "WORD")]
    extra_censor_list: Vec<String>,

    /// Newline-delimited word list replacing the bundled one
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// Print "clean" or "profane" instead of the censored text, exiting with 1 if profane
    #[arg(long)]
    check: bool,

    /// Print the effective word list, in matching order, and exit
    #[arg(long)]
    list: bool,

    text: Vec<String>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let filter = ProfanityFilter::with_options(Options {
        custom_censor_list: cli.custom_censor_list,
        extra_censor_list: cli.extra_censor_list,
        no_word_boundaries: cli.no_word_boundaries,
        censor_char: cli.censor_char,
        censor_length: cli.censor_length,
        words_file: cli.words_file,
    })?;

    if cli.list {
        for word in filter.get_profane_words() {
            println!("{word}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let input = if cli.text.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        input.trim_end_matches(['\r', '\n']).to_owned()
    } else {
        cli.text.join(" ")
    };
    debug!(len = input.len(), "censoring input");

    if cli.check {
        if filter.is_profane(&input)? {
            println!("profane");
            Ok(ExitCode::FAILURE)
        } else {
            println!("clean");
            Ok(ExitCode::SUCCESS)
        }
    } else {
        println!("{}", filter.censor(&input)?);
        Ok(ExitCode::SUCCESS)
    }
}
