use crate::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUNDLED: &str = include_str!("badwords.txt");

lazy_static! {
    /// Escape classes, quantifiers, grouping, character classes, wildcards, anchors and
    /// escaped alternation.
    static ref REGEX_ELEMENT: Regex =
        Regex::new(r#"\\[dDwWsSbB]|\*|\+|\?|\{|\}|\[|\]|\(|\)|\.|\^|\$|\\\|"#).unwrap();
}

/// Returns `true` if the word list entry should be treated as a raw regex fragment
/// rather than a literal word.
///
/// ```
/// use profanity_filter::is_regex_pattern;
///
/// assert!(is_regex_pattern(r"f\w+k"));
/// assert!(is_regex_pattern("sh[i1]t"));
/// assert!(!is_regex_pattern("darn"));
/// ```
pub fn is_regex_pattern(word: &str) -> bool {
    REGEX_ELEMENT.is_match(word)
}

/// Where the default word list comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum WordSource {
    /// The list compiled into the crate.
    #[default]
    Bundled,
    /// A newline-delimited file, read on every (re)load.
    File(PathBuf),
}

impl WordSource {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::File(path.to_owned()),
            None => Self::Bundled,
        }
    }

    /// Reads the source. Every line, stripped of surrounding whitespace, is one entry.
    pub fn load(&self) -> Result<Vec<String>> {
        let words = match self {
            Self::Bundled => bundled_words(),
            Self::File(path) => {
                let raw = fs::read_to_string(path).map_err(|source| Error::ResourceLoad {
                    path: path.clone(),
                    source,
                })?;
                parse(&raw)
            }
        };
        debug!(source = ?self, count = words.len(), "loaded word list");
        Ok(words)
    }
}

/// The list compiled into the crate.
pub(crate) fn bundled_words() -> Vec<String> {
    parse(BUNDLED)
}

fn parse(raw: &str) -> Vec<String> {
    raw.lines().map(|line| line.trim().to_owned()).collect()
}
