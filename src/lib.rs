//! A word list based profanity filter.
//!
//! [`ProfanityFilter`] censors every occurrence of a word from its list, as well as the word's
//! plural, by replacing each character with a censor character. Entries that contain regex syntax
//! are matched as patterns, which allows catching simple obfuscations like `sh1t`.
//!
//! ```
//! use profanity_filter::ProfanityFilter;
//!
//! let mut filter = ProfanityFilter::new();
//! assert_eq!(filter.censor("what the shit").unwrap(), "what the ____");
//!
//! filter.append_words(["frak"]);
//! filter.set_censor('*');
//! assert_eq!(filter.censor("frakking fraks").unwrap(), "frakking *****");
//! ```

mod censor;
mod error;
mod pluralize;
mod words;

pub use censor::{CensorChar, Options, ProfanityFilter};
pub use error::{Error, Result};
pub use pluralize::{English, Pluralize};
pub use words::is_regex_pattern;

pub(crate) type Set<V> = rustc_hash::FxHashSet<V>;

use doc_comment::doctest;
doctest!("../README.md");
