use crate::pluralize::{English, Pluralize};
use crate::words::{bundled_words, is_regex_pattern, WordSource};
use crate::{Error, Result, Set};
use once_cell::unsync::OnceCell;
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use std::cmp::Reverse;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Options accepted by [`ProfanityFilter::with_options`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    /// Used instead of the default list, if non-empty.
    pub custom_censor_list: Vec<String>,
    /// Used in addition to whichever of the default or custom lists is active.
    pub extra_censor_list: Vec<String>,
    /// Match words anywhere, even inside other words (e.g. "abc**badword**abc").
    pub no_word_boundaries: bool,
    /// Repeated to replace each match.
    pub censor_char: String,
    /// Fixed replacement length. Negative means the length of the matched text.
    pub censor_length: isize,
    /// Newline-delimited word list to load instead of the bundled one.
    pub words_file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            custom_censor_list: Vec::new(),
            extra_censor_list: Vec::new(),
            no_word_boundaries: false,
            censor_char: String::from("_"),
            censor_length: -1,
            words_file: None,
        }
    }
}

/// Replacement unit for censored text, either some text or a number to be written out in
/// decimal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CensorChar {
    Text(String),
    Number(i64),
}

impl CensorChar {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<char> for CensorChar {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<&str> for CensorChar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CensorChar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

macro_rules! censor_char_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CensorChar {
                fn from(n: $t) -> Self {
                    Self::Number(i64::from(n))
                }
            }
        )*
    };
}

censor_char_from_int!(u8, u16, u32, i8, i16, i32, i64);

/// A word list based profanity filter.
///
/// The active list is the custom list if one was defined, otherwise the default list, plus any
/// extra words. Every entry also matches its plural. Entries containing regex syntax (see
/// [`is_regex_pattern`]) are matched as patterns.
///
/// Matching is case-insensitive, and restricted to whole words unless word boundaries are
/// disabled. Longer words are censored before shorter ones, and patterns after plain words.
///
/// ```
/// use profanity_filter::ProfanityFilter;
///
/// let mut filter = ProfanityFilter::new();
/// filter.define_words(["darn"]);
/// assert_eq!(filter.censor("Darn, darns!").unwrap(), "____, _____!");
/// ```
pub struct ProfanityFilter {
    /// Default list, as loaded from `source`.
    censor_list: Vec<String>,
    custom_censor_list: Vec<String>,
    extra_censor_list: Vec<String>,
    no_word_boundaries: bool,
    censor_char: String,
    censor_length: isize,
    source: WordSource,
    pluralizer: Box<dyn Pluralize + Send>,
    /// Effective word set. Cleared whenever it could change.
    words: OnceCell<Vec<String>>,
    /// One compiled pattern per effective word, in the same order.
    patterns: OnceCell<Vec<Regex>>,
}

impl ProfanityFilter {
    /// Creates a filter using the bundled word list and default options.
    pub fn new() -> Self {
        Self::assemble(Options::default(), WordSource::Bundled, bundled_words())
    }

    /// Creates a filter from explicit options.
    ///
    /// Only fails if [`Options::words_file`] is set and can't be read.
    pub fn with_options(mut options: Options) -> Result<Self> {
        let source = WordSource::from_path(options.words_file.take().as_deref());
        let censor_list = source.load()?;
        Ok(Self::assemble(options, source, censor_list))
    }

    fn assemble(options: Options, source: WordSource, censor_list: Vec<String>) -> Self {
        Self {
            censor_list,
            custom_censor_list: options.custom_censor_list,
            extra_censor_list: options.extra_censor_list,
            no_word_boundaries: options.no_word_boundaries,
            censor_char: options.censor_char,
            censor_length: options.censor_length,
            source,
            pluralizer: Box::new(English),
            words: OnceCell::new(),
            patterns: OnceCell::new(),
        }
    }

    /// Sets the text that replaces each character of a match.
    ///
    /// The default is `"_"`.
    pub fn with_censor_char(&mut self, censor_char: impl Into<CensorChar>) -> &mut Self {
        self.set_censor(censor_char);
        self
    }

    /// Sets a fixed length for replacements. Negative values mean the length of the matched
    /// text.
    ///
    /// The default is `-1`.
    pub fn with_censor_length(&mut self, censor_length: isize) -> &mut Self {
        self.set_censor_length(censor_length);
        self
    }

    /// Match words even inside other words.
    ///
    /// The default is `false`.
    pub fn with_no_word_boundaries(&mut self, no_word_boundaries: bool) -> &mut Self {
        if self.no_word_boundaries != no_word_boundaries {
            self.no_word_boundaries = no_word_boundaries;
            self.patterns = OnceCell::new();
        }
        self
    }

    /// Replaces the English pluralization rules.
    pub fn with_pluralizer(&mut self, pluralizer: impl Pluralize + Send + 'static) -> &mut Self {
        self.pluralizer = Box::new(pluralizer);
        self.invalidate();
        self
    }

    /// Use these words instead of the default list. An empty list re-activates the default list.
    pub fn define_words<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.custom_censor_list = words.into_iter().map(Into::into).collect();
        self.invalidate();
    }

    /// Use these words in addition to the active list.
    pub fn append_words<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.extra_censor_list.extend(words.into_iter().map(Into::into));
        self.invalidate();
    }

    /// Removes the first occurrence of `word` from the default list.
    pub fn remove_word(&mut self, word: &str) -> Result<()> {
        let index = self
            .censor_list
            .iter()
            .position(|w| w == word)
            .ok_or_else(|| Error::NotFound {
                word: word.to_owned(),
            })?;
        self.censor_list.remove(index);
        self.invalidate();
        Ok(())
    }

    /// See [`Self::with_censor_char`].
    pub fn set_censor(&mut self, censor_char: impl Into<CensorChar>) {
        self.censor_char = censor_char.into().into_string();
    }

    /// See [`Self::with_censor_length`].
    pub fn set_censor_length(&mut self, censor_length: isize) {
        self.censor_length = censor_length;
    }

    /// Clears the custom and extra lists and reloads the default list, undoing any removals.
    pub fn restore_words(&mut self) -> Result<()> {
        self.censor_list = self.source.load()?;
        self.custom_censor_list.clear();
        self.extra_censor_list.clear();
        self.invalidate();
        Ok(())
    }

    pub fn get_custom_censor_list(&self) -> &[String] {
        &self.custom_censor_list
    }

    pub fn get_extra_censor_list(&self) -> &[String] {
        &self.extra_censor_list
    }

    /// All words and patterns currently in use, including plurals, in the order they are
    /// matched.
    pub fn get_profane_words(&self) -> &[String] {
        self.words.get_or_init(|| self.effective_words())
    }

    /// Returns `text` with every match replaced.
    pub fn censor(&self, text: &str) -> Result<String> {
        let patterns = self.patterns.get_or_try_init(|| self.compile_all())?;
        let mut censored = Cow::Borrowed(text);
        for pattern in patterns {
            // Each pass sees the output of the previous one.
            let replaced = match pattern
                .replace_all(&censored, |caps: &Captures<'_>| self.replacement(&caps[0]))
            {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            if let Some(replaced) = replaced {
                censored = Cow::Owned(replaced);
            }
        }
        Ok(censored.into_owned())
    }

    /// Returns `true` if censoring would change `text`.
    pub fn has_bad_word(&self, text: &str) -> Result<bool> {
        Ok(self.censor(text)? != text)
    }

    /// Same as [`Self::has_bad_word`].
    pub fn is_profane(&self, text: &str) -> Result<bool> {
        self.has_bad_word(text)
    }

    /// Logical opposite of [`Self::is_profane`].
    pub fn is_clean(&self, text: &str) -> Result<bool> {
        self.has_bad_word(text).map(|bad| !bad)
    }

    fn invalidate(&mut self) {
        self.words = OnceCell::new();
        self.patterns = OnceCell::new();
    }

    fn effective_words(&self) -> Vec<String> {
        let base = if self.custom_censor_list.is_empty() {
            &self.censor_list
        } else {
            &self.custom_censor_list
        };
        let mut words = base
            .iter()
            .chain(&self.extra_censor_list)
            .flat_map(|word| [word.clone(), self.pluralizer.pluralize(word)])
            .collect::<Set<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        // Plain words before patterns, longest first. Ties stay in lexicographic order.
        words.sort_unstable();
        words.sort_by_cached_key(|word| (is_regex_pattern(word), Reverse(word.chars().count())));
        debug!(count = words.len(), "rebuilt effective word set");
        words
    }

    fn compile_all(&self) -> Result<Vec<Regex>> {
        self.get_profane_words()
            .iter()
            .map(|word| self.compile(word))
            .collect()
    }

    fn compile(&self, word: &str) -> Result<Regex> {
        let pattern = if self.no_word_boundaries {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(format!(r"\b{word}\b"))
        };
        trace!(%pattern, "compiling");
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::PatternCompile {
                pattern: pattern.into_owned(),
                source,
            })
    }

    fn replacement(&self, matched: &str) -> String {
        let len = usize::try_from(self.censor_length).unwrap_or_else(|_| matched.chars().count());
        self.censor_char.repeat(len)
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProfanityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfanityFilter")
            .field("censor_list", &self.censor_list.len())
            .field("custom_censor_list", &self.custom_censor_list)
            .field("extra_censor_list", &self.extra_censor_list)
            .field("no_word_boundaries", &self.no_word_boundaries)
            .field("censor_char", &self.censor_char)
            .field("censor_length", &self.censor_length)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
