use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while managing a word list or censoring text.
#[derive(Debug, Error)]
pub enum Error {
    /// [`crate::ProfanityFilter::remove_word`] was asked to remove a word that isn't in the
    /// default list.
    #[error("word {word:?} is not in the censor list")]
    NotFound { word: String },
    /// A word list entry could not be compiled into a match pattern.
    #[error("failed to compile pattern {pattern:?}")]
    PatternCompile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// The word file could not be read.
    #[error("failed to load word list from {}", path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;

    #[test]
    fn not_found_message() {
        let err = Error::NotFound {
            word: String::from("heck"),
        };
        assert_eq!(err.to_string(), "word \"heck\" is not in the censor list");
        assert!(err.source().is_none());
    }

    #[test]
    fn pattern_compile_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::PatternCompile {
            pattern: String::from("\\b(\\b"),
            source,
        };
        assert!(err.to_string().contains("\\\\b(\\\\b"));
        assert!(err.source().is_some());
    }
}
