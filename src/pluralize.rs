use lazy_static::lazy_static;
use regex::Regex;

/// Produces the plural form of a word list entry, so that the plural doesn't need to be listed
/// separately.
pub trait Pluralize {
    fn pluralize(&self, word: &str) -> String;
}

impl<F: Fn(&str) -> String> Pluralize for F {
    fn pluralize(&self, word: &str) -> String {
        self(word)
    }
}

/// English inflection rules (uncountables, irregulars, then suffix rules).
#[derive(Copy, Clone, Debug, Default)]
pub struct English;

const UNCOUNTABLES: [&str; 9] = [
    "equipment",
    "fish",
    "information",
    "jeans",
    "money",
    "rice",
    "series",
    "sheep",
    "species",
];

/// Highest priority first.
const IRREGULARS: [(&str, &str); 8] = [
    ("zombie", "zombies"),
    ("cow", "kine"),
    ("move", "moves"),
    ("sex", "sexes"),
    ("child", "children"),
    ("human", "humans"),
    ("man", "men"),
    ("person", "people"),
];

/// Highest priority first.
const SUFFIXES: [(&str, &str); 23] = [
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(oxen)$", "${1}"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)(m|l)ice$", "${1}ice"),
    (r"(?i)(m|l)ouse$", "${1}ice"),
    (r"(?i)(passer)s?by$", "${1}sby"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)([lr])f$", "${1}ves"),
    (r"(?i)([^f])fe$", "${1}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|potat|tomat)o$", "${1}oes"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)i$", "${1}i"),
    (r"(?i)(octop|vir)us$", "${1}i"),
    (r"(?i)^(ax|test)is$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

lazy_static! {
    static ref RULES: Vec<(Regex, String)> = IRREGULARS
        .iter()
        .flat_map(|&(singular, plural)| irregular_rules(singular, plural))
        .chain(
            SUFFIXES
                .iter()
                .map(|&(pattern, replacement)| (pattern.to_owned(), replacement.to_owned()))
        )
        .map(|(pattern, replacement)| (Regex::new(&pattern).unwrap(), replacement))
        .collect();
}

/// Irregulars keep the case of their first letter. When singular and plural start with
/// different letters, that letter is matched (and emitted) case-sensitively.
fn irregular_rules(singular: &str, plural: &str) -> Vec<(String, String)> {
    let mut s = singular.chars();
    let mut p = plural.chars();
    let (Some(s_first), Some(p_first)) = (s.next(), p.next()) else {
        return Vec::new();
    };
    let (s_rest, p_rest) = (s.as_str(), p.as_str());

    if s_first.eq_ignore_ascii_case(&p_first) {
        vec![(
            format!("(?i)({s_first}){}$", regex::escape(s_rest)),
            format!("${{1}}{p_rest}"),
        )]
    } else {
        let rest = format!("(?i:{})$", regex::escape(s_rest));
        [s_first.to_ascii_lowercase(), s_first.to_ascii_uppercase()]
            .into_iter()
            .zip([p_first.to_ascii_lowercase(), p_first.to_ascii_uppercase()])
            .map(|(s_first, p_first)| (format!("{s_first}{rest}"), format!("{p_first}{p_rest}")))
            .collect()
    }
}

impl Pluralize for English {
    fn pluralize(&self, word: &str) -> String {
        if word.is_empty() || UNCOUNTABLES.contains(&word.to_lowercase().as_str()) {
            return word.to_owned();
        }
        RULES
            .iter()
            .find(|(rule, _)| rule.is_match(word))
            .map(|(rule, replacement)| rule.replace(word, replacement.as_str()).into_owned())
            .unwrap_or_else(|| word.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{English, Pluralize};

    fn plural(word: &str) -> String {
        English.pluralize(word)
    }

    #[test]
    fn regular() {
        assert_eq!(plural("slur"), "slurs");
        assert_eq!(plural("bastard"), "bastards");
        assert_eq!(plural("bitch"), "bitches");
        assert_eq!(plural("ass"), "asses");
        assert_eq!(plural("box"), "boxes");
        assert_eq!(plural("floozy"), "floozies");
        assert_eq!(plural("day"), "days");
        assert_eq!(plural("wolf"), "wolves");
        assert_eq!(plural("wife"), "wives");
        assert_eq!(plural("analysis"), "analyses");
        assert_eq!(plural("datum"), "data");
        assert_eq!(plural("potato"), "potatoes");
        assert_eq!(plural("bus"), "buses");
        assert_eq!(plural("octopus"), "octopi");
        assert_eq!(plural("mouse"), "mice");
        assert_eq!(plural("matrix"), "matrices");
        assert_eq!(plural("quiz"), "quizzes");
        assert_eq!(plural("ox"), "oxen");
        assert_eq!(plural("axis"), "axes");
    }

    #[test]
    fn already_plural() {
        assert_eq!(plural("dicks"), "dicks");
        assert_eq!(plural("oxen"), "oxen");
        assert_eq!(plural("mice"), "mice");
    }

    #[test]
    fn irregular() {
        assert_eq!(plural("person"), "people");
        assert_eq!(plural("Person"), "People");
        assert_eq!(plural("man"), "men");
        assert_eq!(plural("woman"), "women");
        assert_eq!(plural("human"), "humans");
        assert_eq!(plural("child"), "children");
        assert_eq!(plural("sex"), "sexes");
        assert_eq!(plural("cow"), "kine");
        assert_eq!(plural("Cow"), "Kine");
        assert_eq!(plural("zombie"), "zombies");
    }

    #[test]
    fn uncountable() {
        assert_eq!(plural(""), "");
        assert_eq!(plural("sheep"), "sheep");
        assert_eq!(plural("Money"), "Money");
    }

    #[test]
    fn patterns() {
        assert_eq!(plural("sh[i1]t"), "sh[i1]ts");
        assert_eq!(plural(r"f\w+k"), r"f\w+ks");
        assert_eq!(plural("b(i|1)tch"), "b(i|1)tches");
    }

    #[test]
    fn closure() {
        let shout = |word: &str| format!("{word}!");
        assert_eq!(shout.pluralize("darn"), "darn!");
    }
}
