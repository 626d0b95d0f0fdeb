use profanity_filter::ProfanityFilter;
use std::env::args;

pub fn main() {
    let input = args().skip(1).collect::<Vec<_>>().join(" ");
    let filter = ProfanityFilter::new();
    let censored = filter.censor(&input).unwrap();
    println!(
        "\"{}\" -> \"{}\" (profane: {})",
        input,
        censored,
        censored != input
    );
}
