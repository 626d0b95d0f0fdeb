use profanity_filter::{Options, ProfanityFilter};

fn main() {
    let mut filter = ProfanityFilter::with_options(Options {
        extra_censor_list: vec![String::from("fr[a4]k")],
        censor_char: String::from("?"),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(filter.censor("123 Crap").unwrap(), "123 ????");
    assert_eq!(filter.censor("fr4king fr4ks").unwrap(), "fr4king ?????");

    filter.with_censor_length(1).with_no_word_boundaries(true);
    assert_eq!(filter.censor("fr4king").unwrap(), "?ing");
}
