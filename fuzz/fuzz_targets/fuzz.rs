#![no_main]
use libfuzzer_sys::fuzz_target;
use profanity_filter::ProfanityFilter;

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let flags = data[0];
        let input = &data[1..];

        if let Ok(text) = std::str::from_utf8(input) {
            let mut filter = ProfanityFilter::new();
            filter
                .with_no_word_boundaries(flag(flags, 0))
                .with_censor_length(if flag(flags, 1) { 3 } else { -1 })
                .with_censor_char(if flag(flags, 2) { '#' } else { '*' });

            if flag(flags, 3) {
                filter.append_words(text.split_whitespace().take(3));
            }

            // User supplied words may not compile.
            if let Ok(censored) = filter.censor(text) {
                let _ = filter.censor(&censored);
                let _ = filter.is_clean(text);
            }
        }
    }
});

fn flag(flags: u8, index: u8) -> bool {
    ((flags >> index) & 1) == 1
}
