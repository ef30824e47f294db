// SPDX-License-Identifier: PMPL-1.0
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use file_renamer::extractors::text::describe_text;
use file_renamer::naming::{score, scorer::MAX_SCORE, NameNormalizer};
use file_renamer::Separator;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    underscore: bool,
    max_length: u8,
}

fuzz_target!(|input: Input<'_>| {
    assert!(score(input.text) <= MAX_SCORE);
    assert!(score(&format!("{} untitled", input.text)) <= score(input.text));

    if let Some(description) = describe_text(input.text, 10) {
        assert!(!description.trim().is_empty());
    }

    let separator = if input.underscore {
        Separator::Underscore
    } else {
        Separator::Dash
    };
    let max_length = usize::from(input.max_length).max(1);
    let normalizer = NameNormalizer::with_settings(separator, max_length);
    let name = normalizer.normalize(input.text);
    let sep = normalizer.separator();

    assert!(name.chars().count() <= max_length);
    assert!(!name.starts_with(sep) && !name.ends_with(sep));
    assert!(!name.contains(&format!("{sep}{sep}")));
    assert!(name.chars().all(|c| c.is_alphanumeric() || c == sep));
});
