#![no_main]

use libfuzzer_sys::fuzz_target;
use netfreq::{wrap_sentinels, SuffixTree};

/// Naive net frequency: occurrences of a repeated substring whose one-byte
/// extensions are both unique.
fn naive_nf(text: &[u8], s: &[u8]) -> u32 {
    let positions: Vec<usize> = text
        .windows(s.len())
        .enumerate()
        .filter(|(_, w)| *w == s)
        .map(|(i, _)| i)
        .collect();
    if positions.len() < 2 {
        return 0;
    }
    let occ = |p: &[u8]| text.windows(p.len()).filter(|w| *w == p).count();
    positions
        .iter()
        .filter(|&&i| {
            i > 0
                && i + s.len() < text.len()
                && occ(&text[i - 1..i + s.len()]) == 1
                && occ(&text[i..i + s.len() + 1]) == 1
        })
        .count() as u32
}

/// Fuzz construction and both query paths against the naive oracle.
fuzz_target!(|data: &[u8]| {
    if data.len() > 512 {
        return;
    }
    let Ok(text) = wrap_sentinels(data) else {
        // inputs containing sentinel bytes are rejected by contract
        return;
    };

    let mut tree = SuffixTree::new(&text);

    // every reported entry is positive and oracle-correct
    let entries: Vec<(Vec<u8>, u32)> = tree
        .nf_entries()
        .into_iter()
        .map(|(s, nf)| (s.to_vec(), nf))
        .collect();
    for (s, nf) in &entries {
        assert!(*nf > 0, "reported zero entry");
        assert_eq!(naive_nf(&text, s), *nf, "report disagrees with oracle");
    }

    // single queries agree with the oracle on short substrings
    let fresh = SuffixTree::new(&text);
    let max_len = text.len().min(6);
    for len in 1..=max_len {
        for s in text.windows(len) {
            assert_eq!(
                fresh.single_nf(s),
                naive_nf(&text, s),
                "single_nf disagrees with oracle"
            );
        }
    }
});
