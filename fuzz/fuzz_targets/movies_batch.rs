#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full batch decode entry point.
//
// Calls `FeedReader::movies()` on arbitrary input bytes.
// Catches bugs in:
// - Array token handling (missing, non-array, or truncated input)
// - Element deserialization (malformed tokens, wrong value types)
// - Error construction for every structural failure class
fuzz_target!(|data: &[u8]| {
    let _ = cf_reader::FeedReader::new(data).movies();
});
