#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: record deserializers in isolation.
//
// Feeds arbitrary bytes straight to the serde record types, independent
// of the array framing exercised by `movies_batch`.
fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<cf_records::Movie>(data);
    let _ = serde_json::from_slice::<cf_records::Review>(data);
});
