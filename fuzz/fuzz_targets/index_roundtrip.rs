#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: serialize → batch-decode roundtrip.
//
// Builds a feed from arbitrary entries with serde_json, then decodes it
// with the batch path. Every structurally valid feed must decode cleanly;
// duplicate titles collapse, so the index never exceeds the element count.
fuzz_target!(|entries: Vec<(String, i32)>| {
    let movies: Vec<cf_records::Movie> = entries
        .into_iter()
        .map(|(title, year)| cf_records::Movie { title, year })
        .collect();

    let feed = serde_json::to_vec(&movies).expect("records always serialize");
    let index = cf_reader::FeedReader::new(feed.as_slice())
        .movies()
        .expect("serialized feed must decode");

    assert!(index.len() <= movies.len());
});
