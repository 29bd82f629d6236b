/// Implementation of `cinefeed movies`.
///
/// Opens the feed file, hands the file handle to a [`FeedReader`], and
/// drives the synchronous batch path to completion. The handle lives
/// inside the reader and is released when the decode call returns,
/// whatever the outcome.
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use cf_reader::FeedReader;

use crate::MoviesArgs;

/// Run the `cinefeed movies` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the feed is not a
/// well-formed JSON array of movie objects.
pub fn run(args: &MoviesArgs) -> Result<()> {
    let file =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;

    let index = FeedReader::new(BufReader::new(file))
        .movies()
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&index)?);
    } else {
        // HashMap iteration order is arbitrary; sort for stable output.
        let mut entries: Vec<_> = index.iter().collect();
        entries.sort();
        for (title, year) in entries {
            println!("{title}: {year}");
        }
    }

    Ok(())
}
