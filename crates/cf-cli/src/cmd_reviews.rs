/// Implementation of `cinefeed reviews`.
///
/// Spawns the streaming producer over the feed file and drains its
/// channels, printing each review the moment it is decoded. Capacity-1
/// channels keep the producer at most one record ahead of the terminal.
///
/// Ctrl-C cancels the producer via its cancellation token; the channels
/// then close and the drain loop ends without an error.
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use cf_reader::FeedReader;
use cf_records::Review;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::ReviewsArgs;

/// Run the `cinefeed reviews` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, or surfaces the single
/// decode error the producer published after the last good review.
pub async fn run(args: &ReviewsArgs) -> Result<()> {
    let file =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;
    let reader = FeedReader::new(BufReader::new(file));

    let (record_tx, mut record_rx) = mpsc::channel::<Review>(1);
    let (error_tx, mut error_rx) = mpsc::channel(1);
    let cancel = CancellationToken::new();

    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    tokio::spawn(reader.reviews(record_tx, error_tx, cancel));

    while let Some(review) = record_rx.recv().await {
        println!("{} [{}]: {}", review.title, review.score, review.review);
    }

    // Channel closure is the completion signal; an error, if any, was the
    // last thing published.
    if let Some(err) = error_rx.recv().await {
        return Err(err).with_context(|| format!("failed to decode {}", args.file.display()));
    }

    Ok(())
}
