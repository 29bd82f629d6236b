use std::io::Read;

use cf_records::Review;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::element_decoder::ElementDecoder;
use crate::error::{DecodeError, RecordKind};
use crate::reader::FeedReader;

impl<R: Read> FeedReader<R> {
    /// Decode the review feed incrementally, publishing each record on
    /// `records` as it is produced.
    ///
    /// This is the producer half of a producer/consumer hand-off: run it as
    /// its own task and drain the channels from the consumer side.
    ///
    /// ```no_run
    /// use cf_reader::FeedReader;
    /// use tokio::sync::mpsc;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # async fn demo(reader: FeedReader<&'static [u8]>) {
    /// let (record_tx, mut record_rx) = mpsc::channel(1);
    /// let (error_tx, mut error_rx) = mpsc::channel(1);
    /// tokio::spawn(reader.reviews(record_tx, error_tx, CancellationToken::new()));
    ///
    /// while let Some(review) = record_rx.recv().await {
    ///     println!("{}: {}", review.title, review.score);
    /// }
    /// if let Some(err) = error_rx.recv().await {
    ///     eprintln!("{err}");
    /// }
    /// # }
    /// ```
    ///
    /// Records are published in exactly source order. Each send awaits
    /// until the consumer makes room, so with a capacity-1 channel the
    /// producer never runs ahead of the consumer by more than one in-flight
    /// record. On the first structural failure exactly one [`DecodeError`]
    /// is published on `errors` — strictly after the last good record —
    /// and nothing further is decoded.
    ///
    /// Termination: the producer returns and drops both senders, closing
    /// each channel. Closure is the sole completion signal; there is no
    /// separate done value. Pass the senders by value and keep no clones,
    /// otherwise the channels stay open and the consumer never observes
    /// completion.
    ///
    /// Cancelling `cancel` makes the producer exit promptly — the token is
    /// checked before each decode step and raced against every send — and
    /// close both channels without publishing an error. A dropped record
    /// receiver likewise stops the producer instead of leaving it blocked
    /// on a send forever.
    pub async fn reviews(
        self,
        records: mpsc::Sender<Review>,
        errors: mpsc::Sender<DecodeError>,
        cancel: CancellationToken,
    ) {
        let mut elements = ElementDecoder::new(self.json, RecordKind::Reviews);
        let mut published = 0_usize;
        debug!("review producer started");

        loop {
            if cancel.is_cancelled() {
                debug!(published, "review producer cancelled");
                return;
            }

            match elements.next::<Review>() {
                Ok(Some(review)) => {
                    tokio::select! {
                        biased;
                        () = cancel.cancelled() => {
                            debug!(published, "review producer cancelled during publish");
                            return;
                        }
                        sent = records.send(review) => {
                            if sent.is_err() {
                                debug!(published, "review receiver dropped; stopping producer");
                                return;
                            }
                            published += 1;
                            trace!(published, "review published");
                        }
                    }
                }
                Ok(None) => {
                    debug!(published, "review feed complete");
                    return;
                }
                Err(err) => {
                    tokio::select! {
                        biased;
                        () = cancel.cancelled() => {
                            debug!(published, "review producer cancelled before error publish");
                        }
                        _ = errors.send(err) => {
                            debug!(published, "review feed aborted on decode error");
                        }
                    }
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn reader(input: &'static str) -> FeedReader<&'static [u8]> {
        FeedReader::new(input.as_bytes())
    }

    /// Helper: spawn the producer over `input` and drain both channels,
    /// returning everything published.
    async fn run_producer(input: &'static str) -> (Vec<Review>, Vec<DecodeError>) {
        let (record_tx, mut record_rx) = mpsc::channel(1);
        let (error_tx, mut error_rx) = mpsc::channel(1);
        tokio::spawn(reader(input).reviews(record_tx, error_tx, CancellationToken::new()));

        let mut reviews = Vec::new();
        while let Some(review) = record_rx.recv().await {
            reviews.push(review);
        }
        let mut errors = Vec::new();
        while let Some(err) = error_rx.recv().await {
            errors.push(err);
        }
        (reviews, errors)
    }

    #[tokio::test]
    async fn publishes_each_record_field_for_field() {
        let (reviews, errors) =
            run_producer(r#"[{"title":"Star Wars","review":"Great, this film was","score":77}]"#)
                .await;

        assert!(errors.is_empty());
        assert_eq!(
            reviews,
            vec![Review {
                title: "Star Wars".to_string(),
                review: "Great, this film was".to_string(),
                score: 77,
            }]
        );
    }

    #[tokio::test]
    async fn publishes_records_in_source_order() {
        let (reviews, errors) = run_producer(
            r#"[
                {"title":"A","review":"first","score":1},
                {"title":"B","review":"second","score":2},
                {"title":"C","review":"third","score":3}
            ]"#,
        )
        .await;

        assert!(errors.is_empty());
        let titles: Vec<_> = reviews.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn empty_array_closes_channels_without_publishing() {
        let (reviews, errors) = run_producer("[]").await;
        assert!(reviews.is_empty());
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn malformed_element_publishes_exactly_one_error() {
        let (reviews, errors) = run_producer(
            r#"[
                {"abc"},
                {"def"}
            ]"#,
        )
        .await;

        assert!(reviews.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, RecordKind::Reviews);
        let message = errors[0].to_string();
        assert!(message.starts_with("could not decode reviews "));
        assert!(message.len() > "could not decode reviews ".len());
    }

    #[tokio::test]
    async fn valid_prefix_arrives_before_the_error() {
        let (reviews, errors) =
            run_producer(r#"[{"title":"A","review":"fine","score":5},{"bad"}]"#).await;

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].title, "A");
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn cancelled_token_stops_producer_without_error() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let (record_tx, mut record_rx) = mpsc::channel(1);
        let (error_tx, mut error_rx) = mpsc::channel(1);
        let input = r#"[{"title":"A","review":"x","score":1}]"#;
        tokio::spawn(reader(input).reviews(record_tx, error_tx, cancel));

        assert!(record_rx.recv().await.is_none());
        assert!(error_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn dropped_receiver_stops_producer() {
        let (record_tx, record_rx) = mpsc::channel(1);
        let (error_tx, mut error_rx) = mpsc::channel(1);
        drop(record_rx);

        let input = r#"[
            {"title":"A","review":"x","score":1},
            {"title":"B","review":"y","score":2}
        ]"#;
        let producer = tokio::spawn(reader(input).reviews(record_tx, error_tx, CancellationToken::new()));

        tokio::time::timeout(Duration::from_secs(1), producer)
            .await
            .expect("producer must exit once the receiver is gone")
            .unwrap();
        assert!(error_rx.recv().await.is_none());
    }
}
