//! Stream debouncing utilities

use futures::{Stream, ready};
use pin_project_lite::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{Instant, Sleep, sleep};

/// Extension trait to add debouncing to any Stream
pub trait DebounceExt: Stream {
    /// Emit an item only once the source has been quiet for `duration`
    ///
    /// Uses "latest-wins" semantics - items arriving before the quiet period
    /// elapses replace the pending one and restart the timer. A pending item
    /// is flushed immediately when the source ends.
    fn debounce(self, duration: Duration) -> Debounce<Self>
    where
        Self: Sized,
    {
        Debounce::new(self, duration)
    }
}

impl<T: Stream> DebounceExt for T {}

pin_project! {
    /// A stream combinator that waits for a quiet period before emitting
    pub struct Debounce<S: Stream> {
        #[pin]
        stream: S,
        #[pin]
        sleep: Sleep,
        duration: Duration,
        pending: Option<S::Item>,
        source_done: bool,
    }
}

impl<S: Stream> Debounce<S> {
    /// Create a new debounced stream
    pub fn new(stream: S, duration: Duration) -> Self {
        Self { stream, sleep: sleep(duration), duration, pending: None, source_done: false }
    }
}

impl<S: Stream> Stream for Debounce<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        // Drain everything available, restarting the quiet period per item
        while !*this.source_done {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    *this.pending = Some(item);
                    this.sleep.as_mut().reset(Instant::now() + *this.duration);
                }
                Poll::Ready(None) => *this.source_done = true,
                Poll::Pending => break,
            }
        }

        if *this.source_done {
            return Poll::Ready(this.pending.take());
        }

        if this.pending.is_none() {
            return Poll::Pending;
        }

        ready!(this.sleep.as_mut().poll(cx));
        Poll::Ready(this.pending.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use tokio::sync::mpsc;
    use tokio_stream::wrappers::UnboundedReceiverStream;

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_last_item() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut debounced =
            Box::pin(UnboundedReceiverStream::new(rx).debounce(Duration::from_millis(300)));

        let start = Instant::now();
        tx.send("h").unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send("ha").unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send("ham").unwrap();

        assert_eq!(debounced.next().await, Some("ham"));
        // Quiet period counts from the last item, not the first
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(600), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_items_all_pass() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut debounced =
            Box::pin(UnboundedReceiverStream::new(rx).debounce(Duration::from_millis(50)));

        tx.send(1).unwrap();
        assert_eq!(debounced.next().await, Some(1));
        tx.send(2).unwrap();
        assert_eq!(debounced.next().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn pending_item_flushed_on_end() {
        let items = futures::stream::iter(vec![1, 2, 3]);
        let collected: Vec<_> = items.debounce(Duration::from_secs(10)).collect().await;
        assert_eq!(collected, vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_source_ends() {
        let items = futures::stream::iter(Vec::<u8>::new());
        let collected: Vec<_> = items.debounce(Duration::from_secs(1)).collect().await;
        assert!(collected.is_empty());
    }
}
