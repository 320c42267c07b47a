//! Consecutive duplicate suppression

use futures::{Stream, ready};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait to drop consecutive duplicates from any Stream
pub trait DistinctExt: Stream {
    /// Skip items equal to the previously emitted one
    fn distinct_until_changed(self) -> DistinctUntilChanged<Self>
    where
        Self: Sized,
        Self::Item: Clone + PartialEq,
    {
        DistinctUntilChanged::new(self)
    }
}

impl<T: Stream> DistinctExt for T {}

pin_project! {
    /// A stream combinator that suppresses repeats of the last emitted item
    pub struct DistinctUntilChanged<S: Stream> {
        #[pin]
        stream: S,
        last: Option<S::Item>,
    }
}

impl<S: Stream> DistinctUntilChanged<S> {
    pub fn new(stream: S) -> Self {
        Self { stream, last: None }
    }
}

impl<S> Stream for DistinctUntilChanged<S>
where
    S: Stream,
    S::Item: Clone + PartialEq,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) if this.last.as_ref() == Some(&item) => continue,
                Some(item) => {
                    *this.last = Some(item.clone());
                    return Poll::Ready(Some(item));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}
