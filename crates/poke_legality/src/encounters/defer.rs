//! Stable "deferred last" ordering over a lazy sequence.

use std::collections::VecDeque;

/// Yields items failing `is_deferred` as they arrive and buffers the rest
/// until the source is exhausted. Relative order is kept within both
/// groups and no item is dropped.
pub struct DeferByBoolean<I: Iterator, F> {
    source: I,
    is_deferred: F,
    deferred: VecDeque<I::Item>,
    source_done: bool,
}

impl<I, F> Iterator for DeferByBoolean<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.source_done {
            for item in self.source.by_ref() {
                if (self.is_deferred)(&item) {
                    self.deferred.push_back(item);
                } else {
                    return Some(item);
                }
            }
            self.source_done = true;
        }
        self.deferred.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        let buffered = self.deferred.len();
        (buffered, upper.map(|u| u + buffered))
    }
}

pub trait DeferExt: Iterator + Sized {
    fn defer_by<F>(self, is_deferred: F) -> DeferByBoolean<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        DeferByBoolean {
            source: self,
            is_deferred,
            deferred: VecDeque::new(),
            source_done: false,
        }
    }
}

impl<I: Iterator> DeferExt for I {}
