// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentinel-padded item sequences.
//!
//! A circular pager shows `n` real pages, but the paging surface underneath is
//! given `n + 2`: a copy of the last item in front and a copy of the first item
//! at the back. Scrolling onto one of those copies looks exactly like wrapping
//! around, and [`CircularPager`](crate::CircularPager) cuts back to the real
//! page once the surface settles.
//!
//! Two index spaces exist over one padded sequence:
//!
//! - **Raw** positions index the padded sequence directly, `0..n + 2`. Hosts
//!   rendering pages use these.
//! - **Logical** positions index the real items, `0..n`. Everything outside the
//!   pager uses these.
//!
//! ```rust
//! use understory_carousel::{CircularSequence, reshape};
//!
//! assert_eq!(reshape(&['a', 'b', 'c']), ['c', 'a', 'b', 'c', 'a']);
//!
//! let seq = CircularSequence::from_items(&['a', 'b', 'c']);
//! assert_eq!(seq.get(0), Some(&'c'));
//! assert_eq!(seq.get_logical(0), Some(&'a'));
//! assert_eq!(seq.raw_to_logical(4), Some(0));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::host::PageSource;

/// Pads `source` with wrap-around sentinels: `[last, source.., first]`.
///
/// An empty source yields an empty sequence. A single item yields three copies
/// of it.
#[must_use]
pub fn reshape<T: Clone>(source: &[T]) -> Vec<T> {
    let (Some(first), Some(last)) = (source.first(), source.last()) else {
        return Vec::new();
    };

    let mut padded = Vec::with_capacity(source.len() + 2);
    padded.push(last.clone());
    padded.extend_from_slice(source);
    padded.push(first.clone());
    padded
}

/// The items provider for a circular pager.
///
/// Holds the padded sequence produced by [`reshape`]. The sequence is never
/// edited in place: [`CircularSequence::update_data`] builds a fresh one and
/// swaps it in.
#[derive(Clone)]
pub struct CircularSequence<T> {
    pages: Box<[T]>,
}

impl<T> CircularSequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: Box::default(),
        }
    }

    /// Creates a sequence over `items`.
    #[must_use]
    pub fn from_items(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            pages: reshape(items).into_boxed_slice(),
        }
    }

    /// Replaces the held items with `items`, padded with sentinels.
    pub fn update_data(&mut self, items: &[T])
    where
        T: Clone,
    {
        *self = Self::from_items(items);
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.pages = Box::default();
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages including both sentinels (`n + 2`, or `0`).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of real items (`n`).
    #[must_use]
    pub fn real_len(&self) -> usize {
        self.pages.len().saturating_sub(2)
    }

    /// The padded sequence, sentinels included.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.pages
    }

    /// The real items, without sentinels.
    #[must_use]
    pub fn real_items(&self) -> &[T] {
        match self.pages.len() {
            0 => &[],
            len => &self.pages[1..len - 1],
        }
    }

    /// Looks up a page by raw position.
    #[must_use]
    pub fn get(&self, raw: usize) -> Option<&T> {
        self.pages.get(raw)
    }

    /// Looks up a real item by logical position.
    #[must_use]
    pub fn get_logical(&self, logical: usize) -> Option<&T> {
        self.logical_to_raw(logical).map(|raw| &self.pages[raw])
    }

    /// Returns `true` if `raw` is one of the two sentinel pages.
    #[must_use]
    pub fn is_sentinel(&self, raw: usize) -> bool {
        !self.pages.is_empty() && (raw == 0 || raw == self.pages.len() - 1)
    }

    /// Maps a raw position to the logical position of the item shown there.
    ///
    /// Sentinels resolve to the real page they copy: raw `0` is logical `n - 1`
    /// and raw `n + 1` is logical `0`. Returns `None` when `raw` is out of range.
    #[must_use]
    pub fn raw_to_logical(&self, raw: usize) -> Option<usize> {
        let len = self.real_len();
        if raw >= self.pages.len() {
            None
        } else if raw == 0 {
            Some(len - 1)
        } else if raw == len + 1 {
            Some(0)
        } else {
            Some(raw - 1)
        }
    }

    /// Maps a logical position to its raw position, if it names a real item.
    #[must_use]
    pub fn logical_to_raw(&self, logical: usize) -> Option<usize> {
        (logical < self.real_len()).then_some(logical + 1)
    }
}

impl<T> Default for CircularSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularSequence")
            .field("pages", &self.pages)
            .finish()
    }
}

impl<T: Clone> FromIterator<T> for CircularSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        Self::from_items(&items)
    }
}

impl<T> Index<usize> for CircularSequence<T> {
    type Output = T;

    /// Returns the page at raw position `raw`.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is not below [`CircularSequence::page_count`]. An empty
    /// sequence has no pages at all.
    fn index(&self, raw: usize) -> &T {
        match self.pages.get(raw) {
            Some(page) => page,
            None => panic!(
                "raw page {raw} is out of range for a sequence of {} pages",
                self.pages.len()
            ),
        }
    }
}

impl<T> PageSource for CircularSequence<T> {
    type Page = T;

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
