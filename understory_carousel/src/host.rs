// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing contracts: the paging surface the pager drives, and the raw
//! events it reports back.

use smallvec::SmallVec;

/// Scroll phase of a paging surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// At rest on a page.
    #[default]
    Idle,
    /// Being dragged by the user.
    Dragging,
    /// Animating towards a final page.
    Settling,
}

/// An event reported by a paging surface, in raw (sentinel-padded) positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The surface scrolled.
    ///
    /// `position` is the raw page currently at the leading edge, `offset` the
    /// fraction `[0, 1)` of the next page that is visible, and
    /// `offset_pixels` the same offset in device units.
    Scrolled {
        /// Raw page at the leading edge.
        position: usize,
        /// Visible fraction of the following page.
        offset: f32,
        /// Visible part of the following page in device units.
        offset_pixels: i32,
    },
    /// A raw page became the selected page.
    Selected(usize),
    /// The scroll phase changed.
    ScrollStateChanged(ScrollState),
}

/// Events a [`PagingSurface`] raises synchronously while being driven.
///
/// The pager hands one of these to every surface call. Whatever the surface
/// pushes is replayed through the pager's internal listener in order once the
/// call returns, except while the listener is detached (during
/// [`CircularPager::set_sequence`](crate::CircularPager::set_sequence)), where it
/// is dropped.
#[derive(Clone, Debug, Default)]
pub struct PageEvents {
    events: SmallVec<[PageEvent; 4]>,
}

impl PageEvents {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event.
    pub fn push(&mut self, event: PageEvent) {
        self.events.push(event);
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Recorded events in order.
    #[must_use]
    pub fn as_slice(&self) -> &[PageEvent] {
        &self.events
    }
}

impl Extend<PageEvent> for PageEvents {
    fn extend<I: IntoIterator<Item = PageEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl IntoIterator for PageEvents {
    type Item = PageEvent;
    type IntoIter = smallvec::IntoIter<[PageEvent; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// A single-axis paged scrolling surface, addressed in raw positions.
///
/// The surface owns layout, gestures and page views. The pager only reads its
/// position and moves it. Positioning is assumed to be synchronous and to
/// always succeed.
pub trait PagingSurface {
    /// Number of pages the surface currently knows about.
    fn page_count(&self) -> usize;

    /// The raw page the surface is showing.
    fn current_page(&self) -> usize;

    /// Moves to raw page `page`.
    ///
    /// With `animate` set the surface may scroll smoothly; otherwise it must cut
    /// straight to the page. Events the move raises immediately go into
    /// `events`.
    fn set_current_page(&mut self, page: usize, animate: bool, events: &mut PageEvents);

    /// Tells the surface its data was replaced and now has `page_count` pages.
    fn notify_data_changed(&mut self, page_count: usize, events: &mut PageEvents);
}

/// What a host should do with a page view it already shows after a data change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageMove {
    /// The view still shows the item at the same position.
    Unchanged,
    /// The view is stale and must be recreated.
    Gone,
}

/// An items provider for a paging surface.
pub trait PageSource {
    /// The page type handed to the host.
    type Page: ?Sized;

    /// Number of pages, sentinels included.
    fn page_count(&self) -> usize;

    /// Whether `candidate` is the very object already shown as `shown`.
    ///
    /// Identity, not equality: sentinel pages compare equal to the real pages
    /// they copy, but they are different pages.
    fn is_same_page(&self, shown: &Self::Page, candidate: &Self::Page) -> bool {
        core::ptr::eq(shown, candidate)
    }

    /// Where a previously shown page went after a data change.
    ///
    /// Sequences are replaced wholesale, so by default every page is stale.
    fn page_moved(&self, _page: &Self::Page) -> PageMove {
        PageMove::Gone
    }
}
