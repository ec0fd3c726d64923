// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circular pager controller.

use alloc::boxed::Box;
use core::fmt;

use crate::host::{PageEvent, PageEvents, PagingSurface, ScrollState};
use crate::observer::{ObserverId, Observers, PageObserver};
use crate::sequence::CircularSequence;
use crate::snap::SentinelSnap;

/// Error returned for a position request the pager cannot honor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PagerError {
    /// The pager has no items.
    NoData,
    /// A logical position outside `0..len` was requested.
    OutOfRange {
        /// The requested logical position.
        position: usize,
        /// Number of real items.
        len: usize,
    },
    /// The surface reports a raw page that the sequence does not have.
    UnknownPage {
        /// The raw page the surface is on.
        page: usize,
        /// Number of raw pages in the sequence.
        page_count: usize,
    },
}

impl fmt::Display for PagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "the pager has no items"),
            Self::OutOfRange { position, len } => {
                write!(f, "logical position {position} is out of range for {len} items")
            }
            Self::UnknownPage { page, page_count } => write!(
                f,
                "surface is on raw page {page}, but the sequence has {page_count} pages"
            ),
        }
    }
}

impl core::error::Error for PagerError {}

/// Infinite circular paging over a [`PagingSurface`].
///
/// The surface is handed a [`CircularSequence`], padded with one sentinel page
/// at each end. The pager keeps every position it exposes in logical space
/// (`0..n`) and cuts the surface back onto the matching real page whenever it
/// comes to rest on a sentinel.
///
/// The pager is the only listener the surface talks to. Hosts feed it raw
/// events through [`CircularPager::dispatch`] (or the `on_*` shorthands); it
/// translates them and fans them out to its own observers:
///
/// - Scroll ticks are always forwarded, as `raw - 1`.
/// - Selections of a sentinel page are swallowed; real pages are forwarded.
/// - Scroll state changes are forwarded untouched, after any re-snap.
///
/// ```rust
/// use understory_carousel::{
///     CircularPager, PageEvent, PageEvents, PagingSurface, ScrollState,
/// };
///
/// #[derive(Default)]
/// struct Surface {
///     count: usize,
///     current: usize,
/// }
///
/// impl PagingSurface for Surface {
///     fn page_count(&self) -> usize { self.count }
///     fn current_page(&self) -> usize { self.current }
///     fn set_current_page(&mut self, page: usize, _animate: bool, events: &mut PageEvents) {
///         self.current = page;
///         events.push(PageEvent::Selected(page));
///     }
///     fn notify_data_changed(&mut self, count: usize, _events: &mut PageEvents) {
///         self.count = count;
///     }
/// }
///
/// let mut pager = CircularPager::new(Surface::default());
/// pager.update_data(&["a", "b", "c"]);
/// assert_eq!(pager.current_item(), Ok(0));
///
/// // The user flings past the last item onto the trailing sentinel.
/// pager.surface_mut().current = 4;
/// pager.on_page_selected(4);
/// pager.on_scroll_state_changed(ScrollState::Idle);
///
/// // The pager has cut back to the first real page.
/// assert_eq!(pager.surface().current, 1);
/// assert_eq!(pager.current_item(), Ok(0));
/// ```
pub struct CircularPager<T, S> {
    surface: S,
    sequence: CircularSequence<T>,
    snap: SentinelSnap,
    observers: Observers,
}

impl<T, S> CircularPager<T, S>
where
    S: PagingSurface,
{
    /// Creates a pager over `surface` with no items.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            sequence: CircularSequence::new(),
            snap: SentinelSnap::new(),
            observers: Observers::default(),
        }
    }

    /// Creates a pager over `surface` and installs `sequence`.
    pub fn with_sequence(surface: S, sequence: CircularSequence<T>) -> Self {
        let mut pager = Self::new(surface);
        pager.set_sequence(sequence);
        pager
    }

    /// Installs a new sequence.
    ///
    /// The surface is told about the new page count and, if there is more than
    /// one page, cut to raw page `1` so the first real item shows. Events the
    /// surface raises while this happens never reach the internal listener, so
    /// observers do not see the setup as a selection.
    pub fn set_sequence(&mut self, sequence: CircularSequence<T>) {
        self.sequence = sequence;
        self.snap.reset();

        let page_count = self.sequence.page_count();
        let mut detached = PageEvents::new();
        self.surface.notify_data_changed(page_count, &mut detached);
        debug_assert_eq!(
            self.surface.page_count(),
            page_count,
            "surface did not take the new page count"
        );
        if page_count > 1 {
            self.surface.set_current_page(1, false, &mut detached);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            pages = page_count,
            dropped = detached.len(),
            "installed circular sequence"
        );
    }

    /// Replaces the items with `items` and reinstalls the sequence.
    pub fn update_data(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.set_sequence(CircularSequence::from_items(items));
    }

    /// The installed sequence.
    #[must_use]
    pub fn sequence(&self) -> &CircularSequence<T> {
        &self.sequence
    }

    /// Looks up a real item by logical position.
    #[must_use]
    pub fn item(&self, logical: usize) -> Option<&T> {
        self.sequence.get_logical(logical)
    }

    /// The paging surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The paging surface, mutably.
    ///
    /// Moving the surface through this reference bypasses the pager; hosts are
    /// expected to report such moves back through [`CircularPager::dispatch`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Splits the pager into its surface and sequence, dropping all observers.
    pub fn into_parts(self) -> (S, CircularSequence<T>) {
        (self.surface, self.sequence)
    }

    /// Moves to real item `logical`, letting the surface animate.
    pub fn set_current_item(&mut self, logical: usize) -> Result<(), PagerError> {
        self.set_current_item_with(logical, true)
    }

    /// Moves to real item `logical`.
    ///
    /// Positions outside `0..n` are rejected rather than clamped.
    pub fn set_current_item_with(
        &mut self,
        logical: usize,
        animate: bool,
    ) -> Result<(), PagerError> {
        match self.checked_raw(logical) {
            Ok(raw) => {
                self.move_surface(raw, animate);
                Ok(())
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%error, "rejected position request");
                Err(error)
            }
        }
    }

    /// The logical position of the item the surface is showing.
    ///
    /// If the surface is momentarily resting on a sentinel, this is the real
    /// item that sentinel copies.
    pub fn current_item(&self) -> Result<usize, PagerError> {
        if self.sequence.is_empty() {
            return Err(PagerError::NoData);
        }
        let page = self.surface.current_page();
        self.sequence
            .raw_to_logical(page)
            .ok_or(PagerError::UnknownPage {
                page,
                page_count: self.sequence.page_count(),
            })
    }

    /// Adds an observer to the ordered collection.
    ///
    /// The same observer logic may be added more than once; each addition is
    /// notified separately.
    pub fn add_observer<O>(&mut self, observer: O) -> ObserverId
    where
        O: PageObserver + 'static,
    {
        self.observers.add(Box::new(observer))
    }

    /// Removes an observer added with [`CircularPager::add_observer`].
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn PageObserver>> {
        self.observers.remove(id)
    }

    /// Fills the single observer slot, returning its previous occupant.
    ///
    /// The slot is independent of the collection and is notified before it.
    pub fn set_single_observer(
        &mut self,
        observer: Option<Box<dyn PageObserver>>,
    ) -> Option<Box<dyn PageObserver>> {
        self.observers.set_single(observer)
    }

    /// Number of registered observers, single slot included.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Feeds one raw surface event through the internal listener.
    pub fn dispatch(&mut self, event: PageEvent) {
        match event {
            PageEvent::Scrolled {
                position,
                offset,
                offset_pixels,
            } => self.on_page_scrolled(position, offset, offset_pixels),
            PageEvent::Selected(position) => self.on_page_selected(position),
            PageEvent::ScrollStateChanged(state) => self.on_scroll_state_changed(state),
        }
    }

    /// The surface scrolled with raw page `position` at the leading edge.
    pub fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_pixels: i32) {
        let logical = position.cast_signed() - 1;
        self.observers
            .notify(|o| o.on_page_scrolled(logical, offset, offset_pixels));
    }

    /// The surface selected raw page `position`.
    pub fn on_page_selected(&mut self, position: usize) {
        self.snap.select(position);
        if position > 0 && position + 1 < self.sequence.page_count() {
            self.observers.notify(|o| o.on_page_selected(position - 1));
        }
    }

    /// The surface changed scroll phase.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        if state == ScrollState::Idle
            && let Some(target) = self.snap.settle(self.sequence.page_count())
        {
            let page = self.surface.current_page();
            if page != target {
                #[cfg(feature = "tracing")]
                tracing::debug!(from = page, to = target, "snapping off sentinel page");
                self.move_surface(target, false);
            }
            // The cut raises its own selection of a real page.
            self.snap.reset();
        }
        self.observers.notify(|o| o.on_scroll_state_changed(state));
    }

    fn move_surface(&mut self, raw: usize, animate: bool) {
        let mut events = PageEvents::new();
        self.surface.set_current_page(raw, animate, &mut events);
        for event in events {
            self.dispatch(event);
        }
    }

    fn checked_raw(&self, logical: usize) -> Result<usize, PagerError> {
        let len = self.sequence.real_len();
        if len == 0 {
            return Err(PagerError::NoData);
        }
        self.sequence
            .logical_to_raw(logical)
            .ok_or(PagerError::OutOfRange {
                position: logical,
                len,
            })
    }
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Debug for CircularPager<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularPager")
            .field("surface", &self.surface)
            .field("sequence", &self.sequence)
            .field("snap", &self.snap)
            .field("observers", &self.observers)
            .finish()
    }
}
