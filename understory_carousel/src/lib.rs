// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless infinite circular paging.
//!
//! This crate turns a finite list of items into a pager that wraps around
//! seamlessly in both directions, on top of any single-axis paged scrolling
//! surface. It never shows a fake boundary page and never reports one.
//!
//! The core concepts are:
//!
//! - [`reshape`] and [`CircularSequence`]: the items padded as
//!   `[last, items.., first]`. The two extra pages are **sentinels**; scrolling
//!   onto one looks exactly like wrapping around.
//! - [`PagingSurface`]: the host's paging surface, addressed in **raw**
//!   positions over the padded sequence.
//! - [`CircularPager`]: a controller that wraps a surface, exposes only
//!   **logical** positions (`0..n`), and cuts back to the matching real page,
//!   without animation, once the surface comes to rest on a sentinel.
//! - [`SentinelSnap`]: the two-state machine behind that cut.
//! - [`PageObserver`]: receives translated scroll, selection and scroll-state
//!   changes. A pager has one single-slot observer plus any number of
//!   additional ones.
//!
//! This crate deliberately does **not** render, lay out, or handle gestures.
//! Host frameworks are responsible for:
//!
//! - Implementing [`PagingSurface`] over their pager widget.
//! - Rendering page `raw` from [`CircularSequence::get`].
//! - Reporting scroll, selection and scroll-state events through
//!   [`CircularPager::dispatch`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_carousel::{
//!     CircularPager, PageChange, PageEvent, PageEvents, PagingSurface, ScrollState,
//! };
//!
//! #[derive(Default)]
//! struct Surface {
//!     count: usize,
//!     current: usize,
//! }
//!
//! impl PagingSurface for Surface {
//!     fn page_count(&self) -> usize { self.count }
//!     fn current_page(&self) -> usize { self.current }
//!     fn set_current_page(&mut self, page: usize, _animate: bool, events: &mut PageEvents) {
//!         self.current = page;
//!         events.push(PageEvent::Selected(page));
//!     }
//!     fn notify_data_changed(&mut self, count: usize, _events: &mut PageEvents) {
//!         self.count = count;
//!     }
//! }
//!
//! let mut pager = CircularPager::new(Surface::default());
//! pager.update_data(&['A', 'B', 'C']);
//!
//! // The surface holds [C, A, B, C, A] and starts on the first real page.
//! assert_eq!(pager.sequence().items(), &['C', 'A', 'B', 'C', 'A']);
//! assert_eq!(pager.surface().current, 1);
//! assert_eq!(pager.current_item(), Ok(0));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! pager.add_observer(move |change: PageChange| sink.borrow_mut().push(change));
//!
//! // Swipe backwards from `A` onto the leading sentinel `C`.
//! pager.surface_mut().current = 0;
//! pager.dispatch(PageEvent::Selected(0));
//! pager.dispatch(PageEvent::ScrollStateChanged(ScrollState::Idle));
//!
//! // The pager cut over to the real `C`.
//! assert_eq!(pager.surface().current, 3);
//! assert_eq!(pager.current_item(), Ok(2));
//! assert_eq!(
//!     *seen.borrow(),
//!     [
//!         PageChange::Selected(2),
//!         PageChange::ScrollStateChanged(ScrollState::Idle),
//!     ]
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `tracing`: emit `tracing` events when sequences are installed, position
//!   requests are rejected, and sentinel pages are snapped away from.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod observer;
mod pager;
mod sequence;
mod snap;

pub use host::{PageEvent, PageEvents, PageMove, PageSource, PagingSurface, ScrollState};
pub use observer::{ObserverId, PageChange, PageObserver};
pub use pager::{CircularPager, PagerError};
pub use sequence::{CircularSequence, reshape};
pub use snap::{SentinelSnap, SnapPhase};
