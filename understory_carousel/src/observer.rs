// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! External observers and fan-out.
//!
//! Observers only ever see logical positions. A pager keeps one optional
//! single-slot observer plus an ordered collection; every event goes to the
//! single slot first, then to the collection in insertion order.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::host::ScrollState;

/// A page change as seen by observers, in logical positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PageChange {
    /// The surface scrolled.
    ///
    /// While a sentinel is at the leading edge `position` is transiently `-1`
    /// or `n`.
    Scrolled {
        /// Logical page at the leading edge.
        position: isize,
        /// Visible fraction of the following page.
        offset: f32,
        /// Visible part of the following page in device units.
        offset_pixels: i32,
    },
    /// A real page became the selected page.
    Selected(usize),
    /// The scroll phase changed.
    ScrollStateChanged(ScrollState),
}

/// Receives logical page changes from a [`CircularPager`](crate::CircularPager).
///
/// Every callback defaults to doing nothing. Closures taking a [`PageChange`]
/// are observers too.
pub trait PageObserver {
    /// The surface scrolled; see [`PageChange::Scrolled`].
    fn on_page_scrolled(&mut self, _position: isize, _offset: f32, _offset_pixels: i32) {}

    /// A real page was selected.
    fn on_page_selected(&mut self, _position: usize) {}

    /// The scroll phase changed.
    fn on_scroll_state_changed(&mut self, _state: ScrollState) {}
}

impl<F> PageObserver for F
where
    F: FnMut(PageChange),
{
    fn on_page_scrolled(&mut self, position: isize, offset: f32, offset_pixels: i32) {
        self(PageChange::Scrolled {
            position,
            offset,
            offset_pixels,
        });
    }

    fn on_page_selected(&mut self, position: usize) {
        self(PageChange::Selected(position));
    }

    fn on_scroll_state_changed(&mut self, state: ScrollState) {
        self(PageChange::ScrollStateChanged(state));
    }
}

/// Handle for an observer added with
/// [`CircularPager::add_observer`](crate::CircularPager::add_observer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Single slot plus ordered collection.
#[derive(Default)]
pub(crate) struct Observers {
    single: Option<Box<dyn PageObserver>>,
    list: SmallVec<[(ObserverId, Box<dyn PageObserver>); 2]>,
    next_id: u64,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Box<dyn PageObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.list.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> Option<Box<dyn PageObserver>> {
        let idx = self.list.iter().position(|(existing, _)| *existing == id)?;
        Some(self.list.remove(idx).1)
    }

    pub(crate) fn set_single(
        &mut self,
        observer: Option<Box<dyn PageObserver>>,
    ) -> Option<Box<dyn PageObserver>> {
        core::mem::replace(&mut self.single, observer)
    }

    pub(crate) fn len(&self) -> usize {
        self.list.len() + usize::from(self.single.is_some())
    }

    pub(crate) fn notify(&mut self, mut f: impl FnMut(&mut dyn PageObserver)) {
        if let Some(single) = self.single.as_deref_mut() {
            f(single);
        }
        for (_, observer) in &mut self.list {
            f(observer.as_mut());
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: SmallVec<[ObserverId; 2]> = self.list.iter().map(|(id, _)| *id).collect();
        f.debug_struct("Observers")
            .field("single", &self.single.is_some())
            .field("list", &ids)
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn tagged(log: &Rc<RefCell<Vec<(char, PageChange)>>>, tag: char) -> Box<dyn PageObserver> {
        let log = log.clone();
        Box::new(move |change: PageChange| log.borrow_mut().push((tag, change)))
    }

    #[test]
    fn single_slot_goes_first_then_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        observers.add(tagged(&log, 'a'));
        observers.add(tagged(&log, 'b'));
        observers.set_single(Some(tagged(&log, 's')));

        observers.notify(|o| o.on_page_selected(3));

        let seen: Vec<char> = log.borrow().iter().map(|(tag, _)| *tag).collect();
        assert_eq!(seen, ['s', 'a', 'b']);
        assert!(
            log.borrow()
                .iter()
                .all(|(_, change)| *change == PageChange::Selected(3))
        );
    }

    #[test]
    fn set_single_replaces_and_returns_previous() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        assert!(observers.set_single(Some(tagged(&log, 'x'))).is_none());
        assert!(observers.set_single(Some(tagged(&log, 'y'))).is_some());
        assert_eq!(observers.len(), 1);

        observers.notify(|o| o.on_scroll_state_changed(ScrollState::Idle));
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].0, 'y');

        assert!(observers.set_single(None).is_some());
        assert_eq!(observers.len(), 0);
    }

    #[test]
    fn remove_by_id_and_ids_are_not_reused() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        let a = observers.add(tagged(&log, 'a'));
        let b = observers.add(tagged(&log, 'b'));
        assert_ne!(a, b);

        assert!(observers.remove(a).is_some());
        assert!(observers.remove(a).is_none());
        let c = observers.add(tagged(&log, 'c'));
        assert_ne!(a, c);

        observers.notify(|o| o.on_page_scrolled(-1, 0.5, 10));
        let seen: Vec<char> = log.borrow().iter().map(|(tag, _)| *tag).collect();
        assert_eq!(seen, ['b', 'c']);
    }

    #[test]
    fn default_callbacks_do_nothing() {
        struct Quiet;
        impl PageObserver for Quiet {}

        let mut observers = Observers::default();
        observers.add(Box::new(Quiet));
        observers.notify(|o| {
            o.on_page_scrolled(0, 0.0, 0);
            o.on_page_selected(0);
            o.on_scroll_state_changed(ScrollState::Settling);
        });
        assert_eq!(observers.len(), 1);
    }
}
