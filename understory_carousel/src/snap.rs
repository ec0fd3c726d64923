// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentinel re-snap state machine.
//!
//! [`SentinelSnap`] watches selections and decides, when the surface goes
//! idle, whether the last selection landed on a sentinel and where to cut to.
//! It has two states:
//!
//! - [`SnapPhase::Clean`]: nothing selected since the last idle.
//! - [`SnapPhase::AwaitingIdle`]: a page was selected; waiting for the surface
//!   to settle.
//!
//! Any selection moves to `AwaitingIdle`. Settling always moves back to
//! `Clean` and yields the re-snap target, if any, on that edge.
//!
//! ```rust
//! use understory_carousel::{SentinelSnap, SnapPhase};
//!
//! // Five raw pages: two sentinels around three real items.
//! let mut snap = SentinelSnap::new();
//! snap.select(4);
//! assert_eq!(snap.phase(), SnapPhase::AwaitingIdle { last_selected: 4 });
//! assert_eq!(snap.settle(5), Some(1));
//! assert_eq!(snap.phase(), SnapPhase::Clean);
//! ```

/// State of a [`SentinelSnap`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SnapPhase {
    /// No selection since the surface was last idle.
    #[default]
    Clean,
    /// A selection happened; the re-snap decision waits for idle.
    AwaitingIdle {
        /// Raw position of the most recent selection.
        last_selected: usize,
    },
}

/// Decides when and where to cut away from a sentinel page.
#[derive(Clone, Debug, Default)]
pub struct SentinelSnap {
    phase: SnapPhase,
}

impl SentinelSnap {
    /// Creates a machine in [`SnapPhase::Clean`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SnapPhase::Clean,
        }
    }

    /// Current state.
    #[must_use]
    pub fn phase(&self) -> SnapPhase {
        self.phase
    }

    /// Records a selection of raw page `raw`.
    pub fn select(&mut self, raw: usize) {
        self.phase = SnapPhase::AwaitingIdle { last_selected: raw };
    }

    /// Handles the surface going idle over `page_count` raw pages.
    ///
    /// Returns the raw page to cut to when the last selection was a sentinel:
    /// the last real page for the leading sentinel, the first real page for the
    /// trailing one. Always leaves the machine [`SnapPhase::Clean`].
    pub fn settle(&mut self, page_count: usize) -> Option<usize> {
        match core::mem::take(&mut self.phase) {
            SnapPhase::Clean => None,
            SnapPhase::AwaitingIdle { last_selected } => snap_target(last_selected, page_count),
        }
    }

    /// Forgets any pending selection.
    pub fn reset(&mut self) {
        self.phase = SnapPhase::Clean;
    }
}

fn snap_target(raw: usize, page_count: usize) -> Option<usize> {
    // Needs at least one real page between the two sentinels.
    if page_count < 3 {
        return None;
    }
    let last = page_count - 1;
    if raw == 0 {
        Some(last - 1)
    } else if raw == last {
        Some(1)
    } else {
        None
    }
}
