// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics: wrap around a three-page carousel in both directions.
//!
//! Drives a `CircularPager` over a tiny in-memory paging surface and prints
//! what an observer sees. Run with `RUST_LOG=understory_carousel=trace` to see
//! the pager's own events.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_basics`

use tracing_subscriber::EnvFilter;
use understory_carousel::{
    CircularPager, PageChange, PageEvent, PageEvents, PagingSurface, ScrollState,
};

/// A surface that only tracks its position.
#[derive(Debug, Default)]
struct Strip {
    count: usize,
    current: usize,
}

impl PagingSurface for Strip {
    fn page_count(&self) -> usize {
        self.count
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn set_current_page(&mut self, page: usize, animate: bool, events: &mut PageEvents) {
        tracing::info!(page, animate, "surface moved");
        if page != self.current {
            self.current = page;
            events.push(PageEvent::Selected(page));
        }
    }

    fn notify_data_changed(&mut self, page_count: usize, _events: &mut PageEvents) {
        self.count = page_count;
        self.current = self.current.min(page_count.saturating_sub(1));
    }
}

fn swipe(pager: &mut CircularPager<&'static str, Strip>, to: usize) {
    pager.dispatch(PageEvent::ScrollStateChanged(ScrollState::Dragging));
    pager.surface_mut().current = to;
    pager.dispatch(PageEvent::Selected(to));
    pager.dispatch(PageEvent::ScrollStateChanged(ScrollState::Settling));
    pager.dispatch(PageEvent::Scrolled {
        position: to,
        offset: 0.0,
        offset_pixels: 0,
    });
    pager.dispatch(PageEvent::ScrollStateChanged(ScrollState::Idle));

    let page = pager.surface().current;
    let shown = pager.sequence().get(page).copied().unwrap_or("<none>");
    println!("  resting on raw {page}: {shown}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut pager = CircularPager::new(Strip::default());
    pager.update_data(&["Page One", "Page Two", "Page Three"]);
    println!("padded: {:?}", pager.sequence().items());

    pager.add_observer(|change: PageChange| match change {
        PageChange::Selected(position) => println!("  observer: selected {position}"),
        PageChange::Scrolled { position, .. } => println!("  observer: scrolled to {position}"),
        PageChange::ScrollStateChanged(state) => println!("  observer: {state:?}"),
    });

    println!("swipe back from the first page:");
    swipe(&mut pager, 0);
    println!("current item: {:?}", pager.current_item());

    println!("swipe forward from the last page:");
    swipe(&mut pager, 4);
    println!("current item: {:?}", pager.current_item());
}
