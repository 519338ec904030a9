//! Mount-time lifecycle of the landing hero.
//!
//! On mount the page scrolls back to the origin and schedules a single
//! deferred switch from [`Reveal::Hidden`] to [`Reveal::Revealed`]. The
//! pending switch is owned by a [`RevealTimer`], and dropping or cancelling
//! it guarantees the callback never runs on a torn-down component.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};

/// Style variant of the headline and call-to-action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn headline_class(self) -> &'static str {
        match self {
            Reveal::Hidden => "pre-animate",
            Reveal::Revealed => "fade-in",
        }
    }

    /// Variant class only; the button always carries `button` as well.
    pub fn button_class(self) -> &'static str {
        match self {
            Reveal::Hidden => "pre-animate",
            Reveal::Revealed => "fade-in-delayed",
        }
    }
}

pub trait Viewport {
    fn scroll_to_origin(&self);
}

/// Runs a callback once after a delay. Dropping the returned handle
/// cancels the callback if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule<F>(&self, delay_ms: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_origin(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        } else {
            warn!("No window available, skipping scroll reset");
        }
    }
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule<F>(&self, delay_ms: u32, callback: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, callback)
    }
}

/// Owns the pending reveal. The handle is released when this is dropped.
pub struct RevealTimer<H> {
    handle: Option<H>,
    fired: Rc<Cell<bool>>,
}

impl<H> RevealTimer<H> {
    pub fn is_pending(&self) -> bool {
        self.handle.is_some() && !self.fired.get()
    }

    /// Returns true when a callback that had not fired yet was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                drop(handle);
                !self.fired.get()
            }
            None => false,
        }
    }
}

/// Resets the scroll position, then schedules `on_reveal` to run once
/// after `delay_ms`.
pub fn mount_hero<V, S, F>(
    viewport: &V,
    scheduler: &S,
    delay_ms: u32,
    on_reveal: F,
) -> RevealTimer<S::Handle>
where
    V: Viewport + ?Sized,
    S: Scheduler,
    F: FnOnce() + 'static,
{
    viewport.scroll_to_origin();

    let fired = Rc::new(Cell::new(false));
    let handle = {
        let fired = fired.clone();
        scheduler.schedule(delay_ms, move || {
            fired.set(true);
            debug!("Hero revealed after {}ms", delay_ms);
            on_reveal();
        })
    };

    RevealTimer {
        handle: Some(handle),
        fired,
    }
}
