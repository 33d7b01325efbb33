//! The interactive website-builder demo: device previews, rotating
//! capabilities, the build progress stepper, gallery effects, edit
//! indicators, the scripted chat and the particle field.
//!
//! [`CanvasDemo`] owns every timer and listener it creates. Dropping it, or
//! calling [`CanvasDemo::shutdown`], tears all of them down, so restarting the
//! demo never stacks a second set of timers on top of the first.

pub mod chat;
pub mod device;
pub mod effects;
pub mod gallery;
pub mod page;
pub mod particles;
pub mod progress;
pub mod rotator;
pub mod tooltips;

use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use rand::Rng;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget};

use crate::config::DemoConfig;
use crate::dom::{self, Listener, Liveness};
use crate::error::DemoError;

/// Timers, listeners and observers owned by one running demo.
#[derive(Default)]
pub struct Handles {
    alive: Liveness,
    intervals: Vec<Interval>,
    timeouts: Vec<Timeout>,
    listeners: Vec<Listener>,
    observers: Vec<page::RevealObserver>,
}

impl Handles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn liveness(&self) -> Liveness {
        self.alive.clone()
    }

    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, f: F) -> Result<(), DemoError>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, f)?);
        Ok(())
    }

    pub fn interval(&mut self, ms: u32, f: impl FnMut() + 'static) {
        self.intervals.push(Interval::new(ms, f));
    }

    pub fn timeout(&mut self, ms: u32, f: impl FnOnce() + 'static) {
        self.timeouts.push(Timeout::new(ms, f));
    }

    pub fn observe(&mut self, observer: page::RevealObserver) {
        self.observers.push(observer);
    }
}

impl Drop for Handles {
    fn drop(&mut self) {
        self.alive.kill();
    }
}

/// Runs `f` after `ms` milliseconds unless `alive` has been killed by then.
pub(crate) fn spawn_after(alive: Liveness, ms: u32, f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        if alive.is_alive() {
            f();
        }
    });
}

/// Handle to a running demo. Construct once per mount; shut down before
/// starting another.
pub struct CanvasDemo {
    handles: Handles,
}

impl CanvasDemo {
    pub fn start(config: DemoConfig) -> Result<Self, DemoError> {
        Self::start_with_rng(config, &mut rand::thread_rng())
    }

    /// Like [`CanvasDemo::start`], with the particle randomness drawn from `rng`.
    pub fn start_with_rng<R: Rng + ?Sized>(config: DemoConfig, rng: &mut R) -> Result<Self, DemoError> {
        let document = dom::document()?;
        let mut handles = Handles::new();

        report("device selector", device::init(&document, &mut handles));
        report("capability rotation", rotator::init(&document, &config, &mut handles));
        report("progress animation", progress::init(&document, &config, &mut handles));
        report("gallery interactions", gallery::init(&document, &config, &mut handles));
        report("edit indicators", tooltips::init(&document, &config, &mut handles));
        report("chat simulation", chat::init(&document, &config, &mut handles));
        report("particle system", particles::init(&document, rng));
        report("page behaviors", page::init(&document, &config, &mut handles));

        log::info!("Canvas demo started");
        Ok(Self { handles })
    }

    /// Cancels every timer, detaches every listener and stops pending loops.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for CanvasDemo {
    fn drop(&mut self) {
        log::info!("Canvas demo shut down");
    }
}

fn report(feature: &str, result: Result<(), DemoError>) {
    match result {
        Ok(()) => log::debug!("{} ready", feature),
        Err(e) => log::warn!("{} disabled: {}", feature, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropping_handles_stops_pending_loops() {
        let handles = Handles::new();
        let alive = handles.liveness();
        assert!(alive.is_alive());
        drop(handles);
        assert!(!alive.is_alive());
    }

    #[test]
    fn test_every_liveness_copy_sees_shutdown() {
        let handles = Handles::new();
        let loops: Vec<Liveness> = (0..3).map(|_| handles.liveness()).collect();
        drop(handles);
        assert!(loops.iter().all(|alive| !alive.is_alive()));
    }
}
