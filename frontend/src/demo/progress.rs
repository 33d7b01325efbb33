use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use super::Handles;
use crate::config::DemoConfig;
use crate::dom;
use crate::error::DemoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Cursor moved forward; wait one step before the next frame.
    Advancing,
    /// Cursor ran past the last step and went back to zero; hold before restarting.
    Restarting,
}

/// What the stepper should look like after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressFrame {
    /// Steps `0..completed` are marked completed.
    pub completed: usize,
    pub active: Option<usize>,
    pub phase: StepPhase,
}

impl ProgressFrame {
    pub fn is_completed(&self, index: usize) -> bool {
        index < self.completed
    }

    pub fn delay_ms(&self, config: &DemoConfig) -> u32 {
        match self.phase {
            StepPhase::Advancing => config.progress_step_ms,
            StepPhase::Restarting => config.progress_restart_ms,
        }
    }
}

/// Build progress over `len` steps: pending, one active, all before it completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    cursor: usize,
    len: usize,
}

impl Progress {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn step(&mut self) -> ProgressFrame {
        let completed = self.cursor;
        let active = (self.cursor < self.len).then_some(self.cursor);

        self.cursor += 1;
        let phase = if self.cursor > self.len {
            self.cursor = 0;
            StepPhase::Restarting
        } else {
            StepPhase::Advancing
        };

        ProgressFrame {
            completed,
            active,
            phase,
        }
    }
}

fn render(steps: &[HtmlElement], frame: &ProgressFrame) {
    for (i, step) in steps.iter().enumerate() {
        let classes = step.class_list();
        let _ = classes.remove_2("active", "completed");
        if frame.is_completed(i) {
            let _ = classes.add_1("completed");
        }
        if frame.active == Some(i) {
            let _ = classes.add_1("active");
        }
    }
}

pub(super) fn init(document: &Document, config: &DemoConfig, handles: &mut Handles) -> Result<(), DemoError> {
    let steps = dom::select_all(document, ".step")?;
    let alive = handles.liveness();
    let config = *config;

    spawn_local(async move {
        let mut progress = Progress::new(steps.len());
        TimeoutFuture::new(config.progress_lead_in_ms).await;

        while alive.is_alive() {
            let frame = progress.step();
            render(&steps, &frame);
            TimeoutFuture::new(frame.delay_ms(&config)).await;
        }
        log::debug!("Progress loop stopped");
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_cycles_through_all_steps_then_wraps() {
        let mut progress = Progress::new(3);
        let cursors: Vec<usize> = (0..10).map(|_| progress.step().completed).collect();
        assert_eq!(cursors, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_completed_and_active_per_frame() {
        let mut progress = Progress::new(4);
        for i in 0..=4 {
            let frame = progress.step();
            assert_eq!(frame.completed, i);
            assert!((0..i).all(|j| frame.is_completed(j)));
            assert!(!frame.is_completed(i));
            assert_eq!(frame.active, if i < 4 { Some(i) } else { None });
        }
    }

    #[test]
    fn test_restart_uses_longer_pause_only_after_last_frame() {
        let config = DemoConfig::default();
        let mut progress = Progress::new(2);

        let delays: Vec<u32> = (0..6).map(|_| progress.step().delay_ms(&config)).collect();
        assert_eq!(delays, vec![2500, 2500, 2000, 2500, 2500, 2000]);
    }

    #[test]
    fn test_zero_steps_restarts_every_frame() {
        let mut progress = Progress::new(0);
        let frame = progress.step();
        assert_eq!(frame.active, None);
        assert_eq!(frame.phase, StepPhase::Restarting);
        assert_eq!(progress.step().completed, 0);
    }
}
