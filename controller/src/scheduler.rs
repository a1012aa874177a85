//! Periodic ticking on a tokio runtime.

use crate::controller::{Controller, TickReport};
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// A controller shared between the scheduler's task and its owner.
pub type SharedController = Arc<Mutex<Controller>>;

/// Locks the controller, recovering it if a previous holder panicked.
pub fn lock(controller: &SharedController) -> MutexGuard<'_, Controller> {
    controller.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        warn!("Controller lock was poisoned");
        poisoned.into_inner()
    })
}

struct Task {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Ticks a [`Controller`] every `settings.speed` milliseconds.
///
/// A single task runs the ticks one after another, so they never overlap.
pub struct Scheduler {
    controller: SharedController,
    runtime: Handle,
    task: Option<Task>,
}

impl Scheduler {
    pub fn new(controller: SharedController, runtime: Handle) -> Self {
        Scheduler {
            controller,
            runtime,
            task: None,
        }
    }

    pub fn controller(&self) -> &SharedController {
        &self.controller
    }

    /// Whether the ticking task is still alive.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.handle.is_finished())
    }

    /// Marks the controller running and begins ticking.
    ///
    /// `on_tick` sees every report, including the one that halts the run.
    /// Does nothing if already active.
    pub fn start<F>(&mut self, on_tick: F)
    where
        F: Fn(&TickReport) + Send + 'static,
    {
        if self.is_active() {
            return;
        }

        let period = {
            let mut controller = lock(&self.controller);
            controller.start();
            controller.settings().interval()
        };
        let (stop, stopped) = oneshot::channel();
        let handle = self
            .runtime
            .spawn(run(self.controller.clone(), period, on_tick, stopped));
        self.task = Some(Task { stop, handle });
    }

    /// Cancels the pending tick and marks the controller stopped.
    ///
    /// A generation already being computed finishes first.
    pub fn stop(&mut self) {
        self.cancel();
        lock(&self.controller).stop();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            // The task may already be gone.
            let _ = task.stop.send(());
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run<F>(
    controller: SharedController,
    period: Duration,
    on_tick: F,
    mut stopped: oneshot::Receiver<()>,
) where
    F: Fn(&TickReport),
{
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut stopped => break,
            _ = interval.tick() => {
                let report = lock(&controller).tick();
                let Some(report) = report else {
                    break;
                };
                on_tick(&report);
                if report.halt.is_some() {
                    break;
                }
            }
        }
    }
    debug!("Tick task finished");
}
