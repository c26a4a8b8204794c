use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use eframe::egui;

use crate::domain::{ChartSpec, ExchangeRateTimeSeries};
use crate::utils::time_utils::day_to_plot_x;

struct AnimationWorker {
    cancel: Sender<()>,
    handle: JoinHandle<()>,
}

/// Renders a time series as a "growing line": a background worker appends
/// one point per cadence tick into a shared buffer the plot reads each
/// frame.
///
/// At most one worker is active at a time. Starting a new render first
/// signals the previous worker and joins it, so two workers never write the
/// buffer interleaved. Cancellation is cooperative: the worker's pacing
/// sleep doubles as the cancellation check, so a worker parked mid-interval
/// wakes and exits as soon as the signal arrives.
pub struct ChartAnimator {
    points: Arc<Mutex<Vec<[f64; 2]>>>,
    spec: Option<ChartSpec>,
    interval: Duration,
    worker: Option<AnimationWorker>,
}

impl ChartAnimator {
    pub fn new(animation_interval_ms: u64) -> Self {
        Self {
            points: Arc::new(Mutex::new(Vec::new())),
            spec: None,
            interval: Duration::from_millis(animation_interval_ms),
            worker: None,
        }
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    /// Copy of the currently visible points, for the plot to draw.
    pub fn snapshot(&self) -> Vec<[f64; 2]> {
        lock_ignoring_poison(&self.points).clone()
    }

    /// True while the animation worker is still appending points.
    pub fn is_animating(&self) -> bool {
        self.worker
            .as_ref()
            .map(|w| !w.handle.is_finished())
            .unwrap_or(false)
    }

    /// Starts animating `series`. Any in-flight render is cancelled and
    /// joined before the visible buffer is cleared; points already rendered
    /// by a cancelled run are only removed here, never by the dying worker.
    pub fn render(&mut self, series: &ExchangeRateTimeSeries, spec: ChartSpec, ctx: &egui::Context) {
        self.cancel_active();

        let points: Vec<[f64; 2]> = series
            .sorted_points()
            .into_iter()
            .filter_map(|(day, rate)| day_to_plot_x(&day).map(|x| [x, rate]))
            .collect();

        lock_ignoring_poison(&self.points).clear();
        self.spec = Some(spec);

        let buffer = Arc::clone(&self.points);
        let egui_ctx = ctx.clone();
        let interval = self.interval;
        let (cancel_tx, cancel_rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            for point in points {
                lock_ignoring_poison(&buffer).push(point);
                egui_ctx.request_repaint();

                match cancel_rx.recv_timeout(interval) {
                    // Cadence elapsed with no signal; keep going.
                    Err(RecvTimeoutError::Timeout) => {}
                    // Explicit cancel, or the animator was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        self.worker = Some(AnimationWorker {
            cancel: cancel_tx,
            handle,
        });
    }

    /// Signals the active worker, if any, and waits for it to exit.
    pub fn cancel_active(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.cancel.send(());
            let _ = worker.handle.join();
        }
    }
}

impl Drop for ChartAnimator {
    fn drop(&mut self) {
        self.cancel_active();
    }
}

// A worker that panicked poisons the buffer lock; the points themselves are
// plain floats, so keep serving them.
fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
