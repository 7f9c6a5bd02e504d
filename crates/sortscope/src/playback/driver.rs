//! Timer-driven playback
//!
//! [`PlaybackDriver`] replays a trace on a tokio timer, one step per tick.
//! At most one playback task is alive per driver: starting a new run or
//! cancelling aborts the previous task and bumps a generation counter, and
//! every tick re-checks that counter under the same lock it publishes
//! under. Once `start` or `cancel` returns, the superseded task can never
//! publish again, even if it is still scheduled.
//!
//! Must be used from within a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, span, trace, Level};

use super::{PlaybackConfig, PlaybackState, Snapshot};
use crate::core::{Algorithm, SortError, Trace};
use crate::recorder::record;

/// Snapshots of a single run, one per tick. Ends when the run finishes or is
/// superseded.
pub type SnapshotStream = mpsc::UnboundedReceiver<Snapshot>;

struct Inner {
    state: PlaybackState,
    generation: u64,
}

struct Shared {
    inner: Mutex<Inner>,
    published: watch::Sender<Snapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicked tick leaves whole values behind; keep going.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cancellable, single-timer playback of recorded traces
pub struct PlaybackDriver {
    shared: Arc<Shared>,
    task: Option<JoinHandle<()>>,
    config: PlaybackConfig,
}

impl PlaybackDriver {
    /// Create an idle driver with the default 300ms delay
    pub fn new() -> Self {
        Self::with_config(PlaybackConfig::default())
    }

    /// Create an idle driver with a custom configuration
    pub fn with_config(config: PlaybackConfig) -> Self {
        let (published, _) = watch::channel(Snapshot::idle());
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: PlaybackState::new(),
                    generation: 0,
                }),
                published,
            }),
            task: None,
            config,
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Watch the latest published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.published.subscribe()
    }

    /// The latest published snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.shared.published.borrow().clone()
    }

    /// Returns true while a playback task is running
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Replay `trace` at the configured delay, cancelling any active run
    ///
    /// `input` is the unsorted array published until the first tick.
    pub fn start(&mut self, trace: Trace, input: Vec<f64>) -> SnapshotStream {
        let delay = self.config.delay;
        self.start_with_delay(trace, input, delay)
    }

    /// Replay `trace` with an explicit inter-step delay
    pub fn start_with_delay(
        &mut self,
        trace: Trace,
        input: Vec<f64>,
        delay: Duration,
    ) -> SnapshotStream {
        let start_span = span!(
            Level::INFO,
            "start_playback",
            algorithm = %trace.algorithm,
            steps = trace.len()
        );
        let _enter = start_span.enter();

        self.abort_task();

        let (stream, receiver) = mpsc::unbounded_channel();
        let generation = {
            let mut inner = self.shared.lock();
            inner.generation += 1;
            inner.state.install(Arc::new(trace), input);
            self.shared.published.send_replace(inner.state.snapshot());
            inner.generation
        };

        info!(generation, delay_ms = delay.as_millis() as u64, "Playback started");
        self.task = Some(tokio::spawn(run_playback(
            Arc::clone(&self.shared),
            stream,
            generation,
            delay,
        )));
        receiver
    }

    /// Record `input` with `algorithm` and replay it
    ///
    /// Validation happens before anything is installed: on error the driver
    /// keeps its current run and snapshot untouched.
    pub fn start_sort(
        &mut self,
        algorithm: Algorithm,
        input: &[f64],
    ) -> Result<SnapshotStream, SortError> {
        let outcome = record(algorithm, input)?;
        Ok(self.start(outcome.trace, input.to_vec()))
    }

    /// Stop the active run and publish the idle snapshot
    ///
    /// Idempotent.
    pub fn cancel(&mut self) {
        let had_task = self.task.is_some();
        self.abort_task();

        let mut inner = self.shared.lock();
        inner.generation += 1;
        inner.state.reset();
        self.shared.published.send_replace(Snapshot::idle());
        if had_task {
            info!(generation = inner.generation, "Playback cancelled");
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Aborted previous playback task");
        }
    }
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        self.abort_task();
    }
}

async fn run_playback(
    shared: Arc<Shared>,
    stream: mpsc::UnboundedSender<Snapshot>,
    generation: u64,
    delay: Duration,
) {
    loop {
        tokio::time::sleep(delay).await;

        let mut inner = shared.lock();
        if inner.generation != generation {
            trace!(generation, "Stale playback task exiting");
            return;
        }
        let Some(snapshot) = inner.state.tick() else {
            return;
        };
        let finished = snapshot.is_finished();
        trace!(step = ?snapshot.step_index, finished, "Playback tick");

        shared.published.send_replace(snapshot.clone());
        // The caller may have dropped its stream; the watch still updates.
        let _ = stream.send(snapshot);
        drop(inner);

        if finished {
            info!(generation, "Playback finished");
            return;
        }
    }
}
