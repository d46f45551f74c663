use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::{
    client::DomoticzClient,
    snapshot::{build_snapshot, refresh_version},
};
use crate::{entity::Snapshot, error::ControllerError, published::Published};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Syncing,
}

/// Counts one sync in flight for as long as it is alive.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        InFlight(counter.clone())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Runs sync iterations against one controller and publishes the results.
///
/// Clones share the phase: it stays `Syncing` until every iteration started
/// through any clone has finished.
#[derive(Clone)]
pub struct Synchronizer {
    client: DomoticzClient,
    published: Arc<Published>,
    in_flight: Arc<AtomicUsize>,
}

impl Synchronizer {
    pub fn new(client: DomoticzClient, published: Arc<Published>) -> Self {
        Synchronizer {
            client,
            published,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn published(&self) -> &Arc<Published> {
        &self.published
    }

    pub fn phase(&self) -> SyncPhase {
        if self.in_flight.load(Ordering::Acquire) > 0 {
            SyncPhase::Syncing
        } else {
            SyncPhase::Idle
        }
    }

    /// Performs exactly one sync iteration.
    ///
    /// On success the new snapshot replaces the published one and the error
    /// record is cleared. On failure the published snapshot is left alone and
    /// the error message is recorded. The error is also returned so callers
    /// driving iterations by hand can inspect it.
    pub async fn sync_once(&self) -> Result<(), ControllerError> {
        let _in_flight = InFlight::enter(&self.in_flight);
        debug!("Starting Domoticz sync");

        refresh_version(&self.client, &self.published).await;
        match build_snapshot(&self.client).await {
            Ok(snapshot) => {
                log_changes(self.published.snapshot().as_deref(), &snapshot);
                self.published.publish(snapshot);
                Ok(())
            }
            Err(e) => {
                warn!("Domoticz sync failed, keeping previous state: {e}");
                self.published.record_failure(e.to_string());
                Err(e)
            }
        }
    }
}

fn counts(snapshot: &Snapshot) -> [usize; 6] {
    [
        snapshot.floors.len(),
        snapshot.rooms.len(),
        snapshot.lights.len(),
        snapshot.shutters.len(),
        snapshot.sensors.len(),
        snapshot.scenes.len(),
    ]
}

fn log_changes(previous: Option<&Snapshot>, next: &Snapshot) {
    if previous.map(counts) != Some(counts(next)) {
        let [floors, rooms, lights, shutters, sensors, scenes] = counts(next);
        info!(
            "Publishing {floors} floors, {rooms} rooms, {lights} lights, \
             {shutters} shutters, {sensors} sensors, {scenes} scenes"
        );
    }
}

/// Lifecycle handle of a running sync loop.
pub struct SyncHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Cancels the loop and waits for it to wind down. A sync already in
    /// flight runs to completion first.
    pub async fn stop(self) {
        self.cancel.cancel();

        if let Err(e) = self.task.await {
            warn!("Sync loop ended abnormally: {e}");
        }
    }
}

/// Periodically syncs Domoticz state into the published cell.
///
/// The next iteration is scheduled `interval` after the previous one
/// finished, so at most one sync is in flight at a time.
pub fn start_domoticz_sync_loop(synchronizer: Synchronizer, interval: Duration) -> SyncHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let task = tokio::spawn(async move {
        loop {
            // Failures are recorded in the published state by sync_once
            let _ = synchronizer.sync_once().await;

            tokio::select! {
                _ = token.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!("Domoticz sync loop stopped");
    });

    SyncHandle { cancel, task }
}
