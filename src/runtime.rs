//! Runtime wiring for the snapshot poller

use crate::events::Event;
use crate::monitor::StudentSource;
use crate::workers::core::{EventSender, WorkerConfig};
use crate::workers::poller::SnapshotPoller;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the snapshot poller and return the receiving end of its event stream
pub fn start_poller(
    source: Box<dyn StudentSource>,
    config: WorkerConfig,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, JoinHandle<()>) {
    let (event_sender, event_receiver) =
        mpsc::channel::<Event>(crate::consts::cli_consts::EVENT_QUEUE_SIZE);

    let poller = SnapshotPoller::new(source, EventSender::new(event_sender), config);
    let join_handle = poller.run(shutdown);
    (event_receiver, join_handle)
}
