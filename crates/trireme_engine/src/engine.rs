use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use bridge_logging::bridge_warn;
use url::Url;

use crate::{ContentImporter, ImportEvent, RequestId};

enum WorkerCommand {
    Import { request: RequestId, locator: Url },
}

/// Runs imports on a background thread so the caller's loop never blocks on I/O.
///
/// Results come back as [`ImportEvent`]s in submission order.
pub struct ImportWorker {
    cmd_tx: mpsc::Sender<WorkerCommand>,
    event_rx: mpsc::Receiver<ImportEvent>,
}

impl ImportWorker {
    pub fn new(importer: ContentImporter) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let event = handle_command(&importer, command);
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request: RequestId, locator: Url) {
        if self
            .cmd_tx
            .send(WorkerCommand::Import { request, locator })
            .is_err()
        {
            bridge_warn!("import worker is gone; request {} dropped", request);
        }
    }

    pub fn try_recv(&self) -> Option<ImportEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ImportEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn handle_command(importer: &ContentImporter, command: WorkerCommand) -> ImportEvent {
    match command {
        WorkerCommand::Import { request, locator } => ImportEvent {
            request,
            result: importer.import(&locator),
        },
    }
}
