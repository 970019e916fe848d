use std::collections::HashMap;
use std::time::Duration;

use bridge_logging::{bridge_debug, bridge_info, bridge_warn};
use trireme_core::{CallId, Effect, Msg};
use trireme_engine::{ContentImporter, ImportEvent, ImportWorker};

use super::channel::{REQUEST_CODE_FILE_PICKER, REQUEST_CODE_READ_PERMISSION};
use super::host::{Host, Responder};

/// Carries out core effects and owns the reply handles of in-flight calls.
pub(crate) struct EffectRunner {
    worker: ImportWorker,
    responders: HashMap<CallId, Responder>,
}

impl EffectRunner {
    pub(crate) fn new(importer: ContentImporter) -> Self {
        Self {
            worker: ImportWorker::new(importer),
            responders: HashMap::new(),
        }
    }

    pub(crate) fn register(&mut self, call: CallId, responder: Responder) {
        self.responders.insert(call, responder);
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.responders.len()
    }

    pub(crate) fn run(&mut self, effects: Vec<Effect>, host: &mut dyn Host) {
        for effect in effects {
            match effect {
                Effect::LaunchPicker(request) => {
                    bridge_info!("launching picker for {}", request.mime_type);
                    host.launch_picker(&request, REQUEST_CODE_FILE_PICKER);
                }
                Effect::RequestReadPermission => {
                    bridge_info!("requesting read permission");
                    host.request_read_permission(REQUEST_CODE_READ_PERMISSION);
                }
                Effect::Import { call, locator } => {
                    bridge_debug!("call {} importing {}", call, locator);
                    self.worker.submit(call, locator.as_url().clone());
                }
                Effect::Respond { call, reply } => match self.responders.remove(&call) {
                    Some(responder) => {
                        if let Err(err) = &reply {
                            bridge_debug!("call {} answered with {}", call, err);
                        }
                        responder.send(reply);
                    }
                    None => bridge_warn!("no responder for call {}", call),
                },
            }
        }
    }

    /// Finished imports as core messages; waits up to `timeout` for the first one.
    pub(crate) fn poll_imports(&self, timeout: Option<Duration>) -> Vec<Msg> {
        let mut inbox = Vec::new();
        let first = match timeout {
            Some(timeout) => self.worker.recv_timeout(timeout),
            None => self.worker.try_recv(),
        };
        if let Some(event) = first {
            inbox.push(map_import_event(event));
            while let Some(event) = self.worker.try_recv() {
                inbox.push(map_import_event(event));
            }
        }
        inbox
    }
}

fn map_import_event(event: ImportEvent) -> Msg {
    let result = match event.result {
        Ok(imported) => Ok(imported.path),
        Err(err) => {
            bridge_warn!("import for call {} failed: {}", event.request, err);
            Err(err.to_string())
        }
    };
    Msg::ImportFinished {
        call: event.request,
        result,
    }
}
