use std::sync::Arc;
use std::time::Duration;

use bridge_logging::{bridge_debug, bridge_warn};
use trireme_core::{
    update, BridgeError, BridgeState, CallId, CoordinatorView, ErrorCode, Msg, PickerRequest,
};
use trireme_engine::{ContentImporter, ContentResolver, SchemeRouter, CONTENT_SCHEME};

use super::channel::{ActivityResult, Method, REQUEST_CODE_FILE_PICKER, REQUEST_CODE_READ_PERMISSION};
use super::effects::EffectRunner;
use super::host::{Host, Responder};
use super::persistence::BridgeConfig;

/// Single-threaded driver: every host callback becomes a core message.
///
/// All methods are meant to be called from the host's main thread. Imports
/// run on a worker; call [`Bridge::pump`] from the host loop to deliver their
/// results.
pub struct Bridge<H: Host> {
    host: H,
    state: BridgeState,
    effects: EffectRunner,
    next_call: CallId,
}

impl<H: Host> Bridge<H> {
    /// `content_resolver` serves `content://` locators; `file://` locators
    /// are read from the local filesystem.
    pub fn new(host: H, content_resolver: Arc<dyn ContentResolver>, config: &BridgeConfig) -> Self {
        let router = SchemeRouter::new().with_route(CONTENT_SCHEME, content_resolver);
        let importer = ContentImporter::new(Arc::new(router), config.import.clone());
        Self {
            host,
            state: BridgeState::with_picker(PickerRequest::for_mime_type(
                config.picker_mime_type.clone(),
            )),
            effects: EffectRunner::new(importer),
            next_call: 1,
        }
    }

    /// Activity created with the launch intent's data, if any.
    pub fn on_create(&mut self, launch_data: Option<&str>) {
        self.dispatch(Msg::Launched {
            data: launch_data.map(str::to_owned),
        });
    }

    /// A new intent arrived; the host recreates the activity, so the stored
    /// launch event is replaced.
    pub fn on_new_intent(&mut self, launch_data: Option<&str>) {
        self.on_create(launch_data);
    }

    /// Route a method-channel call by name.
    pub fn handle_method_call(&mut self, name: &str, responder: Responder) {
        let Some(method) = Method::parse(name) else {
            bridge_warn!("method {:?} not implemented", name);
            responder.send(Err(BridgeError::new(ErrorCode::NotImplemented)));
            return;
        };
        bridge_debug!("method call {}", method.name());
        match method {
            Method::PickFile => self.pick_file(responder),
            Method::GetOpenedUrl => self.get_opened_url(responder),
            Method::GetOpenedFile => self.get_opened_file(responder),
        }
    }

    pub fn pick_file(&mut self, responder: Responder) {
        let call = self.register(responder);
        self.dispatch(Msg::PickFileRequested { call });
    }

    pub fn get_opened_url(&mut self, responder: Responder) {
        let call = self.register(responder);
        self.dispatch(Msg::OpenedUrlRequested { call });
    }

    pub fn get_opened_file(&mut self, responder: Responder) {
        let call = self.register(responder);
        let permission_granted = self.host.read_permission_granted();
        self.dispatch(Msg::OpenedFileRequested {
            call,
            permission_granted,
        });
    }

    pub fn on_activity_result(&mut self, request_code: i32, result: ActivityResult) {
        if request_code != REQUEST_CODE_FILE_PICKER {
            bridge_debug!("ignoring activity result for request {}", request_code);
            return;
        }
        self.dispatch(Msg::PickerClosed(result.into()));
    }

    pub fn on_request_permissions_result(&mut self, request_code: i32, granted: bool) {
        if request_code != REQUEST_CODE_READ_PERMISSION {
            bridge_debug!("ignoring permission result for request {}", request_code);
            return;
        }
        self.dispatch(Msg::PermissionResult { granted });
    }

    /// Deliver finished imports without blocking. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        self.deliver_imports(None)
    }

    /// Like [`Bridge::pump`], but waits up to `timeout` for an import to finish.
    pub fn pump_blocking(&mut self, timeout: Duration) -> usize {
        self.deliver_imports(Some(timeout))
    }

    pub fn view(&self) -> CoordinatorView {
        self.state.view()
    }

    /// Calls still waiting for a reply.
    pub fn pending_calls(&self) -> usize {
        self.effects.in_flight()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn register(&mut self, responder: Responder) -> CallId {
        let call = self.next_call;
        self.next_call += 1;
        self.effects.register(call, responder);
        call
    }

    fn deliver_imports(&mut self, timeout: Option<Duration>) -> usize {
        let inbox = self.effects.poll_imports(timeout);
        let handled = inbox.len();
        for msg in inbox {
            self.dispatch(msg);
        }
        handled
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects, &mut self.host);
    }
}
