use bridge_logging::{bridge_debug, bridge_warn};

use crate::{
    BridgeError, BridgeState, CallId, Effect, ErrorCode, FileQuery, ImportResult, LaunchEvent,
    Locator, Msg, PickOutcome, PickSlot,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every boundary call is answered by exactly one `Effect::Respond`, either
/// immediately or once the picker, permission dialog or import comes back.
pub fn update(mut state: BridgeState, msg: Msg) -> (BridgeState, Vec<Effect>) {
    let effects = match msg {
        Msg::Launched { data } => {
            state.launch = LaunchEvent::classify(data.as_deref());
            bridge_debug!("launch classified as {:?}", state.view().launch);
            Vec::new()
        }
        Msg::PickFileRequested { call } => {
            if state.pick != PickSlot::Idle {
                return (state, vec![reject(call, ErrorCode::AlreadyShowing)]);
            }
            state.pick = PickSlot::AwaitingPick { call };
            vec![Effect::LaunchPicker(state.picker.clone())]
        }
        Msg::PickerClosed(outcome) => on_picker_closed(&mut state, outcome),
        Msg::OpenedUrlRequested { call } => match std::mem::take(&mut state.launch) {
            LaunchEvent::UrlOpen(url) => vec![Effect::Respond {
                call,
                reply: Ok(url),
            }],
            other => {
                // A stored file event belongs to getOpenedFile; leave it alone.
                state.launch = other;
                vec![reject(call, ErrorCode::NoData)]
            }
        },
        Msg::OpenedFileRequested {
            call,
            permission_granted,
        } => on_opened_file_requested(&mut state, call, permission_granted),
        Msg::PermissionResult { granted } => on_permission_result(&mut state, granted),
        Msg::ImportFinished { call, result } => on_import_finished(&mut state, call, result),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn on_picker_closed(state: &mut BridgeState, outcome: PickOutcome) -> Vec<Effect> {
    let PickSlot::AwaitingPick { call } = state.pick else {
        bridge_warn!("picker result {:?} with no pick outstanding", outcome);
        return Vec::new();
    };
    match outcome {
        PickOutcome::Cancelled => {
            state.pick = PickSlot::Idle;
            vec![reject(call, ErrorCode::Cancelled)]
        }
        PickOutcome::Picked(raw) => match Locator::parse(&raw) {
            Ok(locator) => {
                state.pick = PickSlot::Importing { call };
                vec![Effect::Import { call, locator }]
            }
            Err(err) => {
                bridge_warn!("picker returned unusable locator {:?}: {}", raw, err);
                state.pick = PickSlot::Idle;
                vec![reject(call, ErrorCode::Error)]
            }
        },
        PickOutcome::Unknown => {
            state.pick = PickSlot::Idle;
            vec![reject(call, ErrorCode::Error)]
        }
    }
}

fn on_opened_file_requested(
    state: &mut BridgeState,
    call: CallId,
    permission_granted: bool,
) -> Vec<Effect> {
    if state.file_query != FileQuery::Idle {
        return vec![reject(call, ErrorCode::AlreadyPending)];
    }
    let LaunchEvent::FileOpen(locator) = &state.launch else {
        return vec![reject(call, ErrorCode::NoData)];
    };

    if permission_granted {
        let locator = locator.clone();
        state.launch = LaunchEvent::None;
        state.file_query = FileQuery::Importing { call };
        return vec![Effect::Import { call, locator }];
    }

    // The launch event stays stored until the import actually starts.
    state.file_query = FileQuery::AwaitingPermission {
        call,
        locator: locator.clone(),
    };
    vec![Effect::RequestReadPermission]
}

fn on_permission_result(state: &mut BridgeState, granted: bool) -> Vec<Effect> {
    let (call, locator) = match std::mem::take(&mut state.file_query) {
        FileQuery::AwaitingPermission { call, locator } => (call, locator),
        other => {
            // An idle or importing query is not ours to touch.
            state.file_query = other;
            bridge_warn!("permission result (granted={}) with no file query waiting", granted);
            return Vec::new();
        }
    };

    if !granted {
        return vec![reject(call, ErrorCode::PermissionDenied)];
    }

    if matches!(&state.launch, LaunchEvent::FileOpen(stored) if *stored == locator) {
        state.launch = LaunchEvent::None;
    }
    state.file_query = FileQuery::Importing { call };
    vec![Effect::Import { call, locator }]
}

fn on_import_finished(state: &mut BridgeState, call: CallId, result: ImportResult) -> Vec<Effect> {
    let failure = if state.pick == (PickSlot::Importing { call }) {
        state.pick = PickSlot::Idle;
        BridgeError::new(ErrorCode::ImportError)
    } else if state.file_query == (FileQuery::Importing { call }) {
        state.file_query = FileQuery::Idle;
        BridgeError::with_message(ErrorCode::Error, "Error opening file")
    } else {
        bridge_warn!("import result for call {} that is not importing", call);
        return Vec::new();
    };

    let reply = match result {
        Ok(path) => Ok(path.display().to_string()),
        Err(message) => {
            bridge_warn!("import for call {} failed: {}", call, message);
            Err(failure)
        }
    };
    vec![Effect::Respond { call, reply }]
}

fn reject(call: CallId, code: ErrorCode) -> Effect {
    Effect::Respond {
        call,
        reply: Err(BridgeError::new(code)),
    }
}
