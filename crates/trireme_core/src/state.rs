use crate::view_model::{CoordinatorView, FileQueryPhase, LaunchKind, PickPhase};
use crate::{LaunchEvent, Locator, PickerRequest};

/// Correlates a boundary call with its eventual reply.
pub type CallId = u64;

/// Slot for the single outstanding `pickFile` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickSlot {
    #[default]
    Idle,
    AwaitingPick { call: CallId },
    Importing { call: CallId },
}

/// Slot for the single outstanding `getOpenedFile` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileQuery {
    #[default]
    Idle,
    /// Parked until the permission dialog returns; the locator is retried on grant.
    AwaitingPermission { call: CallId, locator: Locator },
    Importing { call: CallId },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BridgeState {
    pub(crate) launch: LaunchEvent,
    pub(crate) pick: PickSlot,
    pub(crate) file_query: FileQuery,
    pub(crate) picker: PickerRequest,
}

impl BridgeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose picker launches use `picker` instead of the torrent default.
    pub fn with_picker(picker: PickerRequest) -> Self {
        Self {
            picker,
            ..Self::default()
        }
    }

    pub fn launch(&self) -> &LaunchEvent {
        &self.launch
    }

    pub fn pick(&self) -> &PickSlot {
        &self.pick
    }

    pub fn file_query(&self) -> &FileQuery {
        &self.file_query
    }

    pub fn view(&self) -> CoordinatorView {
        let launch = match self.launch {
            LaunchEvent::None => LaunchKind::None,
            LaunchEvent::UrlOpen(_) => LaunchKind::Url,
            LaunchEvent::FileOpen(_) => LaunchKind::File,
        };
        let pick = match self.pick {
            PickSlot::Idle => PickPhase::Idle,
            PickSlot::AwaitingPick { .. } => PickPhase::AwaitingPick,
            PickSlot::Importing { .. } => PickPhase::Importing,
        };
        let file_query = match self.file_query {
            FileQuery::Idle => FileQueryPhase::Idle,
            FileQuery::AwaitingPermission { .. } => FileQueryPhase::AwaitingPermission,
            FileQuery::Importing { .. } => FileQueryPhase::Importing,
        };
        CoordinatorView {
            launch,
            pick,
            file_query,
        }
    }
}
