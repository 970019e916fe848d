use crate::{CallId, Locator, Reply};

/// MIME type the picker is scoped to.
pub const TORRENT_MIME_TYPE: &str = "application/x-bittorrent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the system file picker.
    LaunchPicker(PickerRequest),
    /// Ask the user for the read-external-storage permission.
    RequestReadPermission,
    /// Copy the locator's bytes into the cache; answer with `Msg::ImportFinished`.
    Import { call: CallId, locator: Locator },
    /// Complete a boundary call. Emitted exactly once per call.
    Respond { call: CallId, reply: Reply },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    pub mime_type: String,
    /// Only items that can be opened as a byte stream.
    pub openable_only: bool,
    /// Only items already present on the device.
    pub local_only: bool,
}

impl PickerRequest {
    pub fn for_mime_type(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }
}

impl Default for PickerRequest {
    fn default() -> Self {
        Self {
            mime_type: TORRENT_MIME_TYPE.to_string(),
            openable_only: true,
            local_only: true,
        }
    }
}
