use std::path::PathBuf;

/// Outcome of an import as reported back by the host runtime.
/// The error side carries a description for logging only.
pub type ImportResult = Result<PathBuf, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Activity created (or recreated by a new intent) with optional launch data.
    Launched { data: Option<String> },
    /// Managed layer called `pickFile`.
    PickFileRequested { call: crate::CallId },
    /// Managed layer called `getOpenedUrl`.
    OpenedUrlRequested { call: crate::CallId },
    /// Managed layer called `getOpenedFile`; the host samples the current
    /// permission state when the call arrives.
    OpenedFileRequested {
        call: crate::CallId,
        permission_granted: bool,
    },
    /// The system picker returned.
    PickerClosed(PickOutcome),
    /// The permission dialog returned.
    PermissionResult { granted: bool },
    /// A previously requested import finished.
    ImportFinished {
        call: crate::CallId,
        result: ImportResult,
    },
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// User picked an item; raw locator string as returned by the picker.
    Picked(String),
    Cancelled,
    /// OK without data, or a result code we do not know.
    Unknown,
}
