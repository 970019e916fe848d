use trireme_core::PickOutcome;

/// Method channel name shared with the managed layer.
pub const CHANNEL: &str = "org.deluge.trireme";
pub const REQUEST_CODE_FILE_PICKER: i32 = 0;
pub const REQUEST_CODE_READ_PERMISSION: i32 = 1;

/// Calls the managed layer can make over [`CHANNEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    PickFile,
    GetOpenedUrl,
    GetOpenedFile,
}

impl Method {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pickFile" => Some(Method::PickFile),
            "getOpenedUrl" => Some(Method::GetOpenedUrl),
            "getOpenedFile" => Some(Method::GetOpenedFile),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::PickFile => "pickFile",
            Method::GetOpenedUrl => "getOpenedUrl",
            Method::GetOpenedFile => "getOpenedFile",
        }
    }
}

/// Activity result as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityResult {
    /// `RESULT_OK`, with the returned data locator if any.
    Ok(Option<String>),
    Canceled,
    /// Any other result code.
    Other(i32),
}

impl From<ActivityResult> for PickOutcome {
    fn from(result: ActivityResult) -> Self {
        match result {
            ActivityResult::Ok(Some(data)) => PickOutcome::Picked(data),
            ActivityResult::Canceled => PickOutcome::Cancelled,
            ActivityResult::Ok(None) | ActivityResult::Other(_) => PickOutcome::Unknown,
        }
    }
}
