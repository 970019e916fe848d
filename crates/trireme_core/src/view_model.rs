/// Kind of launch data still waiting to be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchKind {
    #[default]
    None,
    Url,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickPhase {
    #[default]
    Idle,
    AwaitingPick,
    Importing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileQueryPhase {
    #[default]
    Idle,
    AwaitingPermission,
    Importing,
}

/// Flat snapshot of the coordinator for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordinatorView {
    pub launch: LaunchKind,
    pub pick: PickPhase,
    pub file_query: FileQueryPhase,
}

impl CoordinatorView {
    pub fn is_idle(&self) -> bool {
        self.pick == PickPhase::Idle && self.file_query == FileQueryPhase::Idle
    }
}
