//! Trireme bridge core: pure pick/open-with coordinator state machine.
mod effect;
mod error;
mod launch;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, PickerRequest, TORRENT_MIME_TYPE};
pub use error::{BridgeError, ErrorCode, Reply};
pub use launch::{LaunchEvent, Locator, SCHEME_CONTENT, SCHEME_FILE};
pub use msg::{ImportResult, Msg, PickOutcome};
pub use state::{BridgeState, CallId, FileQuery, PickSlot};
pub use update::update;
pub use view_model::{CoordinatorView, FileQueryPhase, LaunchKind, PickPhase};
