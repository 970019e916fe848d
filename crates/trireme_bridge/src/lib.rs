//! Trireme bridge: host-facing runtime for the pick / open-with coordinator.
//!
//! The host activity forwards its lifecycle callbacks and method-channel calls
//! to a [`Bridge`]; the bridge feeds them through the pure core state machine
//! and carries out the resulting effects (picker launches, permission
//! requests, imports and replies).
mod platform;

pub use platform::app::Bridge;
pub use platform::channel::{
    ActivityResult, Method, CHANNEL, REQUEST_CODE_FILE_PICKER, REQUEST_CODE_READ_PERMISSION,
};
pub use platform::host::{Host, Responder};
pub use platform::logging::{initialize as initialize_logging, LogDestination};
pub use platform::persistence::{BridgeConfig, ConfigError};

pub use trireme_core::{BridgeError, CoordinatorView, ErrorCode, PickerRequest, Reply};
pub use trireme_engine::{ContentResolver, ImportSettings};
