use std::fmt;
use std::sync::mpsc;

use trireme_core::{PickerRequest, Reply};

/// Capabilities the bridge needs from the host activity.
pub trait Host {
    /// Start the system picker; its result comes back through
    /// `Bridge::on_activity_result` tagged with `request_code`.
    fn launch_picker(&mut self, request: &PickerRequest, request_code: i32);

    /// Whether the read-external-storage permission is currently held.
    fn read_permission_granted(&self) -> bool;

    /// Show the permission dialog; the answer comes back through
    /// `Bridge::on_request_permissions_result`.
    fn request_read_permission(&mut self, request_code: i32);
}

/// One-shot reply handle for a method-channel call.
pub struct Responder(Box<dyn FnOnce(Reply) + Send>);

impl Responder {
    pub fn new(reply: impl FnOnce(Reply) + Send + 'static) -> Self {
        Self(Box::new(reply))
    }

    /// Responder paired with a receiver, for hosts that poll.
    pub fn channel() -> (Self, mpsc::Receiver<Reply>) {
        let (tx, rx) = mpsc::channel();
        let responder = Self::new(move |reply| {
            let _ = tx.send(reply);
        });
        (responder, rx)
    }

    pub(crate) fn send(self, reply: Reply) {
        (self.0)(reply)
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Responder")
    }
}
