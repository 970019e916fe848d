pub(crate) mod app;
pub(crate) mod channel;
pub(crate) mod effects;
pub(crate) mod host;
pub(crate) mod logging;
pub(crate) mod persistence;
