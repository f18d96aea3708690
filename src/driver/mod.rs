pub(crate) mod control;
pub(crate) mod frame;
pub(crate) mod host;
pub(crate) mod ticker;
