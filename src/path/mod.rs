pub(crate) mod builder;
pub(crate) mod outline;
pub(crate) mod segment;
