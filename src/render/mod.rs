pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod plan;
