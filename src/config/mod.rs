pub(crate) mod proc_config;
