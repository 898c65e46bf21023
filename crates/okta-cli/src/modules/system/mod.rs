pub(crate) mod config;
pub(crate) mod output;

pub(crate) use config::client_config;
