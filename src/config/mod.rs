#[allow(clippy::module_inception)]
pub mod config;

pub use config::{
    config_path, default_token_file, get_token, load_config, load_config_from, read_token_file,
    Config,
};
