pub mod config_loader;
pub mod settings_model;

pub use config_loader::{find_config_file, load_config, CONFIG_FILE_NAME};
pub use settings_model::*;
