/// Configuration system
///
/// Every section is declared once with [`config_struct!`](crate::config_struct),
/// which embeds the defaults, so a missing file or a partial file both yield
/// a complete [`Config`]. The loaded value is handed to the components that
/// need it; nothing reads configuration from a global.
mod macros;
mod schemas;
mod utils;

pub use schemas::*;
pub use utils::{apply_env_overrides, load_config, load_config_from_path, CONFIG_FILE_PATH};
