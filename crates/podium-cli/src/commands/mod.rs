pub mod config;
pub mod lookup;

pub use config::{init_config, show_config, show_example, show_path};
pub use lookup::{list_speakers, list_themes, random_summary, show_speaker, show_theme};
