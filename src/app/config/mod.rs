mod load_manifest;
mod load_settings;

pub use load_manifest::load_manifest;
pub use load_settings::{detect_project_root, load_settings};
