use lmpreorder::engine::config::ReorderConfig;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub core_config: ReorderConfig,
}
