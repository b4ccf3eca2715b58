use std::path::PathBuf;

/// Resolved application directories. Pure fact container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
