use sab_core::ports::FrontmostAppPort;
use sab_core::SourceApp;

/// No portable way to name the focused application. Every capture is
/// attributed to the unknown source and the exclusion list never matches.
#[derive(Debug, Default)]
pub struct UnsupportedFrontmostApp;

impl UnsupportedFrontmostApp {
    pub fn new() -> Self {
        Self
    }
}

impl FrontmostAppPort for UnsupportedFrontmostApp {
    fn frontmost_app(&self) -> Option<SourceApp> {
        None
    }
}
