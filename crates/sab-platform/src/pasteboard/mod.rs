//! General pasteboard adapters.
//!
//! macOS exposes a change counter, so polling is cheap there. Elsewhere the
//! counter is synthesized from a digest of the current contents.

mod common;
#[cfg(any(not(target_os = "macos"), test))]
mod digest;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(target_os = "macos"))]
mod polling;

#[cfg(target_os = "macos")]
pub use macos::MacOSPasteboard as LocalPasteboard;

#[cfg(not(target_os = "macos"))]
pub use polling::PollingPasteboard as LocalPasteboard;
