//! ID type wrappers for type safety.

mod clipboard;

pub use clipboard::EntryId;
