/*
 * Thin, typed bindings to a subset of the Win32 API: gdi32, kernel32, user32
 * and ole32. Each wrapper marshals its arguments (UTF-16 strings, resource
 * names, ABI-exact structures), forwards to exactly one native entry point
 * and turns the raw result into a `Result`. System libraries are loaded on
 * first use, so the crate builds and its pure parts run on any host.
 *
 * The library never installs a logger; it only emits through the `log`
 * facade.
 */

pub mod error;
pub mod gdi32;
pub mod kernel32;
pub mod marshal;
pub mod native;
pub mod ole32;
pub mod resource;
pub mod types;
pub mod user32;

pub use error::{BindingError, Result};
pub use marshal::WideString;
pub use resource::ResourceName;
pub use types::*;
