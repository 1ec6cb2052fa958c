/*
 * Lazy loading of the system libraries and their entry points. Each library
 * is opened at most once per process, on the first call that needs it, and
 * each entry point is resolved at most once and cached as a typed
 * `extern "system"` function pointer. A failed load or lookup is cached too,
 * so every later call reports the same error without retrying.
 *
 * Nothing links against import libraries. Off Windows the libraries never
 * load, and every binding fails with `BindingError::LibraryLoad`.
 */

use crate::error::{BindingError, Result};
use libloading::Library;
use std::sync::OnceLock;

pub(crate) static USER32: NativeLibrary = NativeLibrary::new("user32.dll");
pub(crate) static KERNEL32: NativeLibrary = NativeLibrary::new("kernel32.dll");
pub(crate) static GDI32: NativeLibrary = NativeLibrary::new("gdi32.dll");
pub(crate) static OLE32: NativeLibrary = NativeLibrary::new("ole32.dll");

// A process-wide handle to a dynamically loaded system library.
pub struct NativeLibrary {
    name: &'static str,
    library: OnceLock<Result<Library>>,
}

impl NativeLibrary {
    pub const fn new(name: &'static str) -> Self {
        NativeLibrary {
            name,
            library: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Loads the library if needed and reports whether it is usable.
    pub fn is_available(&self) -> bool {
        self.load().is_ok()
    }

    pub(crate) fn load(&self) -> Result<&Library> {
        self.library
            .get_or_init(|| {
                log::debug!("NativeLibrary: Loading '{}'", self.name);
                // SAFETY: only system libraries are loaded here; their
                // initialisation routines have no preconditions on our side.
                unsafe { Library::new(self.name) }.map_err(|e| {
                    log::warn!("NativeLibrary: Failed to load '{}': {}", self.name, e);
                    BindingError::LibraryLoad {
                        library: self.name,
                        message: e.to_string(),
                    }
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

/*
 * One exported function of a `NativeLibrary`, typed as `F` (an
 * `unsafe extern "system" fn(...)` pointer). Declared as a `static` next to
 * the wrapper that uses it, usually through `native_procs!`.
 */
pub struct NativeProc<F: 'static> {
    library: &'static NativeLibrary,
    symbol: &'static str,
    address: OnceLock<Result<F>>,
}

impl<F: Copy> NativeProc<F> {
    /*
     * # Safety
     * `F` must be a function pointer type whose signature and calling
     * convention match the native export named `symbol`.
     */
    pub const unsafe fn new(library: &'static NativeLibrary, symbol: &'static str) -> Self {
        NativeProc {
            library,
            symbol,
            address: OnceLock::new(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Returns the resolved function pointer, resolving it on first use.
    pub fn get(&self) -> Result<F> {
        self.address.get_or_init(|| self.resolve()).clone()
    }

    fn resolve(&self) -> Result<F> {
        let library = self.library.load()?;
        // SAFETY: `new` requires `F` to match the export's signature.
        let symbol = unsafe { library.get::<F>(self.symbol.as_bytes()) }.map_err(|e| {
            log::warn!(
                "NativeProc: '{}' not found in '{}': {}",
                self.symbol,
                self.library.name,
                e
            );
            BindingError::ProcNotFound {
                library: self.library.name,
                symbol: self.symbol,
                message: e.to_string(),
            }
        })?;
        log::trace!(
            "NativeProc: Resolved '{}!{}'",
            self.library.name,
            self.symbol
        );
        Ok(*symbol)
    }
}

/*
 * Declares `NativeProc` statics for one library:
 *
 *     native_procs! { USER32;
 *         DESTROY_WINDOW: "DestroyWindow" => fn(Hwnd) -> Bool;
 *     }
 */
macro_rules! native_procs {
    ($library:ident; $($name:ident: $symbol:literal => fn($($arg:ty),* $(,)?) $(-> $ret:ty)?;)*) => {
        $(
            static $name: $crate::native::NativeProc<
                unsafe extern "system" fn($($arg),*) $(-> $ret)?,
            > = unsafe { $crate::native::NativeProc::new(&$crate::native::$library, $symbol) };
        )*
    };
}

pub(crate) use native_procs;
