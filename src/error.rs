/*
 * Error type shared by every binding in this crate. Native calls report
 * failure through the thread's last-error code (or an HRESULT for OLE), and
 * the lazy loader can fail to find a library or symbol; all of these are
 * folded into `BindingError`.
 */

// Represents a failure surfaced by the binding layer.
//
// `Win32` carries the platform's last-error code captured right after the
// failing call; its `Display` output keeps the `Last error:<n>(0x<n>)` form
// callers may already be matching on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The system library could not be loaded.
    LibraryLoad {
        library: &'static str,
        message: String,
    },
    /// The library loaded but does not export the requested entry point.
    ProcNotFound {
        library: &'static str,
        symbol: &'static str,
        message: String,
    },
    /// A native call failed; `code` is the thread's last-error value.
    Win32 { context: String, code: u32 },
    /// An OLE call returned a failing HRESULT.
    Hresult { context: String, code: i32 },
    /// An argument cannot be represented in the native form.
    InvalidArgument(String),
}

impl BindingError {
    /*
     * Captures the calling thread's last-error code. Call this before doing
     * anything else after a failed native call (including logging), since
     * most system calls are free to overwrite the value.
     */
    pub fn last_error(context: impl Into<String>) -> Self {
        let code = last_error_code();
        BindingError::from_win32(context, code)
    }

    /*
     * Wraps a code already read with `last_error_code`. Use this when the
     * context has to be formatted: `format!` allocates, so read the code
     * first.
     */
    pub fn from_win32(context: impl Into<String>, code: u32) -> Self {
        BindingError::Win32 {
            context: context.into(),
            code,
        }
    }

    pub fn from_hresult(context: impl Into<String>, code: i32) -> Self {
        BindingError::Hresult {
            context: context.into(),
            code,
        }
    }

    /// The numeric OS code carried by this error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            BindingError::Win32 { code, .. } => Some(*code),
            BindingError::Hresult { code, .. } => Some(*code as u32),
            _ => None,
        }
    }
}

/// The calling thread's last-error code, read without touching it.
#[cfg(windows)]
pub fn last_error_code() -> u32 {
    // Statically linked, so reading it cannot trigger a library load that
    // would clobber the value we are after.
    unsafe { windows::Win32::Foundation::GetLastError().0 }
}

#[cfg(not(windows))]
pub fn last_error_code() -> u32 {
    std::io::Error::last_os_error()
        .raw_os_error()
        .map_or(0, |code| code as u32)
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::LibraryLoad { library, message } => {
                write!(f, "Failed to load {library}: {message}")
            }
            BindingError::ProcNotFound {
                library,
                symbol,
                message,
            } => write!(f, "Entry point {symbol} not found in {library}: {message}"),
            BindingError::Win32 { context, code } => {
                if context.is_empty() {
                    write!(f, "Last error:{code}(0x{code:x})")
                } else {
                    write!(f, "{context} Last error:{code}(0x{code:x})")
                }
            }
            BindingError::Hresult { context, code } => {
                write!(f, "{context} failed with HRESULT 0x{:08x}", *code as u32)
            }
            BindingError::InvalidArgument(s) => write!(f, "Invalid argument: {s}"),
        }
    }
}

impl std::error::Error for BindingError {}

/// A specialized `Result` type for binding calls.
pub type Result<T> = std::result::Result<T, BindingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win32_display_without_context() {
        let err = BindingError::Win32 {
            context: String::new(),
            code: 1400,
        };
        assert_eq!(err.to_string(), "Last error:1400(0x578)");
    }

    #[test]
    fn test_win32_display_with_context() {
        let err = BindingError::Win32 {
            context: "CreateWindowExW".to_string(),
            code: 5,
        };
        assert_eq!(err.to_string(), "CreateWindowExW Last error:5(0x5)");
        assert_eq!(err.code(), Some(5));
    }

    #[test]
    fn test_hresult_display_and_code() {
        // RPC_E_CHANGED_MODE
        let err = BindingError::from_hresult("CoInitializeEx", 0x8001_0106_u32 as i32);
        assert_eq!(
            err.to_string(),
            "CoInitializeEx failed with HRESULT 0x80010106"
        );
        assert_eq!(err.code(), Some(0x8001_0106));
    }

    #[test]
    fn test_from_win32_keeps_code_read_before_formatting() {
        // Arrange
        let code = 1410;

        // Act
        let err = BindingError::from_win32(format!("RegisterClassExW({})", "Demo"), code);

        // Assert
        assert_eq!(
            err,
            BindingError::Win32 {
                context: "RegisterClassExW(Demo)".to_string(),
                code: 1410,
            }
        );
        assert_eq!(err.to_string(), "RegisterClassExW(Demo) Last error:1410(0x582)");
    }

    #[test]
    fn test_last_error_matches_direct_read() {
        let expected = last_error_code();
        assert_eq!(BindingError::last_error("X").code(), Some(expected));
    }

    #[test]
    fn test_loader_errors_have_no_code() {
        let err = BindingError::LibraryLoad {
            library: "user32.dll",
            message: "not found".to_string(),
        };
        assert_eq!(err.code(), None);
        assert!(err.to_string().contains("user32.dll"));
    }
}
