/*
 * Conversions between Rust values and their native representations: UTF-16
 * string buffers handed to the OS, strings read back from it, and the
 * BOOL-style integers many entry points return.
 */

use crate::error::{BindingError, Result};
use crate::types::{Bool, RawHandle};
use std::ptr;

/*
 * An owned, NUL-terminated UTF-16 copy of a Rust string. Keep the value alive
 * for as long as the native side may read the pointer; the pointer is never
 * retained past the call by any binding in this crate.
 *
 * Interior NUL characters are copied as-is, but the native side stops
 * reading at the first one, so "a\0b" reaches the OS as "a".
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    pub fn new(s: &str) -> Self {
        let mut units: Vec<u16> = s.encode_utf16().collect();
        units.push(0);
        WideString { units }
    }

    /// Pointer to the first unit; valid even for an empty string.
    pub fn as_ptr(&self) -> *const u16 {
        self.units.as_ptr()
    }

    /*
     * Pointer suitable for optional string parameters: an empty string is
     * passed to the OS as NULL rather than as a pointer to a lone terminator.
     * APIs treat the two differently (e.g. MessageBoxW falls back to its
     * default caption only for NULL).
     */
    pub fn as_nullable_ptr(&self) -> *const u16 {
        if self.is_empty() {
            ptr::null()
        } else {
            self.as_ptr()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.len() <= 1
    }

    /// Number of UTF-16 units, excluding the terminator.
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    /// The encoded units without the terminator.
    pub fn as_units(&self) -> &[u16] {
        &self.units[..self.len()]
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        WideString::new(s)
    }
}

impl From<&String> for WideString {
    fn from(s: &String) -> Self {
        WideString::new(s)
    }
}

/// Decodes UTF-16 up to the first NUL (or the end of the slice).
pub fn from_wide(units: &[u16]) -> String {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..end])
}

/*
 * Decodes a NUL-terminated UTF-16 string owned by the OS. A null pointer is
 * read as the empty string.
 *
 * # Safety
 * `ptr` must be null or point to a readable, NUL-terminated UTF-16 sequence.
 */
pub unsafe fn from_wide_ptr(ptr: *const u16) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let mut len = 0usize;
    // SAFETY: the caller guarantees a terminator exists, so every unit up to
    // and including it is readable.
    unsafe {
        while *ptr.add(len) != 0 {
            len += 1;
        }
        String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len))
    }
}

/*
 * Interprets a BOOL-like return value. Only strictly positive values count as
 * true; GetMessageW, for one, returns -1 on failure and that must not read as
 * success.
 */
#[inline]
pub fn bool_from_native(value: isize) -> bool {
    value > 0
}

#[inline]
pub fn bool_to_native(value: bool) -> Bool {
    if value { 1 } else { 0 }
}

/*
 * Maps a null handle returned by `context` to the captured last error. Must
 * be called directly after the native call.
 */
pub(crate) fn non_null<H: RawHandle>(handle: H, context: &str) -> Result<H> {
    if handle.raw() == 0 {
        Err(BindingError::last_error(context))
    } else {
        Ok(handle)
    }
}

/// Maps a FALSE return from `context` to the captured last error.
pub(crate) fn check_bool(ret: Bool, context: &str) -> Result<()> {
    if bool_from_native(ret as isize) {
        Ok(())
    } else {
        Err(BindingError::last_error(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_string_is_nul_terminated() {
        let wide = WideString::new("Hi");
        assert_eq!(wide.as_units(), &[0x48, 0x69]);
        assert_eq!(wide.len(), 2);
        // SAFETY: the buffer holds len + 1 units.
        let terminator = unsafe { *wide.as_ptr().add(wide.len()) };
        assert_eq!(terminator, 0);
    }

    #[test]
    fn test_empty_string_marshals_to_null() {
        let empty = WideString::new("");
        assert!(empty.is_empty());
        assert!(empty.as_nullable_ptr().is_null());
        assert!(!empty.as_ptr().is_null());

        let text = WideString::new("x");
        assert_eq!(text.as_nullable_ptr(), text.as_ptr());
    }

    #[test]
    fn test_interior_nul_truncates_native_read() {
        // Arrange
        let wide = WideString::new("a\0b");

        // Act
        // SAFETY: the buffer is NUL-terminated and outlives the call.
        let seen_by_native = unsafe { from_wide_ptr(wide.as_ptr()) };

        // Assert
        assert_eq!(wide.len(), 3);
        assert_eq!(wide.as_units(), &[0x61, 0, 0x62]);
        assert_eq!(seen_by_native, "a");
    }

    #[test]
    fn test_non_bmp_characters_use_surrogate_pairs() {
        let wide = WideString::new("a😀");
        assert_eq!(wide.len(), 3);
        assert_eq!(from_wide(wide.as_units()), "a😀");
    }

    #[test]
    fn test_from_wide_stops_at_first_nul() {
        let units = [0x41, 0x42, 0, 0x43];
        assert_eq!(from_wide(&units), "AB");
        assert_eq!(from_wide(&[0x41, 0x42]), "AB");
    }

    #[test]
    fn test_from_wide_replaces_lone_surrogates() {
        let units = [0x41, 0xd800, 0x42, 0];
        assert_eq!(from_wide(&units), "A\u{fffd}B");
    }

    #[test]
    fn test_from_wide_ptr_handles_null_and_text() {
        assert_eq!(unsafe { from_wide_ptr(std::ptr::null()) }, "");
        let wide = WideString::new("Größe");
        assert_eq!(unsafe { from_wide_ptr(wide.as_ptr()) }, "Größe");
    }

    #[test]
    fn test_null_handle_and_false_map_to_errors() {
        use crate::types::Hwnd;
        assert_eq!(non_null(Hwnd(5), "X").unwrap(), Hwnd(5));
        match non_null(Hwnd::NULL, "GetDC") {
            Err(BindingError::Win32 { context, .. }) => assert_eq!(context, "GetDC"),
            other => panic!("expected Win32 error, got {other:?}"),
        }
        assert!(check_bool(1, "X").is_ok());
        assert!(check_bool(0, "X").is_err());
        assert!(check_bool(-1, "X").is_err());
    }

    #[test]
    fn test_bool_coercion() {
        assert!(bool_from_native(1));
        assert!(bool_from_native(42));
        assert!(!bool_from_native(0));
        assert!(!bool_from_native(-1));
        assert_eq!(bool_to_native(true), 1);
        assert_eq!(bool_to_native(false), 0);
    }
}
