/*
 * Bindings for kernel32.dll: last-error retrieval, locale queries and module
 * handles, plus the MAKELANGID/MAKELCID family of helpers.
 */

pub mod constants;

pub use constants::*;

use crate::error::{BindingError, Result, last_error_code};
use crate::marshal::{WideString, from_wide};
use crate::native::native_procs;
use crate::types::{Hmodule, Langid};
use std::ptr;

pub type Lcid = u32;
pub type LcType = u32;

native_procs! { KERNEL32;
    GET_LAST_ERROR: "GetLastError" => fn() -> u32;
    GET_LOCALE_INFO: "GetLocaleInfoW" => fn(Lcid, LcType, *mut u16, i32) -> i32;
    GET_MODULE_HANDLE: "GetModuleHandleW" => fn(*const u16) -> Hmodule;
    GET_USER_DEFAULT_LCID: "GetUserDefaultLCID" => fn() -> Lcid;
    GET_USER_DEFAULT_UI_LANGUAGE: "GetUserDefaultUILanguage" => fn() -> Langid;
}

/*
 * Reads the calling thread's last-error code through the library export.
 * Prefer the code carried by `BindingError::Win32`: resolving this entry
 * point for the first time may itself reset the value.
 */
pub fn get_last_error() -> Result<u32> {
    let f = GET_LAST_ERROR.get()?;
    Ok(unsafe { f() })
}

/*
 * Queries one piece of locale information, e.g. the ISO 639 language name
 * for `LOCALE_USER_DEFAULT`. The first call asks for the required buffer
 * size (terminator included), the second fills it.
 */
pub fn get_locale_info(lcid: Lcid, lctype: LcType) -> Result<String> {
    let f = GET_LOCALE_INFO.get()?;
    let required = unsafe { f(lcid, lctype, ptr::null_mut(), 0) };
    if required <= 0 {
        let code = last_error_code();
        return Err(BindingError::from_win32(
            format!("GetLocaleInfoW({lcid:#06x}, {lctype:#x})"),
            code,
        ));
    }

    let mut buffer = vec![0u16; required as usize];
    let written = unsafe { f(lcid, lctype, buffer.as_mut_ptr(), required) };
    if written <= 0 {
        let code = last_error_code();
        return Err(BindingError::from_win32(
            format!("GetLocaleInfoW({lcid:#06x}, {lctype:#x})"),
            code,
        ));
    }
    Ok(from_wide(&buffer[..written as usize]))
}

/*
 * Returns the handle of a module already loaded into the process. `None` or
 * an empty name returns the executable that started the process.
 */
pub fn get_module_handle(module_name: Option<&str>) -> Result<Hmodule> {
    let f = GET_MODULE_HANDLE.get()?;
    let name = WideString::new(module_name.unwrap_or(""));
    let module = unsafe { f(name.as_nullable_ptr()) };
    if module.is_null() {
        let code = last_error_code();
        return Err(BindingError::from_win32(
            format!("GetModuleHandleW({})", module_name.unwrap_or("<process>")),
            code,
        ));
    }
    Ok(module)
}

pub fn get_user_default_lcid() -> Result<Lcid> {
    let f = GET_USER_DEFAULT_LCID.get()?;
    Ok(unsafe { f() })
}

pub fn get_user_default_ui_language() -> Result<Langid> {
    let f = GET_USER_DEFAULT_UI_LANGUAGE.get()?;
    Ok(unsafe { f() })
}

// --- Language id helpers (winnt.h) ---

pub const fn make_langid(primary: Langid, sub: Langid) -> Langid {
    (sub << 10) | primary
}

pub const fn primary_langid(langid: Langid) -> Langid {
    langid & 0x3ff
}

pub const fn sub_langid(langid: Langid) -> Langid {
    langid >> 10
}

pub const fn make_lcid(langid: Langid, sort_id: u32) -> Lcid {
    (sort_id << 16) | langid as u32
}

pub const fn langid_from_lcid(lcid: Lcid) -> Langid {
    lcid as Langid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_ids_are_built_from_langids() {
        let user_default = make_lcid(make_langid(LANG_NEUTRAL, SUBLANG_DEFAULT), SORT_DEFAULT);
        let system_default =
            make_lcid(make_langid(LANG_NEUTRAL, SUBLANG_SYS_DEFAULT), SORT_DEFAULT);

        assert_eq!(user_default, LOCALE_USER_DEFAULT);
        assert_eq!(system_default, LOCALE_SYSTEM_DEFAULT);
    }

    #[test]
    fn test_langid_round_trips_through_its_parts() {
        let en_us = make_langid(LANG_ENGLISH, SUBLANG_ENGLISH_US);
        assert_eq!(en_us, 0x0409);
        assert_eq!(primary_langid(en_us), LANG_ENGLISH);
        assert_eq!(sub_langid(en_us), SUBLANG_ENGLISH_US);
        assert_eq!(langid_from_lcid(make_lcid(en_us, 0x1)), en_us);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_wrappers_fail_cleanly_without_kernel32() {
        assert!(matches!(
            get_module_handle(None),
            Err(BindingError::LibraryLoad {
                library: "kernel32.dll",
                ..
            })
        ));
        assert!(get_locale_info(LOCALE_USER_DEFAULT, LOCALE_SISO639LANGNAME).is_err());
    }

    #[cfg(windows)]
    #[test]
    fn test_current_module_handle_is_not_null() {
        let module = get_module_handle(None).unwrap();
        assert!(!module.is_null());
        assert_eq!(get_module_handle(Some("")).unwrap(), module);
        assert!(!get_module_handle(Some("kernel32.dll")).unwrap().is_null());
    }

    #[cfg(windows)]
    #[test]
    fn test_unknown_module_reports_last_error() {
        let err = get_module_handle(Some("win32_bind_not_loaded.dll")).unwrap_err();
        // ERROR_MOD_NOT_FOUND
        assert_eq!(err.code(), Some(126));
    }

    #[cfg(windows)]
    #[test]
    fn test_invariant_locale_names() {
        let lang = get_locale_info(LOCALE_INVARIANT, LOCALE_SISO639LANGNAME).unwrap();
        let country = get_locale_info(LOCALE_INVARIANT, LOCALE_SISO3166CTRYNAME).unwrap();
        assert_eq!(lang, "iv");
        assert_eq!(country, "IV");
        assert!(!lang.ends_with('\0'));
    }

    #[cfg(windows)]
    #[test]
    fn test_user_default_lcid_agrees_with_ui_language_shape() {
        let lcid = get_user_default_lcid().unwrap();
        assert_ne!(lcid, 0);
        assert_ne!(primary_langid(get_user_default_ui_language().unwrap()), 0);
    }
}
