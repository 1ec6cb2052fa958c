/*
 * GUIDs and the COM apartment entry points from ole32.dll. OLE reports
 * failure through its HRESULT return value rather than the last-error code.
 */

use crate::error::{BindingError, Result};
use crate::native::native_procs;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ffi::c_void;
use std::fmt;
use std::ptr;
use std::str::FromStr;

pub type Hresult = i32;

pub const S_OK: Hresult = 0;
pub const S_FALSE: Hresult = 1;
pub const RPC_E_CHANGED_MODE: Hresult = 0x8001_0106_u32 as i32;

// COINIT flags for co_initialize_ex
pub const COINIT_MULTITHREADED: u32 = 0x0;
pub const COINIT_APARTMENTTHREADED: u32 = 0x2;
pub const COINIT_DISABLE_OLE1DDE: u32 = 0x4;
pub const COINIT_SPEED_OVER_MEMORY: u32 = 0x8;

#[inline]
pub const fn succeeded(hr: Hresult) -> bool {
    hr >= 0
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

pub type Iid = Guid;
pub type Clsid = Guid;
pub type RefIid = *const Iid;
pub type RefClsid = *const Clsid;

#[cfg(windows)]
const _: () = assert!(std::mem::size_of::<Guid>() == std::mem::size_of::<windows::core::GUID>());

impl Guid {
    pub const NULL: Guid = Guid::from_u128(0);

    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Guid {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Builds a GUID from its textual digits read as one big-endian number.
    pub const fn from_u128(value: u128) -> Self {
        let tail = (value as u64).to_be_bytes();
        Guid {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: tail,
        }
    }

    pub const fn to_u128(&self) -> u128 {
        ((self.data1 as u128) << 96)
            | ((self.data2 as u128) << 80)
            | ((self.data3 as u128) << 64)
            | u64::from_be_bytes(self.data4) as u128
    }

    pub const fn is_null(&self) -> bool {
        self.to_u128() == 0
    }
}

// Registry form: {XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}
impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

impl FromStr for Guid {
    type Err = BindingError;

    /// Accepts the registry form with or without the surrounding braces.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BindingError::InvalidArgument(format!("'{s}' is not a GUID"));
        let body = match s.strip_prefix('{') {
            Some(rest) => rest.strip_suffix('}').ok_or_else(invalid)?,
            None => s,
        };

        let groups: Vec<&str> = body.split('-').collect();
        let expected_lengths = [8, 4, 4, 4, 12];
        if groups.len() != expected_lengths.len()
            || groups
                .iter()
                .zip(expected_lengths)
                .any(|(group, len)| {
                    group.len() != len || !group.bytes().all(|b| b.is_ascii_hexdigit())
                })
        {
            return Err(invalid());
        }

        let hex: String = groups.concat();
        let value = u128::from_str_radix(&hex, 16).map_err(|_| invalid())?;
        Ok(Guid::from_u128(value))
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

native_procs! { OLE32;
    CO_INITIALIZE_EX: "CoInitializeEx" => fn(*const c_void, u32) -> Hresult;
    CO_UNINITIALIZE: "CoUninitialize" => fn();
    CO_CREATE_GUID: "CoCreateGuid" => fn(*mut Guid) -> Hresult;
}

/*
 * Initializes COM on the calling thread. Returns `true` when this call did
 * the initialization and `false` when the thread was already initialized
 * with the same model (S_FALSE); both must be balanced by `co_uninitialize`.
 * A different model yields `Hresult` with RPC_E_CHANGED_MODE.
 */
pub fn co_initialize_ex(coinit: u32) -> Result<bool> {
    let f = CO_INITIALIZE_EX.get()?;
    match unsafe { f(ptr::null(), coinit) } {
        S_OK => {
            log::debug!("Ole32: COM initialized (flags {coinit:#x})");
            Ok(true)
        }
        S_FALSE => Ok(false),
        hr if succeeded(hr) => Ok(false),
        hr => Err(BindingError::from_hresult("CoInitializeEx", hr)),
    }
}

pub fn co_uninitialize() -> Result<()> {
    let f = CO_UNINITIALIZE.get()?;
    unsafe { f() };
    Ok(())
}

pub fn co_create_guid() -> Result<Guid> {
    let f = CO_CREATE_GUID.get()?;
    let mut guid = Guid::NULL;
    let hr = unsafe { f(&mut guid) };
    if !succeeded(hr) {
        return Err(BindingError::from_hresult("CoCreateGuid", hr));
    }
    Ok(guid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::mem::size_of;

    // IID_IUnknown
    const IUNKNOWN: Guid = Guid::new(
        0x0000_0000,
        0x0000,
        0x0000,
        [0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
    );

    #[test]
    fn test_guid_layout() {
        assert_eq!(size_of::<Guid>(), 16);
        assert_eq!(std::mem::align_of::<Guid>(), 4);
    }

    #[test]
    fn test_display_uses_registry_form() {
        assert_eq!(
            IUNKNOWN.to_string(),
            "{00000000-0000-0000-C000-000000000046}"
        );
        assert_eq!(
            Guid::NULL.to_string(),
            "{00000000-0000-0000-0000-000000000000}"
        );
    }

    #[test]
    fn test_parse_with_and_without_braces() {
        let braced: Guid = "{00000000-0000-0000-C000-000000000046}".parse().unwrap();
        let bare: Guid = "00000000-0000-0000-c000-000000000046".parse().unwrap();
        assert_eq!(braced, IUNKNOWN);
        assert_eq!(bare, IUNKNOWN);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for text in [
            "",
            "{00000000-0000-0000-C000-000000000046",
            "00000000-0000-0000-C000-00000000004",
            "00000000-0000-0000-C0000-00000000046",
            "0000000g-0000-0000-C000-000000000046",
            "+0000000-0000-0000-C000-000000000046",
            "00000000000000000C000000000000046",
        ] {
            assert!(text.parse::<Guid>().is_err(), "accepted '{text}'");
        }
    }

    #[test]
    fn test_random_guid_survives_text_form() {
        let mut rng = rand::rng();
        let guid = Guid::from_u128(rng.random());
        let parsed: Guid = guid.to_string().parse().unwrap();
        assert_eq!(parsed, guid);
        assert_eq!(parsed.to_u128(), guid.to_u128());
    }

    #[test]
    fn test_guid_serializes_as_string() {
        let json = serde_json::to_string(&IUNKNOWN).unwrap();
        assert_eq!(json, "\"{00000000-0000-0000-C000-000000000046}\"");
        let back: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IUNKNOWN);
    }

    #[test]
    fn test_hresult_helpers() {
        assert!(succeeded(S_OK));
        assert!(succeeded(S_FALSE));
        assert!(!succeeded(RPC_E_CHANGED_MODE));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_wrappers_fail_cleanly_without_ole32() {
        assert!(matches!(
            co_create_guid(),
            Err(BindingError::LibraryLoad {
                library: "ole32.dll",
                ..
            })
        ));
    }

    #[cfg(windows)]
    #[test]
    fn test_co_create_guid_returns_distinct_values() {
        let first = co_create_guid().unwrap();
        let second = co_create_guid().unwrap();
        assert!(!first.is_null());
        assert_ne!(first, second);
        // Version 4 GUIDs carry the version in the high nibble of data3.
        assert_eq!(first.data3 >> 12, 4);
    }

    #[cfg(windows)]
    #[test]
    fn test_co_initialize_twice_then_changed_mode() {
        // Each test runs on its own thread, so the apartment state is fresh.
        let handle = std::thread::spawn(|| {
            assert!(co_initialize_ex(COINIT_MULTITHREADED).unwrap());
            assert!(!co_initialize_ex(COINIT_MULTITHREADED).unwrap());
            let err = co_initialize_ex(COINIT_APARTMENTTHREADED).unwrap_err();
            assert_eq!(err.code(), Some(RPC_E_CHANGED_MODE as u32));
            co_uninitialize().unwrap();
            co_uninitialize().unwrap();
        });
        handle.join().unwrap();
    }
}
