/*
 * Bindings for gdi32.dll: fonts, brushes, regions and the handful of
 * device-context calls needed to draw text.
 */

pub mod constants;

pub use constants::*;

use crate::error::{BindingError, Result};
use crate::marshal::{WideString, check_bool, from_wide, non_null};
use crate::native::native_procs;
use crate::types::{Bool, ColorRef, Hbrush, Hdc, Hfont, Hgdiobj, Hrgn};

/*
 * LOGFONTW. The face name is kept private so it is always NUL-terminated
 * inside its fixed buffer; use `set_face_name` to change it.
 */
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFont {
    pub height: i32,
    pub width: i32,
    pub escapement: i32,
    pub orientation: i32,
    pub weight: i32,
    pub italic: u8,
    pub underline: u8,
    pub strike_out: u8,
    pub char_set: u8,
    pub out_precision: u8,
    pub clip_precision: u8,
    pub quality: u8,
    pub pitch_and_family: u8,
    face_name: [u16; LF_FACESIZE],
}

#[cfg(windows)]
const _: () = assert!(
    std::mem::size_of::<LogFont>() == std::mem::size_of::<windows::Win32::Graphics::Gdi::LOGFONTW>()
);

impl LogFont {
    /// A font description with the given face, cell height and weight.
    pub fn new(face_name: &str, height: i32, weight: i32) -> Result<Self> {
        let mut font = LogFont {
            height,
            weight,
            char_set: DEFAULT_CHARSET,
            ..LogFont::default()
        };
        font.set_face_name(face_name)?;
        Ok(font)
    }

    pub fn face_name(&self) -> String {
        from_wide(&self.face_name)
    }

    /// Fails when the name does not fit, terminator included.
    pub fn set_face_name(&mut self, name: &str) -> Result<()> {
        let wide = WideString::new(name);
        if wide.len() >= LF_FACESIZE {
            return Err(BindingError::InvalidArgument(format!(
                "font face name '{name}' exceeds {} UTF-16 units",
                LF_FACESIZE - 1
            )));
        }
        self.face_name = [0; LF_FACESIZE];
        self.face_name[..wide.len()].copy_from_slice(wide.as_units());
        Ok(())
    }
}

native_procs! { GDI32;
    CREATE_FONT_INDIRECT: "CreateFontIndirectW" => fn(*const LogFont) -> Hfont;
    CREATE_SOLID_BRUSH: "CreateSolidBrush" => fn(ColorRef) -> Hbrush;
    CREATE_RECT_RGN: "CreateRectRgn" => fn(i32, i32, i32, i32) -> Hrgn;
    DELETE_OBJECT: "DeleteObject" => fn(Hgdiobj) -> Bool;
    GET_DEVICE_CAPS: "GetDeviceCaps" => fn(Hdc, i32) -> i32;
    GET_STOCK_OBJECT: "GetStockObject" => fn(i32) -> Hgdiobj;
    SELECT_OBJECT: "SelectObject" => fn(Hdc, Hgdiobj) -> Hgdiobj;
    SET_BK_COLOR: "SetBkColor" => fn(Hdc, ColorRef) -> ColorRef;
    SET_BK_MODE: "SetBkMode" => fn(Hdc, i32) -> i32;
    SET_TEXT_COLOR: "SetTextColor" => fn(Hdc, ColorRef) -> ColorRef;
    TEXT_OUT: "TextOutW" => fn(Hdc, i32, i32, *const u16, i32) -> Bool;
}

pub fn create_font_indirect(font: &LogFont) -> Result<Hfont> {
    let f = CREATE_FONT_INDIRECT.get()?;
    let hfont = non_null(unsafe { f(font) }, "CreateFontIndirectW")?;
    log::trace!(
        "Gdi32: Created font '{}' height {} weight {}",
        font.face_name(),
        font.height,
        font.weight
    );
    Ok(hfont)
}

pub fn create_solid_brush(color: ColorRef) -> Result<Hbrush> {
    let f = CREATE_SOLID_BRUSH.get()?;
    non_null(unsafe { f(color) }, "CreateSolidBrush")
}

pub fn create_rect_rgn(left: i32, top: i32, right: i32, bottom: i32) -> Result<Hrgn> {
    let f = CREATE_RECT_RGN.get()?;
    non_null(unsafe { f(left, top, right, bottom) }, "CreateRectRgn")
}

/// Stock objects are owned by the system and must not be deleted.
pub fn get_stock_object(index: i32) -> Result<Hgdiobj> {
    let f = GET_STOCK_OBJECT.get()?;
    non_null(unsafe { f(index) }, "GetStockObject")
}

/*
 * Selects `object` into `hdc` and returns the object it replaced, which the
 * caller should select back before deleting `object`. For regions the
 * returned value is a region complexity code, not a handle.
 */
pub fn select_object(hdc: Hdc, object: impl Into<Hgdiobj>) -> Result<Hgdiobj> {
    let f = SELECT_OBJECT.get()?;
    let previous = unsafe { f(hdc, object.into()) };
    if previous.as_raw() == HGDI_ERROR {
        return Err(BindingError::last_error("SelectObject"));
    }
    non_null(previous, "SelectObject")
}

pub fn delete_object(object: impl Into<Hgdiobj>) -> Result<()> {
    let f = DELETE_OBJECT.get()?;
    check_bool(unsafe { f(object.into()) }, "DeleteObject")
}

/// Returns the previous text color.
pub fn set_text_color(hdc: Hdc, color: ColorRef) -> Result<ColorRef> {
    let f = SET_TEXT_COLOR.get()?;
    let previous = unsafe { f(hdc, color) };
    if previous.0 == CLR_INVALID {
        return Err(BindingError::last_error("SetTextColor"));
    }
    Ok(previous)
}

/// Returns the previous background color.
pub fn set_bk_color(hdc: Hdc, color: ColorRef) -> Result<ColorRef> {
    let f = SET_BK_COLOR.get()?;
    let previous = unsafe { f(hdc, color) };
    if previous.0 == CLR_INVALID {
        return Err(BindingError::last_error("SetBkColor"));
    }
    Ok(previous)
}

/// Returns the previous mode (`TRANSPARENT` or `OPAQUE`).
pub fn set_bk_mode(hdc: Hdc, mode: i32) -> Result<i32> {
    let f = SET_BK_MODE.get()?;
    match unsafe { f(hdc, mode) } {
        0 => Err(BindingError::last_error("SetBkMode")),
        previous => Ok(previous),
    }
}

pub fn text_out(hdc: Hdc, x: i32, y: i32, text: &str) -> Result<()> {
    let f = TEXT_OUT.get()?;
    let wide = WideString::new(text);
    let len = i32::try_from(wide.len()).map_err(|_| {
        BindingError::InvalidArgument(format!("text of {} units is too long", wide.len()))
    })?;
    check_bool(unsafe { f(hdc, x, y, wide.as_ptr(), len) }, "TextOutW")
}

pub fn get_device_caps(hdc: Hdc, index: i32) -> Result<i32> {
    let f = GET_DEVICE_CAPS.get()?;
    Ok(unsafe { f(hdc, index) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_logfont_matches_logfontw_layout() {
        assert_eq!(size_of::<LogFont>(), 92);
        assert_eq!(offset_of!(LogFont, italic), 20);
        assert_eq!(offset_of!(LogFont, pitch_and_family), 27);
        assert_eq!(offset_of!(LogFont, face_name), 28);
    }

    #[test]
    fn test_set_face_name_writes_terminated_units() {
        // Arrange
        let mut font = LogFont::default();

        // Act
        font.set_face_name("Segoe UI").unwrap();

        // Assert
        assert_eq!(font.face_name(), "Segoe UI");
        assert_eq!(font.face_name[8], 0);

        font.set_face_name("Arial").unwrap();
        assert_eq!(font.face_name(), "Arial");
        assert!(font.face_name[5..].iter().all(|&u| u == 0));
    }

    #[test]
    fn test_set_face_name_rejects_names_without_room_for_terminator() {
        let mut font = LogFont::default();
        let longest = "x".repeat(LF_FACESIZE - 1);
        assert!(font.set_face_name(&longest).is_ok());
        assert_eq!(font.face_name(), longest);

        let too_long = "x".repeat(LF_FACESIZE);
        assert!(matches!(
            font.set_face_name(&too_long),
            Err(BindingError::InvalidArgument(_))
        ));
        // The previous name is kept on failure.
        assert_eq!(font.face_name(), longest);
    }

    #[test]
    fn test_new_logfont_defaults() {
        let font = LogFont::new("Consolas", -16, FW_BOLD).unwrap();
        assert_eq!(font.height, -16);
        assert_eq!(font.weight, FW_BOLD);
        assert_eq!(font.char_set, DEFAULT_CHARSET);
        assert_eq!(font.quality, DEFAULT_QUALITY);
        assert_eq!(font.face_name(), "Consolas");
    }

    #[test]
    fn test_weight_aliases() {
        assert_eq!(FW_ULTRALIGHT, FW_EXTRALIGHT);
        assert_eq!(FW_REGULAR, FW_NORMAL);
        assert_eq!(FW_BLACK, 900);
        assert_eq!(HOLLOW_BRUSH, NULL_BRUSH);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_wrappers_fail_cleanly_without_gdi32() {
        assert!(matches!(
            create_solid_brush(ColorRef::rgb(1, 2, 3)),
            Err(BindingError::LibraryLoad {
                library: "gdi32.dll",
                ..
            })
        ));
        assert!(get_stock_object(WHITE_BRUSH).is_err());
    }

    #[cfg(windows)]
    #[test]
    fn test_create_and_delete_gdi_objects() {
        let brush = create_solid_brush(ColorRef::rgb(0x20, 0x40, 0x60)).unwrap();
        let region = create_rect_rgn(0, 0, 10, 10).unwrap();
        let font = create_font_indirect(&LogFont::new("Arial", -12, FW_NORMAL).unwrap()).unwrap();

        delete_object(brush).unwrap();
        delete_object(region).unwrap();
        delete_object(font).unwrap();
    }

    #[cfg(windows)]
    #[test]
    fn test_stock_objects_are_available() {
        assert!(!get_stock_object(DEFAULT_GUI_FONT).unwrap().is_null());
        assert!(!get_stock_object(BLACK_BRUSH).unwrap().is_null());
    }

    #[cfg(windows)]
    #[test]
    fn test_text_state_on_hidden_window_dc() {
        use crate::user32::{self, CreateWindowParams, WS_POPUP};

        // Arrange
        let mut params = CreateWindowParams::new("STATIC", "", WS_POPUP);
        params.width = 80;
        params.height = 40;
        let hwnd = unsafe { user32::create_window_ex(&params) }.unwrap();
        let hdc = user32::get_dc(hwnd).unwrap();
        let font = create_font_indirect(&LogFont::new("Arial", -12, FW_NORMAL).unwrap()).unwrap();
        let red = ColorRef::rgb(0xff, 0, 0);

        // Act
        let previous_font = select_object(hdc, font).unwrap();
        set_text_color(hdc, red).unwrap();
        let replaced_color = set_text_color(hdc, ColorRef::rgb(0, 0, 0xff)).unwrap();
        let mode_before = set_bk_mode(hdc, TRANSPARENT).unwrap();
        let mode_after = set_bk_mode(hdc, OPAQUE).unwrap();
        set_bk_color(hdc, red).unwrap();
        text_out(hdc, 2, 2, "Grüße").unwrap();
        let dpi = get_device_caps(hdc, LOGPIXELSY).unwrap();
        let restored = select_object(hdc, previous_font).unwrap();

        // Assert
        assert!(!previous_font.is_null());
        assert_eq!(restored, Hgdiobj::from(font));
        assert_eq!(replaced_color, red);
        assert!(mode_before == TRANSPARENT || mode_before == OPAQUE);
        assert_eq!(mode_after, TRANSPARENT);
        assert!(dpi > 0);

        assert!(user32::release_dc(hwnd, hdc).unwrap());
        delete_object(font).unwrap();
        user32::destroy_window(hwnd).unwrap();
    }

    #[cfg(windows)]
    #[test]
    fn test_constants_match_windows_sdk() {
        use windows::Win32::Graphics::Gdi as sdk;

        assert_eq!(DEFAULT_CHARSET as i64, sdk::DEFAULT_CHARSET.0 as i64);
        assert_eq!(CLEARTYPE_QUALITY as i64, sdk::CLEARTYPE_QUALITY.0 as i64);
        assert_eq!(DEFAULT_GUI_FONT as i64, sdk::DEFAULT_GUI_FONT.0 as i64);
        assert_eq!(LOGPIXELSY as i64, sdk::LOGPIXELSY.0 as i64);
    }
}
