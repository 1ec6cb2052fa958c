/*
 * User32 structures. The `#[repr(C)]` types here are passed to the OS by
 * pointer and must match winuser.h field for field; on Windows builds their
 * sizes are checked at compile time against the `windows` crate definitions.
 * The remaining types are Rust-side parameter records that the wrappers
 * unpack into native arguments.
 */

use crate::marshal::from_wide_ptr;
use crate::resource::is_int_resource;
use crate::types::{
    Bool, Hbrush, Hcursor, Hdc, Hicon, Hinstance, Hmenu, Hwnd, LParam, LResult, Point, Rect, WParam,
    hiword, loword,
};
use crate::user32::constants::CW_USEDEFAULT;

/// Window procedure callback (WNDPROC).
pub type WndProc = unsafe extern "system" fn(Hwnd, u32, WParam, LParam) -> LResult;

/// Dialog procedure callback (DLGPROC); returns TRUE when the message was handled.
pub type DlgProc = unsafe extern "system" fn(Hwnd, u32, WParam, LParam) -> isize;

// PAINTSTRUCT
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintStruct {
    pub hdc: Hdc,
    pub erase: Bool,
    pub rc_paint: Rect,
    pub restore: Bool,
    pub inc_update: Bool,
    pub rgb_reserved: [u8; 32],
}

/*
 * CREATESTRUCTW, as delivered through the LPARAM of WM_NCCREATE / WM_CREATE.
 * The string fields are owned by the OS for the duration of the message.
 */
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CreateStruct {
    pub create_params: usize,
    pub instance: Hinstance,
    pub menu: Hmenu,
    pub parent: Hwnd,
    pub cy: i32,
    pub cx: i32,
    pub y: i32,
    pub x: i32,
    pub style: i32,
    pub name: *const u16,
    pub class_name: *const u16,
    pub ex_style: u32,
}

impl CreateStruct {
    /*
     * # Safety
     * `lparam` must be the LPARAM of a WM_NCCREATE or WM_CREATE message that
     * is still being processed.
     */
    pub unsafe fn from_lparam<'a>(lparam: LParam) -> &'a CreateStruct {
        unsafe { &*(lparam as *const CreateStruct) }
    }

    /*
     * # Safety
     * Only valid while the creating message is being processed.
     */
    pub unsafe fn window_name(&self) -> String {
        unsafe { from_wide_ptr(self.name) }
    }

    /*
     * The class name, or `None` when the window was created from a class
     * atom rather than a string.
     *
     * # Safety
     * Only valid while the creating message is being processed.
     */
    pub unsafe fn class_name(&self) -> Option<String> {
        if is_int_resource(self.class_name) {
            None
        } else {
            Some(unsafe { from_wide_ptr(self.class_name) })
        }
    }
}

// MSG, as filled in by GetMessageW.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Msg {
    pub hwnd: Hwnd,
    pub message: u32,
    pub wparam: WParam,
    pub lparam: LParam,
    pub time: u32,
    pub pt: Point,
}

impl Msg {
    pub fn params(&self) -> WindowMessage {
        WindowMessage {
            hwnd: self.hwnd,
            message: self.message,
            wparam: self.wparam,
            lparam: self.lparam,
        }
    }
}

/*
 * The four values every message is made of. Used as the argument for
 * sending, posting and default processing.
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowMessage {
    pub hwnd: Hwnd,
    pub message: u32,
    pub wparam: WParam,
    pub lparam: LParam,
}

impl WindowMessage {
    pub fn new(hwnd: Hwnd, message: u32, wparam: WParam, lparam: LParam) -> Self {
        WindowMessage {
            hwnd,
            message,
            wparam,
            lparam,
        }
    }
}

// NMHDR, the common header of every WM_NOTIFY payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nmhdr {
    pub hwnd_from: Hwnd,
    pub id_from: usize,
    pub code: u32,
}

impl Nmhdr {
    /*
     * # Safety
     * `lparam` must be the LPARAM of a WM_NOTIFY message that is still being
     * processed.
     */
    pub unsafe fn from_lparam<'a>(lparam: LParam) -> &'a Nmhdr {
        unsafe { &*(lparam as *const Nmhdr) }
    }
}

/*
 * The parts of a WM_COMMAND message: the command (menu or control) id, the
 * notification code, and the control handle carried in the LPARAM (zero for
 * menus and accelerators).
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Command {
    pub id: u32,
    pub notification: u32,
    pub lparam: LParam,
}

impl Command {
    pub fn from_params(wparam: WParam, lparam: LParam) -> Self {
        Command {
            id: loword(wparam),
            notification: hiword(wparam),
            lparam,
        }
    }

    pub fn control(&self) -> Hwnd {
        Hwnd(self.lparam as usize)
    }
}

/*
 * Arguments for `create_window_ex`. `new` fills in CW_USEDEFAULT for the
 * position and size; `Default` leaves everything zeroed.
 */
#[derive(Debug, Clone, Default)]
pub struct CreateWindowParams {
    pub class_name: String,
    pub window_name: String,
    pub style: u32,
    pub ex_style: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub parent: Hwnd,
    pub menu: Hmenu,
    pub instance: Hinstance,
    pub param: usize,
}

impl CreateWindowParams {
    pub fn new(class_name: &str, window_name: &str, style: u32) -> Self {
        CreateWindowParams {
            class_name: class_name.to_string(),
            window_name: window_name.to_string(),
            style,
            x: CW_USEDEFAULT,
            y: CW_USEDEFAULT,
            width: CW_USEDEFAULT,
            height: CW_USEDEFAULT,
            ..Default::default()
        }
    }
}

/*
 * Arguments for `register_class_ex`. When `instance` is `None` the class is
 * registered against the module of the running executable.
 */
#[derive(Debug, Clone, Default)]
pub struct RegisterClassParams {
    pub style: u32,
    pub wnd_proc: Option<WndProc>,
    pub cls_extra: i32,
    pub wnd_extra: i32,
    pub instance: Option<Hinstance>,
    pub icon: Hicon,
    pub cursor: Hcursor,
    pub background: Hbrush,
    pub menu_name: String,
    pub class_name: String,
    pub icon_sm: Hicon,
}

// WNDCLASSEXW. Built on the stack by `register_class_ex` only.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct WndClassEx {
    pub(crate) size: u32,
    pub(crate) style: u32,
    pub(crate) wnd_proc: Option<WndProc>,
    pub(crate) cls_extra: i32,
    pub(crate) wnd_extra: i32,
    pub(crate) instance: Hinstance,
    pub(crate) icon: Hicon,
    pub(crate) cursor: Hcursor,
    pub(crate) background: Hbrush,
    pub(crate) menu_name: *const u16,
    pub(crate) class_name: *const u16,
    pub(crate) icon_sm: Hicon,
}

#[cfg(windows)]
mod layout_checks {
    use super::*;
    use std::mem::{align_of, size_of};
    use windows::Win32::Graphics::Gdi::PAINTSTRUCT;
    use windows::Win32::UI::Controls::NMHDR;
    use windows::Win32::UI::WindowsAndMessaging::{CREATESTRUCTW, MSG, WNDCLASSEXW};

    const _: () = assert!(size_of::<PaintStruct>() == size_of::<PAINTSTRUCT>());
    const _: () = assert!(align_of::<PaintStruct>() == align_of::<PAINTSTRUCT>());
    const _: () = assert!(size_of::<CreateStruct>() == size_of::<CREATESTRUCTW>());
    const _: () = assert!(size_of::<Msg>() == size_of::<MSG>());
    const _: () = assert!(size_of::<Nmhdr>() == size_of::<NMHDR>());
    const _: () = assert!(size_of::<WndClassEx>() == size_of::<WNDCLASSEXW>());
}
