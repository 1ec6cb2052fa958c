/*
 * Core data types shared by all bindings: opaque OS handles, the scalar
 * aliases used in native signatures, and the small geometry and color
 * structures that cross the ABI by value or by pointer. Everything here is
 * platform-agnostic so it can be built and tested on any host.
 */

use serde::{Deserialize, Serialize};

pub type WParam = usize;
pub type LParam = isize;
pub type LResult = isize;
pub type Uint = u32;
pub type Bool = i32;
pub type Dword = u32;
pub type Langid = u16;
pub type Atom = u16;

// Implemented by every handle type so wrappers can null-check generically.
pub trait RawHandle: Copy {
    fn raw(self) -> usize;
}

/*
 * Declares pointer-sized handle newtypes. `#[repr(transparent)]` makes each one
 * ABI-identical to the native handle so it can appear directly in
 * `extern "system"` signatures and `#[repr(C)]` structures.
 */
macro_rules! handle_types {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(pub usize);

            impl $name {
                pub const NULL: Self = $name(0);

                pub const fn from_raw(raw: usize) -> Self {
                    $name(raw)
                }

                pub const fn as_raw(self) -> usize {
                    self.0
                }

                pub const fn is_null(self) -> bool {
                    self.0 == 0
                }
            }

            impl RawHandle for $name {
                fn raw(self) -> usize {
                    self.0
                }
            }
        )*
    };
}

handle_types! {
    /// Generic kernel object handle.
    Handle;
    /// Window handle.
    Hwnd;
    Hmenu;
    Hmodule;
    Hinstance;
    /// Device context handle.
    Hdc;
    /// Region handle.
    Hrgn;
    Hbrush;
    Hicon;
    Hcursor;
    Hpen;
    Hpalette;
    Hbitmap;
    Hfont;
    /// Any GDI object, as accepted by `SelectObject` / `DeleteObject`.
    Hgdiobj;
}

macro_rules! into_gdi_object {
    ($($name:ident),*) => {
        $(
            impl From<$name> for Hgdiobj {
                fn from(handle: $name) -> Self {
                    Hgdiobj(handle.0)
                }
            }
        )*
    };
}

into_gdi_object!(Hrgn, Hbrush, Hpen, Hpalette, Hbitmap, Hfont);

// A module handle and an instance handle are the same value on Win32.
impl From<Hmodule> for Hinstance {
    fn from(module: Hmodule) -> Self {
        Hinstance(module.0)
    }
}

impl From<Hinstance> for Hmodule {
    fn from(instance: Hinstance) -> Self {
        Hmodule(instance.0)
    }
}

// Cursors are icons as far as the window manager is concerned.
impl From<Hcursor> for Hicon {
    fn from(cursor: Hcursor) -> Self {
        Hicon(cursor.0)
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/*
 * A Win32 COLORREF. The channels are packed little-endian as 0x00BBGGRR,
 * which is the reverse of the usual "#RRGGBB" reading order.
 */
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRef(pub u32);

impl ColorRef {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorRef((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
    }

    pub const fn red(self) -> u8 {
        self.0 as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 >> 16) as u8
    }
}

// --- Word packing helpers (minwindef.h / windowsx.h) ---

#[inline]
pub const fn loword(v: usize) -> u32 {
    (v & 0xffff) as u32
}

#[inline]
pub const fn hiword(v: usize) -> u32 {
    ((v >> 16) & 0xffff) as u32
}

#[inline]
pub const fn make_long(lo: u16, hi: u16) -> u32 {
    (lo as u32) | ((hi as u32) << 16)
}

#[inline]
pub const fn make_wparam(lo: u16, hi: u16) -> WParam {
    make_long(lo, hi) as WParam
}

#[inline]
pub const fn make_lparam(lo: u16, hi: u16) -> LParam {
    make_long(lo, hi) as LParam
}

/// Signed x coordinate packed into a mouse message's `LPARAM`.
#[inline]
pub const fn get_x_lparam(lparam: LParam) -> i32 {
    (lparam as usize & 0xffff) as u16 as i16 as i32
}

/// Signed y coordinate packed into a mouse message's `LPARAM`.
#[inline]
pub const fn get_y_lparam(lparam: LParam) -> i32 {
    ((lparam as usize >> 16) & 0xffff) as u16 as i16 as i32
}
