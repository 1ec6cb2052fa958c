/*
 * Bindings for user32.dll: window classes and windows, the message loop,
 * painting, dialogs, resources and message boxes. Every wrapper resolves its
 * entry point lazily, converts arguments (strings to UTF-16, resource names to
 * pointers), makes the call and turns the raw return value into a `Result`,
 * capturing the last-error code on failure.
 *
 * Wrappers that hand caller-supplied pointers or callbacks to the OS (message
 * parameters, window procedures, creation parameters) are `unsafe fn`.
 */

pub mod constants;
pub mod structs;

#[cfg(test)]
mod user32_tests;

pub use constants::*;
pub use structs::*;

use crate::error::{BindingError, Result, last_error_code};
use crate::kernel32;
use crate::marshal::{WideString, bool_from_native, bool_to_native, check_bool, from_wide, non_null};
use crate::native::native_procs;
use crate::resource::ResourceName;
use crate::types::{
    Atom, Bool, Hbrush, Hcursor, Hdc, Hicon, Hinstance, Hmenu, Hwnd, LParam, LResult, Rect, WParam,
};
use std::ffi::c_void;
use std::ptr;

// Size of the buffer LoadStringW writes into.
const LOAD_STRING_BUFFER_LEN: usize = 4096;

native_procs! { USER32;
    BEGIN_PAINT: "BeginPaint" => fn(Hwnd, *mut PaintStruct) -> Hdc;
    END_PAINT: "EndPaint" => fn(Hwnd, *const PaintStruct) -> Bool;
    CREATE_DIALOG_PARAM: "CreateDialogParamW" => fn(Hinstance, *const u16, Hwnd, Option<DlgProc>, LParam) -> Hwnd;
    CREATE_WINDOW_EX: "CreateWindowExW" => fn(
        u32, *const u16, *const u16, u32, i32, i32, i32, i32, Hwnd, Hmenu, Hinstance, *const c_void,
    ) -> Hwnd;
    DEF_WINDOW_PROC: "DefWindowProcW" => fn(Hwnd, u32, WParam, LParam) -> LResult;
    DESTROY_WINDOW: "DestroyWindow" => fn(Hwnd) -> Bool;
    DIALOG_BOX_PARAM: "DialogBoxParamW" => fn(Hinstance, *const u16, Hwnd, Option<DlgProc>, LParam) -> isize;
    DISPATCH_MESSAGE: "DispatchMessageW" => fn(*const Msg) -> LResult;
    END_DIALOG: "EndDialog" => fn(Hwnd, isize) -> Bool;
    GET_DC: "GetDC" => fn(Hwnd) -> Hdc;
    GET_DLG_ITEM: "GetDlgItem" => fn(Hwnd, i32) -> Hwnd;
    GET_MESSAGE: "GetMessageW" => fn(*mut Msg, Hwnd, u32, u32) -> Bool;
    LOAD_CURSOR: "LoadCursorW" => fn(Hinstance, *const u16) -> Hcursor;
    LOAD_ICON: "LoadIconW" => fn(Hinstance, *const u16) -> Hicon;
    LOAD_MENU: "LoadMenuW" => fn(Hinstance, *const u16) -> Hmenu;
    LOAD_STRING: "LoadStringW" => fn(Hinstance, u32, *mut u16, i32) -> i32;
    MESSAGE_BOX: "MessageBoxW" => fn(Hwnd, *const u16, *const u16, u32) -> i32;
    UNREGISTER_CLASS: "UnregisterClassW" => fn(*const u16, Hinstance) -> Bool;
    POST_MESSAGE: "PostMessageW" => fn(Hwnd, u32, WParam, LParam) -> Bool;
    POST_QUIT_MESSAGE: "PostQuitMessage" => fn(i32);
    REGISTER_CLASS_EX: "RegisterClassExW" => fn(*const WndClassEx) -> Atom;
    RELEASE_DC: "ReleaseDC" => fn(Hwnd, Hdc) -> i32;
    SEND_MESSAGE: "SendMessageW" => fn(Hwnd, u32, WParam, LParam) -> LResult;
    SEND_DLG_ITEM_MESSAGE: "SendDlgItemMessageW" => fn(Hwnd, i32, u32, WParam, LParam) -> LResult;
    SET_MENU: "SetMenu" => fn(Hwnd, Hmenu) -> Bool;
    SHOW_WINDOW: "ShowWindow" => fn(Hwnd, i32) -> Bool;
    TRANSLATE_MESSAGE: "TranslateMessage" => fn(*const Msg) -> Bool;
    UPDATE_WINDOW: "UpdateWindow" => fn(Hwnd) -> Bool;
    GET_SYSTEM_METRICS: "GetSystemMetrics" => fn(i32) -> i32;
    GET_CLIENT_RECT: "GetClientRect" => fn(Hwnd, *mut Rect) -> Bool;
    SET_WINDOW_TEXT: "SetWindowTextW" => fn(Hwnd, *const u16) -> Bool;
    GET_WINDOW_TEXT: "GetWindowTextW" => fn(Hwnd, *mut u16, i32) -> i32;
    GET_WINDOW_TEXT_LENGTH: "GetWindowTextLengthW" => fn(Hwnd) -> i32;
    INVALIDATE_RECT: "InvalidateRect" => fn(Hwnd, *const Rect, Bool) -> Bool;
    FILL_RECT: "FillRect" => fn(Hdc, *const Rect, Hbrush) -> i32;
    GET_SYS_COLOR_BRUSH: "GetSysColorBrush" => fn(i32) -> Hbrush;
}

// 32-bit user32 has no *LongPtr exports; the plain versions are already pointer-sized there.
#[cfg(target_pointer_width = "64")]
native_procs! { USER32;
    GET_WINDOW_LONG_PTR: "GetWindowLongPtrW" => fn(Hwnd, i32) -> isize;
    SET_WINDOW_LONG_PTR: "SetWindowLongPtrW" => fn(Hwnd, i32, isize) -> isize;
}

#[cfg(not(target_pointer_width = "64"))]
native_procs! { USER32;
    GET_WINDOW_LONG_PTR: "GetWindowLongW" => fn(Hwnd, i32) -> isize;
    SET_WINDOW_LONG_PTR: "SetWindowLongW" => fn(Hwnd, i32, isize) -> isize;
}

fn instance_or_current(instance: Hinstance) -> Result<Hinstance> {
    if instance.is_null() {
        Ok(kernel32::get_module_handle(None)?.into())
    } else {
        Ok(instance)
    }
}

/*
 * The value WNDCLASSEX expects in `hbrBackground` to paint with a system
 * color: the COLOR_* index plus one, disguised as a brush handle.
 */
pub fn class_background_brush(color_index: i32) -> Hbrush {
    Hbrush((color_index + 1) as usize)
}

// --- Painting ---

pub fn begin_paint(hwnd: Hwnd, ps: &mut PaintStruct) -> Result<Hdc> {
    let f = BEGIN_PAINT.get()?;
    let hdc = unsafe { f(hwnd, ps) };
    non_null(hdc, "BeginPaint")
}

pub fn end_paint(hwnd: Hwnd, ps: &PaintStruct) -> Result<()> {
    let f = END_PAINT.get()?;
    // EndPaint always returns nonzero.
    unsafe { f(hwnd, ps) };
    Ok(())
}

pub fn get_dc(hwnd: Hwnd) -> Result<Hdc> {
    let f = GET_DC.get()?;
    let hdc = unsafe { f(hwnd) };
    non_null(hdc, "GetDC")
}

/// Returns `true` if the DC was released; a class or private DC is not.
pub fn release_dc(hwnd: Hwnd, hdc: Hdc) -> Result<bool> {
    let f = RELEASE_DC.get()?;
    Ok(unsafe { f(hwnd, hdc) } == 1)
}

pub fn get_client_rect(hwnd: Hwnd) -> Result<Rect> {
    let f = GET_CLIENT_RECT.get()?;
    let mut rect = Rect::default();
    check_bool(unsafe { f(hwnd, &mut rect) }, "GetClientRect")?;
    Ok(rect)
}

/// Marks `rect` (or the whole client area for `None`) for repainting.
pub fn invalidate_rect(hwnd: Hwnd, rect: Option<&Rect>, erase: bool) -> Result<()> {
    let f = INVALIDATE_RECT.get()?;
    let rect_ptr = rect.map_or(ptr::null(), |r| r as *const Rect);
    check_bool(
        unsafe { f(hwnd, rect_ptr, bool_to_native(erase)) },
        "InvalidateRect",
    )
}

pub fn fill_rect(hdc: Hdc, rect: &Rect, brush: Hbrush) -> Result<()> {
    let f = FILL_RECT.get()?;
    check_bool(unsafe { f(hdc, rect, brush) }, "FillRect")
}

pub fn get_sys_color_brush(color_index: i32) -> Result<Hbrush> {
    let f = GET_SYS_COLOR_BRUSH.get()?;
    let brush = unsafe { f(color_index) };
    non_null(brush, "GetSysColorBrush")
}

// --- Window classes and windows ---

/*
 * Registers a window class and returns its atom. The class is registered
 * against `params.instance`, or against the running executable when that is
 * `None`.
 */
pub fn register_class_ex(params: &RegisterClassParams) -> Result<Atom> {
    let f = REGISTER_CLASS_EX.get()?;
    let instance = match params.instance {
        Some(instance) => instance,
        None => kernel32::get_module_handle(None)?.into(),
    };
    let menu_name = WideString::new(&params.menu_name);
    let class_name = WideString::new(&params.class_name);

    let class = WndClassEx {
        size: std::mem::size_of::<WndClassEx>() as u32,
        style: params.style,
        wnd_proc: params.wnd_proc,
        cls_extra: params.cls_extra,
        wnd_extra: params.wnd_extra,
        instance,
        icon: params.icon,
        cursor: params.cursor,
        background: params.background,
        menu_name: menu_name.as_nullable_ptr(),
        class_name: class_name.as_nullable_ptr(),
        icon_sm: params.icon_sm,
    };

    let atom = unsafe { f(&class) };
    if atom == 0 {
        let code = last_error_code();
        return Err(BindingError::from_win32(
            format!("RegisterClassExW({})", params.class_name),
            code,
        ));
    }
    log::debug!(
        "User32: Registered window class '{}' (atom {atom:#06x})",
        params.class_name
    );
    Ok(atom)
}

pub fn unregister_class(class_name: &str, instance: Hinstance) -> Result<()> {
    let f = UNREGISTER_CLASS.get()?;
    let name = WideString::new(class_name);
    check_bool(
        unsafe { f(name.as_nullable_ptr(), instance) },
        "UnregisterClassW",
    )?;
    log::debug!("User32: Unregistered window class '{class_name}'");
    Ok(())
}

/*
 * Creates a window. A null `params.instance` is replaced by the running
 * executable's module, matching what `register_class_ex` does.
 *
 * # Safety
 * `params.param` is delivered to the window procedure as
 * `CREATESTRUCT::create_params`; it must be whatever that procedure expects.
 */
pub unsafe fn create_window_ex(params: &CreateWindowParams) -> Result<Hwnd> {
    let f = CREATE_WINDOW_EX.get()?;
    let instance = instance_or_current(params.instance)?;
    let class_name = WideString::new(&params.class_name);
    let window_name = WideString::new(&params.window_name);

    let hwnd = unsafe {
        f(
            params.ex_style,
            class_name.as_nullable_ptr(),
            window_name.as_nullable_ptr(),
            params.style,
            params.x,
            params.y,
            params.width,
            params.height,
            params.parent,
            params.menu,
            instance,
            params.param as *const c_void,
        )
    };
    let hwnd = non_null(hwnd, "CreateWindowExW")?;
    log::debug!(
        "User32: Created window {:?} of class '{}'",
        hwnd,
        params.class_name
    );
    Ok(hwnd)
}

pub fn destroy_window(hwnd: Hwnd) -> Result<()> {
    let f = DESTROY_WINDOW.get()?;
    check_bool(unsafe { f(hwnd) }, "DestroyWindow")?;
    log::debug!("User32: Destroyed window {hwnd:?}");
    Ok(())
}

/// Returns whether the window was previously visible.
pub fn show_window(hwnd: Hwnd, cmd_show: i32) -> Result<bool> {
    let f = SHOW_WINDOW.get()?;
    Ok(bool_from_native(unsafe { f(hwnd, cmd_show) } as isize))
}

pub fn update_window(hwnd: Hwnd) -> Result<()> {
    let f = UPDATE_WINDOW.get()?;
    check_bool(unsafe { f(hwnd) }, "UpdateWindow")
}

pub fn set_menu(hwnd: Hwnd, menu: Hmenu) -> Result<()> {
    let f = SET_MENU.get()?;
    check_bool(unsafe { f(hwnd, menu) }, "SetMenu")
}

pub fn set_window_text(hwnd: Hwnd, text: &str) -> Result<()> {
    let f = SET_WINDOW_TEXT.get()?;
    let text = WideString::new(text);
    check_bool(unsafe { f(hwnd, text.as_ptr()) }, "SetWindowTextW")
}

pub fn get_window_text(hwnd: Hwnd) -> Result<String> {
    let len_fn = GET_WINDOW_TEXT_LENGTH.get()?;
    let text_fn = GET_WINDOW_TEXT.get()?;
    let len = unsafe { len_fn(hwnd) };
    if len <= 0 {
        return Ok(String::new());
    }
    let mut buffer = vec![0u16; len as usize + 1];
    let copied = unsafe { text_fn(hwnd, buffer.as_mut_ptr(), buffer.len() as i32) };
    let copied = copied.max(0) as usize;
    Ok(from_wide(&buffer[..copied]))
}

pub fn get_window_long_ptr(hwnd: Hwnd, index: i32) -> Result<isize> {
    let f = GET_WINDOW_LONG_PTR.get()?;
    Ok(unsafe { f(hwnd, index) })
}

/*
 * Returns the previous value.
 *
 * # Safety
 * Some indices (GWLP_WNDPROC, GWLP_USERDATA) store pointers the OS or the
 * window procedure will later dereference.
 */
pub unsafe fn set_window_long_ptr(hwnd: Hwnd, index: i32, value: isize) -> Result<isize> {
    let f = SET_WINDOW_LONG_PTR.get()?;
    Ok(unsafe { f(hwnd, index, value) })
}

pub fn get_system_metrics(index: i32) -> Result<i32> {
    let f = GET_SYSTEM_METRICS.get()?;
    Ok(unsafe { f(index) })
}

// --- Messages ---

/*
 * Retrieves the next message for `hwnd` (or the thread for a null handle).
 * Returns `Ok(false)` once WM_QUIT has been retrieved.
 */
pub fn get_message(msg: &mut Msg, hwnd: Hwnd, filter_min: u32, filter_max: u32) -> Result<bool> {
    let f = GET_MESSAGE.get()?;
    match unsafe { f(msg, hwnd, filter_min, filter_max) } {
        -1 => Err(BindingError::last_error("GetMessageW")),
        0 => Ok(false),
        _ => Ok(true),
    }
}

/// Returns whether a character message was posted.
pub fn translate_message(msg: &Msg) -> Result<bool> {
    let f = TRANSLATE_MESSAGE.get()?;
    Ok(bool_from_native(unsafe { f(msg) } as isize))
}

/*
 * # Safety
 * The message parameters are passed to a window procedure unchanged.
 */
pub unsafe fn dispatch_message(msg: &Msg) -> Result<LResult> {
    let f = DISPATCH_MESSAGE.get()?;
    Ok(unsafe { f(msg) })
}

/*
 * # Safety
 * For messages whose parameters are pointers, those pointers must be valid
 * for the message.
 */
pub unsafe fn def_window_proc(msg: &WindowMessage) -> Result<LResult> {
    let f = DEF_WINDOW_PROC.get()?;
    Ok(unsafe { f(msg.hwnd, msg.message, msg.wparam, msg.lparam) })
}

/*
 * # Safety
 * See `def_window_proc`; the receiving window procedure may dereference the
 * parameters.
 */
pub unsafe fn send_message(msg: &WindowMessage) -> Result<LResult> {
    let f = SEND_MESSAGE.get()?;
    Ok(unsafe { f(msg.hwnd, msg.message, msg.wparam, msg.lparam) })
}

/*
 * Sends `msg` to the dialog control `id` of `msg.hwnd`.
 *
 * # Safety
 * See `send_message`.
 */
pub unsafe fn send_dlg_item_message(msg: &WindowMessage, id: i32) -> Result<LResult> {
    let f = SEND_DLG_ITEM_MESSAGE.get()?;
    Ok(unsafe { f(msg.hwnd, id, msg.message, msg.wparam, msg.lparam) })
}

/*
 * # Safety
 * Posted parameters are read later by the receiving thread; any pointer they
 * carry must outlive the message.
 */
pub unsafe fn post_message(msg: &WindowMessage) -> Result<()> {
    let f = POST_MESSAGE.get()?;
    check_bool(
        unsafe { f(msg.hwnd, msg.message, msg.wparam, msg.lparam) },
        "PostMessageW",
    )
}

pub fn post_quit_message(exit_code: i32) -> Result<()> {
    let f = POST_QUIT_MESSAGE.get()?;
    unsafe { f(exit_code) };
    Ok(())
}

// --- Dialogs ---

/*
 * Creates a modeless dialog from a template resource.
 *
 * # Safety
 * `dialog_proc` is invoked by the OS with `init_param` as the LPARAM of
 * WM_INITDIALOG.
 */
pub unsafe fn create_dialog_param(
    instance: Hinstance,
    template: impl Into<ResourceName>,
    parent: Hwnd,
    dialog_proc: Option<DlgProc>,
    init_param: LParam,
) -> Result<Hwnd> {
    let f = CREATE_DIALOG_PARAM.get()?;
    let template = template.into();
    let hwnd = unsafe { f(instance, template.as_ptr(), parent, dialog_proc, init_param) };
    non_null(hwnd, "CreateDialogParamW")
}

/*
 * Runs a modal dialog from a template resource and returns the value passed
 * to `end_dialog`.
 *
 * # Safety
 * Same contract as `create_dialog_param`.
 */
pub unsafe fn dialog_box_param(
    instance: Hinstance,
    template: impl Into<ResourceName>,
    parent: Hwnd,
    dialog_proc: Option<DlgProc>,
    init_param: LParam,
) -> Result<isize> {
    let f = DIALOG_BOX_PARAM.get()?;
    let template = template.into();
    let ret = unsafe { f(instance, template.as_ptr(), parent, dialog_proc, init_param) };
    if ret == -1 {
        Err(BindingError::last_error("DialogBoxParamW"))
    } else {
        Ok(ret)
    }
}

pub fn end_dialog(hwnd: Hwnd, result: isize) -> Result<()> {
    let f = END_DIALOG.get()?;
    check_bool(unsafe { f(hwnd, result) }, "EndDialog")
}

pub fn get_dlg_item(hwnd: Hwnd, id: i32) -> Result<Hwnd> {
    let f = GET_DLG_ITEM.get()?;
    let item = unsafe { f(hwnd, id) };
    non_null(item, "GetDlgItem")
}

/// Returns the id of the button the user pressed (IDOK, IDCANCEL, ...).
pub fn message_box(parent: Hwnd, text: &str, title: &str, flags: u32) -> Result<i32> {
    let f = MESSAGE_BOX.get()?;
    let text = WideString::new(text);
    let title = WideString::new(title);
    let ret = unsafe { f(parent, text.as_nullable_ptr(), title.as_nullable_ptr(), flags) };
    if ret == 0 {
        Err(BindingError::last_error("MessageBoxW"))
    } else {
        Ok(ret)
    }
}

// --- Resources ---

/*
 * Loads a cursor. Pass a null instance with one of the IDC_* ids for the
 * system cursors.
 */
pub fn load_cursor(instance: Hinstance, name: impl Into<ResourceName>) -> Result<Hcursor> {
    let f = LOAD_CURSOR.get()?;
    let name = name.into();
    let cursor = unsafe { f(instance, name.as_ptr()) };
    non_null(cursor, "LoadCursorW")
}

pub fn load_icon(instance: Hinstance, name: impl Into<ResourceName>) -> Result<Hicon> {
    let f = LOAD_ICON.get()?;
    let name = name.into();
    let icon = unsafe { f(instance, name.as_ptr()) };
    non_null(icon, "LoadIconW")
}

pub fn load_menu(instance: Hinstance, name: impl Into<ResourceName>) -> Result<Hmenu> {
    let f = LOAD_MENU.get()?;
    let name = name.into();
    let menu = unsafe { f(instance, name.as_ptr()) };
    non_null(menu, "LoadMenuW")
}

/*
 * Loads a string table entry. A missing entry yields an empty string rather
 * than an error; strings longer than the internal buffer are truncated.
 */
pub fn load_string(instance: Hinstance, id: u32) -> Result<String> {
    let f = LOAD_STRING.get()?;
    let mut buffer = vec![0u16; LOAD_STRING_BUFFER_LEN];
    let copied = unsafe { f(instance, id, buffer.as_mut_ptr(), buffer.len() as i32) };
    if copied <= 0 {
        log::trace!("User32: String resource {id} not found");
        return Ok(String::new());
    }
    Ok(from_wide(&buffer[..copied as usize]))
}
