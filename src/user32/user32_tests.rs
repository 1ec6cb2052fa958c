/*
 * Live tests for the user32 bindings. They create real (never shown) windows
 * and classes, so they only run on Windows. Class names are randomized so
 * parallel test threads never collide.
 */
#![cfg(windows)]

use super::*;
use crate::kernel32;
use rand::Rng;

const ERROR_INVALID_WINDOW_HANDLE: u32 = 1400;
const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;
const ERROR_CLASS_DOES_NOT_EXIST: u32 = 1411;

unsafe extern "system" fn test_wnd_proc(
    hwnd: Hwnd,
    message: u32,
    wparam: WParam,
    lparam: LParam,
) -> LResult {
    let msg = WindowMessage::new(hwnd, message, wparam, lparam);
    unsafe { def_window_proc(&msg) }.unwrap_or(0)
}

fn unique_class_name() -> String {
    let suffix: u64 = rand::rng().random();
    format!("Win32BindTest{suffix:016x}")
}

fn register_test_class() -> (String, Hinstance) {
    let class_name = unique_class_name();
    let params = RegisterClassParams {
        wnd_proc: Some(test_wnd_proc),
        class_name: class_name.clone(),
        background: class_background_brush(COLOR_WINDOW),
        ..Default::default()
    };
    register_class_ex(&params).unwrap();
    let instance = kernel32::get_module_handle(None).unwrap().into();
    (class_name, instance)
}

fn create_hidden_window(class_name: &str) -> Hwnd {
    let mut params = CreateWindowParams::new(class_name, "win32_bind test", WS_POPUP);
    params.x = 0;
    params.y = 0;
    params.width = 120;
    params.height = 80;
    unsafe { create_window_ex(&params) }.unwrap()
}

#[test]
fn test_register_class_returns_atom_and_rejects_duplicates() {
    // Arrange
    let class_name = unique_class_name();
    let params = RegisterClassParams {
        wnd_proc: Some(test_wnd_proc),
        class_name: class_name.clone(),
        ..Default::default()
    };

    // Act
    let atom = register_class_ex(&params).unwrap();
    let duplicate = register_class_ex(&params);

    // Assert
    assert_ne!(atom, 0);
    assert_eq!(duplicate.unwrap_err().code(), Some(ERROR_CLASS_ALREADY_EXISTS));

    let instance = kernel32::get_module_handle(None).unwrap().into();
    unregister_class(&class_name, instance).unwrap();
    let again = unregister_class(&class_name, instance);
    assert_eq!(again.unwrap_err().code(), Some(ERROR_CLASS_DOES_NOT_EXIST));
}

#[test]
fn test_window_text_and_client_rect() {
    // Arrange
    let (class_name, instance) = register_test_class();
    let hwnd = create_hidden_window(&class_name);

    // Act
    set_window_text(hwnd, "Grüße ✓").unwrap();
    let text = get_window_text(hwnd).unwrap();
    let rect = get_client_rect(hwnd).unwrap();
    let style = get_window_long_ptr(hwnd, GWL_STYLE).unwrap() as u32;

    // Assert
    assert_eq!(text, "Grüße ✓");
    assert_eq!((rect.width(), rect.height()), (120, 80));
    assert_ne!(style & WS_POPUP, 0);
    assert_eq!(style & WS_VISIBLE, 0);

    destroy_window(hwnd).unwrap();
    unregister_class(&class_name, instance).unwrap();
}

#[test]
fn test_static_control_uses_predefined_class() {
    let mut params = CreateWindowParams::new("STATIC", "label", WS_POPUP | SS_CENTER);
    params.width = 50;
    params.height = 20;
    let hwnd = unsafe { create_window_ex(&params) }.unwrap();

    assert_eq!(get_window_text(hwnd).unwrap(), "label");
    destroy_window(hwnd).unwrap();
}

#[test]
fn test_posted_message_is_retrieved_by_get_message() {
    // Arrange
    let (class_name, instance) = register_test_class();
    let hwnd = create_hidden_window(&class_name);
    let message = WM_APP + 1;

    // Act
    unsafe { post_message(&WindowMessage::new(hwnd, message, 7, -3)) }.unwrap();
    let mut msg = Msg::default();
    let more = get_message(&mut msg, hwnd, message, message).unwrap();

    // Assert
    assert!(more);
    assert_eq!(msg.hwnd, hwnd);
    assert_eq!(msg.params(), WindowMessage::new(hwnd, message, 7, -3));
    assert!(!translate_message(&msg).unwrap());
    assert_eq!(unsafe { dispatch_message(&msg) }.unwrap(), 0);

    destroy_window(hwnd).unwrap();
    unregister_class(&class_name, instance).unwrap();
}

#[test]
fn test_set_window_long_ptr_returns_previous_value() {
    let (class_name, instance) = register_test_class();
    let hwnd = create_hidden_window(&class_name);

    let previous = unsafe { set_window_long_ptr(hwnd, GWLP_USERDATA, 0x1234) }.unwrap();
    assert_eq!(previous, 0);
    assert_eq!(get_window_long_ptr(hwnd, GWLP_USERDATA).unwrap(), 0x1234);

    destroy_window(hwnd).unwrap();
    unregister_class(&class_name, instance).unwrap();
}

#[test]
fn test_paint_cycle_on_hidden_window() {
    let (class_name, instance) = register_test_class();
    let hwnd = create_hidden_window(&class_name);

    let mut ps = PaintStruct::default();
    let hdc = begin_paint(hwnd, &mut ps).unwrap();
    assert_eq!(ps.hdc, hdc);
    let brush = get_sys_color_brush(COLOR_WINDOW).unwrap();
    fill_rect(hdc, &get_client_rect(hwnd).unwrap(), brush).unwrap();
    end_paint(hwnd, &ps).unwrap();

    let dc = get_dc(hwnd).unwrap();
    assert!(release_dc(hwnd, dc).unwrap());

    destroy_window(hwnd).unwrap();
    unregister_class(&class_name, instance).unwrap();
}

#[test]
fn test_invalid_window_reports_last_error() {
    let err = destroy_window(Hwnd::NULL).unwrap_err();
    assert_eq!(err.code(), Some(ERROR_INVALID_WINDOW_HANDLE));
    assert!(err.to_string().starts_with("DestroyWindow Last error:1400"));
}

#[test]
fn test_system_resources_load_by_id() {
    assert!(!load_cursor(Hinstance::NULL, IDC_ARROW).unwrap().is_null());
    assert!(!load_icon(Hinstance::NULL, IDI_APPLICATION).unwrap().is_null());
    assert!(get_system_metrics(SM_CXSCREEN).unwrap() > 0);
}

#[test]
fn test_missing_string_resource_is_empty() {
    let instance = kernel32::get_module_handle(None).unwrap().into();
    assert_eq!(load_string(instance, 65_000).unwrap(), "");
}

#[test]
fn test_quit_message_ends_get_message_with_exit_code() {
    // A fresh thread keeps the quit request off the other tests' queues.
    let (more, msg) = std::thread::spawn(|| {
        post_quit_message(3).unwrap();
        let mut msg = Msg::default();
        let more = get_message(&mut msg, Hwnd::NULL, 0, 0).unwrap();
        (more, msg)
    })
    .join()
    .unwrap();

    assert!(!more);
    assert_eq!(msg.message, WM_QUIT);
    assert_eq!(msg.wparam, 3);
}

#[test]
fn test_show_window_reports_previous_visibility() {
    let (class_name, instance) = register_test_class();
    let hwnd = create_hidden_window(&class_name);

    assert!(!show_window(hwnd, SW_SHOW).unwrap());
    assert!(show_window(hwnd, SW_HIDE).unwrap());
    assert!(!show_window(hwnd, SW_HIDE).unwrap());

    destroy_window(hwnd).unwrap();
    unregister_class(&class_name, instance).unwrap();
}

#[test]
fn test_child_control_is_reachable_by_id() {
    // Arrange
    const LABEL_ID: i32 = 42;
    let (class_name, instance) = register_test_class();
    let parent = create_hidden_window(&class_name);
    let mut params = CreateWindowParams::new("STATIC", "", WS_CHILD | SS_LEFT);
    params.width = 60;
    params.height = 20;
    params.parent = parent;
    params.menu = Hmenu::from_raw(LABEL_ID as usize);
    let label = unsafe { create_window_ex(&params) }.unwrap();
    let text = WideString::new("Ready");

    // Act
    let found = get_dlg_item(parent, LABEL_ID).unwrap();
    let set = unsafe {
        send_message(&WindowMessage::new(
            label,
            WM_SETTEXT,
            0,
            text.as_ptr() as LParam,
        ))
    }
    .unwrap();
    let length = unsafe {
        send_dlg_item_message(&WindowMessage::new(parent, WM_GETTEXTLENGTH, 0, 0), LABEL_ID)
    }
    .unwrap();

    // Assert
    assert_eq!(found, label);
    assert_eq!(set, 1);
    assert_eq!(length, 5);
    assert_eq!(get_window_text(label).unwrap(), "Ready");
    assert!(get_dlg_item(parent, LABEL_ID + 1).is_err());

    // Destroying the parent takes the child with it.
    destroy_window(parent).unwrap();
    unregister_class(&class_name, instance).unwrap();
}

#[test]
fn test_invalidate_whole_client_area_and_sub_rect() {
    let (class_name, instance) = register_test_class();
    let hwnd = create_hidden_window(&class_name);

    invalidate_rect(hwnd, None, true).unwrap();
    invalidate_rect(hwnd, Some(&Rect::new(0, 0, 10, 10)), false).unwrap();
    update_window(hwnd).unwrap();

    destroy_window(hwnd).unwrap();
    unregister_class(&class_name, instance).unwrap();
}

// Resource-data, resource-type and resource-name "not found" codes. Which one
// is reported depends on whether the test binary has a resource section.
const RESOURCE_NOT_FOUND_CODES: [u32; 3] = [1812, 1813, 1814];

#[test]
fn test_missing_menu_resource_reports_last_error() {
    let instance = kernel32::get_module_handle(None).unwrap().into();

    let err = load_menu(instance, "NO_SUCH_MENU").unwrap_err();

    assert!(matches!(err, BindingError::Win32 { .. }));
    assert!(RESOURCE_NOT_FOUND_CODES.contains(&err.code().unwrap()));
}

#[test]
fn test_missing_dialog_template_fails_for_both_dialog_kinds() {
    let instance = kernel32::get_module_handle(None).unwrap().into();

    let modeless =
        unsafe { create_dialog_param(instance, "NO_SUCH_DIALOG", Hwnd::NULL, None, 0) };
    let modal = unsafe { dialog_box_param(instance, "NO_SUCH_DIALOG", Hwnd::NULL, None, 0) };

    assert!(matches!(modeless, Err(BindingError::Win32 { .. })));
    assert!(matches!(modal, Err(BindingError::Win32 { .. })));
}
