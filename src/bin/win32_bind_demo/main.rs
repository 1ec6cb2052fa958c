/*
 * A small window built only from win32_bind calls: it registers a class,
 * paints a greeting from the string table in a configurable font, opens the
 * about box on click and runs the message loop until the window is closed.
 *
 * Settings and the log file live in the per-user local configuration
 * directory. On a host without the Win32 libraries the first binding call
 * fails; the error is logged and the process exits with a failure code.
 */

mod settings;

use settings::{DemoSettings, SETTINGS_FILENAME};
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use win32_bind::gdi32::{self, LOGPIXELSY, LogFont, TRANSPARENT};
use win32_bind::kernel32::{self, LOCALE_SISO639LANGNAME, LOCALE_USER_DEFAULT};
use win32_bind::user32::{self, *};
use win32_bind::{
    Hbrush, Hdc, Hfont, Hinstance, Hwnd, LParam, LResult, WParam, get_x_lparam, get_y_lparam,
};

const APP_NAME: &str = "Win32BindDemo";
const CLASS_NAME: &str = "Win32BindDemoWindow";
const LOG_FILENAME: &str = "win32_bind_demo.log";
const IDS_GREETING: u32 = 101;
const IDD_ABOUTBOX: &str = "ABOUTBOX";
const FALLBACK_GREETING: &str = "Hello from win32_bind";

// Per-window state, owned by `run` and reachable from the window procedure
// through GWLP_USERDATA.
struct DemoWindow {
    settings: DemoSettings,
    instance: Hinstance,
    font: Hfont,
    background: Hbrush,
    greeting: String,
}

fn init_logging(log_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(dir) = log_dir {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            File::create(dir.join(LOG_FILENAME))?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn load_settings(config_dir: Option<&Path>) -> DemoSettings {
    let Some(dir) = config_dir else {
        return DemoSettings::default();
    };
    DemoSettings::load_or_create(&dir.join(SETTINGS_FILENAME)).unwrap_or_else(|e| {
        log::warn!("Demo: Using default settings: {e}");
        DemoSettings::default()
    })
}

fn main() -> ExitCode {
    let config_dir = settings::config_local_dir(APP_NAME);
    if let Err(e) = init_logging(config_dir.as_deref().ok()) {
        eprintln!("Failed to initialize logging: {e}");
    }
    if let Err(e) = &config_dir {
        log::warn!("Demo: No configuration directory: {e}");
    }
    let settings = load_settings(config_dir.as_deref().ok());

    match run(settings) {
        Ok(code) => {
            log::info!("Demo: Message loop ended with exit code {code}");
            ExitCode::from(code.clamp(0, 255) as u8)
        }
        Err(e) => {
            log::error!("Demo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: DemoSettings) -> win32_bind::Result<i32> {
    let instance: Hinstance = kernel32::get_module_handle(None)?.into();
    match kernel32::get_locale_info(LOCALE_USER_DEFAULT, LOCALE_SISO639LANGNAME) {
        Ok(language) => log::info!("Demo: User language is '{language}'"),
        Err(e) => log::warn!("Demo: Could not query the user language: {e}"),
    }

    let mut greeting = user32::load_string(instance, IDS_GREETING)?;
    if greeting.is_empty() {
        greeting = FALLBACK_GREETING.to_string();
    }

    let mut resources = DemoResources::default();
    let font = gdi32::create_font_indirect(&LogFont::new(
        &settings.font_face,
        settings.font_height,
        settings.font_weight,
    )?)?;
    resources.font = Some(font);
    let background = gdi32::create_solid_brush(settings.background_color)?;
    resources.background = Some(background);

    user32::register_class_ex(&RegisterClassParams {
        style: CS_HREDRAW | CS_VREDRAW,
        wnd_proc: Some(demo_wnd_proc),
        instance: Some(instance),
        icon: user32::load_icon(Hinstance::NULL, IDI_APPLICATION)?,
        cursor: user32::load_cursor(Hinstance::NULL, IDC_ARROW)?,
        background: user32::class_background_brush(COLOR_WINDOW),
        class_name: CLASS_NAME.to_string(),
        ..Default::default()
    })?;
    resources.class = Some(instance);

    let mut params =
        CreateWindowParams::new(CLASS_NAME, &settings.window_title, WS_OVERLAPPEDWINDOW);
    params.width = settings.width;
    params.height = settings.height;
    params.instance = instance;

    let state = Box::into_raw(Box::new(DemoWindow {
        settings,
        instance,
        font,
        background,
        greeting,
    }));
    params.param = state as usize;

    // SAFETY: `state` stays allocated until the window is gone.
    let result = match unsafe { user32::create_window_ex(&params) } {
        Ok(hwnd) => show_and_pump(hwnd),
        Err(e) => Err(e),
    };

    // SAFETY: the window no longer exists (or was never created), so the
    // window procedure cannot reach `state` anymore.
    drop(unsafe { Box::from_raw(state) });
    resources.release();
    result
}

/*
 * GDI objects and the window class created by `run`. Each field is filled in
 * as soon as the resource exists, so an early `?` return still releases
 * everything created before it.
 */
#[derive(Debug, Default)]
struct DemoResources {
    font: Option<Hfont>,
    background: Option<Hbrush>,
    class: Option<Hinstance>,
}

impl DemoResources {
    // Failures are logged and the remaining resources are still released.
    fn release(&mut self) {
        if let Some(font) = self.font.take() {
            if let Err(e) = gdi32::delete_object(font) {
                log::warn!("Demo: Could not delete font: {e}");
            }
        }
        if let Some(brush) = self.background.take() {
            if let Err(e) = gdi32::delete_object(brush) {
                log::warn!("Demo: Could not delete background brush: {e}");
            }
        }
        if let Some(instance) = self.class.take() {
            if let Err(e) = user32::unregister_class(CLASS_NAME, instance) {
                log::warn!("Demo: Could not unregister window class: {e}");
            }
        }
    }
}

impl Drop for DemoResources {
    fn drop(&mut self) {
        self.release();
    }
}

fn show_and_pump(hwnd: Hwnd) -> win32_bind::Result<i32> {
    user32::show_window(hwnd, SW_SHOWDEFAULT)?;
    user32::update_window(hwnd)?;

    let pumped = pump_messages();
    if let Err(e) = &pumped {
        log::warn!("Demo: Message loop failed, closing window: {e}");
        if let Err(e) = user32::destroy_window(hwnd) {
            log::debug!("Demo: Window already gone: {e}");
        }
    }
    pumped
}

// Runs until WM_QUIT and returns its exit code.
fn pump_messages() -> win32_bind::Result<i32> {
    let mut msg = Msg::default();
    while user32::get_message(&mut msg, Hwnd::NULL, 0, 0)? {
        user32::translate_message(&msg)?;
        // SAFETY: the message comes straight from the queue.
        unsafe { user32::dispatch_message(&msg) }?;
    }
    Ok(msg.wparam as i32)
}

unsafe extern "system" fn demo_wnd_proc(
    hwnd: Hwnd,
    message: u32,
    wparam: WParam,
    lparam: LParam,
) -> LResult {
    let msg = WindowMessage::new(hwnd, message, wparam, lparam);
    if message == WM_NCCREATE {
        // SAFETY: WM_NCCREATE carries a CREATESTRUCTW.
        let create = unsafe { CreateStruct::from_lparam(lparam) };
        let attached = unsafe {
            user32::set_window_long_ptr(hwnd, GWLP_USERDATA, create.create_params as isize)
        };
        if let Err(e) = attached {
            log::error!("Demo: Could not attach window state: {e}");
            return 0;
        }
    }

    let state =
        user32::get_window_long_ptr(hwnd, GWLP_USERDATA).unwrap_or(0) as *const DemoWindow;
    if !state.is_null() {
        // SAFETY: set from `run`'s allocation above and cleared on WM_NCDESTROY.
        let window = unsafe { &*state };
        match handle_message(window, &msg) {
            Ok(Some(result)) => return result,
            Ok(None) => {}
            Err(e) => log::error!("Demo: Handling message {message:#06x} failed: {e}"),
        }
    }

    // SAFETY: the parameters are passed through unchanged.
    unsafe { user32::def_window_proc(&msg) }.unwrap_or(0)
}

// Returns `Some(result)` when the message was handled.
fn handle_message(
    window: &DemoWindow,
    msg: &WindowMessage,
) -> win32_bind::Result<Option<LResult>> {
    match msg.message {
        WM_PAINT => {
            paint(window, msg.hwnd)?;
            Ok(Some(0))
        }
        WM_LBUTTONUP => {
            log::debug!(
                "Demo: Click at ({}, {})",
                get_x_lparam(msg.lparam),
                get_y_lparam(msg.lparam)
            );
            show_about(window, msg.hwnd)?;
            Ok(Some(0))
        }
        WM_DESTROY => {
            user32::post_quit_message(0)?;
            Ok(Some(0))
        }
        WM_NCDESTROY => {
            // SAFETY: zero is never dereferenced.
            unsafe { user32::set_window_long_ptr(msg.hwnd, GWLP_USERDATA, 0) }?;
            Ok(None)
        }
        _ => Ok(None),
    }
}

fn paint(window: &DemoWindow, hwnd: Hwnd) -> win32_bind::Result<()> {
    let mut ps = PaintStruct::default();
    let hdc = user32::begin_paint(hwnd, &mut ps)?;
    let drawn = draw(window, hwnd, hdc, &ps);
    user32::end_paint(hwnd, &ps)?;
    drawn
}

fn draw(window: &DemoWindow, hwnd: Hwnd, hdc: Hdc, ps: &PaintStruct) -> win32_bind::Result<()> {
    user32::fill_rect(hdc, &ps.rc_paint, window.background)?;

    let previous_font = gdi32::select_object(hdc, window.font)?;
    gdi32::set_text_color(hdc, window.settings.text_color)?;
    gdi32::set_bk_mode(hdc, TRANSPARENT)?;

    let dpi = gdi32::get_device_caps(hdc, LOGPIXELSY)?;
    let margin = dpi / 4;
    gdi32::text_out(hdc, margin, margin, &window.greeting)?;

    let client = user32::get_client_rect(hwnd)?;
    let hint = format!(
        "{} x {} pixels at {dpi} dpi. Click for the about box.",
        client.width(),
        client.height()
    );
    gdi32::text_out(hdc, margin, margin + dpi / 2, &hint)?;

    gdi32::select_object(hdc, previous_font)?;
    Ok(())
}

fn show_about(window: &DemoWindow, hwnd: Hwnd) -> win32_bind::Result<()> {
    // SAFETY: `about_dlg_proc` ignores the init parameter.
    let shown = unsafe {
        user32::dialog_box_param(window.instance, IDD_ABOUTBOX, hwnd, Some(about_dlg_proc), 0)
    };
    match shown {
        Ok(result) => {
            log::debug!("Demo: About box closed with {result}");
            Ok(())
        }
        Err(e) => {
            // Built without resources: fall back to a plain message box.
            log::warn!("Demo: About box unavailable: {e}");
            user32::message_box(
                hwnd,
                &window.greeting,
                &window.settings.window_title,
                MB_OK | MB_ICONINFORMATION,
            )?;
            Ok(())
        }
    }
}

unsafe extern "system" fn about_dlg_proc(
    hwnd: Hwnd,
    message: u32,
    wparam: WParam,
    lparam: LParam,
) -> isize {
    match message {
        WM_INITDIALOG => 1,
        WM_COMMAND => {
            let command = Command::from_params(wparam, lparam);
            if command.id == IDOK as u32 || command.id == IDCANCEL as u32 {
                if let Err(e) = user32::end_dialog(hwnd, command.id as isize) {
                    log::warn!("Demo: EndDialog failed: {e}");
                }
                1
            } else {
                0
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_clears_every_resource_even_when_calls_fail() {
        // Arrange
        // None of these handles refer to live objects, so every release call fails.
        let mut resources = DemoResources {
            font: Some(Hfont::from_raw(0x7fff_0001)),
            background: Some(Hbrush::from_raw(0x7fff_0002)),
            class: Some(Hinstance::NULL),
        };

        // Act
        resources.release();

        // Assert
        assert!(resources.font.is_none());
        assert!(resources.background.is_none());
        assert!(resources.class.is_none());
    }

    #[test]
    fn test_default_resources_release_nothing() {
        let mut resources = DemoResources::default();
        resources.release();
        assert!(resources.font.is_none() && resources.background.is_none());
        assert!(resources.class.is_none());
    }
}
