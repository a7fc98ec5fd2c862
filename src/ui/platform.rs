use fltk::prelude::*;
use fltk::window::Window;

/// Pin or unpin the window above other windows.
///
/// Returns false when the window system offers no way to do it (Wayland,
/// X11 without a wmctrl binary), so the caller can tell the user instead
/// of failing silently.
#[cfg(target_os = "windows")]
pub fn set_always_on_top(window: &Window, pinned: bool) -> bool {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        HWND_NOTOPMOST, HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SetWindowPos,
    };

    let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
    let insert_after = if pinned { HWND_TOPMOST } else { HWND_NOTOPMOST };

    // SAFETY: the HWND comes from FLTK's shown window and stays valid while
    // the window exists; SetWindowPos with NOMOVE|NOSIZE only changes z-order.
    unsafe {
        SetWindowPos(
            hwnd,
            insert_after,
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
        )
        .is_ok()
    }
}

/// Pin or unpin the window above other windows.
#[cfg(target_os = "macos")]
pub fn set_always_on_top(window: &Window, pinned: bool) -> bool {
    use objc2::msg_send;
    use objc2::runtime::AnyObject;

    // NSFloatingWindowLevel / NSNormalWindowLevel
    let level: isize = if pinned { 3 } else { 0 };

    // SAFETY: on macOS FLTK's raw handle is the NSWindow pointer; setLevel:
    // takes an NSInteger and has no other effect.
    unsafe {
        let ns_window = window.raw_handle() as *mut AnyObject;
        if ns_window.is_null() {
            return false;
        }
        let _: () = msg_send![ns_window, setLevel: level];
    }
    true
}

/// Pin or unpin the window above other windows.
///
/// FLTK has no portable always-on-top call, so on Linux this asks the window
/// manager through `wmctrl`, the same way system theme detection shells out
/// to `gsettings`. Wayland compositors ignore the request.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn set_always_on_top(window: &Window, pinned: bool) -> bool {
    use std::process::Command;

    let action = if pinned { "add,above" } else { "remove,above" };
    let title = window.label();

    match Command::new("wmctrl")
        .args(["-r", &title, "-b", action])
        .status()
    {
        Ok(status) => status.success(),
        Err(e) => {
            log::debug!("wmctrl unavailable: {}", e);
            false
        }
    }
}
