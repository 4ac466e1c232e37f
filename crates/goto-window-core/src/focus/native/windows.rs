use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetWindowPlacement, SW_RESTORE, SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, ShowWindowAsync,
    WINDOWPLACEMENT,
};

use super::types::PlacementState;
use crate::focus::errors::FocusError;
use crate::host::NativeHandle;

pub(super) fn window_placement(handle: NativeHandle) -> Result<PlacementState, FocusError> {
    // SAFETY: WINDOWPLACEMENT is plain data; all-zero is a valid value before `length` is set.
    let mut placement: WINDOWPLACEMENT = unsafe { std::mem::zeroed() };
    placement.length = std::mem::size_of::<WINDOWPLACEMENT>() as u32;

    // SAFETY: `placement` is a live, correctly sized out-parameter; a stale HWND only makes
    // the call fail.
    let ok = unsafe { GetWindowPlacement(handle.0, &mut placement) };
    if ok == 0 {
        return Err(FocusError::NativeWindowError {
            message: format!(
                "GetWindowPlacement failed for HWND {:#x}: {}",
                handle.0,
                std::io::Error::last_os_error()
            ),
        });
    }

    let show_cmd = placement.showCmd as i32;
    let state = if show_cmd == SW_SHOWMINIMIZED as i32 {
        PlacementState::Minimized
    } else if show_cmd == SW_SHOWMAXIMIZED as i32 {
        PlacementState::Maximized
    } else {
        PlacementState::Normal
    };
    Ok(state)
}

pub(super) fn restore_window(handle: NativeHandle) -> Result<(), FocusError> {
    // SAFETY: ShowWindowAsync only posts a message; an invalid HWND makes it return 0.
    let ok = unsafe { ShowWindowAsync(handle.0, SW_RESTORE) };
    if ok == 0 {
        return Err(FocusError::NativeWindowError {
            message: format!(
                "ShowWindowAsync(SW_RESTORE) failed for HWND {:#x}: {}",
                handle.0,
                std::io::Error::last_os_error()
            ),
        });
    }
    Ok(())
}
