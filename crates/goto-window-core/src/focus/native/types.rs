use crate::focus::errors::FocusError;
use crate::host::NativeHandle;

/// How a native window is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    Normal,
    Minimized,
    Maximized,
}

/// Query and change native window placement.
pub trait PlacementApi {
    fn placement(&self, handle: NativeHandle) -> Result<PlacementState, FocusError>;

    /// Ask the window to restore without waiting for it.
    fn restore(&self, handle: NativeHandle) -> Result<(), FocusError>;
}

/// Win32 `GetWindowPlacement` / `ShowWindowAsync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Placement;

#[cfg(windows)]
impl PlacementApi for Win32Placement {
    fn placement(&self, handle: NativeHandle) -> Result<PlacementState, FocusError> {
        super::windows::window_placement(handle)
    }

    fn restore(&self, handle: NativeHandle) -> Result<(), FocusError> {
        super::windows::restore_window(handle)
    }
}

#[cfg(not(windows))]
impl PlacementApi for Win32Placement {
    fn placement(&self, _handle: NativeHandle) -> Result<PlacementState, FocusError> {
        Err(FocusError::NativeUnsupported)
    }

    fn restore(&self, _handle: NativeHandle) -> Result<(), FocusError> {
        Err(FocusError::NativeUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_win32_placement_unsupported_off_windows() {
        let api = Win32Placement;
        assert!(matches!(
            api.placement(NativeHandle(1)),
            Err(FocusError::NativeUnsupported)
        ));
        assert!(matches!(
            api.restore(NativeHandle(1)),
            Err(FocusError::NativeUnsupported)
        ));
    }
}
