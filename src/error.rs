use std::ffi::{c_char, CStr};

/// Errors that can occur when talking to the LibOVR runtime.
#[derive(Debug, thiserror::Error)]
pub enum OvrError {
    #[error("Failed to load LibOVR: {0}")]
    Load(#[from] libloading::Error),

    #[error("No LibOVR library found (tried {0})")]
    LibraryNotFound(String),

    #[error("ovr_Initialize failed")]
    InitializeFailed,

    #[error("ovr_InitializeRenderingShim failed")]
    RenderingShimFailed,

    #[error("No HMD available")]
    HmdUnavailable,

    #[error("{operation} failed: {message}")]
    Sdk {
        operation: &'static str,
        message: String,
    },

    #[error("{0} failed without an error message")]
    Unknown(&'static str),

    #[error("String passed to LibOVR contains a NUL byte: {0}")]
    InvalidString(#[from] std::ffi::NulError),
}

impl OvrError {
    /// Build the error for a failed call from the SDK's last-error string.
    pub(crate) fn from_last_error(operation: &'static str, message: Option<String>) -> Self {
        match message {
            Some(message) => {
                log::warn!("{} failed: {}", operation, message);
                OvrError::Sdk { operation, message }
            }
            None => {
                log::warn!("{} failed without an error message", operation);
                OvrError::Unknown(operation)
            }
        }
    }
}

/// Copy a message string returned by LibOVR.
///
/// `ovrHmd_GetLastError` and `ovrHmd_GetLatencyTestResult` return an empty
/// string rather than NULL when there is nothing to report, so both cases map
/// to `None`.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn message_from_ptr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let message = CStr::from_ptr(ptr);
    if message.to_bytes().is_empty() {
        None
    } else {
        Some(message.to_string_lossy().into_owned())
    }
}

/// Copy a string returned by LibOVR, mapping NULL to an empty string.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn string_from_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}
