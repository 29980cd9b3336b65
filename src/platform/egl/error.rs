// eglcore/src/platform/egl/error.rs
//
//! Translation of errors from the EGL API to `eglcore` errors.

use crate::egl;
use crate::egl::types::{EGLenum, EGLint};
use crate::WindowingApiError;

use std::fmt::{self, Display, Formatter};

pub(crate) trait ToWindowingApiError {
    fn to_windowing_api_error(self) -> WindowingApiError;
}

impl ToWindowingApiError for EGLint {
    fn to_windowing_api_error(self) -> WindowingApiError {
        match self as EGLenum {
            egl::NOT_INITIALIZED => WindowingApiError::NotInitialized,
            egl::BAD_ACCESS => WindowingApiError::BadAccess,
            egl::BAD_ALLOC => WindowingApiError::BadAlloc,
            egl::BAD_ATTRIBUTE => WindowingApiError::BadAttribute,
            egl::BAD_CONFIG => WindowingApiError::BadConfig,
            egl::BAD_CONTEXT => WindowingApiError::BadContext,
            egl::BAD_CURRENT_SURFACE => WindowingApiError::BadCurrentSurface,
            egl::BAD_DISPLAY => WindowingApiError::BadDisplay,
            egl::BAD_SURFACE => WindowingApiError::BadSurface,
            egl::BAD_MATCH => WindowingApiError::BadMatch,
            egl::BAD_PARAMETER => WindowingApiError::BadParameter,
            egl::BAD_NATIVE_PIXMAP => WindowingApiError::BadNativePixmap,
            egl::BAD_NATIVE_WINDOW => WindowingApiError::BadNativeWindow,
            egl::CONTEXT_LOST => WindowingApiError::ContextLost,
            _ => WindowingApiError::Failed,
        }
    }
}

/// A raw `eglGetError()` code, formatted for log output.
#[derive(Clone, Copy)]
pub(crate) struct ErrorCode(pub(crate) EGLint);

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:#06x} ({:?})", self.0, self.0.to_windowing_api_error())
    }
}
