// eglcore/src/platform/egl/display.rs
//
//! The display connection.

use super::api::EglApi;
use super::error::{ErrorCode, ToWindowingApiError};
use crate::egl;
use crate::egl::types::EGLDisplay;
use crate::{Error, Stage};

/// A display connection owned by a `GraphicsContext`. Terminating it invalidates every object
/// created from it.
pub(crate) struct OwnedEGLDisplay {
    pub(crate) egl_display: EGLDisplay,
}

impl OwnedEGLDisplay {
    #[inline]
    pub(crate) fn none() -> OwnedEGLDisplay {
        OwnedEGLDisplay {
            egl_display: egl::NO_DISPLAY,
        }
    }

    /// Connects to the default display and initializes it.
    pub(crate) unsafe fn open<E>(egl: &E) -> Result<OwnedEGLDisplay, Error>
    where
        E: EglApi + ?Sized,
    {
        let egl_display = egl.get_display(egl::DEFAULT_DISPLAY);
        if egl_display == egl::NO_DISPLAY {
            let code = egl.get_error();
            error!("{}: eglGetDisplay failed: {}", Stage::Display, ErrorCode(code));
            return Err(Error::NoDisplayFound(code.to_windowing_api_error()));
        }

        // The version is only reported for diagnostics.
        let (mut major_version, mut minor_version) = (0, 0);
        let result = egl.initialize(egl_display, &mut major_version, &mut minor_version);
        if result == egl::FALSE {
            let code = egl.get_error();
            error!("{}: eglInitialize failed: {}", Stage::Display, ErrorCode(code));
            return Err(Error::DisplayInitializationFailed(
                code.to_windowing_api_error(),
            ));
        }

        debug!(
            "{}: initialized EGL {}.{}",
            Stage::Display,
            major_version,
            minor_version
        );
        Ok(OwnedEGLDisplay { egl_display })
    }

    #[inline]
    pub(crate) fn is_destroyed(&self) -> bool {
        self.egl_display == egl::NO_DISPLAY
    }

    /// Terminates the connection. The handle is reset even if termination fails.
    pub(crate) unsafe fn destroy<E>(&mut self, egl: &E) -> Result<(), Error>
    where
        E: EglApi + ?Sized,
    {
        if self.is_destroyed() {
            return Ok(());
        }

        let result = egl.terminate(self.egl_display);
        self.egl_display = egl::NO_DISPLAY;
        if result == egl::FALSE {
            let err = egl.get_error().to_windowing_api_error();
            return Err(Error::DisplayTerminationFailed(err));
        }
        Ok(())
    }
}
