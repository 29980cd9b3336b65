// eglcore/src/platform/egl/api.rs
//
//! The subset of the EGL API that a `GraphicsContext` drives.

use crate::egl::types::{EGLBoolean, EGLConfig, EGLContext, EGLDisplay, EGLNativeDisplayType};
use crate::egl::types::{EGLNativeWindowType, EGLSurface, EGLint};

use std::ffi::CStr;
use std::os::raw::c_void;

/// Entry points of an EGL implementation.
///
/// Each method mirrors the EGL function of the same name: results are reported the way EGL
/// reports them (`EGL_FALSE`, `EGL_NO_*` sentinels) and the error code of the most recent failure
/// is read with [`EglApi::get_error`]. Attribute lists are `EGL_NONE`-terminated.
///
/// [`SystemEgl`](crate::SystemEgl) forwards to the system library. Other implementations exist
/// so that the negotiation can be driven without a GPU.
pub trait EglApi {
    /// `eglGetDisplay`.
    unsafe fn get_display(&self, display_id: EGLNativeDisplayType) -> EGLDisplay;

    /// `eglInitialize`.
    unsafe fn initialize(
        &self,
        display: EGLDisplay,
        major: &mut EGLint,
        minor: &mut EGLint,
    ) -> EGLBoolean;

    /// `eglChooseConfig`. At most `configs.len()` configs are written.
    unsafe fn choose_config(
        &self,
        display: EGLDisplay,
        attrib_list: &[EGLint],
        configs: &mut [EGLConfig],
        num_config: &mut EGLint,
    ) -> EGLBoolean;

    /// `eglCreateContext`.
    unsafe fn create_context(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        share_context: EGLContext,
        attrib_list: &[EGLint],
    ) -> EGLContext;

    /// `eglCreateWindowSurface`.
    unsafe fn create_window_surface(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        native_window: EGLNativeWindowType,
        attrib_list: &[EGLint],
    ) -> EGLSurface;

    /// `eglCreatePbufferSurface`.
    unsafe fn create_pbuffer_surface(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        attrib_list: &[EGLint],
    ) -> EGLSurface;

    /// `eglQuerySurface`.
    unsafe fn query_surface(
        &self,
        display: EGLDisplay,
        surface: EGLSurface,
        attribute: EGLint,
        value: &mut EGLint,
    ) -> EGLBoolean;

    /// `eglMakeCurrent`.
    unsafe fn make_current(
        &self,
        display: EGLDisplay,
        draw: EGLSurface,
        read: EGLSurface,
        context: EGLContext,
    ) -> EGLBoolean;

    /// `eglGetCurrentContext`. Returns `EGL_NO_CONTEXT` if nothing is current on this thread.
    unsafe fn get_current_context(&self) -> EGLContext;

    /// `eglSwapBuffers`.
    unsafe fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean;

    /// `eglDestroySurface`.
    unsafe fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean;

    /// `eglDestroyContext`.
    unsafe fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> EGLBoolean;

    /// `eglTerminate`.
    unsafe fn terminate(&self, display: EGLDisplay) -> EGLBoolean;

    /// `eglGetError`. Reading the error resets it to `EGL_SUCCESS`.
    fn get_error(&self) -> EGLint;

    /// `eglGetProcAddress`.
    unsafe fn get_proc_address(&self, name: &CStr) -> *const c_void;
}

impl<'a, E> EglApi for &'a E
where
    E: EglApi + ?Sized,
{
    #[inline]
    unsafe fn get_display(&self, display_id: EGLNativeDisplayType) -> EGLDisplay {
        (**self).get_display(display_id)
    }

    #[inline]
    unsafe fn initialize(
        &self,
        display: EGLDisplay,
        major: &mut EGLint,
        minor: &mut EGLint,
    ) -> EGLBoolean {
        (**self).initialize(display, major, minor)
    }

    #[inline]
    unsafe fn choose_config(
        &self,
        display: EGLDisplay,
        attrib_list: &[EGLint],
        configs: &mut [EGLConfig],
        num_config: &mut EGLint,
    ) -> EGLBoolean {
        (**self).choose_config(display, attrib_list, configs, num_config)
    }

    #[inline]
    unsafe fn create_context(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        share_context: EGLContext,
        attrib_list: &[EGLint],
    ) -> EGLContext {
        (**self).create_context(display, config, share_context, attrib_list)
    }

    #[inline]
    unsafe fn create_window_surface(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        native_window: EGLNativeWindowType,
        attrib_list: &[EGLint],
    ) -> EGLSurface {
        (**self).create_window_surface(display, config, native_window, attrib_list)
    }

    #[inline]
    unsafe fn create_pbuffer_surface(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        attrib_list: &[EGLint],
    ) -> EGLSurface {
        (**self).create_pbuffer_surface(display, config, attrib_list)
    }

    #[inline]
    unsafe fn query_surface(
        &self,
        display: EGLDisplay,
        surface: EGLSurface,
        attribute: EGLint,
        value: &mut EGLint,
    ) -> EGLBoolean {
        (**self).query_surface(display, surface, attribute, value)
    }

    #[inline]
    unsafe fn make_current(
        &self,
        display: EGLDisplay,
        draw: EGLSurface,
        read: EGLSurface,
        context: EGLContext,
    ) -> EGLBoolean {
        (**self).make_current(display, draw, read, context)
    }

    #[inline]
    unsafe fn get_current_context(&self) -> EGLContext {
        (**self).get_current_context()
    }

    #[inline]
    unsafe fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        (**self).swap_buffers(display, surface)
    }

    #[inline]
    unsafe fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        (**self).destroy_surface(display, surface)
    }

    #[inline]
    unsafe fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> EGLBoolean {
        (**self).destroy_context(display, context)
    }

    #[inline]
    unsafe fn terminate(&self, display: EGLDisplay) -> EGLBoolean {
        (**self).terminate(display)
    }

    #[inline]
    fn get_error(&self) -> EGLint {
        (**self).get_error()
    }

    #[inline]
    unsafe fn get_proc_address(&self, name: &CStr) -> *const c_void {
        (**self).get_proc_address(name)
    }
}
