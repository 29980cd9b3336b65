// eglcore/src/platform/egl/surface.rs
//
//! Window and pbuffer surfaces.

use super::api::EglApi;
use super::error::{ErrorCode, ToWindowingApiError};
use crate::egl;
use crate::egl::types::{EGLConfig, EGLDisplay, EGLNativeWindowType, EGLSurface, EGLint};
use crate::{Error, Stage};

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

/// Width and height of the pbuffer created when no window is supplied. It exists only so that
/// the context has something to be current against.
pub(crate) const PBUFFER_SIZE: EGLint = 1;

/// The kind of drawable a `GraphicsContext` renders to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    /// A surface wrapping a caller-owned native window.
    Window,
    /// A 1×1 offscreen pbuffer.
    Pbuffer,
}

impl SurfaceKind {
    #[inline]
    pub(crate) fn egl_surface_type_bit(self) -> EGLint {
        match self {
            SurfaceKind::Window => egl::WINDOW_BIT as EGLint,
            SurfaceKind::Pbuffer => egl::PBUFFER_BIT as EGLint,
        }
    }
}

/// A borrowed native window.
///
/// The window is never destroyed by this crate. The lifetime ties any `GraphicsContext` created
/// from it to the window it renders to.
#[derive(Clone, Copy)]
pub struct NativeWindow<'w> {
    native_window: EGLNativeWindowType,
    phantom: PhantomData<&'w ()>,
}

impl Debug for NativeWindow<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "NativeWindow({:p})", self.native_window)
    }
}

impl NativeWindow<'static> {
    /// Wraps a raw `EGLNativeWindowType` (an `ANativeWindow*`, an X11 `Window`, an `HWND`, ...).
    ///
    /// # Safety
    ///
    /// The window must be valid for the implementation the `GraphicsContext` is created with,
    /// and must outlive every `GraphicsContext` that wraps it.
    #[inline]
    pub unsafe fn from_raw(native_window: EGLNativeWindowType) -> NativeWindow<'static> {
        NativeWindow {
            native_window,
            phantom: PhantomData,
        }
    }
}

impl<'w> NativeWindow<'w> {
    /// Returns the raw `EGLNativeWindowType`.
    #[inline]
    pub fn as_raw(&self) -> EGLNativeWindowType {
        self.native_window
    }

    /// Creates a native window from a `raw-window-handle` window handle.
    ///
    /// Android, OpenHarmony, Xlib, XCB and Win32 handles can be passed straight to EGL. Other
    /// handles (Wayland surfaces in particular, which need a `wl_egl_window`) are rejected with
    /// `Error::IncompatibleNativeWindow`.
    #[cfg(feature = "raw-window-handle-06")]
    pub fn from_window_handle(handle: rwh_06::WindowHandle<'w>) -> Result<NativeWindow<'w>, Error> {
        use rwh_06::RawWindowHandle::{AndroidNdk, OhosNdk, Win32, Xcb, Xlib};

        let native_window = match handle.as_raw() {
            AndroidNdk(handle) => handle.a_native_window.as_ptr().cast_const(),
            OhosNdk(handle) => handle.native_window.as_ptr().cast_const(),
            Xlib(handle) => handle.window as usize as EGLNativeWindowType,
            Xcb(handle) => handle.window.get() as usize as EGLNativeWindowType,
            Win32(handle) => handle.hwnd.get() as usize as EGLNativeWindowType,
            _ => return Err(Error::IncompatibleNativeWindow),
        };
        Ok(NativeWindow {
            native_window,
            phantom: PhantomData,
        })
    }

    /// Creates a native window from anything that exposes a `raw-window-handle` window handle,
    /// such as a `winit` window.
    #[cfg(feature = "raw-window-handle-06")]
    pub fn from_window<W>(window: &'w W) -> Result<NativeWindow<'w>, Error>
    where
        W: rwh_06::HasWindowHandle + ?Sized,
    {
        let handle = window
            .window_handle()
            .map_err(|_| Error::IncompatibleNativeWindow)?;
        NativeWindow::from_window_handle(handle)
    }
}

/// The surface owned by a `GraphicsContext`.
pub(crate) struct EGLBackedSurface {
    pub(crate) egl_surface: EGLSurface,
    pub(crate) kind: Option<SurfaceKind>,
}

impl EGLBackedSurface {
    #[inline]
    pub(crate) fn none() -> EGLBackedSurface {
        EGLBackedSurface {
            egl_surface: egl::NO_SURFACE,
            kind: None,
        }
    }

    pub(crate) unsafe fn new_window<E>(
        egl: &E,
        egl_display: EGLDisplay,
        egl_config: EGLConfig,
        native_window: &NativeWindow,
    ) -> Result<EGLBackedSurface, Error>
    where
        E: EglApi + ?Sized,
    {
        let window_surface_attribs = [egl::NONE as EGLint];
        let egl_surface = egl.create_window_surface(
            egl_display,
            egl_config,
            native_window.as_raw(),
            &window_surface_attribs,
        );
        if egl_surface.is_null() || egl_surface == egl::NO_SURFACE {
            let code = egl.get_error();
            error!("{}: eglCreateWindowSurface failed: {}", Stage::Surface, ErrorCode(code));
            return Err(Error::SurfaceCreationFailed(code.to_windowing_api_error()));
        }

        Ok(EGLBackedSurface {
            egl_surface,
            kind: Some(SurfaceKind::Window),
        })
    }

    pub(crate) unsafe fn new_pbuffer<E>(
        egl: &E,
        egl_display: EGLDisplay,
        egl_config: EGLConfig,
    ) -> Result<EGLBackedSurface, Error>
    where
        E: EglApi + ?Sized,
    {
        let pbuffer_attributes = [
            egl::WIDTH as EGLint,   PBUFFER_SIZE,
            egl::HEIGHT as EGLint,  PBUFFER_SIZE,
            egl::NONE as EGLint,
        ];
        let egl_surface = egl.create_pbuffer_surface(egl_display, egl_config, &pbuffer_attributes);
        if egl_surface.is_null() || egl_surface == egl::NO_SURFACE {
            let code = egl.get_error();
            error!("{}: eglCreatePbufferSurface failed: {}", Stage::Surface, ErrorCode(code));
            return Err(Error::SurfaceCreationFailed(code.to_windowing_api_error()));
        }

        Ok(EGLBackedSurface {
            egl_surface,
            kind: Some(SurfaceKind::Pbuffer),
        })
    }

    #[inline]
    pub(crate) fn is_destroyed(&self) -> bool {
        self.egl_surface == egl::NO_SURFACE
    }

    /// Asks EGL for a surface attribute. Returns 0 if the surface doesn't exist or the query
    /// fails.
    pub(crate) unsafe fn query<E>(
        &self,
        egl: &E,
        egl_display: EGLDisplay,
        attribute: EGLint,
    ) -> EGLint
    where
        E: EglApi + ?Sized,
    {
        if self.is_destroyed() {
            return 0;
        }

        let mut value = 0;
        if egl.query_surface(egl_display, self.egl_surface, attribute, &mut value) == egl::FALSE {
            debug!("eglQuerySurface({:#x}) failed: {}", attribute, ErrorCode(egl.get_error()));
            return 0;
        }
        value
    }

    /// Destroys the surface. The handle is reset even if destruction fails.
    pub(crate) unsafe fn destroy<E>(
        &mut self,
        egl: &E,
        egl_display: EGLDisplay,
    ) -> Result<(), Error>
    where
        E: EglApi + ?Sized,
    {
        if self.is_destroyed() {
            return Ok(());
        }

        let result = egl.destroy_surface(egl_display, self.egl_surface);
        self.egl_surface = egl::NO_SURFACE;
        self.kind = None;
        if result == egl::FALSE {
            let err = egl.get_error().to_windowing_api_error();
            return Err(Error::SurfaceDestructionFailed(err));
        }
        Ok(())
    }
}
