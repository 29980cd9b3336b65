// eglcore/src/graphics_context.rs
//
//! The display, config, context and surface of one rendering target.

use crate::egl;
use crate::egl::types::{EGLConfig, EGLContext, EGLDisplay, EGLSurface, EGLint};
use crate::platform::egl::api::EglApi;
use crate::platform::egl::config;
use crate::platform::egl::context::{self, CurrentContext, OwnedEGLContext};
use crate::platform::egl::device::SystemEgl;
use crate::platform::egl::display::OwnedEGLDisplay;
use crate::platform::egl::error::{ErrorCode, ToWindowingApiError};
use crate::platform::egl::surface::{EGLBackedSurface, NativeWindow, SurfaceKind};
use crate::{ContextAttributes, Error, InitError, Stage};

use euclid::default::Size2D;
use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::os::raw::c_void;
use std::ptr;

/// A borrowed rendering context that a new context should share objects with.
///
/// The handle is only read while the new context is created.
#[derive(Clone, Copy)]
pub struct SharedContext<'a> {
    egl_context: EGLContext,
    phantom: PhantomData<&'a ()>,
}

impl SharedContext<'static> {
    /// Wraps a raw `EGLContext` created by some other code.
    ///
    /// # Safety
    ///
    /// The context must belong to the same EGL implementation and display the new context is
    /// created on, and must stay alive until the new context has been created.
    #[inline]
    pub unsafe fn from_raw(egl_context: EGLContext) -> SharedContext<'static> {
        SharedContext {
            egl_context,
            phantom: PhantomData,
        }
    }
}

impl SharedContext<'_> {
    #[inline]
    pub fn egl_context(&self) -> EGLContext {
        self.egl_context
    }
}

impl Debug for SharedContext<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "SharedContext({:p})", self.egl_context)
    }
}

/// Everything that can be chosen when a `GraphicsContext` is created.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContextOptions<'a, 'w> {
    /// The version and buffers to request.
    pub attributes: ContextAttributes,
    /// A context to share objects with.
    pub shared_context: Option<SharedContext<'a>>,
    /// The window to render to. Without one, a 1×1 pbuffer is created.
    pub native_window: Option<NativeWindow<'w>>,
}

/// An EGL display connection, config, rendering context and surface, created together and
/// released together.
///
/// Construction runs four stages in order (display, config, context, surface) and stops at the
/// first one that fails. The failure is logged and kept; handles belonging to the failed stage
/// and every later one stay at their `EGL_NO_*` sentinel values. Use
/// [`init_result`](Self::init_result) or [`is_initialized`](Self::is_initialized) before relying
/// on the context.
///
/// Dropping the context releases the surface, the context and the display, in that order.
///
/// The display is always `EGL_DEFAULT_DISPLAY`, and EGL hands every instance in the process the
/// same handle for it. Releasing any instance therefore terminates the display under all the
/// others, including contexts that share objects with it. Their handles become invalid, size
/// queries return 0, and their own teardown only logs the resulting failures. Keep instances that
/// are used together alive together.
pub struct GraphicsContext<'w, E = SystemEgl>
where
    E: EglApi,
{
    egl: E,
    display: OwnedEGLDisplay,
    config: EGLConfig,
    context: OwnedEGLContext,
    surface: EGLBackedSurface,
    init_result: Result<(), InitError>,
    released: bool,
    phantom: PhantomData<&'w ()>,
}

impl<'w, E> GraphicsContext<'w, E>
where
    E: EglApi,
{
    /// Creates a context rendering to a 1×1 pbuffer.
    #[inline]
    pub fn new(egl: E) -> GraphicsContext<'w, E> {
        GraphicsContext::with_options(egl, ContextOptions::default())
    }

    /// Creates a context rendering to a 1×1 pbuffer and sharing objects with `shared_context`.
    #[inline]
    pub fn with_shared_context(egl: E, shared_context: SharedContext) -> GraphicsContext<'w, E> {
        GraphicsContext::with_options(
            egl,
            ContextOptions {
                shared_context: Some(shared_context),
                ..ContextOptions::default()
            },
        )
    }

    /// Creates a context rendering to `native_window`.
    #[inline]
    pub fn with_window(egl: E, native_window: NativeWindow<'w>) -> GraphicsContext<'w, E> {
        GraphicsContext::with_options(
            egl,
            ContextOptions {
                native_window: Some(native_window),
                ..ContextOptions::default()
            },
        )
    }

    /// Creates a context rendering to `native_window` and sharing objects with
    /// `shared_context`.
    #[inline]
    pub fn with_shared_context_and_window(
        egl: E,
        shared_context: SharedContext,
        native_window: NativeWindow<'w>,
    ) -> GraphicsContext<'w, E> {
        GraphicsContext::with_options(
            egl,
            ContextOptions {
                attributes: ContextAttributes::default(),
                shared_context: Some(shared_context),
                native_window: Some(native_window),
            },
        )
    }

    /// Creates a context from explicit options. All other constructors end up here.
    pub fn with_options(egl: E, options: ContextOptions<'_, 'w>) -> GraphicsContext<'w, E> {
        let mut graphics_context = GraphicsContext {
            egl,
            display: OwnedEGLDisplay::none(),
            config: ptr::null(),
            context: OwnedEGLContext::none(),
            surface: EGLBackedSurface::none(),
            init_result: Ok(()),
            released: false,
            phantom: PhantomData,
        };
        graphics_context.init_result = unsafe { graphics_context.initialize(&options) };
        graphics_context
    }

    /// Creates a context, releasing it again and returning the failure if any stage fails.
    #[inline]
    pub fn create(
        egl: E,
        options: ContextOptions<'_, 'w>,
    ) -> Result<GraphicsContext<'w, E>, InitError> {
        GraphicsContext::with_options(egl, options).into_result()
    }

    unsafe fn initialize(&mut self, options: &ContextOptions) -> Result<(), InitError> {
        let surface_kind = match options.native_window {
            Some(_) => SurfaceKind::Window,
            None => SurfaceKind::Pbuffer,
        };
        let share_context = options
            .shared_context
            .map_or(egl::NO_CONTEXT, |shared_context| shared_context.egl_context);

        self.display = OwnedEGLDisplay::open(&self.egl).map_err(|error| InitError {
            stage: Stage::Display,
            error,
        })?;
        let egl_display = self.display.egl_display;

        self.config =
            config::choose_config(&self.egl, egl_display, &options.attributes, surface_kind)
                .map_err(|error| InitError {
                    stage: Stage::Config,
                    error,
                })?;

        self.context = OwnedEGLContext::new(
            &self.egl,
            egl_display,
            self.config,
            share_context,
            &options.attributes,
        )
        .map_err(|error| InitError {
            stage: Stage::Context,
            error,
        })?;

        let surface = match options.native_window {
            Some(ref native_window) => {
                EGLBackedSurface::new_window(&self.egl, egl_display, self.config, native_window)
            }
            None => EGLBackedSurface::new_pbuffer(&self.egl, egl_display, self.config),
        };
        self.surface = surface.map_err(|error| InitError {
            stage: Stage::Surface,
            error,
        })?;

        debug!("initialized {:?} surface {:p}", surface_kind, self.surface.egl_surface);
        Ok(())
    }

    /// Returns how construction went: `Ok` if all four stages succeeded, or the stage that
    /// failed.
    #[inline]
    pub fn init_result(&self) -> Result<(), InitError> {
        self.init_result
    }

    /// Returns true if all four stages succeeded and the context hasn't been released.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.init_result.is_ok() && !self.released
    }

    /// Returns this context if construction succeeded. Otherwise releases whatever was created
    /// and returns the failure.
    pub fn into_result(self) -> Result<GraphicsContext<'w, E>, InitError> {
        match self.init_result {
            Ok(()) => Ok(self),
            Err(err) => Err(err),
        }
    }

    /// Binds the context to the calling thread, with the surface as both the draw and read
    /// surface.
    ///
    /// If the context or surface was never created, or has been released, nothing is called and
    /// `Error::NoContext` or `Error::NoSurface` is returned. EGL failures are logged and returned;
    /// they leave the context untouched, so the call can simply be repeated.
    pub fn make_current(&self) -> Result<CurrentContext<'_, E>, Error> {
        if self.context.is_destroyed() {
            warn!("make_current: no context to make current");
            return Err(Error::NoContext);
        }
        if self.surface.is_destroyed() {
            warn!("make_current: no surface to make current against");
            return Err(Error::NoSurface);
        }

        if let Err(code) = unsafe { self.bind() } {
            error!("make_current: eglMakeCurrent failed: {}", ErrorCode(code));
            return Err(Error::MakeCurrentFailed(code.to_windowing_api_error()));
        }
        Ok(CurrentContext::new(
            &self.egl,
            self.display.egl_display,
            self.context.egl_context,
        ))
    }

    /// Makes the context and surface current. Returns the raw EGL error code on failure, leaving
    /// the caller to decide how loudly to report it.
    unsafe fn bind(&self) -> Result<(), EGLint> {
        let result = self.egl.make_current(
            self.display.egl_display,
            self.surface.egl_surface,
            self.surface.egl_surface,
            self.context.egl_context,
        );
        if result == egl::FALSE {
            return Err(self.egl.get_error());
        }
        Ok(())
    }

    /// Presents the back buffer. Pbuffers have nothing to present, but the call is still made.
    ///
    /// May block until the next vertical blank, depending on the implementation. Failures are
    /// logged and returned, and are never retried.
    pub fn swap_buffers(&self) -> Result<(), Error> {
        if self.surface.is_destroyed() {
            warn!("swap_buffers: no surface to present");
            return Err(Error::NoSurface);
        }

        unsafe {
            let result = self
                .egl
                .swap_buffers(self.display.egl_display, self.surface.egl_surface);
            if result == egl::FALSE {
                let code = self.egl.get_error();
                error!("swap_buffers: eglSwapBuffers failed: {}", ErrorCode(code));
                return Err(Error::PresentFailed(code.to_windowing_api_error()));
            }
        }
        Ok(())
    }

    /// The current width of the surface, as reported by EGL. 0 if there is no surface.
    #[inline]
    pub fn width(&self) -> i32 {
        self.query_surface(egl::WIDTH as EGLint)
    }

    /// The current height of the surface, as reported by EGL. 0 if there is no surface.
    #[inline]
    pub fn height(&self) -> i32 {
        self.query_surface(egl::HEIGHT as EGLint)
    }

    /// The current size of the surface, queried live.
    #[inline]
    pub fn size(&self) -> Size2D<i32> {
        Size2D::new(self.width(), self.height())
    }

    fn query_surface(&self, attribute: EGLint) -> i32 {
        unsafe {
            self.surface
                .query(&self.egl, self.display.egl_display, attribute)
        }
    }

    /// The kind of surface, or `None` if no surface exists.
    #[inline]
    pub fn surface_kind(&self) -> Option<SurfaceKind> {
        self.surface.kind
    }

    /// Borrows this context so that another one can share objects with it.
    ///
    /// Returns `None` if the context was never created or has been released.
    #[inline]
    pub fn shared_context(&self) -> Option<SharedContext<'_>> {
        if self.context.is_destroyed() {
            return None;
        }
        Some(SharedContext {
            egl_context: self.context.egl_context,
            phantom: PhantomData,
        })
    }

    /// Looks up a client API function, for renderers that load their entry points at runtime.
    /// Returns null if the function doesn't exist.
    pub fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        match CString::new(symbol_name) {
            Ok(symbol_name) => unsafe { self.egl.get_proc_address(&symbol_name) },
            Err(_) => ptr::null(),
        }
    }

    #[inline]
    pub fn egl_display(&self) -> EGLDisplay {
        self.display.egl_display
    }

    /// The chosen config, or null. Only meaningful while the display is alive.
    #[inline]
    pub fn egl_config(&self) -> EGLConfig {
        self.config
    }

    #[inline]
    pub fn egl_context(&self) -> EGLContext {
        self.context.egl_context
    }

    #[inline]
    pub fn egl_surface(&self) -> EGLSurface {
        self.surface.egl_surface
    }

    /// Releases the surface, the context and the display, in that order, then unbinds whatever
    /// is current on this thread. Calls for objects that were never created are skipped.
    ///
    /// Every step is attempted even if an earlier one fails; failures are only logged. Calling
    /// this more than once does nothing. `Drop` calls it.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let egl_display = self.display.egl_display;
        unsafe {
            // Some implementations refuse to destroy a context that isn't current.
            if !self.context.is_destroyed() && !self.surface.is_destroyed() {
                if let Err(code) = self.bind() {
                    debug!("teardown: eglMakeCurrent failed, continuing: {}", ErrorCode(code));
                }
            }
            if let Err(err) = self.surface.destroy(&self.egl, egl_display) {
                error!("teardown: {}", err);
            }
            if let Err(err) = self.context.destroy(&self.egl, egl_display) {
                error!("teardown: {}", err);
            }
            if let Err(err) = self.display.destroy(&self.egl) {
                error!("teardown: {}", err);
            }
            if egl_display != egl::NO_DISPLAY {
                if let Err(err) = context::make_no_context_current(&self.egl, egl_display) {
                    error!("teardown: {}", err);
                }
            }
        }
        self.config = ptr::null();

        debug!("teardown: released display {:p}", egl_display);
    }
}

impl<E> Drop for GraphicsContext<'_, E>
where
    E: EglApi,
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<E> Debug for GraphicsContext<'_, E>
where
    E: EglApi,
{
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("GraphicsContext")
            .field("display", &self.display.egl_display)
            .field("config", &self.config)
            .field("context", &self.context.egl_context)
            .field("surface", &self.surface.egl_surface)
            .field("surface_kind", &self.surface.kind)
            .field("init_result", &self.init_result)
            .finish()
    }
}
