// eglcore/src/lib.rs
//
//! Acquisition and teardown of an EGL rendering context.
//!
//! A [`GraphicsContext`] negotiates the four EGL objects a renderer needs before it can issue
//! commands: a display connection, a framebuffer configuration, a context, and a surface. The
//! surface either wraps a caller-owned native window or is a 1×1 pbuffer used only so that the
//! context can be made current without a visible target.
//!
//! Construction never fails outright. If a stage of the negotiation fails, the failure is logged,
//! the remaining stages are skipped, and the partially-initialized context can be inspected with
//! [`GraphicsContext::init_result`]. Callers that prefer a `Result` can use
//! [`GraphicsContext::create`] instead.
//!
//! All platform calls go through the [`EglApi`] trait. [`SystemEgl`] is the implementation backed
//! by the system `libEGL`.

#[macro_use]
extern crate log;

#[cfg(angle_builtin)]
extern crate mozangle;

pub mod platform;
pub use crate::platform::egl::api::EglApi;
pub use crate::platform::egl::context::CurrentContext;
pub use crate::platform::egl::device::SystemEgl;
pub use crate::platform::egl::surface::{NativeWindow, SurfaceKind};

pub mod error;
pub use crate::error::{Error, InitError, Stage, WindowingApiError};

mod context;
pub use crate::context::{ContextAttributeFlags, ContextAttributes};

mod graphics_context;
pub use crate::graphics_context::{ContextOptions, GraphicsContext, SharedContext};

mod info;
pub use crate::info::GLVersion;

#[allow(non_camel_case_types)]
#[allow(clippy::all)]
pub mod egl {
    use std::os::raw::{c_long, c_void};
    pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
    pub type khronos_uint64_t = u64;
    pub type khronos_ssize_t = c_long;
    pub type EGLint = i32;
    pub type EGLNativeDisplayType = *const c_void;
    pub type EGLNativePixmapType = *const c_void;
    pub type EGLNativeWindowType = *const c_void;
    pub type NativeDisplayType = EGLNativeDisplayType;
    pub type NativePixmapType = EGLNativePixmapType;
    pub type NativeWindowType = EGLNativeWindowType;
    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}
