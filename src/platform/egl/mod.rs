// eglcore/src/platform/egl/mod.rs
//
//! The EGL objects owned by a `GraphicsContext`, and the calls that create and release them.

pub mod api;
pub mod context;
pub mod device;
pub mod surface;

pub(crate) mod config;
pub(crate) mod display;
pub(crate) mod error;
