// eglcore/src/platform/mod.rs
//
//! Platform bindings.
//!
//! EGL is the only windowing API this crate speaks; the library is loaded at runtime, so the
//! same code serves Android, OpenHarmony, Linux and (through ANGLE) Windows.

pub mod egl;
