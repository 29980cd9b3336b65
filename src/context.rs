// eglcore/src/context.rs
//
//! Declarations common to all contexts.

use crate::info::GLVersion;

use bitflags::bitflags;

bitflags! {
    /// Optional buffers the framebuffer configuration should carry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ContextAttributeFlags: u8 {
        const ALPHA   = 0x01;
        const DEPTH   = 0x02;
        const STENCIL = 0x04;
    }
}

/// The attributes requested when a context and its configuration are negotiated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextAttributes {
    /// The OpenGL ES version to request. Only the major version is sent to EGL unless the minor
    /// version is non-zero.
    pub version: GLVersion,
    /// Extra buffers to require of the configuration.
    pub flags: ContextAttributeFlags,
}

impl Default for ContextAttributes {
    /// An OpenGL ES 2.0 context with an RGBA8 framebuffer.
    #[inline]
    fn default() -> ContextAttributes {
        ContextAttributes {
            version: GLVersion::new(2, 0),
            flags: ContextAttributeFlags::ALPHA,
        }
    }
}
