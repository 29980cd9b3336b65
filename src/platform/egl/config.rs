// eglcore/src/platform/egl/config.rs
//
//! Framebuffer configuration selection.

use super::api::EglApi;
use super::error::{ErrorCode, ToWindowingApiError};
use super::surface::SurfaceKind;
use crate::egl;
use crate::egl::types::{EGLConfig, EGLDisplay, EGLint};
use crate::{ContextAttributeFlags, ContextAttributes, Error, Stage};

use std::ptr;

const RGB_CHANNEL_BIT_DEPTH: EGLint = 8;

/// Builds the `EGL_NONE`-terminated attribute list passed to `eglChooseConfig`.
pub(crate) fn config_attributes(
    attributes: &ContextAttributes,
    surface_kind: SurfaceKind,
) -> Vec<EGLint> {
    let flags = attributes.flags;
    let alpha_size = if flags.contains(ContextAttributeFlags::ALPHA) { 8 } else { 0 };
    let depth_size = if flags.contains(ContextAttributeFlags::DEPTH) { 24 } else { 0 };
    let stencil_size = if flags.contains(ContextAttributeFlags::STENCIL) { 8 } else { 0 };

    let renderable_type = if attributes.version.major >= 3 {
        egl::OPENGL_ES3_BIT
    } else {
        egl::OPENGL_ES2_BIT
    };

    vec![
        egl::RED_SIZE as EGLint,        RGB_CHANNEL_BIT_DEPTH,
        egl::GREEN_SIZE as EGLint,      RGB_CHANNEL_BIT_DEPTH,
        egl::BLUE_SIZE as EGLint,       RGB_CHANNEL_BIT_DEPTH,
        egl::ALPHA_SIZE as EGLint,      alpha_size,
        egl::DEPTH_SIZE as EGLint,      depth_size,
        egl::STENCIL_SIZE as EGLint,    stencil_size,
        egl::RENDERABLE_TYPE as EGLint, renderable_type as EGLint,
        egl::SURFACE_TYPE as EGLint,    surface_kind.egl_surface_type_bit(),
        egl::NONE as EGLint,
    ]
}

/// Asks the display for exactly one configuration matching `attributes`.
pub(crate) unsafe fn choose_config<E>(
    egl: &E,
    egl_display: EGLDisplay,
    attributes: &ContextAttributes,
    surface_kind: SurfaceKind,
) -> Result<EGLConfig, Error>
where
    E: EglApi + ?Sized,
{
    let config_attributes = config_attributes(attributes, surface_kind);

    let mut configs = [ptr::null(); 1];
    let mut config_count = 0;
    let result = egl.choose_config(
        egl_display,
        &config_attributes,
        &mut configs,
        &mut config_count,
    );
    if result == egl::FALSE {
        let code = egl.get_error();
        error!("{}: eglChooseConfig failed: {}", Stage::Config, ErrorCode(code));
        return Err(Error::PixelFormatSelectionFailed(
            code.to_windowing_api_error(),
        ));
    }
    if config_count <= 0 || configs[0].is_null() {
        error!("{}: eglChooseConfig returned no configs", Stage::Config);
        return Err(Error::NoPixelFormatFound);
    }

    Ok(configs[0])
}
