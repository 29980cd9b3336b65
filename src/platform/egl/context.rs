// eglcore/src/platform/egl/context.rs
//
//! Rendering context creation, and the guard that represents a current context.

use super::api::EglApi;
use super::error::{ErrorCode, ToWindowingApiError};
use crate::egl;
use crate::egl::types::{EGLConfig, EGLContext, EGLDisplay, EGLint};
use crate::{ContextAttributes, Error, Stage};

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

/// Builds the `EGL_NONE`-terminated attribute list passed to `eglCreateContext`.
pub(crate) fn context_attributes(attributes: &ContextAttributes) -> Vec<EGLint> {
    let mut egl_context_attributes = vec![
        egl::CONTEXT_CLIENT_VERSION as EGLint,
        attributes.version.major as EGLint,
    ];
    if attributes.version.minor != 0 {
        egl_context_attributes.extend_from_slice(&[
            egl::CONTEXT_MINOR_VERSION as EGLint,
            attributes.version.minor as EGLint,
        ]);
    }
    egl_context_attributes.push(egl::NONE as EGLint);
    egl_context_attributes
}

/// The rendering context owned by a `GraphicsContext`.
pub(crate) struct OwnedEGLContext {
    pub(crate) egl_context: EGLContext,
}

impl OwnedEGLContext {
    #[inline]
    pub(crate) fn none() -> OwnedEGLContext {
        OwnedEGLContext {
            egl_context: egl::NO_CONTEXT,
        }
    }

    /// Creates a context, sharing objects with `share_context` unless it is `EGL_NO_CONTEXT`.
    pub(crate) unsafe fn new<E>(
        egl: &E,
        egl_display: EGLDisplay,
        egl_config: EGLConfig,
        share_context: EGLContext,
        attributes: &ContextAttributes,
    ) -> Result<OwnedEGLContext, Error>
    where
        E: EglApi + ?Sized,
    {
        let egl_context_attributes = context_attributes(attributes);
        let egl_context = egl.create_context(
            egl_display,
            egl_config,
            share_context,
            &egl_context_attributes,
        );
        if egl_context == egl::NO_CONTEXT {
            let code = egl.get_error();
            error!("{}: eglCreateContext failed: {}", Stage::Context, ErrorCode(code));
            return Err(Error::ContextCreationFailed(code.to_windowing_api_error()));
        }

        Ok(OwnedEGLContext { egl_context })
    }

    #[inline]
    pub(crate) fn is_destroyed(&self) -> bool {
        self.egl_context == egl::NO_CONTEXT
    }

    /// Destroys the context. The handle is reset even if destruction fails.
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

        let result = egl.destroy_context(egl_display, self.egl_context);
        self.egl_context = egl::NO_CONTEXT;
        if result == egl::FALSE {
            let err = egl.get_error().to_windowing_api_error();
            return Err(Error::ContextDestructionFailed(err));
        }
        Ok(())
    }
}

/// Releases whatever context is current on this thread.
pub(crate) unsafe fn make_no_context_current<E>(
    egl: &E,
    egl_display: EGLDisplay,
) -> Result<(), Error>
where
    E: EglApi + ?Sized,
{
    let result = egl.make_current(egl_display, egl::NO_SURFACE, egl::NO_SURFACE, egl::NO_CONTEXT);
    if result == egl::FALSE {
        let err = egl.get_error().to_windowing_api_error();
        return Err(Error::MakeCurrentFailed(err));
    }
    Ok(())
}

/// Proof that a `GraphicsContext` was made current on this thread.
///
/// Returned by [`GraphicsContext::make_current`](crate::GraphicsContext::make_current). The
/// binding lasts until the guard is released or dropped, at which point no context is current on
/// this thread. If another context has been made current since, releasing the guard leaves that
/// binding alone. The guard can't leave the thread it was created on.
#[must_use]
pub struct CurrentContext<'a, E>
where
    E: EglApi,
{
    egl: &'a E,
    egl_display: EGLDisplay,
    egl_context: EGLContext,
    released: bool,
    phantom: PhantomData<*const ()>,
}

impl<'a, E> CurrentContext<'a, E>
where
    E: EglApi,
{
    #[inline]
    pub(crate) fn new(
        egl: &'a E,
        egl_display: EGLDisplay,
        egl_context: EGLContext,
    ) -> CurrentContext<'a, E> {
        CurrentContext {
            egl,
            egl_display,
            egl_context,
            released: false,
            phantom: PhantomData,
        }
    }

    /// The context this guard made current.
    #[inline]
    pub fn egl_context(&self) -> EGLContext {
        self.egl_context
    }

    /// Returns true if this guard's context is still the one current on this thread.
    #[inline]
    pub fn is_current(&self) -> bool {
        unsafe { self.egl.get_current_context() == self.egl_context }
    }

    /// Unbinds the context from this thread. Does nothing if some other context has been made
    /// current since.
    pub fn release(mut self) -> Result<(), Error> {
        self.released = true;
        self.unbind()
    }

    fn unbind(&self) -> Result<(), Error> {
        if !self.is_current() {
            debug!("make_current: {:p} no longer current, leaving binding alone", self.egl_context);
            return Ok(());
        }
        unsafe { make_no_context_current(self.egl, self.egl_display) }
    }
}

impl<E> Drop for CurrentContext<'_, E>
where
    E: EglApi,
{
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(err) = self.unbind() {
            error!("make_current: unbinding failed: {}", err);
        }
    }
}

impl<E> Debug for CurrentContext<'_, E>
where
    E: EglApi,
{
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "CurrentContext({:p})", self.egl_context)
    }
}
