// eglcore/src/error.rs
//
//! Various errors that methods can produce.

use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The system EGL library couldn't be located.
    NoGLLibraryFound,
    /// The platform has no display connection for the default native display.
    NoDisplayFound(WindowingApiError),
    /// The display connection exists but couldn't be initialized.
    DisplayInitializationFailed(WindowingApiError),
    /// Choosing an EGL framebuffer configuration failed.
    PixelFormatSelectionFailed(WindowingApiError),
    /// The display offers no configuration matching the requested attributes.
    NoPixelFormatFound,
    /// The system couldn't create an EGL context.
    ContextCreationFailed(WindowingApiError),
    /// The system couldn't destroy the EGL context.
    ContextDestructionFailed(WindowingApiError),
    /// The system couldn't create a surface.
    SurfaceCreationFailed(WindowingApiError),
    /// The system couldn't destroy a surface.
    SurfaceDestructionFailed(WindowingApiError),
    /// The display connection couldn't be terminated.
    DisplayTerminationFailed(WindowingApiError),
    /// The system couldn't make the context current or not current.
    MakeCurrentFailed(WindowingApiError),
    /// The system couldn't present the surface.
    PresentFailed(WindowingApiError),
    /// The context was never created, or has already been released.
    NoContext,
    /// The surface was never created, or has already been released.
    NoSurface,
    /// The native window handle can't be wrapped in an EGL window surface.
    IncompatibleNativeWindow,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::NoGLLibraryFound => f.write_str("the EGL library couldn't be loaded"),
            Error::NoDisplayFound(err) => write!(f, "no EGL display available: {:?}", err),
            Error::DisplayInitializationFailed(err) => {
                write!(f, "EGL display initialization failed: {:?}", err)
            }
            Error::PixelFormatSelectionFailed(err) => {
                write!(f, "choosing an EGL config failed: {:?}", err)
            }
            Error::NoPixelFormatFound => f.write_str("no matching EGL config"),
            Error::ContextCreationFailed(err) => write!(f, "context creation failed: {:?}", err),
            Error::ContextDestructionFailed(err) => {
                write!(f, "context destruction failed: {:?}", err)
            }
            Error::SurfaceCreationFailed(err) => write!(f, "surface creation failed: {:?}", err),
            Error::SurfaceDestructionFailed(err) => {
                write!(f, "surface destruction failed: {:?}", err)
            }
            Error::DisplayTerminationFailed(err) => {
                write!(f, "display termination failed: {:?}", err)
            }
            Error::MakeCurrentFailed(err) => write!(f, "make current failed: {:?}", err),
            Error::PresentFailed(err) => write!(f, "swap buffers failed: {:?}", err),
            Error::NoContext => f.write_str("no context"),
            Error::NoSurface => f.write_str("no surface"),
            Error::IncompatibleNativeWindow => f.write_str("incompatible native window"),
        }
    }
}

impl std::error::Error for Error {}

/// Abstraction of the errors that EGL returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// EGL is not initialized, or could not be initialized, for the specified EGL display
    /// connection.
    NotInitialized,
    /// EGL cannot access a requested resource (for example a context is bound in another
    /// thread).
    BadAccess,
    /// EGL failed to allocate resources for the requested operation.
    BadAlloc,
    /// An unrecognized attribute or attribute value was passed in the attribute list.
    BadAttribute,
    /// The EGL configuration is unsupported.
    BadConfig,
    /// An EGLContext argument does not name a valid EGL rendering context.
    BadContext,
    /// The current surface of the calling thread is a window, pixel buffer or pixmap that is no
    /// longer valid.
    BadCurrentSurface,
    /// An EGLDisplay argument does not name a valid EGL display connection.
    BadDisplay,
    /// Arguments are inconsistent (for example, a valid context requires buffers not supplied by
    /// a valid surface).
    BadMatch,
    /// A NativePixmapType argument does not refer to a valid native pixmap.
    BadNativePixmap,
    /// A NativeWindowType argument does not refer to a valid native window.
    BadNativeWindow,
    /// One or more argument values are invalid.
    BadParameter,
    /// An EGLSurface argument does not name a valid surface (window, pixel buffer or pixmap)
    /// configured for GL rendering.
    BadSurface,
    /// A power management event has occurred. The application must destroy all contexts and
    /// reinitialise OpenGL ES state and objects to continue rendering.
    ContextLost,
}

/// A stage of the context negotiation, in the order the stages run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Obtaining and initializing the display connection.
    Display,
    /// Choosing a framebuffer configuration.
    Config,
    /// Creating the rendering context.
    Context,
    /// Creating the window or pbuffer surface.
    Surface,
}

impl Stage {
    /// All stages, in pipeline order.
    pub const ALL: [Stage; 4] = [Stage::Display, Stage::Config, Stage::Context, Stage::Surface];

    /// The tag used for this stage in log output.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Stage::Display => "display",
            Stage::Config => "config",
            Stage::Context => "context",
            Stage::Surface => "surface",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why construction of a `GraphicsContext` stopped short.
///
/// Every stage after `stage` was skipped, and the handles belonging to those stages hold their
/// sentinel values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitError {
    /// The stage that failed.
    pub stage: Stage,
    /// The failure reported for that stage.
    pub error: Error,
}

impl Display for InitError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} stage failed: {}", self.stage, self.error)
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
