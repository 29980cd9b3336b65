// eglcore/src/platform/egl/device.rs
//
//! Loading of the system EGL library.

use super::api::EglApi;
use crate::egl::types::{EGLBoolean, EGLConfig, EGLContext, EGLDisplay, EGLNativeDisplayType};
use crate::egl::types::{EGLNativeWindowType, EGLSurface, EGLint};
use crate::egl::Egl;
use crate::Error;

#[cfg(not(windows_platform))]
use libc::{dlopen, dlsym, RTLD_LAZY};
use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::ptr;
use std::sync::LazyLock;
#[cfg(windows_platform)]
use winapi::shared::minwindef::HMODULE;
#[cfg(windows_platform)]
use winapi::um::libloaderapi;

thread_local! {
    static EGL_FUNCTIONS: Egl = Egl::load_with(get_proc_address);
}

#[cfg(windows_platform)]
static EGL_LIBRARY: LazyLock<Option<EGLLibraryWrapper>> = LazyLock::new(|| unsafe {
    let module = libloaderapi::LoadLibraryA(c"libEGL.dll".as_ptr());
    if module.is_null() {
        None
    } else {
        Some(EGLLibraryWrapper(module))
    }
});

#[cfg(not(windows_platform))]
static EGL_LIBRARY: LazyLock<Option<EGLLibraryWrapper>> = LazyLock::new(|| {
    for soname in EGL_SONAMES {
        unsafe {
            let handle = dlopen(soname.as_ptr(), RTLD_LAZY);
            if !handle.is_null() {
                return Some(EGLLibraryWrapper(handle));
            }
        }
    }
    None
});

#[cfg(any(android_platform, ohos_platform))]
const EGL_SONAMES: [&CStr; 1] = [c"libEGL.so"];
#[cfg(not(any(windows_platform, android_platform, ohos_platform)))]
const EGL_SONAMES: [&CStr; 2] = [c"libEGL.so.1", c"libEGL.so"];

#[cfg(windows_platform)]
struct EGLLibraryWrapper(HMODULE);
#[cfg(not(windows_platform))]
struct EGLLibraryWrapper(*mut c_void);

unsafe impl Send for EGLLibraryWrapper {}
unsafe impl Sync for EGLLibraryWrapper {}

#[cfg(windows_platform)]
fn get_proc_address(symbol_name: &str) -> *const c_void {
    let (Some(library), Ok(symbol_name)) = (EGL_LIBRARY.as_ref(), CString::new(symbol_name))
    else {
        return ptr::null();
    };
    unsafe { libloaderapi::GetProcAddress(library.0, symbol_name.as_ptr()) as *const c_void }
}

#[cfg(not(windows_platform))]
fn get_proc_address(symbol_name: &str) -> *const c_void {
    let (Some(library), Ok(symbol_name)) = (EGL_LIBRARY.as_ref(), CString::new(symbol_name))
    else {
        return ptr::null();
    };
    unsafe { dlsym(library.0, symbol_name.as_ptr()).cast_const() }
}

/// The EGL implementation installed on the system.
///
/// Function pointers are resolved lazily, once per thread, from `libEGL`.
#[derive(Clone, Copy, Debug)]
pub struct SystemEgl {
    _private: (),
}

impl SystemEgl {
    /// Loads the system EGL library.
    ///
    /// Returns `Error::NoGLLibraryFound` if no `libEGL` could be opened.
    pub fn new() -> Result<SystemEgl, Error> {
        match *EGL_LIBRARY {
            Some(_) => Ok(SystemEgl { _private: () }),
            None => Err(Error::NoGLLibraryFound),
        }
    }
}

impl EglApi for SystemEgl {
    unsafe fn get_display(&self, display_id: EGLNativeDisplayType) -> EGLDisplay {
        EGL_FUNCTIONS.with(|egl| egl.GetDisplay(display_id))
    }

    unsafe fn initialize(
        &self,
        display: EGLDisplay,
        major: &mut EGLint,
        minor: &mut EGLint,
    ) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| egl.Initialize(display, major, minor))
    }

    unsafe fn choose_config(
        &self,
        display: EGLDisplay,
        attrib_list: &[EGLint],
        configs: &mut [EGLConfig],
        num_config: &mut EGLint,
    ) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| {
            egl.ChooseConfig(
                display,
                attrib_list.as_ptr(),
                configs.as_mut_ptr(),
                configs.len() as EGLint,
                num_config,
            )
        })
    }

    unsafe fn create_context(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        share_context: EGLContext,
        attrib_list: &[EGLint],
    ) -> EGLContext {
        EGL_FUNCTIONS
            .with(|egl| egl.CreateContext(display, config, share_context, attrib_list.as_ptr()))
    }

    unsafe fn create_window_surface(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        native_window: EGLNativeWindowType,
        attrib_list: &[EGLint],
    ) -> EGLSurface {
        EGL_FUNCTIONS.with(|egl| {
            egl.CreateWindowSurface(display, config, native_window, attrib_list.as_ptr())
        })
    }

    unsafe fn create_pbuffer_surface(
        &self,
        display: EGLDisplay,
        config: EGLConfig,
        attrib_list: &[EGLint],
    ) -> EGLSurface {
        EGL_FUNCTIONS.with(|egl| egl.CreatePbufferSurface(display, config, attrib_list.as_ptr()))
    }

    unsafe fn query_surface(
        &self,
        display: EGLDisplay,
        surface: EGLSurface,
        attribute: EGLint,
        value: &mut EGLint,
    ) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| egl.QuerySurface(display, surface, attribute, value))
    }

    unsafe fn make_current(
        &self,
        display: EGLDisplay,
        draw: EGLSurface,
        read: EGLSurface,
        context: EGLContext,
    ) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| egl.MakeCurrent(display, draw, read, context))
    }

    unsafe fn get_current_context(&self) -> EGLContext {
        EGL_FUNCTIONS.with(|egl| egl.GetCurrentContext())
    }

    unsafe fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| egl.SwapBuffers(display, surface))
    }

    unsafe fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| egl.DestroySurface(display, surface))
    }

    unsafe fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| egl.DestroyContext(display, context))
    }

    unsafe fn terminate(&self, display: EGLDisplay) -> EGLBoolean {
        EGL_FUNCTIONS.with(|egl| egl.Terminate(display))
    }

    fn get_error(&self) -> EGLint {
        EGL_FUNCTIONS.with(|egl| unsafe { egl.GetError() })
    }

    unsafe fn get_proc_address(&self, name: &CStr) -> *const c_void {
        EGL_FUNCTIONS.with(|egl| egl.GetProcAddress(name.as_ptr()) as *const c_void)
    }
}
