// eglcore/build.rs
//
//! The `eglcore` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows_platform: { target_os = "windows" },
        android_platform: { target_os = "android" },
        ohos_platform: { target_env = "ohos" },

        // Features:
        // ANGLE is the only way to get EGL on Windows, so the feature is meaningless elsewhere.
        angle_builtin: { all(windows_platform, feature = "angle-builtin") },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate EGL bindings. The library itself is loaded at runtime, so the bindings are
    // generated unconditionally.
    let mut file = File::create(dest.join("egl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Egl, (1, 5), Profile::Core, Fallbacks::All, []);
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
