//! Runtime loading of the LibOVR shared library.
//!
//! Every C entry point is resolved once into a [`Functions`] table of plain
//! function pointers. The owning [`Library`] keeps the shared object mapped for
//! as long as the table is reachable.

#![allow(non_snake_case)]

use crate::sys::*;
use crate::{OvrError, Result};
use std::ffi::{c_char, c_double, c_float, c_int, c_uchar, c_uint};
use std::path::{Path, PathBuf};

/// Environment variable holding an explicit path to the LibOVR shared library.
pub const LIBRARY_PATH_ENV: &str = "LIBOVR_PATH";

macro_rules! ovr_functions {
    ($( $(#[$attr:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?; )*) => {
        /// Function table for the LibOVR C API.
        ///
        /// Calling an entry point is sound when every pointer argument is
        /// valid for the call and every `ovrHmd` is a live handle from the
        /// same library. Scalar-only calls have no further requirements.
        pub struct Functions {
            $( $(#[$attr])* pub $name: unsafe extern "C" fn($($ty),*) $(-> $ret)?, )*
        }

        impl Functions {
            /// Resolve every entry point from `lib`.
            ///
            /// # Safety
            /// `lib` must be a LibOVR 0.4 build whose exports match the signatures
            /// above, and must outlive the returned table.
            unsafe fn load(lib: &libloading::Library) -> std::result::Result<Functions, libloading::Error> {
                Ok(Functions {
                    $( $(#[$attr])* $name: *lib.get::<unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                        concat!(stringify!($name), "\0").as_bytes(),
                    )?, )*
                })
            }

            #[cfg(test)]
            pub(crate) fn fake() -> Functions {
                Functions {
                    $( $(#[$attr])* $name: crate::fake::$name, )*
                }
            }
        }
    };
}

ovr_functions! {
    fn ovr_InitializeRenderingShim() -> ovrBool;
    fn ovr_Initialize() -> ovrBool;
    fn ovr_Shutdown();
    fn ovr_GetVersionString() -> *const c_char;

    fn ovrHmd_Detect() -> c_int;
    fn ovrHmd_Create(index: c_int) -> ovrHmd;
    fn ovrHmd_CreateDebug(hmd_type: ovrHmdType) -> ovrHmd;
    fn ovrHmd_Destroy(hmd: ovrHmd);
    fn ovrHmd_GetLastError(hmd: ovrHmd) -> *const c_char;
    #[cfg(windows)]
    fn ovrHmd_AttachToWindow(
        hmd: ovrHmd,
        window: *mut std::ffi::c_void,
        dest_mirror_rect: *const ovrRecti,
        source_render_target_rect: *const ovrRecti,
    ) -> ovrBool;
    fn ovrHmd_GetEnabledCaps(hmd: ovrHmd) -> c_uint;
    fn ovrHmd_SetEnabledCaps(hmd: ovrHmd, caps: c_uint);

    fn ovrHmd_ConfigureTracking(hmd: ovrHmd, supported: c_uint, required: c_uint) -> ovrBool;
    fn ovrHmd_RecenterPose(hmd: ovrHmd);
    fn ovrHmd_GetTrackingState(hmd: ovrHmd, abs_time: c_double) -> ovrTrackingState;

    fn ovrHmd_GetFovTextureSize(
        hmd: ovrHmd,
        eye: ovrEyeType,
        fov: ovrFovPort,
        pixels_per_display_pixel: c_float,
    ) -> ovrSizei;

    fn ovrHmd_ConfigureRendering(
        hmd: ovrHmd,
        api_config: *const ovrRenderAPIConfig,
        distortion_caps: c_uint,
        eye_fov_in: *const ovrFovPort,
        eye_render_desc_out: *mut ovrEyeRenderDesc,
    ) -> ovrBool;
    fn ovrHmd_BeginFrame(hmd: ovrHmd, frame_index: c_uint) -> ovrFrameTiming;
    fn ovrHmd_EndFrame(hmd: ovrHmd, render_pose: *const ovrPosef, eye_texture: *const ovrTexture);
    fn ovrHmd_GetEyePose(hmd: ovrHmd, eye: ovrEyeType) -> ovrPosef;

    fn ovrHmd_GetRenderDesc(hmd: ovrHmd, eye: ovrEyeType, fov: ovrFovPort) -> ovrEyeRenderDesc;
    fn ovrHmd_CreateDistortionMesh(
        hmd: ovrHmd,
        eye: ovrEyeType,
        fov: ovrFovPort,
        distortion_caps: c_uint,
        mesh_data: *mut ovrDistortionMesh,
    ) -> ovrBool;
    fn ovrHmd_DestroyDistortionMesh(mesh_data: *mut ovrDistortionMesh);
    fn ovrHmd_GetRenderScaleAndOffset(
        fov: ovrFovPort,
        texture_size: ovrSizei,
        render_viewport: ovrRecti,
        uv_scale_offset_out: *mut ovrVector2f,
    );
    fn ovrHmd_GetFrameTiming(hmd: ovrHmd, frame_index: c_uint) -> ovrFrameTiming;
    fn ovrHmd_BeginFrameTiming(hmd: ovrHmd, frame_index: c_uint) -> ovrFrameTiming;
    fn ovrHmd_EndFrameTiming(hmd: ovrHmd);
    fn ovrHmd_ResetFrameTiming(hmd: ovrHmd, frame_index: c_uint);
    fn ovrHmd_GetEyeTimewarpMatrices(
        hmd: ovrHmd,
        eye: ovrEyeType,
        render_pose: ovrPosef,
        twm_out: *mut ovrMatrix4f,
    );

    fn ovrMatrix4f_Projection(
        fov: ovrFovPort,
        znear: c_float,
        zfar: c_float,
        right_handed: ovrBool,
    ) -> ovrMatrix4f;
    fn ovrMatrix4f_OrthoSubProjection(
        projection: ovrMatrix4f,
        ortho_scale: ovrVector2f,
        ortho_distance: c_float,
        eye_view_adjust_x: c_float,
    ) -> ovrMatrix4f;
    fn ovr_GetTimeInSeconds() -> c_double;
    fn ovr_WaitTillTime(abs_time: c_double) -> c_double;

    fn ovrHmd_ProcessLatencyTest(hmd: ovrHmd, rgb_color_out: *mut c_uchar) -> ovrBool;
    fn ovrHmd_GetLatencyTestResult(hmd: ovrHmd) -> *const c_char;

    fn ovrHmd_GetHSWDisplayState(hmd: ovrHmd, state: *mut ovrHSWDisplayState);
    fn ovrHmd_DismissHSWDisplay(hmd: ovrHmd) -> ovrBool;

    fn ovrHmd_GetBool(hmd: ovrHmd, name: *const c_char, default_val: ovrBool) -> ovrBool;
    fn ovrHmd_SetBool(hmd: ovrHmd, name: *const c_char, value: ovrBool) -> ovrBool;
    fn ovrHmd_GetInt(hmd: ovrHmd, name: *const c_char, default_val: c_int) -> c_int;
    fn ovrHmd_SetInt(hmd: ovrHmd, name: *const c_char, value: c_int) -> ovrBool;
    fn ovrHmd_GetFloat(hmd: ovrHmd, name: *const c_char, default_val: c_float) -> c_float;
    fn ovrHmd_SetFloat(hmd: ovrHmd, name: *const c_char, value: c_float) -> ovrBool;
    fn ovrHmd_GetFloatArray(
        hmd: ovrHmd,
        name: *const c_char,
        values: *mut c_float,
        array_size: c_uint,
    ) -> c_uint;
    fn ovrHmd_SetFloatArray(
        hmd: ovrHmd,
        name: *const c_char,
        values: *const c_float,
        array_size: c_uint,
    ) -> ovrBool;
    fn ovrHmd_GetString(hmd: ovrHmd, name: *const c_char, default_val: *const c_char) -> *const c_char;
    fn ovrHmd_SetString(hmd: ovrHmd, name: *const c_char, value: *const c_char) -> ovrBool;
}

/// A loaded LibOVR shared library and its resolved entry points.
pub struct Library {
    fns: Functions,
    path: Option<PathBuf>,
    // Declared last so the function table is dropped before the mapping.
    _lib: Option<libloading::Library>,
}

impl Library {
    /// Load LibOVR from `LIBOVR_PATH`, or from the platform default names.
    pub fn load() -> Result<Library> {
        let override_path = std::env::var(LIBRARY_PATH_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let candidates = library_candidates(override_path.as_deref());
        let mut last_err = None;
        for candidate in &candidates {
            match Library::open(candidate) {
                Ok(lib) => return Ok(lib),
                Err(e) => {
                    log::debug!("LibOVR not loaded from {}: {}", candidate.display(), e);
                    last_err = Some(e);
                }
            }
        }

        if override_path.is_some() {
            if let Some(e) = last_err {
                return Err(e);
            }
        }

        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(OvrError::LibraryNotFound(tried))
    }

    /// Load LibOVR from an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Library> {
        let path = path.as_ref();
        // SAFETY: loading a foreign library runs its initializers; the table
        // below is only used while `lib` stays alive inside `Library`.
        let (lib, fns) = unsafe {
            let lib = libloading::Library::new(path)?;
            let fns = Functions::load(&lib)?;
            (lib, fns)
        };
        log::info!("Loaded LibOVR from {}", path.display());

        Ok(Library {
            fns,
            path: Some(path.to_path_buf()),
            _lib: Some(lib),
        })
    }

    /// Path the library was loaded from, if it came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn fns(&self) -> &Functions {
        &self.fns
    }

    #[cfg(test)]
    pub(crate) fn fake() -> Library {
        Library {
            fns: Functions::fake(),
            path: None,
            _lib: None,
        }
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library").field("path", &self.path).finish()
    }
}

/// Shared library names tried when no explicit path is configured.
pub fn default_library_names() -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        if cfg!(target_pointer_width = "64") {
            &["LibOVRRT64_0_4.dll", "libovr.dll"]
        } else {
            &["LibOVRRT32_0_4.dll", "libovr.dll"]
        }
    } else if cfg!(target_os = "macos") {
        &["libovr.dylib", "libOVR.dylib"]
    } else {
        &["libovr.so", "libOVR.so"]
    }
}

/// Candidate paths in load order. An explicit override is the only candidate.
pub(crate) fn library_candidates(override_path: Option<&str>) -> Vec<PathBuf> {
    match override_path {
        Some(path) => vec![PathBuf::from(path)],
        None => default_library_names()
            .iter()
            .map(PathBuf::from)
            .collect(),
    }
}
