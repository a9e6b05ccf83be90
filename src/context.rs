//! SDK lifecycle and calls that need no device.
//!
//! Calls through [`Functions`](crate::library::Functions) without a
//! `SAFETY` note pass only scalars or by-value structs, and the table stays
//! mapped for the lifetime of the [`Context`].

use crate::error::{message_from_ptr, string_from_ptr};
use crate::hmd::Hmd;
use crate::library::Library;
use crate::sys;
use crate::types::{
    to_ovr_bool, FovPort, HmdType, Matrix4f, Recti, ScaleAndOffset, Sizei, Vector2f,
};
use crate::{OvrError, Result};
use std::marker::PhantomData;

/// An initialized LibOVR runtime.
///
/// Created by [`Context::initialize`] and shut down when dropped. Every
/// [`Hmd`] borrows its context, so devices are always destroyed before
/// `ovr_Shutdown` runs.
pub struct Context {
    library: Library,
    shut_down: bool,
    // LibOVR 0.4 is not thread-safe.
    _not_send: PhantomData<*const ()>,
}

impl Context {
    /// Load the library from the environment/default paths and initialize it.
    pub fn initialize() -> Result<Context> {
        Context::new(Library::load()?)
    }

    /// Initialize an already loaded library.
    pub fn new(library: Library) -> Result<Context> {
        // SAFETY: ovr_Initialize takes no arguments.
        let ok = unsafe { (library.fns().ovr_Initialize)() };
        if ok == sys::ovrFalse {
            return Err(OvrError::InitializeFailed);
        }

        let context = Context {
            library,
            shut_down: false,
            _not_send: PhantomData,
        };
        log::info!("LibOVR initialized ({})", context.version_string());
        Ok(context)
    }

    /// Initialize the rendering shim, then the SDK.
    ///
    /// The shim must be set up before any graphics device is created when the
    /// HMD runs in direct-to-rift mode.
    pub fn with_rendering_shim(library: Library) -> Result<Context> {
        // SAFETY: no arguments; must precede ovr_Initialize, which it does.
        let ok = unsafe { (library.fns().ovr_InitializeRenderingShim)() };
        if ok == sys::ovrFalse {
            return Err(OvrError::RenderingShimFailed);
        }
        log::debug!("LibOVR rendering shim initialized");
        Context::new(library)
    }

    pub(crate) fn library(&self) -> &Library {
        &self.library
    }

    /// Shut the SDK down. Equivalent to dropping the context.
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        // SAFETY: every Hmd borrowing this context has been dropped.
        unsafe { (self.library.fns().ovr_Shutdown)() };
        log::info!("LibOVR shut down");
    }

    /// SDK version, e.g. `"libOVR:0.4.2"`.
    pub fn version_string(&self) -> String {
        // SAFETY: returns a static NUL-terminated string or NULL.
        unsafe { string_from_ptr((self.library.fns().ovr_GetVersionString)()) }
    }

    /// Number of HMDs currently attached.
    pub fn detect(&self) -> usize {
        let count = unsafe { (self.library.fns().ovrHmd_Detect)() };
        usize::try_from(count).unwrap_or(0)
    }

    /// Open the HMD at `index` (in `0..detect()`).
    pub fn create_hmd(&self, index: usize) -> Result<Hmd<'_>> {
        let index = i32::try_from(index).map_err(|_| OvrError::HmdUnavailable)?;
        let raw = unsafe { (self.library.fns().ovrHmd_Create)(index) };
        self.wrap_hmd(raw, "ovrHmd_Create")
    }

    /// Create a virtual HMD of the given type, usable without hardware.
    pub fn create_debug_hmd(&self, hmd_type: HmdType) -> Result<Hmd<'_>> {
        let raw = unsafe { (self.library.fns().ovrHmd_CreateDebug)(hmd_type.to_raw()) };
        self.wrap_hmd(raw, "ovrHmd_CreateDebug")
    }

    fn wrap_hmd(&self, raw: sys::ovrHmd, operation: &'static str) -> Result<Hmd<'_>> {
        if raw.is_null() {
            return Err(match self.global_last_error() {
                Some(message) => OvrError::from_last_error(operation, Some(message)),
                None => OvrError::HmdUnavailable,
            });
        }
        // SAFETY: non-null handle fresh from ovrHmd_Create*.
        Ok(unsafe { Hmd::from_raw(self, raw) })
    }

    /// Error not tied to a device, e.g. from a failed create call.
    pub fn global_last_error(&self) -> Option<String> {
        // SAFETY: a NULL hmd asks for the global error string.
        unsafe { message_from_ptr((self.library.fns().ovrHmd_GetLastError)(std::ptr::null())) }
    }

    /// Absolute time in seconds on the SDK clock.
    pub fn time_in_seconds(&self) -> f64 {
        unsafe { (self.library.fns().ovr_GetTimeInSeconds)() }
    }

    /// Block until the SDK clock reaches `abs_time`. Returns the time reached.
    pub fn wait_till_time(&self, abs_time: f64) -> f64 {
        unsafe { (self.library.fns().ovr_WaitTillTime)(abs_time) }
    }

    /// Projection matrix for `fov`, computed by the SDK.
    pub fn projection(&self, fov: FovPort, znear: f32, zfar: f32, right_handed: bool) -> Matrix4f {
        unsafe {
            (self.library.fns().ovrMatrix4f_Projection)(
                fov.into(),
                znear,
                zfar,
                to_ovr_bool(right_handed),
            )
        }
        .into()
    }

    /// Orthographic sub-projection used for 2D overlays.
    pub fn ortho_sub_projection(
        &self,
        projection: Matrix4f,
        ortho_scale: Vector2f,
        ortho_distance: f32,
        eye_view_adjust_x: f32,
    ) -> Matrix4f {
        unsafe {
            (self.library.fns().ovrMatrix4f_OrthoSubProjection)(
                projection.into(),
                ortho_scale.into(),
                ortho_distance,
                eye_view_adjust_x,
            )
        }
        .into()
    }

    /// UV scale and offset for sampling a rendered eye texture.
    pub fn render_scale_and_offset(
        &self,
        fov: FovPort,
        texture_size: Sizei,
        render_viewport: Recti,
    ) -> ScaleAndOffset {
        let mut out = [sys::ovrVector2f::default(); 2];
        // SAFETY: out has room for the two vectors the SDK writes.
        unsafe {
            (self.library.fns().ovrHmd_GetRenderScaleAndOffset)(
                fov.into(),
                texture_size.into(),
                render_viewport.into(),
                out.as_mut_ptr(),
            )
        };
        ScaleAndOffset {
            scale: out[0].into(),
            offset: out[1].into(),
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("library", &self.library)
            .finish()
    }
}
