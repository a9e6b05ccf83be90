//! Per-device calls.
//!
//! `self.raw()` is live for the lifetime of an [`Hmd`], so calls that pass
//! only the handle and scalars are sound without further notes; calls with
//! out-pointers say what they write.

use crate::context::Context;
use crate::error::message_from_ptr;
use crate::library::Functions;
use crate::render::{DistortionMesh, RenderApiConfig, Texture};
use crate::sys;
use crate::types::{
    from_ovr_bool, DistortionCaps, Eye, EyeRenderDesc, FovPort, FrameTiming, HmdCaps, HmdDesc,
    HswDisplayState, Matrix4f, Posef, Sizei, TrackingCaps, TrackingState,
};
use crate::{OvrError, Result};
use std::ptr::NonNull;

/// An opened head-mounted display.
///
/// The device is released with `ovrHmd_Destroy` when this value is dropped or
/// [`Hmd::destroy`] is called.
pub struct Hmd<'a> {
    context: &'a Context,
    raw: NonNull<sys::ovrHmdDesc>,
    desc: HmdDesc,
}

impl<'a> Hmd<'a> {
    /// # Safety
    /// `raw` must be a non-null handle returned by `ovrHmd_Create*` on the
    /// library owned by `context`, not yet destroyed.
    pub(crate) unsafe fn from_raw(context: &'a Context, raw: sys::ovrHmd) -> Hmd<'a> {
        let desc = HmdDesc::from_raw(&*raw);
        log::info!(
            "Opened HMD: {} ({}) type={:?} resolution={}x{} serial={}",
            desc.product_name,
            desc.manufacturer,
            desc.hmd_type,
            desc.resolution.w,
            desc.resolution.h,
            desc.serial_number
        );
        Hmd {
            context,
            raw: NonNull::new_unchecked(raw as *mut sys::ovrHmdDesc),
            desc,
        }
    }

    pub(crate) fn fns(&self) -> &'a Functions {
        self.context.library().fns()
    }

    pub(crate) fn raw(&self) -> sys::ovrHmd {
        self.raw.as_ptr()
    }

    /// Static descriptor captured when the device was opened.
    pub fn desc(&self) -> &HmdDesc {
        &self.desc
    }

    /// Close the device. Equivalent to dropping it.
    pub fn destroy(self) {}

    /// Last error reported for this device, if any.
    pub fn last_error(&self) -> Option<String> {
        // SAFETY: live handle; the SDK returns NULL, "" or a message.
        unsafe { message_from_ptr((self.fns().ovrHmd_GetLastError)(self.raw())) }
    }

    pub(crate) fn error(&self, operation: &'static str) -> OvrError {
        OvrError::from_last_error(operation, self.last_error())
    }

    /// Currently enabled capability bits.
    pub fn enabled_caps(&self) -> HmdCaps {
        HmdCaps::from_bits_retain(unsafe { (self.fns().ovrHmd_GetEnabledCaps)(self.raw()) })
    }

    /// Enable the writable capability bits in `caps`; read-only bits are ignored by the SDK.
    pub fn set_enabled_caps(&self, caps: HmdCaps) {
        log::debug!("Setting HMD caps {:?}", caps);
        unsafe { (self.fns().ovrHmd_SetEnabledCaps)(self.raw(), caps.bits()) }
    }

    /// Start sensor tracking with the given capabilities.
    ///
    /// Fails if any of the `required` capabilities are unavailable.
    pub fn configure_tracking(&self, supported: TrackingCaps, required: TrackingCaps) -> Result<()> {
        log::debug!(
            "Configuring tracking supported={:?} required={:?}",
            supported,
            required
        );
        let ok = unsafe {
            (self.fns().ovrHmd_ConfigureTracking)(self.raw(), supported.bits(), required.bits())
        };
        if from_ovr_bool(ok) {
            Ok(())
        } else {
            Err(self.error("ovrHmd_ConfigureTracking"))
        }
    }

    /// Make the current head position and yaw the tracking origin.
    pub fn recenter_pose(&self) {
        unsafe { (self.fns().ovrHmd_RecenterPose)(self.raw()) }
    }

    /// Tracking state predicted for `abs_time` (0 for the latest sample).
    pub fn tracking_state(&self, abs_time: f64) -> TrackingState {
        unsafe { (self.fns().ovrHmd_GetTrackingState)(self.raw(), abs_time) }.into()
    }

    /// Recommended render target size for `eye` at `fov`.
    pub fn fov_texture_size(&self, eye: Eye, fov: FovPort, pixels_per_display_pixel: f32) -> Sizei {
        unsafe {
            (self.fns().ovrHmd_GetFovTextureSize)(
                self.raw(),
                eye.to_raw(),
                fov.into(),
                pixels_per_display_pixel,
            )
        }
        .into()
    }

    /// Configure SDK distortion rendering.
    ///
    /// Passing `None` for `config` turns SDK rendering off again.
    pub fn configure_rendering(
        &self,
        config: Option<&RenderApiConfig>,
        distortion_caps: DistortionCaps,
        eye_fov: [FovPort; 2],
    ) -> Result<[EyeRenderDesc; 2]> {
        let raw_config = config.map(sys::ovrRenderAPIConfig::from);
        let config_ptr = raw_config
            .as_ref()
            .map_or(std::ptr::null(), |c| c as *const sys::ovrRenderAPIConfig);
        let fov_in = eye_fov.map(sys::ovrFovPort::from);
        let mut desc_out = [sys::ovrEyeRenderDesc::default(); 2];

        log::debug!(
            "Configuring rendering api={:?} caps={:?}",
            config.map(|c| c.header.api),
            distortion_caps
        );

        // SAFETY: both arrays hold exactly ovrEye_Count elements.
        let ok = unsafe {
            (self.fns().ovrHmd_ConfigureRendering)(
                self.raw(),
                config_ptr,
                distortion_caps.bits(),
                fov_in.as_ptr(),
                desc_out.as_mut_ptr(),
            )
        };
        if !from_ovr_bool(ok) {
            return Err(self.error("ovrHmd_ConfigureRendering"));
        }
        Ok(desc_out.map(EyeRenderDesc::from))
    }

    /// Begin an SDK-rendered frame.
    pub fn begin_frame(&self, frame_index: u32) -> FrameTiming {
        log::trace!("BeginFrame {}", frame_index);
        unsafe { (self.fns().ovrHmd_BeginFrame)(self.raw(), frame_index) }.into()
    }

    /// Submit both eye textures rendered at `render_pose` and present.
    pub fn end_frame(&self, render_pose: [Posef; 2], eye_texture: [Texture; 2]) {
        let poses = render_pose.map(sys::ovrPosef::from);
        let textures = eye_texture.map(Texture::to_raw);
        log::trace!("EndFrame");
        // SAFETY: both arrays hold exactly ovrEye_Count elements. Each texture
        // is the C union, which shares size and alignment with ovrTexture.
        unsafe {
            (self.fns().ovrHmd_EndFrame)(
                self.raw(),
                poses.as_ptr(),
                textures.as_ptr().cast::<sys::ovrTexture>(),
            )
        }
    }

    /// Predicted pose to render `eye` with, between begin and end frame.
    pub fn eye_pose(&self, eye: Eye) -> Posef {
        unsafe { (self.fns().ovrHmd_GetEyePose)(self.raw(), eye.to_raw()) }.into()
    }

    /// Rendering parameters for client distortion rendering.
    pub fn render_desc(&self, eye: Eye, fov: FovPort) -> EyeRenderDesc {
        unsafe { (self.fns().ovrHmd_GetRenderDesc)(self.raw(), eye.to_raw(), fov.into()) }.into()
    }

    /// Generate the distortion mesh for one eye.
    pub fn create_distortion_mesh(
        &self,
        eye: Eye,
        fov: FovPort,
        distortion_caps: DistortionCaps,
    ) -> Result<DistortionMesh<'a>> {
        let mut mesh = sys::ovrDistortionMesh::default();
        // SAFETY: the SDK fills `mesh` and owns the buffers it points to.
        let ok = unsafe {
            (self.fns().ovrHmd_CreateDistortionMesh)(
                self.raw(),
                eye.to_raw(),
                fov.into(),
                distortion_caps.bits(),
                &mut mesh,
            )
        };
        if !from_ovr_bool(ok) {
            return Err(self.error("ovrHmd_CreateDistortionMesh"));
        }
        log::debug!(
            "Created {:?} distortion mesh: {} vertices, {} indices",
            eye,
            mesh.VertexCount,
            mesh.IndexCount
        );
        // SAFETY: the SDK filled `mesh` and it has not been destroyed.
        Ok(unsafe { DistortionMesh::from_raw(self.fns(), mesh) })
    }

    /// Frame timing for client distortion rendering, without side effects.
    pub fn frame_timing(&self, frame_index: u32) -> FrameTiming {
        unsafe { (self.fns().ovrHmd_GetFrameTiming)(self.raw(), frame_index) }.into()
    }

    /// Mark the start of a client-rendered frame.
    pub fn begin_frame_timing(&self, frame_index: u32) -> FrameTiming {
        log::trace!("BeginFrameTiming {}", frame_index);
        unsafe { (self.fns().ovrHmd_BeginFrameTiming)(self.raw(), frame_index) }.into()
    }

    /// Mark the end of a client-rendered frame, after the buffer swap.
    pub fn end_frame_timing(&self) {
        log::trace!("EndFrameTiming");
        unsafe { (self.fns().ovrHmd_EndFrameTiming)(self.raw()) }
    }

    /// Reset timing statistics, e.g. after a dropped frame sequence.
    pub fn reset_frame_timing(&self, frame_index: u32) {
        unsafe { (self.fns().ovrHmd_ResetFrameTiming)(self.raw(), frame_index) }
    }

    /// Start and end timewarp matrices for `eye` rendered at `render_pose`.
    pub fn eye_timewarp_matrices(&self, eye: Eye, render_pose: Posef) -> [Matrix4f; 2] {
        let mut out = [sys::ovrMatrix4f::default(); 2];
        // SAFETY: out has room for the two matrices the SDK writes.
        unsafe {
            (self.fns().ovrHmd_GetEyeTimewarpMatrices)(
                self.raw(),
                eye.to_raw(),
                render_pose.into(),
                out.as_mut_ptr(),
            )
        };
        out.map(Matrix4f::from)
    }

    /// Run one step of the latency tester.
    ///
    /// Returns the color to draw this frame, or `None` when no test is running.
    pub fn process_latency_test(&self) -> Option<[u8; 3]> {
        let mut rgb: sys::ovrLatencyColor = [0; 3];
        // SAFETY: the SDK writes at most three bytes into `rgb`.
        let draw = unsafe { (self.fns().ovrHmd_ProcessLatencyTest)(self.raw(), rgb.as_mut_ptr()) };
        from_ovr_bool(draw).then_some(rgb)
    }

    /// Result text of the last latency test, if one has completed.
    pub fn latency_test_result(&self) -> Option<String> {
        // SAFETY: live handle; the SDK returns NULL, "" or a message.
        unsafe { message_from_ptr((self.fns().ovrHmd_GetLatencyTestResult)(self.raw())) }
    }

    /// Current state of the health and safety warning.
    pub fn hsw_display_state(&self) -> HswDisplayState {
        let mut state = sys::ovrHSWDisplayState::default();
        // SAFETY: the SDK writes one struct into `state`.
        unsafe { (self.fns().ovrHmd_GetHSWDisplayState)(self.raw(), &mut state) };
        state.into()
    }

    /// Try to dismiss the health and safety warning.
    ///
    /// Returns false while the warning is not yet dismissible.
    pub fn dismiss_hsw_display(&self) -> bool {
        from_ovr_bool(unsafe { (self.fns().ovrHmd_DismissHSWDisplay)(self.raw()) })
    }

    /// Attach the HMD to a native window for direct-to-rift rendering.
    ///
    /// # Safety
    /// `window` must be a valid `HWND` that outlives SDK rendering.
    #[cfg(windows)]
    pub unsafe fn attach_to_window(
        &self,
        window: *mut std::ffi::c_void,
        dest_mirror_rect: Option<crate::types::Recti>,
        source_render_target_rect: Option<crate::types::Recti>,
    ) -> Result<()> {
        let dest = dest_mirror_rect.map(sys::ovrRecti::from);
        let source = source_render_target_rect.map(sys::ovrRecti::from);
        let ok = (self.fns().ovrHmd_AttachToWindow)(
            self.raw(),
            window,
            dest.as_ref().map_or(std::ptr::null(), |r| r as *const sys::ovrRecti),
            source.as_ref().map_or(std::ptr::null(), |r| r as *const sys::ovrRecti),
        );
        if from_ovr_bool(ok) {
            Ok(())
        } else {
            Err(self.error("ovrHmd_AttachToWindow"))
        }
    }
}

impl Drop for Hmd<'_> {
    fn drop(&mut self) {
        // SAFETY: the handle is live and this is its only owner.
        unsafe { (self.fns().ovrHmd_Destroy)(self.raw()) };
        log::info!("Destroyed HMD {}", self.desc.product_name);
    }
}

impl std::fmt::Debug for Hmd<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hmd").field("desc", &self.desc).finish()
    }
}
