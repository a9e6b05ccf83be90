use crate::error::string_from_ptr;
use crate::sys;
use std::ffi::{c_char, CStr};

/// Map an `ovrBool` to a Rust bool. Any non-zero value is true.
pub(crate) fn from_ovr_bool(value: sys::ovrBool) -> bool {
    value != sys::ovrFalse
}

pub(crate) fn to_ovr_bool(value: bool) -> sys::ovrBool {
    if value {
        sys::ovrTrue
    } else {
        sys::ovrFalse
    }
}

/// A 2D vector with integer components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<sys::ovrVector2i> for Vector2i {
    fn from(v: sys::ovrVector2i) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector2i> for sys::ovrVector2i {
    fn from(v: Vector2i) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A 2D size with integer components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sizei {
    pub w: i32,
    pub h: i32,
}

impl Sizei {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

impl From<sys::ovrSizei> for Sizei {
    fn from(s: sys::ovrSizei) -> Self {
        Self { w: s.w, h: s.h }
    }
}

impl From<Sizei> for sys::ovrSizei {
    fn from(s: Sizei) -> Self {
        Self { w: s.w, h: s.h }
    }
}

/// A 2D rectangle with a position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recti {
    pub pos: Vector2i,
    pub size: Sizei,
}

impl From<sys::ovrRecti> for Recti {
    fn from(r: sys::ovrRecti) -> Self {
        Self {
            pos: r.Pos.into(),
            size: r.Size.into(),
        }
    }
}

impl From<Recti> for sys::ovrRecti {
    fn from(r: Recti) -> Self {
        Self {
            Pos: r.pos.into(),
            Size: r.size.into(),
        }
    }
}

/// A quaternion rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quatf {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quatf {
    pub const IDENTITY: Quatf = Quatf {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for Quatf {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<sys::ovrQuatf> for Quatf {
    fn from(q: sys::ovrQuatf) -> Self {
        Self {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }
}

impl From<Quatf> for sys::ovrQuatf {
    fn from(q: Quatf) -> Self {
        Self {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }
}

/// A 2D vector with float components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<sys::ovrVector2f> for Vector2f {
    fn from(v: sys::ovrVector2f) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector2f> for sys::ovrVector2f {
    fn from(v: Vector2f) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A 3D vector with float components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<sys::ovrVector3f> for Vector3f {
    fn from(v: sys::ovrVector3f) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vector3f> for sys::ovrVector3f {
    fn from(v: Vector3f) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// A 4x4 row-major matrix with float elements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matrix4f {
    pub m: [[f32; 4]; 4],
}

impl From<sys::ovrMatrix4f> for Matrix4f {
    fn from(m: sys::ovrMatrix4f) -> Self {
        Self { m: m.M }
    }
}

impl From<Matrix4f> for sys::ovrMatrix4f {
    fn from(m: Matrix4f) -> Self {
        Self { M: m.m }
    }
}

/// Position and orientation together.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Posef {
    pub orientation: Quatf,
    pub position: Vector3f,
}

impl From<sys::ovrPosef> for Posef {
    fn from(p: sys::ovrPosef) -> Self {
        Self {
            orientation: p.Orientation.into(),
            position: p.Position.into(),
        }
    }
}

impl From<Posef> for sys::ovrPosef {
    fn from(p: Posef) -> Self {
        Self {
            Orientation: p.orientation.into(),
            Position: p.position.into(),
        }
    }
}

/// A full rigid body pose with first and second derivatives.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoseStatef {
    pub pose: Posef,
    pub angular_velocity: Vector3f,
    pub linear_velocity: Vector3f,
    pub angular_acceleration: Vector3f,
    pub linear_acceleration: Vector3f,
    /// Absolute time of this state sample.
    pub time_in_seconds: f64,
}

impl From<sys::ovrPoseStatef> for PoseStatef {
    fn from(s: sys::ovrPoseStatef) -> Self {
        Self {
            pose: s.ThePose.into(),
            angular_velocity: s.AngularVelocity.into(),
            linear_velocity: s.LinearVelocity.into(),
            angular_acceleration: s.AngularAcceleration.into(),
            linear_acceleration: s.LinearAcceleration.into(),
            time_in_seconds: s.TimeInSeconds,
        }
    }
}

impl From<PoseStatef> for sys::ovrPoseStatef {
    fn from(s: PoseStatef) -> Self {
        Self {
            ThePose: s.pose.into(),
            AngularVelocity: s.angular_velocity.into(),
            LinearVelocity: s.linear_velocity.into(),
            AngularAcceleration: s.angular_acceleration.into(),
            LinearAcceleration: s.linear_acceleration.into(),
            TimeInSeconds: s.time_in_seconds,
        }
    }
}

/// Field of view in tangent-of-angle units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FovPort {
    pub up_tan: f32,
    pub down_tan: f32,
    pub left_tan: f32,
    pub right_tan: f32,
}

impl From<sys::ovrFovPort> for FovPort {
    fn from(f: sys::ovrFovPort) -> Self {
        Self {
            up_tan: f.UpTan,
            down_tan: f.DownTan,
            left_tan: f.LeftTan,
            right_tan: f.RightTan,
        }
    }
}

impl From<FovPort> for sys::ovrFovPort {
    fn from(f: FovPort) -> Self {
        Self {
            UpTan: f.up_tan,
            DownTan: f.down_tan,
            LeftTan: f.left_tan,
            RightTan: f.right_tan,
        }
    }
}

/// HMD models known to the 0.4 SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HmdType {
    None,
    Dk1,
    DkHd,
    Dk2,
    Other,
}

impl HmdType {
    pub(crate) fn from_raw(raw: sys::ovrHmdType) -> HmdType {
        match raw {
            sys::ovrHmd_None => HmdType::None,
            sys::ovrHmd_DK1 => HmdType::Dk1,
            sys::ovrHmd_DKHD => HmdType::DkHd,
            sys::ovrHmd_DK2 => HmdType::Dk2,
            sys::ovrHmd_Other => HmdType::Other,
            other => {
                log::warn!("Unknown ovrHmdType {}, reporting as Other", other);
                HmdType::Other
            }
        }
    }

    pub(crate) fn to_raw(self) -> sys::ovrHmdType {
        match self {
            HmdType::None => sys::ovrHmd_None,
            HmdType::Dk1 => sys::ovrHmd_DK1,
            HmdType::DkHd => sys::ovrHmd_DKHD,
            HmdType::Dk2 => sys::ovrHmd_DK2,
            HmdType::Other => sys::ovrHmd_Other,
        }
    }
}

/// Which eye is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Left, Eye::Right];

    /// Index into per-eye arrays.
    pub fn index(self) -> usize {
        match self {
            Eye::Left => 0,
            Eye::Right => 1,
        }
    }

    pub(crate) fn from_raw(raw: sys::ovrEyeType) -> Eye {
        match raw {
            sys::ovrEye_Left => Eye::Left,
            sys::ovrEye_Right => Eye::Right,
            other => {
                log::warn!("Unknown ovrEyeType {}, reporting as Left", other);
                Eye::Left
            }
        }
    }

    pub(crate) fn to_raw(self) -> sys::ovrEyeType {
        match self {
            Eye::Left => sys::ovrEye_Left,
            Eye::Right => sys::ovrEye_Right,
        }
    }
}

/// Rendering backend tag carried by configs and textures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderApi {
    #[default]
    None,
    OpenGl,
    AndroidGles,
    D3d9,
    D3d10,
    D3d11,
}

impl RenderApi {
    pub(crate) fn from_raw(raw: sys::ovrRenderAPIType) -> RenderApi {
        match raw {
            sys::ovrRenderAPI_OpenGL => RenderApi::OpenGl,
            sys::ovrRenderAPI_Android_GLES => RenderApi::AndroidGles,
            sys::ovrRenderAPI_D3D9 => RenderApi::D3d9,
            sys::ovrRenderAPI_D3D10 => RenderApi::D3d10,
            sys::ovrRenderAPI_D3D11 => RenderApi::D3d11,
            sys::ovrRenderAPI_None => RenderApi::None,
            other => {
                log::warn!("Unknown ovrRenderAPIType {}, reporting as None", other);
                RenderApi::None
            }
        }
    }

    pub(crate) fn to_raw(self) -> sys::ovrRenderAPIType {
        match self {
            RenderApi::None => sys::ovrRenderAPI_None,
            RenderApi::OpenGl => sys::ovrRenderAPI_OpenGL,
            RenderApi::AndroidGles => sys::ovrRenderAPI_Android_GLES,
            RenderApi::D3d9 => sys::ovrRenderAPI_D3D9,
            RenderApi::D3d10 => sys::ovrRenderAPI_D3D10,
            RenderApi::D3d11 => sys::ovrRenderAPI_D3D11,
        }
    }
}

bitflags::bitflags! {
    /// HMD capability bits. The first four are read-only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HmdCaps: u32 {
        const PRESENT            = sys::ovrHmdCap_Present;
        const AVAILABLE          = sys::ovrHmdCap_Available;
        const CAPTURED           = sys::ovrHmdCap_Captured;
        const EXTEND_DESKTOP     = sys::ovrHmdCap_ExtendDesktop;
        const NO_MIRROR_TO_WINDOW = sys::ovrHmdCap_NoMirrorToWindow;
        const DISPLAY_OFF        = sys::ovrHmdCap_DisplayOff;
        const LOW_PERSISTENCE    = sys::ovrHmdCap_LowPersistence;
        const DYNAMIC_PREDICTION = sys::ovrHmdCap_DynamicPrediction;
        const NO_VSYNC           = sys::ovrHmdCap_NoVSync;

        const _ = !0;
    }
}

impl HmdCaps {
    /// Bits accepted by `ovrHmd_SetEnabledCaps`.
    pub const WRITABLE_MASK: HmdCaps = HmdCaps::from_bits_retain(sys::ovrHmdCap_Writable_Mask);
    /// Bits stored by the service as user preferences.
    pub const SERVICE_MASK: HmdCaps = HmdCaps::from_bits_retain(sys::ovrHmdCap_Service_Mask);
}

bitflags::bitflags! {
    /// Tracking capability bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrackingCaps: u32 {
        const ORIENTATION        = sys::ovrTrackingCap_Orientation;
        const MAG_YAW_CORRECTION = sys::ovrTrackingCap_MagYawCorrection;
        const POSITION           = sys::ovrTrackingCap_Position;
        const IDLE               = sys::ovrTrackingCap_Idle;

        const _ = !0;
    }
}

bitflags::bitflags! {
    /// Distortion capability bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DistortionCaps: u32 {
        const CHROMATIC  = sys::ovrDistortionCap_Chromatic;
        const TIME_WARP  = sys::ovrDistortionCap_TimeWarp;
        const VIGNETTE   = sys::ovrDistortionCap_Vignette;
        const NO_RESTORE = sys::ovrDistortionCap_NoRestore;
        const FLIP_INPUT = sys::ovrDistortionCap_FlipInput;
        const SRGB       = sys::ovrDistortionCap_SRGB;
        const OVERDRIVE  = sys::ovrDistortionCap_Overdrive;
        const PROFILE_NO_TIMEWARP_SPIN_WAITS = sys::ovrDistortionCap_ProfileNoTimewarpSpinWaits;

        const _ = !0;
    }
}

bitflags::bitflags! {
    /// Status bits reported in `TrackingState::status_flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u32 {
        const ORIENTATION_TRACKED = sys::ovrStatus_OrientationTracked;
        const POSITION_TRACKED    = sys::ovrStatus_PositionTracked;
        const CAMERA_POSE_TRACKED = sys::ovrStatus_CameraPoseTracked;
        const POSITION_CONNECTED  = sys::ovrStatus_PositionConnected;
        const HMD_CONNECTED       = sys::ovrStatus_HmdConnected;

        const _ = !0;
    }
}

/// Static descriptor of an opened HMD.
#[derive(Debug, Clone, PartialEq)]
pub struct HmdDesc {
    pub hmd_type: HmdType,
    pub product_name: String,
    pub manufacturer: String,
    pub vendor_id: i16,
    pub product_id: i16,
    pub serial_number: String,
    pub firmware_major: i16,
    pub firmware_minor: i16,
    pub camera_frustum_hfov_in_radians: f32,
    pub camera_frustum_vfov_in_radians: f32,
    pub camera_frustum_near_z_in_meters: f32,
    pub camera_frustum_far_z_in_meters: f32,
    pub hmd_caps: HmdCaps,
    pub tracking_caps: TrackingCaps,
    pub distortion_caps: DistortionCaps,
    pub default_eye_fov: [FovPort; 2],
    pub max_eye_fov: [FovPort; 2],
    pub eye_render_order: [Eye; 2],
    pub resolution: Sizei,
    pub windows_pos: Vector2i,
    pub display_device_name: String,
    pub display_id: i32,
}

impl HmdDesc {
    /// Copy the descriptor out of SDK-owned memory.
    ///
    /// # Safety
    /// `desc` must point to a valid `ovrHmdDesc` whose string pointers are null
    /// or NUL-terminated.
    pub(crate) unsafe fn from_raw(desc: &sys::ovrHmdDesc) -> HmdDesc {
        HmdDesc {
            hmd_type: HmdType::from_raw(desc.Type),
            product_name: string_from_ptr(desc.ProductName),
            manufacturer: string_from_ptr(desc.Manufacturer),
            vendor_id: desc.VendorId,
            product_id: desc.ProductId,
            serial_number: fixed_to_string(&desc.SerialNumber),
            firmware_major: desc.FirmwareMajor,
            firmware_minor: desc.FirmwareMinor,
            camera_frustum_hfov_in_radians: desc.CameraFrustumHFovInRadians,
            camera_frustum_vfov_in_radians: desc.CameraFrustumVFovInRadians,
            camera_frustum_near_z_in_meters: desc.CameraFrustumNearZInMeters,
            camera_frustum_far_z_in_meters: desc.CameraFrustumFarZInMeters,
            hmd_caps: HmdCaps::from_bits_retain(desc.HmdCaps),
            tracking_caps: TrackingCaps::from_bits_retain(desc.TrackingCaps),
            distortion_caps: DistortionCaps::from_bits_retain(desc.DistortionCaps),
            default_eye_fov: desc.DefaultEyeFov.map(FovPort::from),
            max_eye_fov: desc.MaxEyeFov.map(FovPort::from),
            eye_render_order: desc.EyeRenderOrder.map(Eye::from_raw),
            resolution: desc.Resolution.into(),
            windows_pos: desc.WindowsPos.into(),
            display_device_name: string_from_ptr(desc.DisplayDeviceName),
            display_id: desc.DisplayId,
        }
    }
}

/// Read a fixed-size C char buffer up to its first NUL.
fn fixed_to_string(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf.iter().map(|&c| c as u8).collect();
    match CStr::from_bytes_until_nul(&bytes) {
        Ok(s) => s.to_string_lossy().into_owned(),
        Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Raw sensor readings that accompany a tracking state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorData {
    /// Acceleration reading in m/s^2.
    pub accelerometer: Vector3f,
    /// Rotation rate in rad/s.
    pub gyro: Vector3f,
    /// Magnetic field in Gauss.
    pub magnetometer: Vector3f,
    /// Temperature of the sensor in degrees Celsius.
    pub temperature: f32,
    pub time_in_seconds: f32,
}

impl From<sys::ovrSensorData> for SensorData {
    fn from(d: sys::ovrSensorData) -> Self {
        Self {
            accelerometer: d.Accelerometer.into(),
            gyro: d.Gyro.into(),
            magnetometer: d.Magnetometer.into(),
            temperature: d.Temperature,
            time_in_seconds: d.TimeInSeconds,
        }
    }
}

impl From<SensorData> for sys::ovrSensorData {
    fn from(d: SensorData) -> Self {
        Self {
            Accelerometer: d.accelerometer.into(),
            Gyro: d.gyro.into(),
            Magnetometer: d.magnetometer.into(),
            Temperature: d.temperature,
            TimeInSeconds: d.time_in_seconds,
        }
    }
}

/// Tracking state at a given absolute time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingState {
    /// Predicted head pose and its derivatives.
    pub head_pose: PoseStatef,
    /// Position tracking camera pose in the head-centered frame.
    pub camera_pose: Posef,
    /// Camera pose with gravity-aligned orientation.
    pub leveled_camera_pose: Posef,
    pub raw_sensor_data: SensorData,
    pub status_flags: StatusFlags,
    pub last_vision_processing_time: f64,
}

impl From<sys::ovrTrackingState> for TrackingState {
    fn from(s: sys::ovrTrackingState) -> Self {
        Self {
            head_pose: s.HeadPose.into(),
            camera_pose: s.CameraPose.into(),
            leveled_camera_pose: s.LeveledCameraPose.into(),
            raw_sensor_data: s.RawSensorData.into(),
            status_flags: StatusFlags::from_bits_retain(s.StatusFlags),
            last_vision_processing_time: s.LastVisionProcessingTime,
        }
    }
}

impl From<TrackingState> for sys::ovrTrackingState {
    fn from(s: TrackingState) -> Self {
        Self {
            HeadPose: s.head_pose.into(),
            CameraPose: s.camera_pose.into(),
            LeveledCameraPose: s.leveled_camera_pose.into(),
            RawSensorData: s.raw_sensor_data.into(),
            StatusFlags: s.status_flags.bits(),
            LastVisionProcessingTime: s.last_vision_processing_time,
        }
    }
}

/// Frame timing returned by the begin-frame calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTiming {
    /// Time since the previous frame; fixed to vsync for the first frames.
    pub delta_seconds: f32,
    pub this_frame_seconds: f64,
    pub timewarp_point_seconds: f64,
    pub next_frame_seconds: f64,
    /// Predicted time the middle of the screen is scanned out.
    pub scanout_midpoint_seconds: f64,
    pub eye_scanout_seconds: [f64; 2],
}

impl From<sys::ovrFrameTiming> for FrameTiming {
    fn from(t: sys::ovrFrameTiming) -> Self {
        Self {
            delta_seconds: t.DeltaSeconds,
            this_frame_seconds: t.ThisFrameSeconds,
            timewarp_point_seconds: t.TimewarpPointSeconds,
            next_frame_seconds: t.NextFrameSeconds,
            scanout_midpoint_seconds: t.ScanoutMidpointSeconds,
            eye_scanout_seconds: t.EyeScanoutSeconds,
        }
    }
}

/// Rendering information for one eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeRenderDesc {
    pub eye: Eye,
    pub fov: FovPort,
    pub distorted_viewport: Recti,
    pub pixels_per_tan_angle_at_center: Vector2f,
    /// Translation to apply to the view matrix for this eye.
    pub view_adjust: Vector3f,
}

impl From<sys::ovrEyeRenderDesc> for EyeRenderDesc {
    fn from(d: sys::ovrEyeRenderDesc) -> Self {
        Self {
            eye: Eye::from_raw(d.Eye),
            fov: d.Fov.into(),
            distorted_viewport: d.DistortedViewport.into(),
            pixels_per_tan_angle_at_center: d.PixelsPerTanAngleAtCenter.into(),
            view_adjust: d.ViewAdjust.into(),
        }
    }
}

impl From<EyeRenderDesc> for sys::ovrEyeRenderDesc {
    fn from(d: EyeRenderDesc) -> Self {
        Self {
            Eye: d.eye.to_raw(),
            Fov: d.fov.into(),
            DistortedViewport: d.distorted_viewport.into(),
            PixelsPerTanAngleAtCenter: d.pixels_per_tan_angle_at_center.into(),
            ViewAdjust: d.view_adjust.into(),
        }
    }
}

/// UV scale and offset for client distortion rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScaleAndOffset {
    pub scale: Vector2f,
    pub offset: Vector2f,
}

/// Health and safety warning display state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HswDisplayState {
    /// Whether the warning is currently shown.
    pub displayed: bool,
    /// Absolute time when the warning was first displayed.
    pub start_time: f64,
    /// Earliest absolute time the warning can be dismissed.
    pub dismissible_time: f64,
}

impl From<sys::ovrHSWDisplayState> for HswDisplayState {
    fn from(s: sys::ovrHSWDisplayState) -> Self {
        Self {
            displayed: from_ovr_bool(s.Displayed),
            start_time: s.StartTime,
            dismissible_time: s.DismissibleTime,
        }
    }
}

impl From<HswDisplayState> for sys::ovrHSWDisplayState {
    fn from(s: HswDisplayState) -> Self {
        Self {
            Displayed: to_ovr_bool(s.displayed),
            StartTime: s.start_time,
            DismissibleTime: s.dismissible_time,
        }
    }
}
