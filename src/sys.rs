//! Raw mirrors of the LibOVR 0.4.2 C ABI (`OVR_CAPI.h`, `OVR_CAPI_GL.h`).
//!
//! Field order, field types and sizes follow the C headers exactly. Nothing in
//! here is safe to use on its own; the rest of the crate converts these into
//! the host types in [`crate::types`].

#![allow(non_camel_case_types, non_snake_case)]

use std::ffi::{c_char, c_double, c_float, c_int, c_short, c_uchar, c_uint, c_ushort};

pub type ovrBool = c_char;
pub const ovrFalse: ovrBool = 0;
pub const ovrTrue: ovrBool = 1;

// -- Enumerations (C enums are int-sized) --

pub type ovrHmdType = c_int;
pub const ovrHmd_None: ovrHmdType = 0;
pub const ovrHmd_DK1: ovrHmdType = 3;
pub const ovrHmd_DKHD: ovrHmdType = 4;
pub const ovrHmd_DK2: ovrHmdType = 6;
pub const ovrHmd_Other: ovrHmdType = 7;

pub type ovrEyeType = c_int;
pub const ovrEye_Left: ovrEyeType = 0;
pub const ovrEye_Right: ovrEyeType = 1;
pub const ovrEye_Count: usize = 2;

pub type ovrRenderAPIType = c_int;
pub const ovrRenderAPI_None: ovrRenderAPIType = 0;
pub const ovrRenderAPI_OpenGL: ovrRenderAPIType = 1;
pub const ovrRenderAPI_Android_GLES: ovrRenderAPIType = 2;
pub const ovrRenderAPI_D3D9: ovrRenderAPIType = 3;
pub const ovrRenderAPI_D3D10: ovrRenderAPIType = 4;
pub const ovrRenderAPI_D3D11: ovrRenderAPIType = 5;
pub const ovrRenderAPI_Count: ovrRenderAPIType = 6;

// -- Capability bits --

pub const ovrHmdCap_Present: c_uint = 0x0001;
pub const ovrHmdCap_Available: c_uint = 0x0002;
pub const ovrHmdCap_Captured: c_uint = 0x0004;
pub const ovrHmdCap_ExtendDesktop: c_uint = 0x0008;
pub const ovrHmdCap_NoMirrorToWindow: c_uint = 0x2000;
pub const ovrHmdCap_DisplayOff: c_uint = 0x0040;
pub const ovrHmdCap_LowPersistence: c_uint = 0x0080;
pub const ovrHmdCap_DynamicPrediction: c_uint = 0x0200;
pub const ovrHmdCap_NoVSync: c_uint = 0x1000;
pub const ovrHmdCap_Writable_Mask: c_uint = 0x32F0;
pub const ovrHmdCap_Service_Mask: c_uint = 0x22F0;

pub const ovrTrackingCap_Orientation: c_uint = 0x0010;
pub const ovrTrackingCap_MagYawCorrection: c_uint = 0x0020;
pub const ovrTrackingCap_Position: c_uint = 0x0040;
pub const ovrTrackingCap_Idle: c_uint = 0x0100;

pub const ovrDistortionCap_Chromatic: c_uint = 0x01;
pub const ovrDistortionCap_TimeWarp: c_uint = 0x02;
pub const ovrDistortionCap_Vignette: c_uint = 0x08;
pub const ovrDistortionCap_NoRestore: c_uint = 0x10;
pub const ovrDistortionCap_FlipInput: c_uint = 0x20;
pub const ovrDistortionCap_SRGB: c_uint = 0x40;
pub const ovrDistortionCap_Overdrive: c_uint = 0x80;
pub const ovrDistortionCap_ProfileNoTimewarpSpinWaits: c_uint = 0x10000;

pub const ovrStatus_OrientationTracked: c_uint = 0x0001;
pub const ovrStatus_PositionTracked: c_uint = 0x0002;
pub const ovrStatus_CameraPoseTracked: c_uint = 0x0004;
pub const ovrStatus_PositionConnected: c_uint = 0x0020;
pub const ovrStatus_HmdConnected: c_uint = 0x0080;

// -- Simple math structures --

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrVector2i {
    pub x: c_int,
    pub y: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrSizei {
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrRecti {
    pub Pos: ovrVector2i,
    pub Size: ovrSizei,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrQuatf {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
    pub w: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrVector2f {
    pub x: c_float,
    pub y: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrVector3f {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrMatrix4f {
    pub M: [[c_float; 4]; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrPosef {
    pub Orientation: ovrQuatf,
    pub Position: ovrVector3f,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrPoseStatef {
    pub ThePose: ovrPosef,
    pub AngularVelocity: ovrVector3f,
    pub LinearVelocity: ovrVector3f,
    pub AngularAcceleration: ovrVector3f,
    pub LinearAcceleration: ovrVector3f,
    pub TimeInSeconds: c_double,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrFovPort {
    pub UpTan: c_float,
    pub DownTan: c_float,
    pub LeftTan: c_float,
    pub RightTan: c_float,
}

// -- HMD --

/// Opaque SDK-internal device state.
#[repr(C)]
pub struct ovrHmdStruct {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ovrHmdDesc {
    pub Handle: *mut ovrHmdStruct,
    pub Type: ovrHmdType,
    pub ProductName: *const c_char,
    pub Manufacturer: *const c_char,
    pub VendorId: c_short,
    pub ProductId: c_short,
    pub SerialNumber: [c_char; 24],
    pub FirmwareMajor: c_short,
    pub FirmwareMinor: c_short,
    pub CameraFrustumHFovInRadians: c_float,
    pub CameraFrustumVFovInRadians: c_float,
    pub CameraFrustumNearZInMeters: c_float,
    pub CameraFrustumFarZInMeters: c_float,
    pub HmdCaps: c_uint,
    pub TrackingCaps: c_uint,
    pub DistortionCaps: c_uint,
    pub DefaultEyeFov: [ovrFovPort; ovrEye_Count],
    pub MaxEyeFov: [ovrFovPort; ovrEye_Count],
    pub EyeRenderOrder: [ovrEyeType; ovrEye_Count],
    pub Resolution: ovrSizei,
    pub WindowsPos: ovrVector2i,
    pub DisplayDeviceName: *const c_char,
    pub DisplayId: c_int,
}

/// Handle returned by `ovrHmd_Create`; the descriptor doubles as the handle.
pub type ovrHmd = *const ovrHmdDesc;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrSensorData {
    pub Accelerometer: ovrVector3f,
    pub Gyro: ovrVector3f,
    pub Magnetometer: ovrVector3f,
    pub Temperature: c_float,
    pub TimeInSeconds: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrTrackingState {
    pub HeadPose: ovrPoseStatef,
    pub CameraPose: ovrPosef,
    pub LeveledCameraPose: ovrPosef,
    pub RawSensorData: ovrSensorData,
    pub StatusFlags: c_uint,
    pub LastVisionProcessingTime: c_double,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrFrameTiming {
    pub DeltaSeconds: c_float,
    pub ThisFrameSeconds: c_double,
    pub TimewarpPointSeconds: c_double,
    pub NextFrameSeconds: c_double,
    pub ScanoutMidpointSeconds: c_double,
    pub EyeScanoutSeconds: [c_double; 2],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrEyeRenderDesc {
    pub Eye: ovrEyeType,
    pub Fov: ovrFovPort,
    pub DistortedViewport: ovrRecti,
    pub PixelsPerTanAngleAtCenter: ovrVector2f,
    pub ViewAdjust: ovrVector3f,
}

// -- Rendering --

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrRenderAPIConfigHeader {
    pub API: ovrRenderAPIType,
    pub RTSize: ovrSizei,
    pub Multisample: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrRenderAPIConfig {
    pub Header: ovrRenderAPIConfigHeader,
    pub PlatformData: [usize; 8],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrTextureHeader {
    pub API: ovrRenderAPIType,
    pub TextureSize: ovrSizei,
    pub RenderViewport: ovrRecti,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrTexture {
    pub Header: ovrTextureHeader,
    pub PlatformData: [usize; 8],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrDistortionVertex {
    pub ScreenPosNDC: ovrVector2f,
    pub TimeWarpFactor: c_float,
    pub VignetteFactor: c_float,
    pub TanEyeAnglesR: ovrVector2f,
    pub TanEyeAnglesG: ovrVector2f,
    pub TanEyeAnglesB: ovrVector2f,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ovrDistortionMesh {
    pub pVertexData: *mut ovrDistortionVertex,
    pub pIndexData: *mut c_ushort,
    pub VertexCount: c_uint,
    pub IndexCount: c_uint,
}

impl Default for ovrDistortionMesh {
    fn default() -> Self {
        Self {
            pVertexData: std::ptr::null_mut(),
            pIndexData: std::ptr::null_mut(),
            VertexCount: 0,
            IndexCount: 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrHSWDisplayState {
    pub Displayed: ovrBool,
    pub StartTime: c_double,
    pub DismissibleTime: c_double,
}

// -- OpenGL backend (OVR_CAPI_GL.h) --

pub type GLuint = c_uint;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ovrGLConfigData {
    pub Header: ovrRenderAPIConfigHeader,
    #[cfg(windows)]
    pub Window: *mut std::ffi::c_void,
    #[cfg(windows)]
    pub DC: *mut std::ffi::c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ovrGLTextureData {
    pub Header: ovrTextureHeader,
    pub TexId: GLuint,
}

/// `TexId` follows the 28-byte header directly, so on 64-bit targets it sits
/// in the padding before `ovrTexture::PlatformData`, not in slot 0.
#[repr(C)]
#[derive(Clone, Copy)]
pub union ovrGLTexture {
    pub Texture: ovrTexture,
    pub OGL: ovrGLTextureData,
}

/// Raw RGB triple filled in by `ovrHmd_ProcessLatencyTest`.
pub type ovrLatencyColor = [c_uchar; 3];
