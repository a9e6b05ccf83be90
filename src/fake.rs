//! In-process stand-in for LibOVR used by the unit tests.
//!
//! Each entry point is an `extern "C"` function with the exact signature of
//! its C counterpart, so tests drive the real marshaling code. State is
//! thread-local; every test thread calls [`reset`] first.

#![allow(non_snake_case)]

use crate::sys::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{c_char, c_double, c_float, c_int, c_uchar, c_uint, c_ushort, CStr, CString};
use std::sync::OnceLock;
use std::time::Instant;

const DEVICE_TRACKING_CAPS: c_uint =
    ovrTrackingCap_Orientation | ovrTrackingCap_MagYawCorrection | ovrTrackingCap_Position;
const PIXELS_PER_TAN_ANGLE: c_float = 549.5;

enum Property {
    Bool(ovrBool),
    Int(c_int),
    Float(c_float),
    Floats(Vec<c_float>),
    Str(CString),
}

#[derive(Default)]
pub(crate) struct FakeState {
    pub fail_initialize: bool,
    pub fail_mesh: bool,
    pub detected: c_int,
    pub global_error: Option<String>,
    pub hmd_error: Option<String>,
    pub latency_color: Option<[u8; 3]>,
    pub latency_result: String,

    pub initialize_calls: usize,
    pub shutdown_calls: usize,
    pub live_hmds: usize,
    pub destroy_calls: usize,
    pub live_meshes: usize,
    pub recenter_calls: usize,
    pub enabled_caps: c_uint,
    pub tracking_caps: (c_uint, c_uint),
    pub rendering_api: Option<ovrRenderAPIType>,
    pub submitted_textures: [GLuint; 2],
    pub call_log: Vec<&'static str>,

    properties: HashMap<String, Property>,
    returned: Option<CString>,
}

thread_local! {
    static STATE: RefCell<FakeState> = RefCell::new(FakeState::default());
}

/// Start a test from a clean fake runtime.
pub(crate) fn reset() {
    STATE.with(|s| {
        *s.borrow_mut() = FakeState {
            global_error: Some("No HMD detected".into()),
            ..FakeState::default()
        }
    });
}

pub(crate) fn state<R>(f: impl FnOnce(&FakeState) -> R) -> R {
    STATE.with(|s| f(&s.borrow()))
}

pub(crate) fn state_mut<R>(f: impl FnOnce(&mut FakeState) -> R) -> R {
    STATE.with(|s| f(&mut s.borrow_mut()))
}

fn call<R>(name: &'static str, f: impl FnOnce(&mut FakeState) -> R) -> R {
    state_mut(|s| {
        s.call_log.push(name);
        f(s)
    })
}

/// Hand a string to the caller the way the SDK does: a pointer that stays
/// valid until the next string-returning call. `None` becomes "".
fn return_string(s: &mut FakeState, value: Option<&str>) -> *const c_char {
    let c = CString::new(value.unwrap_or("")).unwrap_or_default();
    s.returned.insert(c).as_ptr()
}

fn fov(up: f32, down: f32, left: f32, right: f32) -> ovrFovPort {
    ovrFovPort {
        UpTan: up,
        DownTan: down,
        LeftTan: left,
        RightTan: right,
    }
}

fn fixed_serial(serial: &str) -> [c_char; 24] {
    let mut buf = [0 as c_char; 24];
    for (dst, src) in buf.iter_mut().zip(serial.bytes().take(23)) {
        *dst = src as c_char;
    }
    buf
}

fn dk2_desc(hmd_type: ovrHmdType) -> ovrHmdDesc {
    let left = fov(1.3292863, 1.3292863, 1.0586576, 1.092368);
    let right = fov(1.3292863, 1.3292863, 1.092368, 1.0586576);
    ovrHmdDesc {
        Handle: std::ptr::null_mut(),
        Type: hmd_type,
        ProductName: b"Oculus Rift DK2\0".as_ptr() as *const c_char,
        Manufacturer: b"Oculus VR\0".as_ptr() as *const c_char,
        VendorId: 0x2833,
        ProductId: 0x0021,
        SerialNumber: fixed_serial("DEBUG-0001"),
        FirmwareMajor: 2,
        FirmwareMinor: 12,
        CameraFrustumHFovInRadians: 1.292,
        CameraFrustumVFovInRadians: 0.942,
        CameraFrustumNearZInMeters: 0.4,
        CameraFrustumFarZInMeters: 2.5,
        HmdCaps: ovrHmdCap_Present | ovrHmdCap_Available,
        TrackingCaps: DEVICE_TRACKING_CAPS,
        DistortionCaps: ovrDistortionCap_Chromatic
            | ovrDistortionCap_TimeWarp
            | ovrDistortionCap_Vignette
            | ovrDistortionCap_Overdrive,
        DefaultEyeFov: [left, right],
        MaxEyeFov: [left, right],
        EyeRenderOrder: [ovrEye_Left, ovrEye_Right],
        Resolution: ovrSizei { w: 1920, h: 1080 },
        WindowsPos: ovrVector2i { x: 0, y: 0 },
        DisplayDeviceName: std::ptr::null(),
        DisplayId: -1,
    }
}

fn open_hmd(s: &mut FakeState, hmd_type: ovrHmdType) -> ovrHmd {
    s.live_hmds += 1;
    Box::into_raw(Box::new(dk2_desc(hmd_type)))
}

fn identity() -> ovrMatrix4f {
    let mut m = ovrMatrix4f::default();
    for i in 0..4 {
        m.M[i][i] = 1.0;
    }
    m
}

fn eye_offset(eye: ovrEyeType) -> c_float {
    if eye == ovrEye_Left {
        0.032
    } else {
        -0.032
    }
}

fn render_desc(eye: ovrEyeType, fov: ovrFovPort) -> ovrEyeRenderDesc {
    ovrEyeRenderDesc {
        Eye: eye,
        Fov: fov,
        DistortedViewport: ovrRecti {
            Pos: ovrVector2i { x: eye * 960, y: 0 },
            Size: ovrSizei { w: 960, h: 1080 },
        },
        PixelsPerTanAngleAtCenter: ovrVector2f {
            x: PIXELS_PER_TAN_ANGLE,
            y: PIXELS_PER_TAN_ANGLE,
        },
        ViewAdjust: ovrVector3f {
            x: eye_offset(eye),
            y: 0.0,
            z: 0.0,
        },
    }
}

fn timing(frame_index: c_uint) -> ovrFrameTiming {
    let t = frame_index as c_double;
    ovrFrameTiming {
        DeltaSeconds: 1.0 / 75.0,
        ThisFrameSeconds: t,
        TimewarpPointSeconds: t + 0.010,
        NextFrameSeconds: t + 1.0 / 75.0,
        ScanoutMidpointSeconds: t + 0.020,
        EyeScanoutSeconds: [t + 0.015, t + 0.025],
    }
}

unsafe fn key(name: *const c_char) -> String {
    CStr::from_ptr(name).to_string_lossy().into_owned()
}

// -- API interface --

pub(crate) unsafe extern "C" fn ovr_InitializeRenderingShim() -> ovrBool {
    call("ovr_InitializeRenderingShim", |_| ovrTrue)
}

pub(crate) unsafe extern "C" fn ovr_Initialize() -> ovrBool {
    call("ovr_Initialize", |s| {
        s.initialize_calls += 1;
        if s.fail_initialize {
            ovrFalse
        } else {
            ovrTrue
        }
    })
}

pub(crate) unsafe extern "C" fn ovr_Shutdown() {
    call("ovr_Shutdown", |s| s.shutdown_calls += 1)
}

pub(crate) unsafe extern "C" fn ovr_GetVersionString() -> *const c_char {
    call("ovr_GetVersionString", |_| {
        b"libOVR:0.4.2\0".as_ptr() as *const c_char
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_Detect() -> c_int {
    call("ovrHmd_Detect", |s| s.detected)
}

pub(crate) unsafe extern "C" fn ovrHmd_Create(index: c_int) -> ovrHmd {
    call("ovrHmd_Create", |s| {
        if index < s.detected {
            open_hmd(s, ovrHmd_DK2)
        } else {
            std::ptr::null()
        }
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_CreateDebug(hmd_type: ovrHmdType) -> ovrHmd {
    call("ovrHmd_CreateDebug", |s| open_hmd(s, hmd_type))
}

pub(crate) unsafe extern "C" fn ovrHmd_Destroy(hmd: ovrHmd) {
    call("ovrHmd_Destroy", |s| {
        drop(Box::from_raw(hmd as *mut ovrHmdDesc));
        s.live_hmds -= 1;
        s.destroy_calls += 1;
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetLastError(hmd: ovrHmd) -> *const c_char {
    call("ovrHmd_GetLastError", |s| {
        let message = if hmd.is_null() {
            s.global_error.clone()
        } else {
            s.hmd_error.clone()
        };
        return_string(s, message.as_deref())
    })
}

#[cfg(windows)]
pub(crate) unsafe extern "C" fn ovrHmd_AttachToWindow(
    _hmd: ovrHmd,
    window: *mut std::ffi::c_void,
    _dest_mirror_rect: *const ovrRecti,
    _source_render_target_rect: *const ovrRecti,
) -> ovrBool {
    call("ovrHmd_AttachToWindow", |_| {
        if window.is_null() {
            ovrFalse
        } else {
            ovrTrue
        }
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetEnabledCaps(_hmd: ovrHmd) -> c_uint {
    call("ovrHmd_GetEnabledCaps", |s| s.enabled_caps)
}

pub(crate) unsafe extern "C" fn ovrHmd_SetEnabledCaps(_hmd: ovrHmd, caps: c_uint) {
    call("ovrHmd_SetEnabledCaps", |s| {
        s.enabled_caps = caps & ovrHmdCap_Writable_Mask
    })
}

// -- Tracking --

pub(crate) unsafe extern "C" fn ovrHmd_ConfigureTracking(
    _hmd: ovrHmd,
    supported: c_uint,
    required: c_uint,
) -> ovrBool {
    call("ovrHmd_ConfigureTracking", |s| {
        if required & !DEVICE_TRACKING_CAPS != 0 {
            s.hmd_error = Some("Required tracking caps unavailable".into());
            return ovrFalse;
        }
        s.tracking_caps = (supported, required);
        ovrTrue
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_RecenterPose(_hmd: ovrHmd) {
    call("ovrHmd_RecenterPose", |s| s.recenter_calls += 1)
}

pub(crate) unsafe extern "C" fn ovrHmd_GetTrackingState(
    _hmd: ovrHmd,
    abs_time: c_double,
) -> ovrTrackingState {
    call("ovrHmd_GetTrackingState", |_| {
        let mut state = ovrTrackingState::default();
        state.HeadPose.ThePose.Orientation.w = 1.0;
        state.HeadPose.TimeInSeconds = abs_time;
        state.CameraPose.Orientation.w = 1.0;
        state.LeveledCameraPose.Orientation.w = 1.0;
        state.StatusFlags = ovrStatus_OrientationTracked | ovrStatus_HmdConnected;
        state
    })
}

// -- Graphics setup --

pub(crate) unsafe extern "C" fn ovrHmd_GetFovTextureSize(
    _hmd: ovrHmd,
    _eye: ovrEyeType,
    fov: ovrFovPort,
    pixels_per_display_pixel: c_float,
) -> ovrSizei {
    call("ovrHmd_GetFovTextureSize", |_| {
        let scale = PIXELS_PER_TAN_ANGLE * pixels_per_display_pixel;
        ovrSizei {
            w: ((fov.LeftTan + fov.RightTan) * scale).round() as c_int,
            h: ((fov.UpTan + fov.DownTan) * scale).round() as c_int,
        }
    })
}

// -- SDK distortion rendering --

pub(crate) unsafe extern "C" fn ovrHmd_ConfigureRendering(
    _hmd: ovrHmd,
    api_config: *const ovrRenderAPIConfig,
    _distortion_caps: c_uint,
    eye_fov_in: *const ovrFovPort,
    eye_render_desc_out: *mut ovrEyeRenderDesc,
) -> ovrBool {
    call("ovrHmd_ConfigureRendering", |s| {
        if api_config.is_null() {
            s.rendering_api = None;
            return ovrTrue;
        }
        let api = (*api_config).Header.API;
        if api == ovrRenderAPI_D3D9 {
            return ovrFalse;
        }
        s.rendering_api = Some(api);
        for eye in 0..ovrEye_Count {
            *eye_render_desc_out.add(eye) = render_desc(eye as ovrEyeType, *eye_fov_in.add(eye));
        }
        ovrTrue
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_BeginFrame(_hmd: ovrHmd, frame_index: c_uint) -> ovrFrameTiming {
    call("ovrHmd_BeginFrame", |_| timing(frame_index))
}

pub(crate) unsafe extern "C" fn ovrHmd_EndFrame(
    _hmd: ovrHmd,
    _render_pose: *const ovrPosef,
    eye_texture: *const ovrTexture,
) {
    // The GL renderer reinterprets each texture as the ovrGLTexture union.
    let eye_texture = eye_texture.cast::<ovrGLTexture>();
    call("ovrHmd_EndFrame", |s| {
        for eye in 0..ovrEye_Count {
            let texture = &*eye_texture.add(eye);
            s.submitted_textures[eye] = if texture.Texture.Header.API == ovrRenderAPI_OpenGL {
                texture.OGL.TexId
            } else {
                0
            };
        }
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetEyePose(_hmd: ovrHmd, eye: ovrEyeType) -> ovrPosef {
    call("ovrHmd_GetEyePose", |_| ovrPosef {
        Orientation: ovrQuatf {
            w: 1.0,
            ..Default::default()
        },
        Position: ovrVector3f {
            x: eye_offset(eye),
            y: 0.0,
            z: 0.0,
        },
    })
}

// -- Client distortion rendering --

pub(crate) unsafe extern "C" fn ovrHmd_GetRenderDesc(
    _hmd: ovrHmd,
    eye: ovrEyeType,
    fov: ovrFovPort,
) -> ovrEyeRenderDesc {
    call("ovrHmd_GetRenderDesc", |_| render_desc(eye, fov))
}

pub(crate) unsafe extern "C" fn ovrHmd_CreateDistortionMesh(
    _hmd: ovrHmd,
    _eye: ovrEyeType,
    _fov: ovrFovPort,
    _distortion_caps: c_uint,
    mesh_data: *mut ovrDistortionMesh,
) -> ovrBool {
    call("ovrHmd_CreateDistortionMesh", |s| {
        if s.fail_mesh {
            s.hmd_error = Some("Distortion mesh unavailable".into());
            return ovrFalse;
        }
        let corners = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];
        let vertices: Box<[ovrDistortionVertex]> = corners
            .iter()
            .map(|&(x, y)| ovrDistortionVertex {
                ScreenPosNDC: ovrVector2f { x, y },
                TimeWarpFactor: (y + 1.0) / 2.0,
                VignetteFactor: 1.0,
                TanEyeAnglesR: ovrVector2f { x, y },
                TanEyeAnglesG: ovrVector2f { x, y },
                TanEyeAnglesB: ovrVector2f { x, y },
            })
            .collect();
        let indices: Box<[c_ushort]> = vec![0, 1, 2, 2, 1, 3].into_boxed_slice();

        let mesh = &mut *mesh_data;
        mesh.VertexCount = vertices.len() as c_uint;
        mesh.IndexCount = indices.len() as c_uint;
        mesh.pVertexData = Box::into_raw(vertices) as *mut ovrDistortionVertex;
        mesh.pIndexData = Box::into_raw(indices) as *mut c_ushort;
        s.live_meshes += 1;
        ovrTrue
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_DestroyDistortionMesh(mesh_data: *mut ovrDistortionMesh) {
    call("ovrHmd_DestroyDistortionMesh", |s| {
        let mesh = &mut *mesh_data;
        if mesh.pVertexData.is_null() {
            return;
        }
        drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
            mesh.pVertexData,
            mesh.VertexCount as usize,
        )));
        drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
            mesh.pIndexData,
            mesh.IndexCount as usize,
        )));
        *mesh = ovrDistortionMesh::default();
        s.live_meshes -= 1;
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetRenderScaleAndOffset(
    _fov: ovrFovPort,
    texture_size: ovrSizei,
    render_viewport: ovrRecti,
    uv_scale_offset_out: *mut ovrVector2f,
) {
    call("ovrHmd_GetRenderScaleAndOffset", |_| {
        *uv_scale_offset_out = ovrVector2f {
            x: texture_size.w as c_float,
            y: texture_size.h as c_float,
        };
        *uv_scale_offset_out.add(1) = ovrVector2f {
            x: render_viewport.Pos.x as c_float,
            y: render_viewport.Pos.y as c_float,
        };
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetFrameTiming(_hmd: ovrHmd, frame_index: c_uint) -> ovrFrameTiming {
    call("ovrHmd_GetFrameTiming", |_| timing(frame_index))
}

pub(crate) unsafe extern "C" fn ovrHmd_BeginFrameTiming(
    _hmd: ovrHmd,
    frame_index: c_uint,
) -> ovrFrameTiming {
    call("ovrHmd_BeginFrameTiming", |_| timing(frame_index))
}

pub(crate) unsafe extern "C" fn ovrHmd_EndFrameTiming(_hmd: ovrHmd) {
    call("ovrHmd_EndFrameTiming", |_| ())
}

pub(crate) unsafe extern "C" fn ovrHmd_ResetFrameTiming(_hmd: ovrHmd, _frame_index: c_uint) {
    call("ovrHmd_ResetFrameTiming", |_| ())
}

pub(crate) unsafe extern "C" fn ovrHmd_GetEyeTimewarpMatrices(
    _hmd: ovrHmd,
    _eye: ovrEyeType,
    _render_pose: ovrPosef,
    twm_out: *mut ovrMatrix4f,
) {
    call("ovrHmd_GetEyeTimewarpMatrices", |_| {
        *twm_out = identity();
        *twm_out.add(1) = identity();
    })
}

// -- Stateless math --

pub(crate) unsafe extern "C" fn ovrMatrix4f_Projection(
    fov: ovrFovPort,
    znear: c_float,
    zfar: c_float,
    right_handed: ovrBool,
) -> ovrMatrix4f {
    call("ovrMatrix4f_Projection", |_| {
        let mut m = ovrMatrix4f::default();
        m.M[0] = [fov.UpTan, fov.DownTan, fov.LeftTan, fov.RightTan];
        m.M[2][2] = znear;
        m.M[2][3] = zfar;
        m.M[3][3] = right_handed as c_float;
        m
    })
}

pub(crate) unsafe extern "C" fn ovrMatrix4f_OrthoSubProjection(
    projection: ovrMatrix4f,
    ortho_scale: ovrVector2f,
    ortho_distance: c_float,
    eye_view_adjust_x: c_float,
) -> ovrMatrix4f {
    call("ovrMatrix4f_OrthoSubProjection", |_| {
        let mut m = projection;
        m.M[0] = [ortho_scale.x, ortho_scale.y, ortho_distance, eye_view_adjust_x];
        m
    })
}

pub(crate) unsafe extern "C" fn ovr_GetTimeInSeconds() -> c_double {
    static START: OnceLock<Instant> = OnceLock::new();
    call("ovr_GetTimeInSeconds", |_| {
        START.get_or_init(Instant::now).elapsed().as_secs_f64()
    })
}

pub(crate) unsafe extern "C" fn ovr_WaitTillTime(abs_time: c_double) -> c_double {
    call("ovr_WaitTillTime", |_| abs_time)
}

// -- Latency test --

pub(crate) unsafe extern "C" fn ovrHmd_ProcessLatencyTest(
    _hmd: ovrHmd,
    rgb_color_out: *mut c_uchar,
) -> ovrBool {
    call("ovrHmd_ProcessLatencyTest", |s| match s.latency_color {
        Some(rgb) => {
            std::ptr::copy_nonoverlapping(rgb.as_ptr(), rgb_color_out, 3);
            ovrTrue
        }
        None => ovrFalse,
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetLatencyTestResult(_hmd: ovrHmd) -> *const c_char {
    call("ovrHmd_GetLatencyTestResult", |s| {
        let result = s.latency_result.clone();
        return_string(s, Some(&result))
    })
}

// -- Health and safety warning --

pub(crate) unsafe extern "C" fn ovrHmd_GetHSWDisplayState(
    _hmd: ovrHmd,
    state: *mut ovrHSWDisplayState,
) {
    call("ovrHmd_GetHSWDisplayState", |_| {
        *state = ovrHSWDisplayState {
            Displayed: ovrTrue,
            StartTime: 1.0,
            DismissibleTime: 16.0,
        };
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_DismissHSWDisplay(_hmd: ovrHmd) -> ovrBool {
    call("ovrHmd_DismissHSWDisplay", |_| ovrFalse)
}

// -- Properties --

pub(crate) unsafe extern "C" fn ovrHmd_GetBool(
    _hmd: ovrHmd,
    name: *const c_char,
    default_val: ovrBool,
) -> ovrBool {
    call("ovrHmd_GetBool", |s| match s.properties.get(&key(name)) {
        Some(Property::Bool(v)) => *v,
        _ => default_val,
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_SetBool(_hmd: ovrHmd, name: *const c_char, value: ovrBool) -> ovrBool {
    call("ovrHmd_SetBool", |s| {
        s.properties.insert(key(name), Property::Bool(value));
        ovrTrue
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetInt(_hmd: ovrHmd, name: *const c_char, default_val: c_int) -> c_int {
    call("ovrHmd_GetInt", |s| match s.properties.get(&key(name)) {
        Some(Property::Int(v)) => *v,
        _ => default_val,
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_SetInt(_hmd: ovrHmd, name: *const c_char, value: c_int) -> ovrBool {
    call("ovrHmd_SetInt", |s| {
        s.properties.insert(key(name), Property::Int(value));
        ovrTrue
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetFloat(
    _hmd: ovrHmd,
    name: *const c_char,
    default_val: c_float,
) -> c_float {
    call("ovrHmd_GetFloat", |s| match s.properties.get(&key(name)) {
        Some(Property::Float(v)) => *v,
        _ => default_val,
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_SetFloat(_hmd: ovrHmd, name: *const c_char, value: c_float) -> ovrBool {
    call("ovrHmd_SetFloat", |s| {
        s.properties.insert(key(name), Property::Float(value));
        ovrTrue
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetFloatArray(
    _hmd: ovrHmd,
    name: *const c_char,
    values: *mut c_float,
    array_size: c_uint,
) -> c_uint {
    call("ovrHmd_GetFloatArray", |s| match s.properties.get(&key(name)) {
        Some(Property::Floats(stored)) => {
            let n = stored.len().min(array_size as usize);
            std::ptr::copy_nonoverlapping(stored.as_ptr(), values, n);
            n as c_uint
        }
        _ => 0,
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_SetFloatArray(
    _hmd: ovrHmd,
    name: *const c_char,
    values: *const c_float,
    array_size: c_uint,
) -> ovrBool {
    call("ovrHmd_SetFloatArray", |s| {
        let stored = std::slice::from_raw_parts(values, array_size as usize).to_vec();
        s.properties.insert(key(name), Property::Floats(stored));
        ovrTrue
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_GetString(
    _hmd: ovrHmd,
    name: *const c_char,
    default_val: *const c_char,
) -> *const c_char {
    call("ovrHmd_GetString", |s| match s.properties.get(&key(name)) {
        Some(Property::Str(v)) => v.as_ptr(),
        _ => default_val,
    })
}

pub(crate) unsafe extern "C" fn ovrHmd_SetString(
    _hmd: ovrHmd,
    name: *const c_char,
    value: *const c_char,
) -> ovrBool {
    call("ovrHmd_SetString", |s| {
        let name = key(name);
        // The active user is chosen by the service, not the application.
        if name == crate::properties::KEY_USER {
            return ovrFalse;
        }
        s.properties
            .insert(name, Property::Str(CStr::from_ptr(value).to_owned()));
        ovrTrue
    })
}
