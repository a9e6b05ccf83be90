//! # libovr - Rust binding for the Oculus LibOVR 0.4 C API
//!
//! The runtime library is loaded at run time, so nothing links against the SDK
//! at build time. Provides:
//! - SDK lifecycle, HMD detection and debug (virtual) HMDs
//! - Head tracking, frame timing and timewarp
//! - SDK and client distortion rendering setup (OpenGL)
//! - Latency tester, health and safety warning, user profile properties
//!
//! ## Quick Start
//! ```no_run
//! use libovr::{Context, Eye, HmdType, TrackingCaps};
//!
//! let ctx = Context::initialize().unwrap();
//! let hmd = match ctx.detect() {
//!     0 => ctx.create_debug_hmd(HmdType::Dk2).unwrap(),
//!     _ => ctx.create_hmd(0).unwrap(),
//! };
//! println!("{} ({})", hmd.desc().product_name, hmd.desc().serial_number);
//!
//! hmd.configure_tracking(
//!     TrackingCaps::ORIENTATION | TrackingCaps::MAG_YAW_CORRECTION | TrackingCaps::POSITION,
//!     TrackingCaps::empty(),
//! )
//! .unwrap();
//! let state = hmd.tracking_state(ctx.time_in_seconds());
//! println!("head: {:?}", state.head_pose.pose);
//!
//! let fov = hmd.desc().default_eye_fov[Eye::Left.index()];
//! println!("left eye target: {:?}", hmd.fov_texture_size(Eye::Left, fov, 1.0));
//! ```
//!
//! Set `LIBOVR_PATH` to load the runtime from a specific file.

pub mod error;
pub mod sys;
pub mod library;
pub mod types;
pub mod context;
pub mod hmd;
pub mod render;
pub mod properties;

#[cfg(test)]
mod fake;

pub use error::OvrError;
pub use types::*;
pub use context::Context;
pub use hmd::Hmd;
pub use library::{Library, LIBRARY_PATH_ENV};
pub use render::{
    DistortionMesh, DistortionVertex, GlConfig, GlTexture, RenderApiConfig,
    RenderApiConfigHeader, Texture, TextureHeader,
};

/// Result type alias for LibOVR operations.
pub type Result<T> = std::result::Result<T, OvrError>;
