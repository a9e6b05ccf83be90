//! Typed access to the SDK's user-profile and device properties.
//!
//! Every call passes the live device handle and `CString`s that outlive it.

use crate::hmd::Hmd;
use crate::types::{from_ovr_bool, to_ovr_bool};
use crate::Result;
use std::ffi::CString;

pub const KEY_USER: &str = "User";
pub const KEY_NAME: &str = "Name";
pub const KEY_GENDER: &str = "Gender";
pub const KEY_PLAYER_HEIGHT: &str = "PlayerHeight";
pub const KEY_EYE_HEIGHT: &str = "EyeHeight";
pub const KEY_IPD: &str = "IPD";
pub const KEY_NECK_TO_EYE_DISTANCE: &str = "NeckEyeDistance";

pub const DEFAULT_GENDER: &str = "Unknown";
/// Meters.
pub const DEFAULT_PLAYER_HEIGHT: f32 = 1.778;
pub const DEFAULT_EYE_HEIGHT: f32 = 1.675;
pub const DEFAULT_IPD: f32 = 0.064;
pub const DEFAULT_NECK_TO_EYE_HORIZONTAL: f32 = 0.0805;
pub const DEFAULT_NECK_TO_EYE_VERTICAL: f32 = 0.075;
pub const DEFAULT_EYE_RELIEF_DIAL: i32 = 3;

impl Hmd<'_> {
    /// Read a boolean property, or `default` if it is not set.
    pub fn get_bool(&self, name: &str, default: bool) -> Result<bool> {
        let name = CString::new(name)?;
        let value = unsafe {
            (self.fns().ovrHmd_GetBool)(self.raw(), name.as_ptr(), to_ovr_bool(default))
        };
        Ok(from_ovr_bool(value))
    }

    /// Write a boolean property. Returns false if the property is read-only.
    pub fn set_bool(&self, name: &str, value: bool) -> Result<bool> {
        let name = CString::new(name)?;
        let ok =
            unsafe { (self.fns().ovrHmd_SetBool)(self.raw(), name.as_ptr(), to_ovr_bool(value)) };
        Ok(from_ovr_bool(ok))
    }

    pub fn get_int(&self, name: &str, default: i32) -> Result<i32> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.fns().ovrHmd_GetInt)(self.raw(), name.as_ptr(), default) })
    }

    pub fn set_int(&self, name: &str, value: i32) -> Result<bool> {
        let name = CString::new(name)?;
        let ok = unsafe { (self.fns().ovrHmd_SetInt)(self.raw(), name.as_ptr(), value) };
        Ok(from_ovr_bool(ok))
    }

    pub fn get_float(&self, name: &str, default: f32) -> Result<f32> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.fns().ovrHmd_GetFloat)(self.raw(), name.as_ptr(), default) })
    }

    pub fn set_float(&self, name: &str, value: f32) -> Result<bool> {
        let name = CString::new(name)?;
        let ok = unsafe { (self.fns().ovrHmd_SetFloat)(self.raw(), name.as_ptr(), value) };
        Ok(from_ovr_bool(ok))
    }

    /// Fill `values` from a float array property.
    ///
    /// Returns the number of elements written, at most `values.len()`.
    pub fn get_float_array(&self, name: &str, values: &mut [f32]) -> Result<usize> {
        let name = CString::new(name)?;
        let len = u32::try_from(values.len()).unwrap_or(u32::MAX);
        // SAFETY: the SDK writes at most `len` floats into `values`.
        let written = unsafe {
            (self.fns().ovrHmd_GetFloatArray)(self.raw(), name.as_ptr(), values.as_mut_ptr(), len)
        };
        Ok((written as usize).min(values.len()))
    }

    pub fn set_float_array(&self, name: &str, values: &[f32]) -> Result<bool> {
        let name = CString::new(name)?;
        let len = u32::try_from(values.len()).unwrap_or(u32::MAX);
        // SAFETY: the SDK reads `len` floats from `values`.
        let ok = unsafe {
            (self.fns().ovrHmd_SetFloatArray)(self.raw(), name.as_ptr(), values.as_ptr(), len)
        };
        Ok(from_ovr_bool(ok))
    }

    /// Read a string property, or `default` if it is not set.
    pub fn get_string(&self, name: &str, default: &str) -> Result<String> {
        let name = CString::new(name)?;
        let default_c = CString::new(default)?;
        // SAFETY: the returned pointer is either `default_c` or SDK-owned and
        // valid until the next property call; it is copied immediately.
        let value = unsafe {
            crate::error::string_from_ptr((self.fns().ovrHmd_GetString)(
                self.raw(),
                name.as_ptr(),
                default_c.as_ptr(),
            ))
        };
        Ok(value)
    }

    pub fn set_string(&self, name: &str, value: &str) -> Result<bool> {
        let name = CString::new(name)?;
        let value = CString::new(value)?;
        let ok = unsafe { (self.fns().ovrHmd_SetString)(self.raw(), name.as_ptr(), value.as_ptr()) };
        Ok(from_ovr_bool(ok))
    }
}
