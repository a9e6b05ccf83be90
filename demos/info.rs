//! Print the descriptor of the first HMD, or of a debug DK2 if none is attached.
//!
//! Usage: cargo run --example info
//! Set LIBOVR_PATH if the runtime is not on the loader path.

use libovr::{Context, Eye, HmdType};

fn main() {
    env_logger::init();

    let ctx = match Context::initialize() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Failed to initialize LibOVR: {}", e);
            std::process::exit(1);
        }
    };
    println!("Version:    {}", ctx.version_string());
    println!("Detected:   {}", ctx.detect());

    let hmd = match ctx.detect() {
        0 => ctx.create_debug_hmd(HmdType::Dk2),
        _ => ctx.create_hmd(0),
    };
    let hmd = match hmd {
        Ok(hmd) => hmd,
        Err(e) => {
            eprintln!("Failed to open HMD: {}", e);
            std::process::exit(1);
        }
    };

    let desc = hmd.desc();
    println!("Product:    {} ({})", desc.product_name, desc.manufacturer);
    println!("Type:       {:?}", desc.hmd_type);
    println!("Serial:     {}", desc.serial_number);
    println!("Firmware:   {}.{}", desc.firmware_major, desc.firmware_minor);
    println!("Resolution: {}x{}", desc.resolution.w, desc.resolution.h);
    println!("Display:    {:?} (id {})", desc.display_device_name, desc.display_id);
    println!("HMD caps:   {:?}", desc.hmd_caps);
    println!("Tracking:   {:?}", desc.tracking_caps);
    println!("Distortion: {:?}", desc.distortion_caps);

    for eye in Eye::BOTH {
        let fov = desc.default_eye_fov[eye.index()];
        let size = hmd.fov_texture_size(eye, fov, 1.0);
        println!(
            "{:?} eye:   fov=[up {:.3}, down {:.3}, left {:.3}, right {:.3}]  target={}x{}",
            eye, fov.up_tan, fov.down_tan, fov.left_tan, fov.right_tan, size.w, size.h
        );
    }

    if let Some(e) = hmd.last_error() {
        println!("Last error: {}", e);
    }
}
