//! Poll head tracking from the first HMD and print the pose.
//!
//! Usage: cargo run --example tracking
//! Runs for ten seconds.

use libovr::{Context, StatusFlags, TrackingCaps};
use std::time::{Duration, Instant};

fn main() {
    env_logger::init();

    let ctx = match Context::initialize() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Failed to initialize LibOVR: {}", e);
            std::process::exit(1);
        }
    };

    let hmd = match ctx.create_hmd(0) {
        Ok(hmd) => hmd,
        Err(e) => {
            eprintln!("Failed to open HMD: {}", e);
            std::process::exit(1);
        }
    };
    println!("Tracking {} ({})", hmd.desc().product_name, hmd.desc().serial_number);

    let caps = TrackingCaps::ORIENTATION | TrackingCaps::MAG_YAW_CORRECTION | TrackingCaps::POSITION;
    if let Err(e) = hmd.configure_tracking(caps, TrackingCaps::empty()) {
        eprintln!("Failed to start tracking: {}", e);
        std::process::exit(1);
    }
    hmd.recenter_pose();

    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(10) {
        let state = hmd.tracking_state(ctx.time_in_seconds());
        let p = &state.head_pose.pose;
        println!(
            "t={:<10.4} pos=[{:+.4}, {:+.4}, {:+.4}]  quat=[{:+.3}, {:+.3}, {:+.3}, {:+.3}]  {}",
            state.head_pose.time_in_seconds,
            p.position.x, p.position.y, p.position.z,
            p.orientation.x, p.orientation.y, p.orientation.z, p.orientation.w,
            if state.status_flags.contains(StatusFlags::POSITION_TRACKED) {
                "pos"
            } else {
                "ori"
            },
        );
        std::thread::sleep(Duration::from_millis(100));
    }
}
