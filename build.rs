use std::{env, path::PathBuf};

fn main() {
    // 1) Linker scripts for the ESP32 firmware build
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("xtensa-esp32-") {
        println!("cargo:rustc-link-arg=-Tlinkall.x");
        if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
            println!("cargo:rustc-link-arg=-Tdefmt.x");
        }
    }

    // 2) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".matcher.env");

    // 3) Provide fallbacks so the firmware compiles without .env
    let cycle_period_ms = env_or_default("CYCLE_PERIOD_MS", "1000");
    if cycle_period_ms.is_empty() || !cycle_period_ms.bytes().all(|byte| byte.is_ascii_digit()) {
        panic!("CYCLE_PERIOD_MS must be a whole number of milliseconds, got {cycle_period_ms:?}");
    }

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=CYCLE_PERIOD_MS={cycle_period_ms}");

    println!("cargo:rerun-if-env-changed=CYCLE_PERIOD_MS");
    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let Some(home) = env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) else {
        return;
    };
    let _ = dotenvy::from_path(PathBuf::from(home).join(file));
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
