use std::env;
use std::fs;
use std::path::PathBuf;

/// Forward an optional build-time setting, falling back to `default`.
fn forward_env(name: &str, default: &str) {
    println!("cargo:rerun-if-env-changed={}", name);
    if let Ok(value) = env::var(name) {
        println!("cargo:rustc-env={}={}", name, value);
        println!("cargo:warning=Using {} from environment: {}", name, value);
    } else {
        println!("cargo:rustc-env={}={}", name, default);
    }
}

fn main() {
    // Metronome parameters (optional)
    // Values are clamped to their supported range at startup
    forward_env("TAP_PULSE_MS", "50");
    forward_env("TAP_DEBOUNCE_MS", "200");

    // Linker script only matters for the embedded target
    let target = env::var("TARGET").unwrap_or_default();
    if !target.starts_with("thumbv8m") {
        return;
    }

    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    fs::write(out.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
