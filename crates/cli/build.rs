// Build script for Reggy CLI crate
//
// Exposes target and build metadata to the `--version` output.

fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let target_arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    println!("cargo:rustc-env=REGGY_TARGET_OS={}", target_os);
    println!("cargo:rustc-env=REGGY_TARGET_ARCH={}", target_arch);

    println!(
        "cargo:rustc-env=REGGY_BUILD_DATE={}",
        chrono::Utc::now().format("%Y-%m-%d")
    );

    // Git info for CLI version
    if let Ok(output) = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        if output.status.success() {
            let commit_hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
            println!("cargo:rustc-env=REGGY_GIT_COMMIT={}", commit_hash);
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
}
