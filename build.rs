//! Stamps the binary with the commit it was built from and when.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let commit = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let built_on = chrono::Utc::now().format("%Y-%m-%d").to_string();

    println!("cargo:rustc-env=IRONCORE_COMMIT={}", commit);
    println!("cargo:rustc-env=IRONCORE_BUILT_ON={}", built_on);
    println!(
        "cargo:rustc-env=IRONCORE_PROFILE={}",
        env::var("PROFILE").unwrap_or_default()
    );
    println!(
        "cargo:rustc-env=IRONCORE_TARGET={}",
        env::var("TARGET").unwrap_or_default()
    );
}
