use std::env;
use std::fs;
use std::path::Path;

// Bakes settings from a local .env into the binary as compile-time env vars
// (picked up through option_env!, see src/utils/constants.rs). Values already
// present in the real environment win over the file.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=no .env found, building with the localhost backend URL");
        return;
    }

    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
