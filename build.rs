#![allow(clippy::style)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const WIDTH_ENV_VAR: &str = "RUST_BCDINT_DEFAULT_WIDTH";
const DEFAULT_WIDTH: u32 = 32;

fn main() -> std::io::Result<()> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => PathBuf::from(outdir),
    };

    println!("cargo:rerun-if-env-changed=RUST_BCDINT_DEFAULT_WIDTH");

    let width = read_default_width();
    write_default_word(&outdir.join("default_word.rs"), width)
}

/// Width in bits requested through the environment, or 32
fn read_default_width() -> u32 {
    let value = match env::var(WIDTH_ENV_VAR) {
        Ok(value) => value,
        Err(_) => return DEFAULT_WIDTH,
    };

    match value.trim() {
        "8" => 8,
        "16" => 16,
        "32" => 32,
        "64" => 64,
        other => panic!("${} must be one of 8, 16, 32, 64 (got {:?})", WIDTH_ENV_VAR, other),
    }
}

/// Write the `DefaultWord` alias, leaving an identical file untouched
fn write_default_word(path: &Path, width: u32) -> std::io::Result<()> {
    let contents = format!(
        "/// Storage word used by [`DefaultBcd`] ({width} bits)\npub type DefaultWord = u{width};\n"
    );

    let unchanged = fs::read_to_string(path).map_or(false, |existing| existing == contents);
    if !unchanged {
        fs::write(path, contents)?;
    }

    println!("cargo:rerun-if-changed={}", path.display());
    Ok(())
}
