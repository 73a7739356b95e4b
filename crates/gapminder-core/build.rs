// File: crates/gapminder-core/build.rs
// Summary: Windows link fixups for the Skia raster backend (font manager reads the registry).

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
