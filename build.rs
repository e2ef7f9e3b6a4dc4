use std::env;

fn main() {
    let linked = env::var("CARGO_FEATURE_LINK_RAYLIB").is_ok();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // Without link-raylib the cdylib leaves raylib's symbols for the host
    // process to provide. ELF allows that by default; Mach-O has to be told.
    if !linked && target_os == "macos" {
        println!("cargo:rustc-cdylib-link-arg=-Wl,-undefined,dynamic_lookup");
    }

    if !linked && target_os == "windows" {
        println!("cargo:warning=rlshim.dll needs raylib at link time on Windows; enable the link-raylib feature");
    }
}
