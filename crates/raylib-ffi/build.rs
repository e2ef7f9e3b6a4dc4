use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=RAYLIB_LIB_DIR");
    println!("cargo:rerun-if-env-changed=RAYLIB_LIB_NAME");

    if env::var("CARGO_FEATURE_LINK_RAYLIB").is_err() {
        // Symbols are resolved from the host process when the shim is loaded.
        return;
    }

    if let Ok(dir) = env::var("RAYLIB_LIB_DIR") {
        if dir.is_empty() {
            panic!("RAYLIB_LIB_DIR is set but empty");
        }
        println!("cargo:rustc-link-search=native={dir}");
    }

    let name = env::var("RAYLIB_LIB_NAME").unwrap_or_else(|_| "raylib".to_string());
    let kind = if env::var("CARGO_FEATURE_STATIC_RAYLIB").is_ok() {
        "static"
    } else {
        "dylib"
    };
    println!("cargo:rustc-link-lib={kind}={name}");

    // A static raylib does not carry its own platform dependencies.
    if kind == "static" {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        let system_libs: &[&str] = match target_os.as_str() {
            "linux" => &["GL", "m", "pthread", "dl", "rt", "X11"],
            "windows" => &["opengl32", "gdi32", "winmm", "user32", "shell32"],
            "macos" => &[],
            other => panic!("static-raylib has no system library list for target os {other:?}"),
        };
        for lib in system_libs {
            println!("cargo:rustc-link-lib=dylib={lib}");
        }
        if target_os == "macos" {
            for framework in ["OpenGL", "Cocoa", "IOKit", "CoreVideo", "CoreAudio", "CoreFoundation"] {
                println!("cargo:rustc-link-lib=framework={framework}");
            }
        }
    }
}
