use std::{env, fs, path::PathBuf, process};

use swizzle::GeneratorConfig;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let config = GeneratorConfig::default()
        .mutable(env::var_os("CARGO_FEATURE_MUTABLE_SWIZZLE").is_some());

    let source = match swizzle::generate(&config) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("swizzle generation failed: {}", e);
            process::exit(1);
        }
    };

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    if let Err(e) = fs::write(out.join("swizzle_impl.rs"), source) {
        eprintln!("could not write swizzle_impl.rs: {}", e);
        process::exit(1);
    }
}
