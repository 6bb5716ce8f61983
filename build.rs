use std::path::PathBuf;

fn main() {
    // Tell Cargo to re-run this build script if the plugin registry changes
    println!("cargo:rerun-if-changed=registry/");

    // The registry directory is embedded using include_dir! in the loader;
    // make sure it exists even in a fresh checkout
    let registry_path = PathBuf::from("registry");
    if !registry_path.exists() {
        std::fs::create_dir_all(&registry_path)
            .expect("Failed to create registry directory");
    }
}
