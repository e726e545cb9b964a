use std::env;
use std::fs;
use std::path::Path;

// Copies the workspace config.toml next to the compiled binary, so the
// backend finds it at runtime without caring where it was launched from.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => dir,
        Err(_) => return,
    };
    let profile = match env::var("PROFILE") {
        Ok(profile) => profile,
        Err(_) => return,
    };

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out;
    // walk up to target/<profile>
    let out_path = Path::new(&out_dir).to_path_buf();
    let Some(target_dir) = out_path.ancestors().find(|p| p.ends_with(&profile)) else {
        return;
    };

    let source = Path::new("../../config.toml");
    if source.exists() {
        let _ = fs::copy(source, target_dir.join("config.toml"));
    }
}
