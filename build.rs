use std::env;

fn main() {
    // Only set for target builds. Host test builds have no linker script.
    if let Ok(linker_file) = env::var("LINKER_FILE") {
        // Tells Cargo to run again if the file or directory at $path changes.
        println!("cargo:rerun-if-changed={}", linker_file);
    }
}
