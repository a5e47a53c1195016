use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=tailwind.config.js");
    println!("cargo:rerun-if-changed=src/ui");

    // Regenerate the stylesheet with the locally installed Tailwind CLI.
    // Without it, the checked-in assets/tailwind.css is used as-is.
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    if !tailwind.exists() {
        return;
    }

    let output = Command::new(&tailwind)
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css", "--minify"])
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) => {
            if !output.status.success() {
                println!("cargo:warning=Failed to generate Tailwind CSS");
                println!(
                    "cargo:warning=STDERR: {}",
                    String::from_utf8_lossy(&output.stderr)
                );
            }
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }
}
