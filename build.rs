use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=GENETICRACE_GIT_SHA");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    if let Ok(sha) = env::var("GENETICRACE_GIT_SHA") {
        if !sha.trim().is_empty() {
            println!("cargo:rustc-env=GENETICRACE_GIT_SHA={}", sha.trim());
            return;
        }
    }

    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();

    let sha = match output {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => String::new(),
    };

    // Always define the variable so env! resolves outside a git checkout
    let sha = if sha.is_empty() { "unknown".to_string() } else { sha };
    println!("cargo:rustc-env=GENETICRACE_GIT_SHA={}", sha);
}
