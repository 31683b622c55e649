fn main() {
    // CI sets TODO_TUI_VERSION (e.g., "version-abc1234"); otherwise derive from git.
    if let Ok(version) = std::env::var("TODO_TUI_VERSION") {
        println!("cargo:rustc-env=TODO_TUI_VERSION={version}");
    } else {
        let hash = std::process::Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .unwrap_or_default()
            .trim()
            .to_string();

        if hash.is_empty() {
            println!(
                "cargo:rustc-env=TODO_TUI_VERSION={}",
                std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "dev".to_string())
            );
        } else {
            println!("cargo:rustc-env=TODO_TUI_VERSION=version-{hash}");
        }
    }
}
