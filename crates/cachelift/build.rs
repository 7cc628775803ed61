use std::process::Command;

fn main() {
    let hash = capture("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=GIT_HASH={hash}");

    let built = capture("date", &["-u", "+%Y-%m-%d"]).unwrap_or_default();
    println!("cargo:rustc-env=BUILD_TIME={built}");

    println!("cargo:rerun-if-changed=../../.git/HEAD");
}

/// Trimmed stdout of a successful command, `None` if it failed or printed nothing.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
