use std::path::Path;
use std::process::Command;

/// Run git in the workspace root, returning trimmed stdout on success.
fn git(repo_root: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo_root).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo_root = Path::new(&manifest_dir).join("..");

    // e.g. "3f2c1ab" or "3f2c1ab-dirty"
    let build_id = git(&repo_root, &["describe", "--always", "--dirty", "--abbrev=7"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=DAYFLOW_BUILD_SHA={build_id}");

    let head = repo_root.join(".git").join("HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    }
}
