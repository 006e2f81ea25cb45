use serde_json::{json, Value};

/// Build metadata captured by `build.rs` at compile time.
pub fn build_info() -> Value {
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "repo_version": env!("REPO_VERSION"),
        "build_profile": env!("BUILD_PROFILE"),
        "build_timestamp": env!("BUILD_TIMESTAMP"),
        "rust_version": env!("RUST_VERSION"),
    })
}

/// Log build info once at startup.
pub fn report_build_info() {
    tracing::info!(build_info = %build_info(), "build info");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_has_version() {
        let info = build_info();
        assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
        assert!(info["repo_version"].is_string());
    }
}
