//! Platform config directory resolution.
//!
//! The file-backed adapters keep their files in one directory:
//! - Windows:  `%APPDATA%\EditorConfig`
//! - Linux:    `$XDG_CONFIG_HOME/editor-config` or `~/.config/editor-config`
//! - macOS:    `~/Library/Application Support/EditorConfig`

use std::path::PathBuf;

/// Resolves the platform config directory, or `None` when the relevant
/// environment variables are missing or the platform is unsupported.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("EditorConfig"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("editor-config"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("EditorConfig")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_named_for_this_application() {
        // May be None in a stripped container without HOME; that is acceptable.
        if let Some(dir) = config_dir() {
            let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            assert!(
                name == "editor-config" || name == "EditorConfig",
                "unexpected config dir name {name:?}"
            );
        }
    }
}
