use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Flags that may come from an rc file or the command line.
///
/// Both sources parse to the same shape and merge with [`ConfigFlags::union`],
/// command line winning for valued options.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub preview: bool,
    pub no_preview: bool,
    pub no_chrome: bool,
    pub split: Option<u16>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            preview: self.preview || other.preview,
            no_preview: self.no_preview || other.no_preview,
            no_chrome: self.no_chrome || other.no_chrome,
            split: other.split.or(self.split),
        }
    }

    /// Whether the preview pane starts visible. `--no-preview` wins over
    /// `--preview` when both survive the merge; the default is visible.
    pub fn preview_visible(&self) -> bool {
        !self.no_preview
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("inkpad").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("inkpad")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("inkpad").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("inkpad")
                .join("config");
        }
    }

    PathBuf::from(".inkpadrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".inkpadrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# inkpad defaults (saved with --save)".to_string());
    if flags.preview {
        lines.push("--preview".to_string());
    }
    if flags.no_preview {
        lines.push("--no-preview".to_string());
    }
    if flags.no_chrome {
        lines.push("--no-chrome".to_string());
    }
    if let Some(split) = flags.split {
        lines.push(format!("--split {split}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--preview" {
            flags.preview = true;
        } else if token == "--no-preview" {
            flags.no_preview = true;
        } else if token == "--no-chrome" {
            flags.no_chrome = true;
        } else if token == "--split" {
            if let Some(next) = tokens.get(i + 1) {
                flags.split = parse_split(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--split=") {
            flags.split = parse_split(value);
        }
        i += 1;
    }
    flags
}

// Splitter position as a percentage; clamped later to the pane minimum.
fn parse_split(s: &str) -> Option<u16> {
    s.parse::<u16>().ok().filter(|pct| *pct <= 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "inkpad".to_string(),
            "--no-chrome".to_string(),
            "--split".to_string(),
            "60".to_string(),
            "--preview".to_string(),
            "NOTES.md".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.preview);
        assert!(flags.no_chrome);
        assert_eq!(flags.split, Some(60));
        assert!(!flags.no_preview);
    }

    #[test]
    fn test_parse_split_rejects_out_of_range() {
        let flags = parse_flag_tokens(&["--split=140".to_string()]);
        assert_eq!(flags.split, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_chrome: true,
            split: Some(40),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            no_preview: true,
            split: Some(70),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_chrome);
        assert!(merged.no_preview);
        assert_eq!(merged.split, Some(70));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".inkpadrc");
        let flags = ConfigFlags {
            preview: true,
            no_chrome: true,
            split: Some(35),
            ..ConfigFlags::default()
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }
}
