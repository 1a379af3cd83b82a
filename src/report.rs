use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::preview::Preview;

/// Outcome of checking a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Configured {
        name: String,
        length: usize,
        preview: Preview,
    },
    Missing {
        name: String,
        /// Settings file the key was looked up in, if any.
        settings_file: Option<PathBuf>,
    },
}

/// Builds the report for `config`. `settings_file` is the file the remediation
/// text points at; `None` means only the process environment was consulted.
pub fn check(config: &Config, settings_file: Option<&Path>) -> Report {
    match &config.api_key {
        // Non-Unicode values are measured in bytes
        Some(value) => match value.to_str() {
            Some(text) => Report::Configured {
                name: config.key_name.clone(),
                length: text.chars().count(),
                preview: Preview::of(text),
            },
            None => Report::Configured {
                name: config.key_name.clone(),
                length: value.len(),
                preview: Preview::NotUnicode,
            },
        },
        None => Report::Missing {
            name: config.key_name.clone(),
            settings_file: settings_file.map(Path::to_path_buf),
        },
    }
}

impl Report {
    pub fn is_configured(&self) -> bool {
        matches!(self, Report::Configured { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Report::Configured { name, .. } | Report::Missing { name, .. } => name,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Configured {
                name,
                length,
                preview,
            } => {
                writeln!(f, "✅ {} is set", name)?;
                writeln!(f, "   Length: {}", length)?;
                writeln!(f, "   Preview: {}", preview)
            }
            Report::Missing {
                name,
                settings_file,
            } => {
                writeln!(f, "❌ {} is not set", name)?;
                writeln!(f)?;
                writeln!(f, "To fix this:")?;
                match settings_file {
                    Some(path) => writeln!(
                        f,
                        "  1. Add {}=your-api-key-here to {}",
                        name,
                        path.display()
                    )?,
                    None => writeln!(
                        f,
                        "  1. Export {}=your-api-key-here in your shell",
                        name
                    )?,
                }
                writeln!(f, "  2. Restart the application so it picks up the new value")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn config(value: Option<&str>) -> Config {
        Config {
            key_name: "GEMINI_API_KEY".to_string(),
            api_key: value.map(OsString::from),
        }
    }

    #[test]
    fn test_missing_report_names_settings_file() {
        let report = check(&config(None), Some(Path::new("config/local.env")));
        assert!(!report.is_configured());
        let text = report.to_string();
        assert!(text.starts_with("❌"));
        assert!(text.contains("GEMINI_API_KEY=your-api-key-here to config/local.env"));
        assert!(text.contains("Restart"));
    }

    #[test]
    fn test_missing_report_without_settings_file() {
        let text = check(&config(None), None).to_string();
        assert!(text.contains("Export GEMINI_API_KEY=your-api-key-here in your shell"));
        assert!(!text.contains(".env"));
    }

    #[test]
    fn test_configured_report() {
        let report = check(&config(Some("abcdefghijklmnopqrstuvwxyz12345")), None);
        assert_eq!(report.name(), "GEMINI_API_KEY");
        let text = report.to_string();
        assert!(text.starts_with("✅"));
        assert!(text.contains("Length: 31"));
        assert!(text.contains("Preview: abcdefghij...12345"));
        assert!(!text.contains("abcdefghijklmnopqrstuvwxyz12345"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_reported_set() {
        use std::os::unix::ffi::OsStringExt;

        let config = Config {
            key_name: "GEMINI_API_KEY".to_string(),
            api_key: Some(OsString::from_vec(vec![b'k', b'e', b'y', 0xff])),
        };
        let report = check(&config, None);
        assert_eq!(
            report,
            Report::Configured {
                name: "GEMINI_API_KEY".to_string(),
                length: 4,
                preview: Preview::NotUnicode,
            }
        );
        assert!(report.to_string().contains("(hidden, not valid Unicode)"));
    }

    #[test]
    fn test_write_to_matches_display() {
        let report = check(&config(Some("short")), None);
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), report.to_string());
    }
}
