use std::path::Path;
use std::time::Duration;

use acc_lib::{AccError, CheckKind, Config};

/// Tracks which CLI flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct AnalyzeFlagSources {
    pub timeout: bool,
    pub checks: bool,
}

impl AnalyzeFlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            timeout: flag_present(args, "--timeout"),
            checks: flag_present(args, "--checks"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Merge CLI arguments into the loaded config, preferring CLI when flags are
/// present. The merged config is validated again.
pub fn resolve_analyze_config(
    cli_timeout: u64,
    cli_checks: Option<Vec<String>>,
    mut config: Config,
    flags: &AnalyzeFlagSources,
) -> Result<Config, AccError> {
    if flags.timeout {
        config.fetch.timeout = Duration::from_secs(cli_timeout);
    }
    if flags.checks {
        if let Some(checks) = cli_checks {
            config.checks.enabled = checks
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
        }
    }
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/acc/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, AccError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        AccError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        AccError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let checks = config
        .enabled_checks()
        .map(|kinds| {
            kinds
                .iter()
                .map(CheckKind::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_else(|_| config.checks.enabled.join(","));
    format!(
        "Effective config [{source}]: timeout={:?}, user_agent={:?}, checks={}",
        config.fetch.timeout,
        config.fetch.user_agent,
        checks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flag_present_matches_bare_and_assigned_forms() {
        let raw = args(&["acc", "analyze", "--timeout=5", "--checks", "alt"]);
        assert!(flag_present(&raw, "--timeout"));
        assert!(flag_present(&raw, "--checks"));
        assert!(!flag_present(&raw, "--format"));
        assert!(!flag_present(&args(&["--timeouts"]), "--timeout"));
    }

    #[test]
    fn resolve_prefers_config_when_flags_absent() {
        let mut cfg = Config::default();
        cfg.fetch.timeout = Duration::from_secs(4);
        cfg.checks.enabled = vec!["alt-text".into()];

        let resolved = resolve_analyze_config(
            10,
            Some(vec!["font-size".into()]),
            cfg,
            &AnalyzeFlagSources::default(),
        )
        .expect("valid config");

        assert_eq!(resolved.fetch.timeout, Duration::from_secs(4));
        assert_eq!(
            resolved.enabled_checks().expect("known checks"),
            vec![CheckKind::AltText]
        );
    }

    #[test]
    fn resolve_prefers_cli_when_flags_present() {
        let flags = AnalyzeFlagSources {
            timeout: true,
            checks: true,
        };
        let resolved = resolve_analyze_config(
            3,
            Some(vec![" color-contrast ".into(), "alt".into()]),
            Config::default(),
            &flags,
        )
        .expect("valid config");

        assert_eq!(resolved.fetch.timeout, Duration::from_secs(3));
        assert_eq!(
            resolved.enabled_checks().expect("known checks"),
            vec![CheckKind::AltText, CheckKind::ColorContrast]
        );
    }

    #[test]
    fn resolve_rejects_zero_timeout_and_unknown_checks() {
        let zero = resolve_analyze_config(
            0,
            None,
            Config::default(),
            &AnalyzeFlagSources {
                timeout: true,
                checks: false,
            },
        );
        assert!(zero.unwrap_err().to_string().contains("timeout"));

        let unknown = resolve_analyze_config(
            10,
            Some(vec!["headings".into()]),
            Config::default(),
            &AnalyzeFlagSources {
                timeout: false,
                checks: true,
            },
        );
        assert!(unknown
            .unwrap_err()
            .to_string()
            .contains("Unknown check: headings"));
    }

    #[test]
    fn load_config_wraps_read_failures() {
        let err = load_config(Some(Path::new("/definitely/not/here/acc.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn format_effective_config_includes_all_fields() {
        let summary = format_effective_config(&Config::default(), Some(Path::new("acc.toml")));
        assert!(summary.contains("acc.toml"));
        assert!(summary.contains("timeout=10s"));
        assert!(summary.contains("Mozilla/5.0"));
        assert!(summary.contains("checks=alt-text,font-size,color-contrast"));
    }
}
