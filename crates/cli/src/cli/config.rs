use std::collections::BTreeMap;

use ce_domain::config::{Config, ConfigError, ConfigSeverity};

/// Render the validation summary for `config` loaded from `config_path`.
///
/// Issues are grouped under their section (`output`, `logging`). The flag is
/// `false` when any issue has `Error` severity.
pub fn summarize(config: &Config, config_path: &str) -> (String, bool) {
    let issues = config.validate();
    let errors = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();

    let mut out = format!("config: {config_path}\n");
    if issues.is_empty() {
        out.push_str("no issues\n");
        return (out, true);
    }

    let mut sections: BTreeMap<&str, Vec<&ConfigError>> = BTreeMap::new();
    for issue in &issues {
        let section = issue.field.split('.').next().unwrap_or(&issue.field);
        sections.entry(section).or_default().push(issue);
    }
    for (section, issues) in sections {
        out.push_str(&format!("[{section}]\n"));
        for issue in issues {
            out.push_str(&format!("  {issue}\n"));
        }
    }
    out.push_str(&format!(
        "{errors} error(s), {} warning(s)\n",
        issues.len() - errors
    ));
    (out, errors == 0)
}

/// Print the summary; returns whether the config is usable.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let (summary, ok) = summarize(config, config_path);
    print!("{summary}");
    ok
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    let output = toml::to_string_pretty(config)
        .map_err(|e| anyhow::anyhow!("serializing config: {e}"))?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_issues() {
        let (summary, ok) = summarize(&Config::default(), "cron-expand.toml");
        assert!(ok);
        assert_eq!(summary, "config: cron-expand.toml\nno issues\n");
    }

    #[test]
    fn warnings_do_not_fail_validation() {
        let mut config = Config::default();
        config.output.label_width = 2;
        let (summary, ok) = summarize(&config, "cron-expand.toml");
        assert!(ok);
        assert!(summary.contains("[output]\n  [WARN] output.label_width"));
        assert!(summary.ends_with("0 error(s), 1 warning(s)\n"));
    }

    #[test]
    fn issues_are_grouped_by_section() {
        let mut config = Config::default();
        config.logging.level = "chatty".into();
        config.output.separator.clear();
        let (summary, ok) = summarize(&config, "/etc/cron-expand.toml");
        assert!(!ok);
        assert!(summary.starts_with("config: /etc/cron-expand.toml\n"));
        let logging = summary.find("[logging]").unwrap();
        let output = summary.find("[output]").unwrap();
        assert!(logging < output);
        assert!(summary.ends_with("2 error(s), 0 warning(s)\n"));
    }
}
