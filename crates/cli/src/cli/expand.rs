use ce_domain::config::{Config, OutputFormat};
use ce_domain::PlatformPathSyntax;

/// Build the report for `line`: the rendered table/JSON, or the
/// invalid-pattern sentinel. `json` overrides `output.format`.
pub fn render(config: &Config, line: &str, json: bool) -> String {
    let mut output = config.output.clone();
    if json {
        output.format = OutputFormat::Json;
    }
    ce_domain::report(line, &output, &PlatformPathSyntax)
}

/// Print the report for `line` to stdout.
///
/// Invalid lines print the sentinel and still succeed.
pub fn run(config: &Config, line: &str, json: bool) {
    tracing::debug!(json, "expanding cron line");
    let out = render(config, line, json);
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}
