use ce_domain::PlatformPathSyntax;

/// One-line verdict for `line`: `valid`, or the first failure found.
pub fn verdict(line: &str) -> String {
    match ce_domain::validate_line(line, &PlatformPathSyntax) {
        Ok(_) => "valid".into(),
        Err(e) => format!("invalid: {e}"),
    }
}

/// Print the verdict for `line`. Always succeeds; the verdict is the result.
pub fn run(line: &str) {
    println!("{}", verdict(line));
}
