//! Side channel for advisory warnings raised by rules.
use log::*;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Reporter {
    fn warn(&self, message: &str);
}

/// Reports warnings as GitHub Actions workflow commands so they show up as
/// annotations on the check run.
#[derive(Debug, Default)]
pub struct ActionsReporter;

impl Reporter for ActionsReporter {
    fn warn(&self, message: &str) {
        warn!("{message}");
        println!("{}", warning_command(message));
    }
}

/// Format `message` as a `::warning::` workflow command.
pub fn warning_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::warning::{escaped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_message() {
        assert_eq!(
            warning_command("Please only assign one person to a PR"),
            "::warning::Please only assign one person to a PR"
        );
    }

    #[test]
    fn escapes_newlines_and_percent() {
        assert_eq!(warning_command("100%\nsure"), "::warning::100%25%0Asure");
    }
}
