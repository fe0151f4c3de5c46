/// Interactive y/n confirmation before batch writes.
use std::io::{self, BufRead, Write};

use tracing::debug;

/// Ask `prompt` on stderr and read the answer from stdin.
#[must_use]
pub fn confirm(prompt: &str) -> bool {
    confirm_with(prompt, &mut io::stdin().lock(), &mut io::stderr())
}

/// Write `prompt` to `out`, read one line from `input`.
///
/// `y` or `yes` (any case, surrounding whitespace ignored) is affirmative.
/// Anything else, including EOF or a read error, is a refusal.
#[must_use]
pub fn confirm_with<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> bool {
    let _ = write!(out, "{prompt} [y/N]: ");
    let _ = out.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {
            debug!("stdin closed before an answer was given");
            false
        }
        Ok(_) => {
            let answer = line.trim().to_lowercase();
            answer == "y" || answer == "yes"
        }
        Err(err) => {
            debug!("failed to read confirmation: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> bool {
        let mut out = Vec::new();
        confirm_with("Continue?", &mut input.as_bytes(), &mut out)
    }

    #[test]
    fn test_accepts_yes_variants() {
        assert!(ask("y\n"));
        assert!(ask("YES\n"));
        assert!(ask("  Yes  \n"));
    }

    #[test]
    fn test_rejects_everything_else() {
        assert!(!ask("n\n"));
        assert!(!ask("\n"));
        assert!(!ask("yep\n"));
        assert!(!ask(""));
    }

    #[test]
    fn test_prompt_is_written() {
        let mut out = Vec::new();
        assert!(confirm_with("Continue?", &mut "y\n".as_bytes(), &mut out));
        assert_eq!(String::from_utf8(out).unwrap(), "Continue? [y/N]: ");
    }
}
