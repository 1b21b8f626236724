use anyhow::{Result, Context};
use std::io::{self, BufRead, Write};

/// Prompt for a password on stdin. The input is echoed as typed.
pub fn read_password(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    read_password_from(&mut io::stdin().lock())
}

/// Read one line from `reader`, dropping only the line terminator so that
/// leading or trailing spaces stay part of the password
pub fn read_password_from<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut input = String::new();
    reader.read_line(&mut input).context("Failed to read password")?;

    Ok(input.trim_end_matches(['\n', '\r']).to_string())
}

/// Status marker used in human-readable output
pub fn status_marker(ok: bool) -> &'static str {
    if ok { "✅" } else { "❌" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_password_keeps_spaces() {
        let mut input = Cursor::new(" P@ss word \r\nignored\n");
        assert_eq!(read_password_from(&mut input).unwrap(), " P@ss word ");
    }

    #[test]
    fn test_read_password_empty_input() {
        let mut input = Cursor::new("");
        assert_eq!(read_password_from(&mut input).unwrap(), "");
    }
}
