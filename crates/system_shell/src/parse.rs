//! Input-line tokenization for the terminal dispatcher.

/// One input line split into a command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    trimmed: &'a str,
    tokens: Vec<&'a str>,
    command: String,
}

impl<'a> ParsedLine<'a> {
    /// The input with leading and trailing whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        self.trimmed
    }

    /// Lowercased first token, or an empty string for blank input.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Tokens after the command name.
    pub fn args(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Whether the line held nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Text after the command name with its original spacing and case, trimmed.
    pub fn rest(&self) -> &'a str {
        match self.tokens.first() {
            Some(first) => self.trimmed[first.len()..].trim(),
            None => "",
        }
    }

    /// Lowercased tokens joined by single spaces; the key used for table lookups.
    pub fn lookup_key(&self) -> String {
        self.tokens.join(" ").to_lowercase()
    }
}

/// Trims `line` and splits it on whitespace.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let trimmed = line.trim();
    let tokens = trimmed.split_whitespace().collect::<Vec<_>>();
    let command = tokens
        .first()
        .map(|token| token.to_lowercase())
        .unwrap_or_default();
    ParsedLine {
        trimmed,
        tokens,
        command,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_and_args() {
        let parsed = parse_line("  Login   Alice Smith ");
        assert_eq!(parsed.trimmed(), "Login   Alice Smith");
        assert_eq!(parsed.command(), "login");
        assert_eq!(parsed.args(), &["Alice", "Smith"]);
        assert_eq!(parsed.rest(), "Alice Smith");
    }

    #[test]
    fn rest_keeps_inner_spacing() {
        let parsed = parse_line("cowsay  hello   world");
        assert_eq!(parsed.rest(), "hello   world");
    }

    #[test]
    fn lookup_key_collapses_whitespace_and_case() {
        assert_eq!(parse_line("  GIT   Status ").lookup_key(), "git status");
        assert_eq!(parse_line("skills --VISUAL").lookup_key(), "skills --visual");
    }

    #[test]
    fn unicode_whitespace_counts_as_empty() {
        let parsed = parse_line("\u{00a0}\u{2003}\t ");
        assert!(parsed.is_empty());
        assert_eq!(parsed.command(), "");
        assert_eq!(parsed.rest(), "");
        assert!(parsed.args().is_empty());
    }
}
