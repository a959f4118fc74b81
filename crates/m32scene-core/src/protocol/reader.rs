use std::sync::LazyLock;

use regex::Regex;

use super::layout;

/// Signed decimal number (`12`, `-3.5`, `+.5`).
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)").expect("number pattern is valid")
});

/// Number that may carry k-notation (`101`, `+0.0`, `1k20`).
static NUMERIC_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?\d+(?:[.kK]\d*)?").expect("numeric field pattern is valid")
});

static CONFIG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"config\s+"([^"]*)""#).expect("config pattern is valid")
});

/// Whitespace-tokenized view of a single protocol line.
pub(crate) struct LineReader<'a> {
    line: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> LineReader<'a> {
    pub fn new(line: &'a str) -> Self {
        let line = line.trim();
        Self {
            line,
            tokens: line.split_whitespace().collect(),
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn path(&self) -> &'a str {
        self.tokens.first().copied().unwrap_or("")
    }

    /// Argument `index` after the path token (0-based).
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index + 1).copied()
    }

    pub fn args(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Everything after the path token.
    pub fn rest(&self) -> &'a str {
        self.line
            .get(self.path().len()..)
            .map(str::trim_start)
            .unwrap_or("")
    }

    pub fn has_arg(&self, token: &str) -> bool {
        self.args().contains(&token)
    }

    pub fn has_on(&self) -> bool {
        self.has_arg(layout::ON)
    }

    pub fn config_name(&self) -> Option<&'a str> {
        CONFIG_NAME_RE
            .captures(self.line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Numeric fields of the arguments in line order, k-notation included.
    pub fn numeric_fields(&self) -> Vec<&'a str> {
        NUMERIC_FIELD_RE
            .find_iter(self.rest())
            .map(|m| m.as_str())
            .collect()
    }
}

/// First substring enclosed in double quotes.
pub(crate) fn first_quoted(text: &str) -> Option<&str> {
    let start = text.find('"')? + 1;
    let len = text[start..].find('"')?;
    Some(&text[start..start + len])
}

pub(crate) fn first_number(text: &str) -> Option<&str> {
    NUMBER_RE.find(text).map(|m| m.as_str())
}
