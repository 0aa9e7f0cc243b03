//! Math typesetting for the terminal: LaTeX-style notation to a Unicode approximation.
//!
//! `unicodeit` does the symbol, superscript and subscript conversion. Before
//! it runs, the source is checked for balanced braces and complete commands,
//! and the constructs it leaves alone (`\frac`, `\sqrt`, `\text`, sizing
//! commands, `\\` line breaks) are flattened.

/// Typesetting failure for one math span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("unbalanced braces")]
    UnbalancedBraces,
    #[error("trailing backslash")]
    DanglingBackslash,
    #[error("missing argument for {0}")]
    MissingArgument(String),
    #[error("unknown command \\{0}")]
    UnknownCommand(String),
}

/// Common fractions with a single-character form.
const VULGAR_FRACTIONS: &[(&str, &str, &str)] = &[
    ("1", "2", "½"),
    ("1", "3", "⅓"),
    ("2", "3", "⅔"),
    ("1", "4", "¼"),
    ("3", "4", "¾"),
    ("1", "5", "⅕"),
    ("1", "6", "⅙"),
    ("1", "8", "⅛"),
    ("3", "8", "⅜"),
    ("1", "10", "⅒"),
];

/// Render math source. Display mode keeps `\\` line breaks; inline mode turns
/// them into spaces. With `strict`, commands `unicodeit` does not know fail.
pub fn typeset(tex: &str, display: bool, strict: bool) -> Result<String, MathError> {
    let chars: Vec<char> = tex.chars().collect();
    let flat = Expander {
        chars: &chars,
        pos: 0,
        display,
    }
    .sequence(false)?;
    let converted: String = unicodeit::replace(&flat)
        .chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .collect();
    if strict && let Some(name) = leftover_command(&converted) {
        return Err(MathError::UnknownCommand(name));
    }
    Ok(converted
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// First `\name` that survived conversion.
fn leftover_command(s: &str) -> Option<String> {
    let at = s.find('\\')?;
    let name: String = s[at + 1..]
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    if name.is_empty() {
        leftover_command(&s[at + 1..])
    } else {
        Some(name)
    }
}

/// Checks structure and flattens the constructs `unicodeit` does not handle.
/// Everything else, including braces around script arguments, is passed on.
struct Expander<'a> {
    chars: &'a [char],
    pos: usize,
    display: bool,
}

impl Expander<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(|c| c == ' ') {
            self.pos += 1;
        }
    }

    /// Expand until end of input, or until the closing brace when `in_group`.
    fn sequence(&mut self, in_group: bool) -> Result<String, MathError> {
        let mut out = String::new();
        while let Some(c) = self.bump() {
            match c {
                '}' if in_group => return Ok(out),
                '}' => return Err(MathError::UnbalancedBraces),
                '{' => {
                    out.push('{');
                    out.push_str(&self.sequence(true)?);
                    out.push('}');
                }
                '\\' => out.push_str(&self.command()?),
                '^' | '_' => {
                    self.skip_spaces();
                    if self.peek().is_none_or(|c| c == '}') {
                        return Err(MathError::MissingArgument(c.to_string()));
                    }
                    out.push(c);
                }
                other => out.push(other),
            }
        }
        if in_group {
            Err(MathError::UnbalancedBraces)
        } else {
            Ok(out)
        }
    }

    /// A braced group or a single atom, expanded.
    fn argument(&mut self, owner: &str) -> Result<String, MathError> {
        self.skip_spaces();
        match self.bump() {
            None => Err(MathError::MissingArgument(format!("\\{}", owner))),
            Some('{') => self.sequence(true),
            Some('}') => Err(MathError::UnbalancedBraces),
            Some('\\') => self.command(),
            Some(c) => Ok(c.to_string()),
        }
    }

    fn command(&mut self) -> Result<String, MathError> {
        let Some(first) = self.bump() else {
            return Err(MathError::DanglingBackslash);
        };
        if !first.is_ascii_alphabetic() {
            return Ok(match first {
                '\\' if self.display => "\n".to_string(),
                '\\' | ',' | ':' | ';' | ' ' => " ".to_string(),
                '!' => String::new(),
                other => format!("\\{}", other),
            });
        }
        let mut name = first.to_string();
        while let Some(c) = self.peek().filter(char::is_ascii_alphabetic) {
            name.push(c);
            self.pos += 1;
        }
        match name.as_str() {
            "frac" | "dfrac" | "tfrac" => {
                let num = self.argument(&name)?;
                let den = self.argument(&name)?;
                Ok(fraction(&num, &den))
            }
            "sqrt" => {
                let arg = self.argument(&name)?;
                Ok(format!("√{}", grouped(&arg)))
            }
            "text" | "mathrm" | "mathit" | "mathsf" | "mathtt" | "operatorname" | "textbf"
            | "textit" => self.argument(&name),
            "left" | "right" | "big" | "Big" | "bigg" | "Bigg" | "displaystyle" | "limits" => {
                Ok(String::new())
            }
            _ => Ok(format!("\\{}", name)),
        }
    }
}

fn fraction(num: &str, den: &str) -> String {
    VULGAR_FRACTIONS
        .iter()
        .find(|(n, d, _)| *n == num.trim() && *d == den.trim())
        .map(|(_, _, glyph)| glyph.to_string())
        .unwrap_or_else(|| format!("{}/{}", grouped(num), grouped(den)))
}

/// Parenthesize anything longer than one plain word.
fn grouped(s: &str) -> String {
    let s = s.trim();
    if s.chars().all(char::is_alphanumeric) {
        s.to_string()
    } else {
        format!("({})", s)
    }
}
