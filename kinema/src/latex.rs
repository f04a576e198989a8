//! LaTeX subset to Unicode
//!
//! Handles what the built-in formulas use plus a little more: `\vec`,
//! `\text`, `\frac`, sub/superscripts, Greek letters and a few operators.
//! `$` delimiters are dropped and spacing is kept as written.

use kinema_core::KinemaError;
use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

/// Combining right arrow above, drawn over the preceding glyph
pub const COMBINING_ARROW: char = '\u{20D7}';

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatexError {
    #[error("unclosed '{{' at offset {position}")]
    UnclosedGroup { position: usize },

    #[error("unexpected '}}' at offset {position}")]
    UnexpectedClose { position: usize },

    #[error("unknown command \\{0}")]
    UnknownCommand(String),

    #[error("\\{0} is missing an argument")]
    MissingArgument(String),
}

impl From<LatexError> for KinemaError {
    fn from(err: LatexError) -> Self {
        KinemaError::latex(err.to_string())
    }
}

/// Convert a `$`-delimited LaTeX string to plain Unicode
pub fn to_unicode(latex: &str) -> Result<String, LatexError> {
    Parser { chars: latex.char_indices().peekable() }.sequence(None)
}

/// Columns the text occupies on a terminal (combining marks take none)
pub fn display_width(text: &str) -> usize {
    text.chars().filter(|c| !is_combining(*c)).count()
}

/// Split text into glyphs: a base character plus any combining marks
pub fn glyphs(text: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if is_combining(c) {
            continue;
        }
        if let Some(s) = start {
            out.push(&text[s..i]);
        }
        start = Some(i);
    }
    if let Some(s) = start {
        out.push(&text[s..]);
    }
    out
}

fn is_combining(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{20D0}'..='\u{20FF}')
}

struct Parser<'s> {
    chars: Peekable<CharIndices<'s>>,
}

impl Parser<'_> {
    /// Read until the end of input (top level) or the `}` closing the
    /// group opened at `open`.
    fn sequence(&mut self, open: Option<usize>) -> Result<String, LatexError> {
        let mut out = String::new();
        while let Some((pos, c)) = self.chars.next() {
            match c {
                '}' => {
                    return match open {
                        Some(_) => Ok(out),
                        None => Err(LatexError::UnexpectedClose { position: pos }),
                    };
                }
                '{' => out.push_str(&self.sequence(Some(pos))?),
                '$' => {}
                '\\' => out.push_str(&self.command()?),
                '_' => {
                    let arg = self.argument("_")?;
                    out.push_str(&script(&arg, Script::Sub));
                }
                '^' => {
                    let arg = self.argument("^")?;
                    out.push_str(&script(&arg, Script::Super));
                }
                c => out.push(c),
            }
        }
        match open {
            Some(position) => Err(LatexError::UnclosedGroup { position }),
            None => Ok(out),
        }
    }

    /// One argument: a braced group, a command, or a single character
    fn argument(&mut self, command: &str) -> Result<String, LatexError> {
        while matches!(self.chars.peek(), Some((_, ' '))) {
            self.chars.next();
        }
        match self.chars.next() {
            Some((pos, '{')) => self.sequence(Some(pos)),
            Some((_, '\\')) => self.command(),
            Some((pos, '}')) => Err(LatexError::UnexpectedClose { position: pos }),
            Some((_, c)) => Ok(c.to_string()),
            None => Err(LatexError::MissingArgument(command.to_string())),
        }
    }

    /// A command, with the backslash already consumed
    fn command(&mut self) -> Result<String, LatexError> {
        let mut name = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            name.push(c);
            self.chars.next();
        }

        if name.is_empty() {
            return match self.chars.next() {
                Some((_, c @ ('{' | '}' | '_' | '^' | '$' | '%' | '&' | '#'))) => Ok(c.to_string()),
                Some((_, ',' | ':' | ';' | ' ' | '\\')) => Ok(" ".to_string()),
                Some((_, '!')) => Ok(String::new()),
                Some((_, c)) => Err(LatexError::UnknownCommand(c.to_string())),
                None => Err(LatexError::MissingArgument(String::new())),
            };
        }

        match name.as_str() {
            "vec" => {
                let arg = self.argument(&name)?;
                Ok(format!("{}{}", arg, COMBINING_ARROW))
            }
            "text" | "mathrm" | "mathit" | "mathbf" | "operatorname" => self.argument(&name),
            "frac" => {
                let numerator = self.argument(&name)?;
                let denominator = self.argument(&name)?;
                Ok(format!("{}/{}", numerator, denominator))
            }
            "quad" => Ok("  ".to_string()),
            other => symbol(other)
                .map(str::to_string)
                .ok_or_else(|| LatexError::UnknownCommand(other.to_string())),
        }
    }
}

fn symbol(name: &str) -> Option<&'static str> {
    SYMBOLS.iter().find(|(n, _)| *n == name).map(|(_, s)| *s)
}

static SYMBOLS: &[(&str, &str)] = &[
    ("alpha", "α"), ("beta", "β"), ("gamma", "γ"), ("delta", "δ"),
    ("epsilon", "ε"), ("varepsilon", "ε"), ("zeta", "ζ"), ("eta", "η"),
    ("theta", "θ"), ("iota", "ι"), ("kappa", "κ"), ("lambda", "λ"),
    ("mu", "μ"), ("nu", "ν"), ("xi", "ξ"), ("pi", "π"), ("rho", "ρ"),
    ("sigma", "σ"), ("tau", "τ"), ("upsilon", "υ"), ("phi", "φ"),
    ("varphi", "φ"), ("chi", "χ"), ("psi", "ψ"), ("omega", "ω"),
    ("Gamma", "Γ"), ("Delta", "Δ"), ("Theta", "Θ"), ("Lambda", "Λ"),
    ("Xi", "Ξ"), ("Pi", "Π"), ("Sigma", "Σ"), ("Upsilon", "Υ"),
    ("Phi", "Φ"), ("Psi", "Ψ"), ("Omega", "Ω"),
    ("cdot", "·"), ("times", "×"), ("pm", "±"), ("approx", "≈"),
    ("neq", "≠"), ("leq", "≤"), ("geq", "≥"), ("infty", "∞"),
    ("partial", "∂"), ("nabla", "∇"), ("sum", "∑"), ("int", "∫"),
    ("to", "→"), ("rightarrow", "→"),
];

#[derive(Clone, Copy)]
enum Script {
    Sub,
    Super,
}

/// Render as Unicode sub/superscript if every character has a form,
/// otherwise as `_(..)` / `^(..)`.
fn script(text: &str, kind: Script) -> String {
    let map: fn(char) -> Option<char> = match kind {
        Script::Sub => subscript,
        Script::Super => superscript,
    };
    match text.chars().map(map).collect::<Option<String>>() {
        Some(converted) => converted,
        None => match kind {
            Script::Sub => format!("_({})", text),
            Script::Super => format!("^({})", text),
        },
    }
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0'..='9' => char::from_u32('₀' as u32 + (c as u32 - '0' as u32))?,
        '+' => '₊', '-' => '₋', '=' => '₌', '(' => '₍', ')' => '₎',
        'a' => 'ₐ', 'e' => 'ₑ', 'h' => 'ₕ', 'i' => 'ᵢ', 'j' => 'ⱼ',
        'k' => 'ₖ', 'l' => 'ₗ', 'm' => 'ₘ', 'n' => 'ₙ', 'o' => 'ₒ',
        'p' => 'ₚ', 'r' => 'ᵣ', 's' => 'ₛ', 't' => 'ₜ', 'u' => 'ᵤ',
        'v' => 'ᵥ', 'x' => 'ₓ',
        _ => return None,
    })
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³',
        '4'..='9' => char::from_u32('⁴' as u32 + (c as u32 - '4' as u32))?,
        '+' => '⁺', '-' => '⁻', '=' => '⁼', '(' => '⁽', ')' => '⁾',
        'i' => 'ⁱ', 'n' => 'ⁿ',
        _ => return None,
    })
}
