//! Converts newline-separated lines of text into a Python or R array
//! literal.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ArrayError {
    #[error("no text provided")]
    EmptyInput,
    #[error("unknown output format: {:?}", .0)]
    UnknownFormat(String),
}

/// Output dialect for [`to_array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayFormat {
    #[default]
    Python,
    R,
}

impl FromStr for ArrayFormat {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "r" => Ok(Self::R),
            _ => Err(ArrayError::UnknownFormat(s.to_string())),
        }
    }
}

/// Quotes one line for inclusion in the array, or `None` for lines
/// that are blank after trimming.
fn quotify(line: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }

    let mut quoted = String::with_capacity(line.len() + 2);
    if !line.starts_with('"') {
        quoted.push('"');
    }
    quoted.push_str(line);
    if !line.ends_with('"') {
        quoted.push('"');
    }
    Some(quoted)
}

/// Converts lines of text into a Python or R array literal.
///
/// A first line of the form `/python` or `/R` (any case) selects the
/// output format and is consumed; every other `/…` directive is an
/// error. Without a directive, `default_format` applies. Blank lines
/// are skipped, and each kept line gains surrounding quotes where they
/// are missing.
pub fn to_array(text: &str, default_format: ArrayFormat) -> Result<String, ArrayError> {
    if text.is_empty() {
        return Err(ArrayError::EmptyInput);
    }

    let mut lines = text.split('\n');
    let mut first = lines.next();

    let format = match first {
        Some(line) if line.starts_with('/') => {
            first = None;
            line[1..].parse::<ArrayFormat>()?
        }
        _ => default_format,
    };

    let items: Vec<String> = first.into_iter().chain(lines).filter_map(quotify).collect();
    let body = items.join(",");

    Ok(match format {
        ArrayFormat::Python => format!("[{body}]"),
        ArrayFormat::R => format!("c({body})"),
    })
}
