//! Output rendering.
//!
//! The default `java` format prints the entries as a `String[]` array
//! declaration ready to paste into source:
//!
//! ```text
//! String[] imageEntries = {
//!     "https://.../official-artwork/1.png",
//!     "https://.../official-artwork/2.png",
//! };
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::generate::ArtworkEntry;

/// Array variable name used when none is configured.
pub const DEFAULT_ARRAY_NAME: &str = "imageEntries";

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `String[] <name> = { ... };`
    #[default]
    Java,
    /// One image URL per line.
    Lines,
    /// `filename<TAB>image_url` per line.
    Manifest,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Java => "java",
            OutputFormat::Lines => "lines",
            OutputFormat::Manifest => "manifest",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown output format {0:?} (expected java, lines or manifest)")]
pub struct UnknownOutputFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "java" => Ok(OutputFormat::Java),
            "lines" => Ok(OutputFormat::Lines),
            "manifest" => Ok(OutputFormat::Manifest),
            other => Err(UnknownOutputFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{0:?} is not a valid array name")]
    InvalidArrayName(String),
}

/// Renders `entries` in `format`. Every line, including the last, ends in `\n`.
///
/// `array_name` is only used by [`OutputFormat::Java`] and must be a valid
/// Java identifier: identifier-shaped and not a reserved word or literal.
pub fn render(
    entries: &[ArtworkEntry],
    format: OutputFormat,
    array_name: &str,
) -> Result<String, RenderError> {
    let mut out = String::new();
    match format {
        OutputFormat::Java => {
            if !is_java_identifier(array_name) {
                return Err(RenderError::InvalidArrayName(array_name.to_string()));
            }
            out.push_str(&format!("String[] {array_name} = {{\n"));
            for entry in entries {
                out.push_str(&format!(
                    "{INDENT}\"{}\",\n",
                    escape_java_string(&entry.image_url)
                ));
            }
            out.push_str("};\n");
        }
        OutputFormat::Lines => {
            for entry in entries {
                out.push_str(&entry.image_url);
                out.push('\n');
            }
        }
        OutputFormat::Manifest => {
            for entry in entries {
                out.push_str(&format!("{}\t{}\n", entry.filename, entry.image_url));
            }
        }
    }
    Ok(out)
}

/// Backslash-escapes `"` and `\` so the value is a valid string literal body.
fn escape_java_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Java keywords plus the `true`, `false` and `null` literals.
const JAVA_RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

fn is_java_identifier(name: &str) -> bool {
    if JAVA_RESERVED.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
