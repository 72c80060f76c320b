//! References to values produced by other blocks.
//!
//! A [`Reference`] converts into [`Value::Expression`](crate::Value), so it is
//! written unquoted. Strings in the escaped form `$${expr}` are accepted too
//! and type as the same raw expression.

use std::fmt;

const ESCAPE_OPEN: &str = "$${";
const ESCAPE_CLOSE: &str = "}";

/// A live expression pointing at another block's attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference(String);

impl Reference {
    /// Reference a module output: `module.<module>.<attribute>`.
    pub fn module_output(module: &str, attribute: &str) -> Self {
        Self(format!("module.{}.{}", module, attribute))
    }

    /// Reference an input variable: `var.<name>`.
    pub fn variable(name: &str) -> Self {
        Self(format!("var.{}", name))
    }

    /// The bare traversal, e.g. `module.net.network_name`.
    pub fn expression(&self) -> &str {
        &self.0
    }

    /// The escaped string form, `$${<expression>}`.
    pub fn escaped(&self) -> String {
        format!("{}{}{}", ESCAPE_OPEN, self.0, ESCAPE_CLOSE)
    }

    /// Parse a string that consists of exactly one escaped reference.
    ///
    /// The inner expression may not contain braces or `$`, so a match never
    /// spans two interpolations.
    pub fn parse_escaped(s: &str) -> Option<Self> {
        let inner = s.strip_prefix(ESCAPE_OPEN)?.strip_suffix(ESCAPE_CLOSE)?;
        if inner.is_empty() || inner.contains(['{', '}', '$']) {
            return None;
        }
        Some(Self(inner.to_string()))
    }
}

/// Interpolation syntax, `${<expression>}`.
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}}}", self.0)
    }
}
