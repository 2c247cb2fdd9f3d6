//! Value kinds and declared-type resolution.
//!
//! This module provides:
//! - [`ValueKind`]: the runtime tag for the four numeric value kinds a
//!   reduction can be bound to. A reducer's kind is fixed at construction
//!   time and asserted at every kind-erased boundary.
//! - [`ValueKind::resolve`]: binding-time resolution from the host engine's
//!   declared mapping type (e.g. `map<string,bigint>`). Any other declared
//!   type is rejected with a [`BindError`] naming the type, before any row
//!   is processed.
//! - The error types for the two fail-fast conditions: [`BindError`] for an
//!   unsupported declared type and [`KindMismatch`] for an argument whose
//!   kind differs from a reducer's configured kind.
//!
//! ```
//! use keymin::ValueKind;
//!
//! assert_eq!(ValueKind::resolve("map<string,int>").unwrap(), ValueKind::Int32);
//! assert_eq!(ValueKind::resolve("map < string , double >").unwrap(), ValueKind::Float64);
//! assert!(ValueKind::resolve("map<string,string>").is_err());
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// The numeric value kinds a reduction can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Int32,
    Int64,
    Float32,
    Float64,
}

/// Declared mapping types are matched whole, with whitespace tolerated
/// around the punctuation. The captured group is the value slot's name.
static DECLARED_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*map\s*<\s*string\s*,\s*([A-Za-z0-9_]+)\s*>\s*$")
        .expect("declared mapping type pattern")
});

impl ValueKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Int32,
        ValueKind::Int64,
        ValueKind::Float32,
        ValueKind::Float64,
    ];

    /// Engine-facing name of the value slot in the declared mapping type.
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Int32 => "int",
            ValueKind::Int64 => "bigint",
            ValueKind::Float32 => "float",
            ValueKind::Float64 => "double",
        }
    }

    /// The declared mapping type this kind binds from.
    ///
    /// ```
    /// use keymin::ValueKind;
    /// assert_eq!(ValueKind::Int64.declared_type(), "map<string,bigint>");
    /// ```
    pub fn declared_type(self) -> String {
        format!("map<string,{}>", self.type_name())
    }

    /// Resolve a declared mapping type to its value kind.
    ///
    /// Accepts exactly the four supported `map<string,·>` types, with
    /// whitespace tolerated. Anything else fails with a [`BindError`] that
    /// names the offending type.
    pub fn resolve(declared: &str) -> Result<ValueKind, BindError> {
        let caps = DECLARED_MAP
            .captures(declared)
            .ok_or_else(|| BindError::unsupported(declared))?;
        match &caps[1] {
            "int" => Ok(ValueKind::Int32),
            "bigint" => Ok(ValueKind::Int64),
            "float" => Ok(ValueKind::Float32),
            "double" => Ok(ValueKind::Float64),
            _ => Err(BindError::unsupported(declared)),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A declared type that cannot be bound to a supported value kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindError {
    /// The declared type as the caller supplied it.
    pub declared: String,
}

impl BindError {
    pub(crate) fn unsupported(declared: &str) -> Self {
        Self {
            declared: declared.to_owned(),
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "only map<string,int>, map<string,bigint>, map<string,float>, and \
             map<string,double> are supported; got '{}'",
            self.declared
        )
    }
}

impl std::error::Error for BindError {}

/// An argument whose value kind differs from a reducer's configured kind.
///
/// Raised before any entry of the offending argument is applied; the
/// destination accumulator is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindMismatch {
    /// The kind the reducer was bound to.
    pub expected: ValueKind,
    /// The kind the argument carried.
    pub found: ValueKind,
}

impl fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value kind mismatch: reducer is bound to {}, argument is {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for KindMismatch {}
