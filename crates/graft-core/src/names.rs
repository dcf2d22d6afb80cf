use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Fully qualified name of a declared type (component, module, scope, entry point).
///
/// A name is a package plus one or more simple names, outermost first, so
/// `com.example.Outer.Inner` has package `com.example` and simple names
/// `["Outer", "Inner"]`. Parsing treats the leading lowercase segments as the
/// package; use [`TypeName::new`] when that convention does not hold.
///
/// Identity is the qualified name alone: `TypeName::new("a", &["b", "C"])` and
/// `TypeName::new("a.b", &["C"])` are equal, hash alike and serialize to the
/// same string.
#[derive(Debug, Clone)]
pub struct TypeName {
    package: String,
    simple_names: Vec<String>,
}

impl TypeName {
    /// Build a name from an explicit package and simple-name chain.
    pub fn new<S: AsRef<str>>(package: &str, simple_names: &[S]) -> Result<Self, TypeNameError> {
        if simple_names.is_empty() {
            return Err(TypeNameError::MissingSimpleName {
                name: package.to_string(),
            });
        }
        if !package.is_empty() {
            for segment in package.split('.') {
                validate_segment(package, segment)?;
            }
        }
        let simple_names = simple_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                validate_segment(name, name).map(|_| name.to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            package: package.to_string(),
            simple_names,
        })
    }

    /// Parse a dotted name.
    pub fn parse(qualified: &str) -> Result<Self, TypeNameError> {
        let qualified = qualified.trim();
        if qualified.is_empty() {
            return Err(TypeNameError::Empty);
        }

        let segments: Vec<&str> = qualified.split('.').collect();
        for segment in &segments {
            validate_segment(qualified, segment)?;
        }

        let split = segments
            .iter()
            .position(|segment| segment.starts_with(|c: char| c.is_ascii_uppercase()))
            .unwrap_or(segments.len().saturating_sub(1));

        let package = segments[..split].join(".");
        Self::new(&package, &segments[split..])
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    /// The directly enclosing type, if this one is nested.
    pub fn enclosing(&self) -> Option<TypeName> {
        self.is_nested().then(|| Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// A type nested directly inside this one.
    pub fn nested(&self, simple_name: &str) -> Result<TypeName, TypeNameError> {
        let mut names = self.simple_names.clone();
        names.push(simple_name.to_string());
        Self::new(&self.package, &names)
    }

    /// Flatten nesting into a single top-level name: `p.Outer.Inner` -> `p.Outer_Inner`.
    pub fn enclosed_name(&self) -> TypeName {
        Self {
            package: self.package.clone(),
            simple_names: vec![self.simple_names.join("_")],
        }
    }

    /// `enclosed_name()` with `suffix` appended to the simple name.
    pub fn with_suffix(&self, suffix: &str) -> TypeName {
        Self {
            package: self.package.clone(),
            simple_names: vec![format!("{}{}", self.simple_names.join("_"), suffix)],
        }
    }

    pub fn qualified(&self) -> String {
        self.to_string()
    }

    /// Dotted segments of the qualified name. Segments never contain a dot, so
    /// equal sequences mean equal qualified names.
    fn segments(&self) -> impl Iterator<Item = &str> {
        self.package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .chain(self.simple_names.iter().map(String::as_str))
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.segments().eq(other.segments())
    }
}

impl Eq for TypeName {}

impl Hash for TypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for segment in self.segments() {
            segment.hash(state);
        }
    }
}

impl PartialOrd for TypeName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments().cmp(other.segments())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        write!(f, "{}", self.simple_names.join("."))
    }
}

impl FromStr for TypeName {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TypeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TypeName::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// Error type for `TypeName` construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeNameError {
    #[error("type name is empty")]
    Empty,

    #[error("type name '{name}' has no simple name")]
    MissingSimpleName { name: String },

    #[error("invalid segment '{segment}' in type name '{name}'")]
    InvalidSegment { name: String, segment: String },
}

fn validate_segment(name: &str, segment: &str) -> Result<(), TypeNameError> {
    let mut chars = segment.chars();
    let valid = match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(TypeNameError::InvalidSegment {
            name: name.to_string(),
            segment: segment.to_string(),
        })
    }
}

/// Parse a name known to be well formed. For constants and test fixtures.
///
/// # Panics
///
/// Panics if `qualified` is not a valid type name.
#[track_caller]
pub fn type_name(qualified: &str) -> TypeName {
    match TypeName::parse(qualified) {
        Ok(name) => name,
        Err(err) => panic!("invalid type name literal '{qualified}': {err}"),
    }
}
