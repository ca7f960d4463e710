//! Context data model for template rendering
//!
//! A [`Context`] is a tagged value: an object (string-keyed map), an array,
//! or a scalar. Values are built once from external data and are never
//! mutated while a template renders, so a single context can be shared
//! between threads and rendered concurrently.
//!
//! ## Lookup
//!
//! - [`Context::get`] looks up one key on an object (absent for anything else)
//! - [`resolve`] walks a scope stack for a dotted path such as `a.b.c`
//! - `.` always refers to the innermost scope frame

mod convert;

use std::collections::BTreeMap;
use std::fmt;

/// Atomic value held by a [`Context::Scalar`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Truthiness: null, `false`, zero and the empty string are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Integer(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0 && !f.is_nan(),
            Scalar::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// Hierarchical data a template is rendered against
#[derive(Debug, Clone, PartialEq)]
pub enum Context {
    /// String-keyed mapping of child values
    Object(BTreeMap<String, Context>),
    /// Ordered sequence of child values
    Array(Vec<Context>),
    /// Atomic value
    Scalar(Scalar),
}

impl Context {
    /// The null scalar
    pub fn null() -> Self {
        Context::Scalar(Scalar::Null)
    }

    /// An empty object
    pub fn object() -> Self {
        Context::Object(BTreeMap::new())
    }

    /// Look up a key on an object; arrays and scalars have no keys
    pub fn get(&self, key: &str) -> Option<&Context> {
        match self {
            Context::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Indexed access into an array
    pub fn index(&self, index: usize) -> Option<&Context> {
        match self {
            Context::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Number of elements for arrays, entries for objects, `None` for scalars
    pub fn len(&self) -> Option<usize> {
        match self {
            Context::Object(map) => Some(map.len()),
            Context::Array(items) => Some(items.len()),
            Context::Scalar(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Context>> {
        match self {
            Context::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut BTreeMap<String, Context>> {
        match self {
            Context::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Context]> {
        match self {
            Context::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Context::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Boolean coercion
    ///
    /// Objects are always truthy, arrays only when non-empty, scalars per
    /// [`Scalar::is_truthy`].
    pub fn is_truthy(&self) -> bool {
        match self {
            Context::Object(_) => true,
            Context::Array(items) => !items.is_empty(),
            Context::Scalar(scalar) => scalar.is_truthy(),
        }
    }

    /// String coercion used for interpolation
    ///
    /// Objects and arrays have no textual form and coerce to the empty string.
    pub fn coerce_string(&self) -> String {
        match self {
            Context::Scalar(scalar) => scalar.to_string(),
            Context::Object(_) | Context::Array(_) => String::new(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::null()
    }
}

/// Resolve a dotted path against a scope stack (innermost frame last)
///
/// `.` returns the innermost frame. Any other path must resolve in full
/// within a single frame; the first frame (innermost first) that resolves the
/// whole chain wins. A chain that breaks partway through a frame is not
/// continued in an outer frame.
pub fn resolve<'c>(stack: &[&'c Context], path: &str) -> Option<&'c Context> {
    if path == "." {
        return stack.last().copied();
    }

    stack
        .iter()
        .rev()
        .find_map(|frame| resolve_in_frame(frame, path))
}

fn resolve_in_frame<'c>(frame: &'c Context, path: &str) -> Option<&'c Context> {
    path.split('.').try_fold(frame, |current, part| current.get(part))
}
