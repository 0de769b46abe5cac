//! Values attached to log events
//!
//! [`Value`] is the closed set of things a key/value pair can carry. Scalars,
//! strings and their flat sequences print as themselves. Optional and
//! borrowed values are wrapped in [`Value::Ref`] and dereferenced exactly one
//! level before printing, so logging `Some(&5)` prints `5` and logging `None`
//! prints `<nil>` rather than anything address-like.

use std::fmt;

/// Printed in place of any key or value that would otherwise render empty
pub const EMPTY_PLACEHOLDER: &str = "\"\"";

/// Printed for absent values and absent errors
pub const NIL_MARKER: &str = "<nil>";

static NIL: Value = Value::Nil;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Str(String),
    Ints(Vec<i64>),
    Uints(Vec<u64>),
    Floats(Vec<f64>),
    Bools(Vec<bool>),
    Strs(Vec<String>),
    /// Text of a failure value
    Error(String),
    /// Optional or indirect handle to another value
    Ref(Option<Box<Value>>),
    /// Structured value, already rendered in its `Debug` form
    Opaque(String),
    Nil,
}

impl Value {
    /// Capture the text of an error
    pub fn error(err: &dyn std::error::Error) -> Self {
        Value::Error(err.to_string())
    }

    /// Capture a structured value through its `Debug` implementation
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Value::Opaque(format!("{:?}", value))
    }

    /// The value that should actually be printed
    ///
    /// A `Ref` is resolved to its target (or to [`Value::Nil`] when empty).
    /// Only one level is removed: a `Ref` to a `Ref` yields the inner `Ref`.
    /// Every other variant is returned as is.
    pub fn normalized(&self) -> &Value {
        match self {
            Value::Ref(None) => &NIL,
            Value::Ref(Some(inner)) => inner,
            other => other,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self.normalized(), Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Uint(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Str(s) => f.write_str(s),
            Value::Ints(items) => write_sequence(f, items),
            Value::Uints(items) => write_sequence(f, items),
            Value::Floats(items) => write_sequence(f, items),
            Value::Bools(items) => write_sequence(f, items),
            Value::Strs(items) => write_sequence(f, items),
            Value::Error(text) => f.write_str(text),
            Value::Ref(Some(inner)) => write!(f, "&{}", inner),
            Value::Ref(None) | Value::Nil => f.write_str(NIL_MARKER),
            Value::Opaque(text) => f.write_str(text),
        }
    }
}

fn write_sequence<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

/// Render a value the way the sink prints it outside of a log line
///
/// The value is dereferenced one level and formatted in its verbose form,
/// which for [`Value::debug`] values includes field names.
pub fn format_verbose(value: impl Into<Value>) -> String {
    value.into().normalized().to_string()
}

/// Append `text`, escaping the characters that would break a single-line record
pub(crate) fn push_sanitized(out: &mut String, text: &str) {
    if !text.contains(|c: char| matches!(c, '\n' | '\r' | '\t')) {
        out.push_str(text);
        return;
    }
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
}

/// Append the printable form of `value`: normalized, escaped, never empty
pub(crate) fn push_rendered(out: &mut String, value: &Value) {
    let start = out.len();
    match value.normalized() {
        Value::Str(s) => push_sanitized(out, s),
        other => push_sanitized(out, &other.to_string()),
    }
    if out.len() == start {
        out.push_str(EMPTY_PLACEHOLDER);
    }
}

macro_rules! impl_from_number {
    ($variant:ident, $seq:ident, $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Value::$variant(v as $target)
                }
            }

            impl From<&$source> for Value {
                fn from(v: &$source) -> Self {
                    Value::Ref(Some(Box::new(Value::$variant(*v as $target))))
                }
            }

            impl From<Vec<$source>> for Value {
                fn from(v: Vec<$source>) -> Self {
                    Value::$seq(v.into_iter().map(|x| x as $target).collect())
                }
            }

            impl From<&[$source]> for Value {
                fn from(v: &[$source]) -> Self {
                    Value::$seq(v.iter().map(|x| *x as $target).collect())
                }
            }
        )+
    };
}

impl_from_number!(Int, Ints, i64: i8, i16, i32, i64, isize);
impl_from_number!(Uint, Uints, u64: u8, u16, u32, u64, usize);
impl_from_number!(Float, Floats, f64: f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&bool> for Value {
    fn from(v: &bool) -> Self {
        Value::Ref(Some(Box::new(Value::Bool(*v))))
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Value::Bools(v)
    }
}

impl From<&[bool]> for Value {
    fn from(v: &[bool]) -> Self {
        Value::Bools(v.to_vec())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Ref(Some(Box::new(Value::Str(v.clone()))))
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Strs(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Strs(v.into_iter().map(String::from).collect())
    }
}

impl From<&[String]> for Value {
    fn from(v: &[String]) -> Self {
        Value::Strs(v.to_vec())
    }
}

impl From<&[&str]> for Value {
    fn from(v: &[&str]) -> Self {
        Value::Strs(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<std::io::Error> for Value {
    fn from(err: std::io::Error) -> Self {
        Value::Error(err.to_string())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

/// `None` is a nil handle. `Some` of a value that is already a handle (such
/// as `Option<&T>`) stays a single level of indirection.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v.map(Into::into) {
            None => Value::Ref(None),
            Some(Value::Ref(inner)) => Value::Ref(inner),
            Some(inner) => Value::Ref(Some(Box::new(inner))),
        }
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(v: Box<T>) -> Self {
        Value::Ref(Some(Box::new((*v).into())))
    }
}
