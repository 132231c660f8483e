use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use strum_macros::{Display, EnumString, IntoStaticStr};

/// Primitive kind of a dynamic [`Value`].
///
/// Kinds display as, and parse from, their lowercase name, so a kind can
/// be requested by name (`"number".parse::<Kind>()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
}

/// A dynamically typed element, for sequences mixing primitive kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

/// Run-time type test: converts an element into a `U` if it is one.
///
/// Elements that are not a `U` are skipped by
/// [`of_type`](crate::EnumerableExt::of_type) rather than raising an
/// error.
pub trait TypeTest<U> {
    fn type_test(self) -> Option<U>;
}

impl<U: Any> TypeTest<U> for Box<dyn Any> {
    fn type_test(self) -> Option<U> {
        self.downcast::<U>().ok().map(|b| *b)
    }
}

impl<U: Any> TypeTest<U> for Box<dyn Any + Send> {
    fn type_test(self) -> Option<U> {
        self.downcast::<U>().ok().map(|b| *b)
    }
}

impl<U: Any> TypeTest<Rc<U>> for Rc<dyn Any> {
    fn type_test(self) -> Option<Rc<U>> {
        self.downcast::<U>().ok()
    }
}

impl<U: Any + Send + Sync> TypeTest<Arc<U>> for Arc<dyn Any + Send + Sync> {
    fn type_test(self) -> Option<Arc<U>> {
        self.downcast::<U>().ok()
    }
}

impl TypeTest<bool> for Value {
    fn type_test(self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl TypeTest<f64> for Value {
    fn type_test(self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl TypeTest<String> for Value {
    fn type_test(self) -> Option<String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl TypeTest<Vec<Value>> for Value {
    fn type_test(self) -> Option<Vec<Value>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Kind::Number.to_string(), "number");
        assert_eq!("boolean".parse::<Kind>().unwrap(), Kind::Boolean);
        assert!("float".parse::<Kind>().is_err());
        let name: &'static str = Kind::Array.into();
        assert_eq!(name, "array");
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from("a").kind(), Kind::String);
        assert_eq!(Value::from(vec![1, 2]).kind(), Kind::Array);
        assert_eq!(Value::Null.kind(), Kind::Null);
    }

    #[test]
    fn test_type_test_any() {
        let boxed: Box<dyn Any> = Box::new(5_u32);
        assert_eq!(TypeTest::<u32>::type_test(boxed), Some(5));
        let boxed: Box<dyn Any> = Box::new("five");
        assert_eq!(TypeTest::<u32>::type_test(boxed), None);
    }
}
