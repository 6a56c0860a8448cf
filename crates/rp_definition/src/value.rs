use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// Value

/// A dynamic value carried by property options.
///
/// Used for default values and for collaborator-defined option keys.
/// Serialized untagged, so `Value::Str("x".into())` is written as `"x"`.
///
/// [`Value::Null`] is an explicit null, distinct from "no value",
/// which is expressed as `Option::<Value>::None` by the callers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

impl_from!(Bool: bool);
impl_from!(Int: i8, i16, i32, i64);
impl_from!(UInt: u8, u16, u32, u64);
impl_from!(Float: f32, f64);
impl_from!(Str: String, &str, Cow<'_, str>);

impl From<()> for Value {
    #[inline]
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Seq(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Self::Map(
            value
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use alloc::collections::BTreeMap;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn conversions() {
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from(0_i32), Value::Int(0));
        assert_eq!(Value::from(7_u8), Value::UInt(7));
        assert_eq!(Value::from("Atheist Peace"), Value::Str("Atheist Peace".to_string()));
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::Seq(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(Value::from(Vec::<i64>::new()), Value::Seq(Vec::new()));
    }

    #[test]
    fn accessors() {
        let mut seq = Value::Seq(Vec::new());
        if let Some(items) = seq.as_seq_mut() {
            items.push(Value::from(1_i64));
        }
        assert_eq!(seq.as_seq(), Some(&[Value::Int(1)][..]));

        assert!(Value::Null.is_null());
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(1_i64).as_str(), None);
    }

    #[test]
    fn json_untagged() {
        let mut map = BTreeMap::new();
        map.insert("title", Value::from("Roxanne"));
        map.insert("track", Value::from(3_i64));
        let value = Value::from(map);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"title":"Roxanne","track":3}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert_eq!(
            back.as_map().and_then(|m| m.get("title")).and_then(Value::as_str),
            Some("Roxanne")
        );
        assert!(Value::from("Roxanne").as_map().is_none());

        let null: Value = serde_json::from_str("null").unwrap();
        assert!(null.is_null());
    }
}
