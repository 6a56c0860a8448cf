use alloc::borrow::Cow;
use core::fmt;

use rp_utils::hash::{FixedHashState, HashMap};

use crate::Value;

// -----------------------------------------------------------------------------
// Extras

/// Option keys the definition layer does not interpret.
///
/// Collaborating engines use this to attach their own settings to a
/// property (a wrapping tag name, a format-specific flag, ...).
/// Keys are unique; inserting an existing key overwrites its value.
///
/// # Example
///
/// ```
/// use rp_definition::{Extras, Value};
///
/// let extras = Extras::new().with("tag", "song");
///
/// assert!(extras.contains("tag"));
/// assert_eq!(extras.get("tag"), Some(&Value::from("song")));
/// assert_eq!(extras.get("wrap"), None);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Extras {
    entries: HashMap<Cow<'static, str>, Value>,
}

impl Extras {
    /// Creates an empty [`Extras`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Adds an entry, builder style.
    #[inline]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, returning the previous value of `key`.
    #[inline]
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// An iterator visiting all entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, val)| (&**key, val))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Extras
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut extras = Self::new();
        for (key, value) in iter {
            extras.insert(key, value);
        }
        extras
    }
}

impl fmt::Debug for Extras {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
