use alloc::borrow::Cow;
use core::any::Any;

use crate::{Extras, Representer, RepresenterModule, SoughtType, Value};

// -----------------------------------------------------------------------------
// Options

/// Options declared for a single property.
///
/// Every field is optional. Build it with struct update syntax or with the
/// `with_*` methods:
///
/// ```
/// use rp_definition::{Options, Value};
/// use rp_utils::default;
///
/// let a = Options {
///     collection: true,
///     ..default()
/// };
/// let b = Options::new().with_collection(true).with_extra("tag", "song");
///
/// assert!(a.collection && b.collection);
/// assert_eq!(b.extras.get("tag"), Some(&Value::from("song")));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// The concrete type expected for the value.
    pub class: Option<SoughtType>,
    /// Behavior mixed into represented values by the engine.
    pub extend: Option<RepresenterModule>,
    /// The value is an ordered sequence.
    pub collection: bool,
    /// The value is a keyed map.
    pub hash: bool,
    /// Fallback when the source has no value.
    ///
    /// `None` means "not set", `Some(Value::Null)` is an explicit null default.
    pub default: Option<Value>,
    /// Whether a nil value is still emitted. Passed through untouched.
    pub include_nil: Option<bool>,
    /// Document key, when it differs from the property name.
    pub from: Option<Cow<'static, str>>,
    /// Keys reserved for collaborating engines.
    pub extras: Extras,
}

impl Options {
    /// Creates empty options.
    #[inline]
    pub const fn new() -> Self {
        Self {
            class: None,
            extend: None,
            collection: false,
            hash: false,
            default: None,
            include_nil: None,
            from: None,
            extras: Extras::new(),
        }
    }

    /// Sets `class` to the type `T`.
    #[inline]
    pub fn with_class<T: Any + ?Sized>(self) -> Self {
        self.with_sought_type(SoughtType::of::<T>())
    }

    /// Sets `class` from an existing descriptor.
    #[inline]
    pub fn with_sought_type(mut self, ty: SoughtType) -> Self {
        self.class = Some(ty);
        self
    }

    /// Sets `extend` to a new handle over `unit`.
    #[inline]
    pub fn with_representer<R: Representer>(self, unit: R) -> Self {
        self.with_extend(RepresenterModule::new(unit))
    }

    /// Sets `extend` to a shared handle.
    #[inline]
    pub fn with_extend(mut self, module: RepresenterModule) -> Self {
        self.extend = Some(module);
        self
    }

    #[inline]
    pub fn with_collection(mut self, collection: bool) -> Self {
        self.collection = collection;
        self
    }

    #[inline]
    pub fn with_hash(mut self, hash: bool) -> Self {
        self.hash = hash;
        self
    }

    #[inline]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[inline]
    pub fn with_include_nil(mut self, include_nil: bool) -> Self {
        self.include_nil = Some(include_nil);
        self
    }

    #[inline]
    pub fn with_from(mut self, from: impl Into<Cow<'static, str>>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Stores a key the definition layer does not interpret.
    #[inline]
    pub fn with_extra(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.extras.insert(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Options;
    use crate::{Representer, SoughtType, Value};

    struct Hash;
    impl Representer for Hash {}

    #[test]
    fn empty_options() {
        let options = Options::new();

        assert_eq!(options, Options::default());
        assert!(options.class.is_none());
        assert!(options.extend.is_none());
        assert!(!options.collection);
        assert!(!options.hash);
        assert!(options.default.is_none());
        assert!(options.include_nil.is_none());
        assert!(options.from.is_none());
        assert!(options.extras.is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let options = Options::new()
            .with_class::<Hash>()
            .with_representer(Hash)
            .with_hash(true)
            .with_default(Value::Null)
            .with_include_nil(false)
            .with_from("track");

        assert_eq!(options.class, Some(SoughtType::of::<Hash>()));
        assert!(options.extend.as_ref().is_some_and(|m| m.is::<Hash>()));
        assert!(options.hash);
        assert_eq!(options.default, Some(Value::Null));
        assert_eq!(options.include_nil, Some(false));
        assert_eq!(options.from.as_deref(), Some("track"));
    }
}
