use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{DefinitionError, Options, RepresenterModule, SoughtType, Value};

// -----------------------------------------------------------------------------
// Definition

/// Representation metadata of one mapped property.
///
/// A definition is a property name plus its declared [`Options`]. Every
/// query below is a pure function of those two inputs, and each one reads
/// only the options it is documented to read.
///
/// # Examples
///
/// ```
/// use rp_definition::{Definition, Options, Value};
///
/// let song = Definition::named("song").unwrap();
/// assert_eq!(song.getter(), "song");
/// assert_eq!(song.setter(), "song=");
/// assert!(!song.is_typed());
/// assert_eq!(song.default(), None);
///
/// let songs = Definition::new("songs", Options::new().with_collection(true)).unwrap();
/// assert!(songs.is_array());
/// assert_eq!(songs.default(), Some(Value::Seq(Vec::new())));
/// ```
#[derive(Clone, Debug)]
pub struct Definition {
    name: Cow<'static, str>,
    options: Options,
}

impl Definition {
    /// Creates a definition for the property `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyName`] if `name` is empty.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        options: Options,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }

        if options.collection && options.hash {
            log::warn!("property `{name}` is declared both as collection and as hash");
        }
        log::trace!("defined property `{name}`");

        Ok(Self { name, options })
    }

    /// Creates a definition for the property `name` without options.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyName`] if `name` is empty.
    #[inline]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Result<Self, DefinitionError> {
        Self::new(name, Options::new())
    }

    /// Returns the property name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared options.
    #[inline]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the accessor used to read the property from a source object.
    #[inline]
    pub fn getter(&self) -> &str {
        &self.name
    }

    /// Returns the accessor used to write the property onto a target object.
    #[inline]
    pub fn setter(&self) -> String {
        let mut setter = String::with_capacity(self.name.len() + 1);
        setter.push_str(&self.name);
        setter.push('=');
        setter
    }

    /// Returns the document key: the `from` option, or the property name.
    #[inline]
    pub fn from(&self) -> &str {
        self.options.from.as_deref().unwrap_or(&self.name)
    }

    /// Returns `true` if either `class` or `extend` is declared.
    #[inline]
    pub const fn is_typed(&self) -> bool {
        self.options.class.is_some() || self.options.extend.is_some()
    }

    /// Returns the declared `class`.
    ///
    /// A property with only `extend` is typed, but has no sought type.
    #[inline]
    pub const fn sought_type(&self) -> Option<&SoughtType> {
        self.options.class.as_ref()
    }

    #[inline]
    pub const fn is_array(&self) -> bool {
        self.options.collection
    }

    #[inline]
    pub const fn is_hash(&self) -> bool {
        self.options.hash
    }

    /// Returns the default value.
    ///
    /// - An explicit `default` is returned as declared, falsy values and
    ///   [`Value::Null`] included.
    /// - Otherwise a collection defaults to a new empty sequence. Every call
    ///   allocates its own, so callers may mutate the result.
    /// - Otherwise there is no default.
    pub fn default(&self) -> Option<Value> {
        match &self.options.default {
            Some(value) => Some(value.clone()),
            None if self.options.collection => Some(Value::Seq(Vec::new())),
            None => None,
        }
    }

    /// Returns `true` if a `default` was declared explicitly.
    #[inline]
    pub const fn has_default(&self) -> bool {
        self.options.default.is_some()
    }

    /// Returns the `include_nil` option as declared.
    #[inline]
    pub const fn include_nil(&self) -> Option<bool> {
        self.options.include_nil
    }

    /// Returns the behavior unit to mix into represented values.
    #[inline]
    pub const fn representer_module(&self) -> Option<&RepresenterModule> {
        self.options.extend.as_ref()
    }

    /// Returns a key the definition layer does not interpret.
    #[inline]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.options.extras.get(key)
    }

    /// Returns `true` if `value` is nil and nil values are not emitted.
    ///
    /// Both a missing value and [`Value::Null`] count as nil.
    pub fn skipable_nil_value(&self, value: Option<&Value>) -> bool {
        value.is_none_or(Value::is_null) && self.options.include_nil != Some(true)
    }

    /// Resolves a value read from a source object against the default.
    ///
    /// Skipable nil values are replaced by [`Definition::default`],
    /// anything else is returned unchanged.
    pub fn default_for(&self, value: Option<Value>) -> Option<Value> {
        if self.skipable_nil_value(value.as_ref()) {
            self.default()
        } else {
            value
        }
    }
}
