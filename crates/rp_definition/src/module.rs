use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

// -----------------------------------------------------------------------------
// Representer

/// A behavior unit that a traversal engine mixes into represented values.
///
/// The definition layer never calls into a representer. It only hands the
/// unit back through [`Definition::representer_module`], and the engine
/// recovers its concrete type with [`RepresenterModule::downcast_ref`].
///
/// [`Definition::representer_module`]: crate::Definition::representer_module
pub trait Representer: Any + Send + Sync {
    /// A human readable name, used in logs and schema dumps.
    fn module_name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

// -----------------------------------------------------------------------------
// RepresenterModule

/// Shared, opaque handle to a [`Representer`].
///
/// Cloning the handle shares the unit. Equality is identity: two handles
/// are equal only when they point at the same unit.
///
/// # Examples
///
/// ```
/// use rp_definition::{Representer, RepresenterModule};
///
/// struct SongRepresenter;
/// impl Representer for SongRepresenter {}
///
/// let module = RepresenterModule::new(SongRepresenter);
/// let shared = module.clone();
///
/// assert_eq!(module, shared);
/// assert!(module.is::<SongRepresenter>());
/// assert_ne!(module, RepresenterModule::new(SongRepresenter));
/// ```
#[derive(Clone)]
pub struct RepresenterModule {
    unit: Arc<dyn Representer>,
}

impl RepresenterModule {
    /// Wraps a behavior unit into a new handle.
    #[inline]
    pub fn new<R: Representer>(unit: R) -> Self {
        Self {
            unit: Arc::new(unit),
        }
    }

    /// Creates a handle from an already shared unit.
    #[inline]
    pub fn from_arc(unit: Arc<dyn Representer>) -> Self {
        Self { unit }
    }

    /// Returns the unit's [`Representer::module_name`].
    #[inline]
    pub fn module_name(&self) -> &str {
        self.unit.module_name()
    }

    /// Returns `true` if the wrapped unit is a `R`.
    #[inline]
    pub fn is<R: Representer>(&self) -> bool {
        self.as_any().is::<R>()
    }

    /// Returns the wrapped unit as `R`, if it is one.
    #[inline]
    pub fn downcast_ref<R: Representer>(&self) -> Option<&R> {
        self.as_any().downcast_ref::<R>()
    }

    /// Returns the shared unit.
    #[inline]
    pub fn as_arc(&self) -> &Arc<dyn Representer> {
        &self.unit
    }

    /// Returns `true` if both handles share the same unit.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.unit, &other.unit)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        &*self.unit
    }
}

impl PartialEq for RepresenterModule {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for RepresenterModule {}

impl fmt::Debug for RepresenterModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RepresenterModule")
            .field(&self.module_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Representer, RepresenterModule};
    use alloc::sync::Arc;

    struct Plain;
    impl Representer for Plain {}

    struct Named(&'static str);
    impl Representer for Named {
        fn module_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn downcast_to_unit() {
        let module = RepresenterModule::new(Named("SongRepresenter"));

        assert!(module.is::<Named>());
        assert!(!module.is::<Plain>());
        assert_eq!(module.downcast_ref::<Named>().map(|n| n.0), Some("SongRepresenter"));
        assert!(module.downcast_ref::<Plain>().is_none());
    }

    #[test]
    fn module_names() {
        assert_eq!(RepresenterModule::new(Named("Custom")).module_name(), "Custom");
        assert!(RepresenterModule::new(Plain).module_name().ends_with("Plain"));
    }

    #[test]
    fn identity_equality() {
        let unit: Arc<dyn Representer> = Arc::new(Plain);
        let a = RepresenterModule::from_arc(unit.clone());
        let b = RepresenterModule::from_arc(unit);

        assert_eq!(a, b);
        assert!(Arc::ptr_eq(a.as_arc(), b.as_arc()));
        assert_eq!(Arc::strong_count(a.as_arc()), 2);
        assert_ne!(a, RepresenterModule::new(Plain));
    }
}
