use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// SoughtType

/// The concrete type a property value is expected to have.
///
/// Built from a Rust type with [`SoughtType::of`]. Two descriptors are equal
/// when they describe the same [`TypeId`].
///
/// # Examples
///
/// ```
/// use rp_definition::SoughtType;
///
/// struct Song;
///
/// let ty = SoughtType::of::<Song>();
///
/// assert!(ty.type_is::<Song>());
/// assert!(!ty.type_is::<String>());
/// assert_eq!(ty.type_name(), "Song");
/// ```
#[derive(Clone, Copy)]
pub struct SoughtType {
    ty_id: TypeId,
    type_path: &'static str,
}

impl SoughtType {
    /// Creates a descriptor for type `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any + ?Sized>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full type path, as reported by [`core::any::type_name`].
    ///
    /// Only meant for diagnostics, the text is not stable across compilers.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type path without module prefixes.
    ///
    /// Generic arguments are kept and shortened the same way,
    /// e.g. `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
    pub fn type_name(&self) -> alloc::string::String {
        short_type_name(self.type_path)
    }
}

/// Strips every `a::b::` module prefix from a type path.
fn short_type_name(path: &str) -> alloc::string::String {
    let mut out = alloc::string::String::with_capacity(path.len());
    let mut segment_start = 0;

    for (index, c) in path.char_indices() {
        match c {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*' => {
                out.push_str(last_segment(&path[segment_start..index]));
                out.push(c);
                segment_start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    out.push_str(last_segment(&path[segment_start..]));
    out
}

#[inline]
fn last_segment(path: &str) -> &str {
    match path.rfind("::") {
        Some(pos) => &path[pos + 2..],
        None => path,
    }
}

impl PartialEq for SoughtType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ty_id == other.ty_id
    }
}

impl Eq for SoughtType {}

impl Hash for SoughtType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty_id.hash(state);
    }
}

impl fmt::Debug for SoughtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SoughtType").field(&self.type_path).finish()
    }
}

impl fmt::Display for SoughtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_path)
    }
}

#[cfg(test)]
mod tests {
    use super::{SoughtType, short_type_name};
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn equality_by_type_id() {
        assert_eq!(SoughtType::of::<String>(), SoughtType::of::<String>());
        assert_ne!(SoughtType::of::<String>(), SoughtType::of::<Vec<u8>>());
    }

    #[test]
    fn shortened_names() {
        assert_eq!(short_type_name("u32"), "u32");
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(
            short_type_name("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(
            short_type_name("(my_app::Song, &[my_app::Album])"),
            "(Song, &[Album])"
        );
    }
}
