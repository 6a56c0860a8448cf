/// A short spelling of [`Default::default()`] for struct update syntax.
///
/// # Example
///
/// ```
/// use rp_utils::default;
///
/// #[derive(Default)]
/// struct Flags {
///     collection: bool,
///     hash: bool,
///     include_nil: Option<bool>,
/// }
///
/// let flags = Flags {
///     collection: true,
///     ..default()
/// };
///
/// assert!(flags.collection);
/// assert!(!flags.hash);
/// assert_eq!(flags.include_nil, None);
/// ```
#[inline(always)]
pub fn default<T: Default>() -> T {
    T::default()
}
