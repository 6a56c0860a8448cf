//! Provide `FixedHasher`, a `foldhash` hasher with a fixed seed.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// The seed shared by every [`FixedHashState`].
const FIXED_SEED: FixedState = FixedState::with_seed(0x5EED0FD3F17105AA);

/// A hasher whose results depend only on the input.
///
/// Alias of [`foldhash::fast::FoldHasher`], created through
/// [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a constant seed.
///
/// Option maps keyed by property settings use it, so two maps built from the
/// same entries in the same order iterate identically in every process.
/// Not suitable for maps keyed by untrusted input.
///
/// # Examples
///
/// ```
/// use rp_utils::hash::{FixedHashState, HashMap};
///
/// let mut options: HashMap<&str, &str> = HashMap::with_hasher(FixedHashState);
/// options.insert("tag", "song");
/// options.insert("wrap", "songs");
///
/// assert_eq!(options.get("tag"), Some(&"song"));
/// assert!(!options.contains_key("attribute"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_SEED.build_hasher()
    }
}
