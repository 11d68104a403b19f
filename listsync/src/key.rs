#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type DirtyKeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type DirtyKeySet<K> = BTreeSet<K>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait ListKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ListKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait ListKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ListKey for K {}
