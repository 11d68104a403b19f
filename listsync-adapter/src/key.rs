#[cfg(feature = "std")]
pub trait ListViewKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> ListViewKey for T {}

#[cfg(not(feature = "std"))]
pub trait ListViewKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> ListViewKey for T {}
