use super::SlotMap;

/// [`SlotMap`] produced by [`from_fn()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FnMap<F> {
	func: F,
}

impl<'a, F, V> SlotMap<'a> for FnMap<F>
where
	F: 'a + Fn(&str) -> Option<V>,
{
	type Value = V;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		(self.func)(identifier)
	}
}

/// Creates a [`SlotMap`] that delegates to the given function.
///
/// # Example
/// ```rust
/// # use slotted::{from_fn, SlotMap};
///
/// let slots = from_fn(|identifier| match identifier {
///     "name" => Some("Jane Doe"),
///     "role" => Some("designer"),
///     _ => None,
/// });
///
/// assert_eq!(slots.get("name"), Some("Jane Doe"));
/// assert_eq!(slots.get("role"), Some("designer"));
/// assert_eq!(slots.get("team"), None);
/// ```
pub const fn from_fn<F, V>(func: F) -> FnMap<F>
where
	F: Fn(&str) -> Option<V>,
{
	FnMap { func }
}
