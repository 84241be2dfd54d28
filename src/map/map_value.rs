use super::SlotMap;

/// [`SlotMap`] produced by [`map_value()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MapValue<M, F> {
	map: M,
	func: F,
}

impl<'a, M, F, V> SlotMap<'a> for MapValue<M, F>
where
	M: SlotMap<'a>,
	F: Fn(M::Value) -> V,
{
	type Value = V;

	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		let value = self.map.get(identifier)?;
		Some((self.func)(value))
	}
}

/// Creates a [`SlotMap`] that will apply a function `func` to replacements found in `map`.
///
/// # Example
/// ```rust
/// # use slotted::{map_value, SlotMap};
///
/// let slots = [("name", "Jane Doe"), ("role", "designer")];
/// let shouting = map_value(slots, |value| value.to_uppercase());
///
/// assert_eq!(shouting.get("name"), Some("JANE DOE".to_string()));
/// assert_eq!(shouting.get("role"), Some("DESIGNER".to_string()));
/// assert_eq!(shouting.get("team"), None);
/// ```
pub const fn map_value<'a, M, F, V>(map: M, func: F) -> MapValue<M, F>
where
	M: SlotMap<'a>,
	F: Fn(M::Value) -> V,
{
	MapValue { map, func }
}
