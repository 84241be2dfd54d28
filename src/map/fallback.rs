use super::SlotMap;

/// [`SlotMap`] produced by [`fallback()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FallbackMap<Base, Fallback> {
	base: Base,
	fallback: Fallback,
}

impl<'a, Value, Base, Fallback> SlotMap<'a> for FallbackMap<Base, Fallback>
where
	Base: SlotMap<'a, Value = Value>,
	Fallback: SlotMap<'a, Value = Value>,
{
	type Value = Value;

	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.base.get(identifier).or_else(|| self.fallback.get(identifier))
	}
}

/// Creates a [`SlotMap`] that will first try to find replacements in `base`,
/// and then attempt to find replacements in `fallback`.
///
/// # Example
/// ```rust
/// # use slotted::{fallback, SlotMap};
///
/// let slots = [("name", "Jane Doe")];
/// let with_defaults = fallback(slots, [("name", "<anonymous>"), ("role", "<unknown>")]);
///
/// assert_eq!(with_defaults.get("name"), Some(&"Jane Doe"));
/// assert_eq!(with_defaults.get("role"), Some(&"<unknown>"));
/// assert_eq!(with_defaults.get("team"), None);
/// ```
pub const fn fallback<Base, Fallback>(base: Base, fallback: Fallback) -> FallbackMap<Base, Fallback> {
	FallbackMap { base, fallback }
}
