use indexmap::IndexMap;

use crate::SlotMap;

impl<'a, V: 'a> SlotMap<'a> for IndexMap<&str, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.get(identifier)
	}
}

impl<'a, V: 'a> SlotMap<'a> for IndexMap<String, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.get(identifier)
	}
}
