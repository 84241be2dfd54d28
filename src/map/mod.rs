//! Maps and related utilities for slot replacement.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

mod fallback;
pub use fallback::*;

mod fn_map;
pub use fn_map::*;

mod map_value;
pub use map_value::*;

/// Trait for types that can be used as a source of slot replacements.
///
/// Looked up by slot identifier when calling
/// [`Template::replace_map()`][crate::Template::replace_map] or [`fill()`][crate::fill].
pub trait SlotMap<'a> {
	/// The type returned by the [`get()`][Self::get] function.
	type Value;

	/// Get the replacement for a slot identifier.
	fn get(&'a self, identifier: &str) -> Option<Self::Value>;
}

/// Allow using key-value [`slice`]s as [`SlotMap`]s.
///
/// # Performance
///
/// For a few key-value pairs, where the keys and values are small,
/// this is should be reasonably performant.
///
/// However, for many numbers of key-value pairs, or when the keys or values are large,
/// you may get better performance from a [`HashMap`] or [`BTreeMap`].
///
/// # Example
/// ```rust
/// # use slotted::SlotMap;
///
/// let contact_info = &[("first_name", "John"), ("last_name", "Doe")];
///
/// assert_eq!(contact_info.get("first_name"), Some(&"John"));
/// assert_eq!(contact_info.get("last_name"), Some(&"Doe"));
/// assert_eq!(contact_info.get("middle_name"), None);
/// ```
impl<'a, K, V> SlotMap<'a> for [(K, V)]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.iter().find_map(|(k, v)| (k.borrow() == identifier).then_some(v))
	}
}

/// Allow using key-value [`arrays`](`array`) as [`SlotMap`]s.
///
/// Delegate to the [`SlotMap`] impl for [`slices`](`slice`).
impl<'a, K, V, const N: usize> SlotMap<'a> for [(K, V); N]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		SlotMap::get(self.as_slice(), identifier)
	}
}

/// Allow using key-value [`Vec`] as [`SlotMap`]s.
///
/// Delegate to the [`SlotMap`] impl for [`slices`](`slice`).
impl<'a, K, V> SlotMap<'a> for Vec<(K, V)>
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		SlotMap::get(self.as_slice(), identifier)
	}
}

impl<'a, T> SlotMap<'a> for &'_ T
where
	T: ?Sized + SlotMap<'a>,
{
	type Value = <T as SlotMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		T::get(self, identifier)
	}
}

impl<'a, T> SlotMap<'a> for &'_ mut T
where
	T: ?Sized + SlotMap<'a>,
{
	type Value = <T as SlotMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		T::get(self, identifier)
	}
}

impl<'a, T> SlotMap<'a> for std::boxed::Box<T>
where
	T: ?Sized + SlotMap<'a>,
{
	type Value = <T as SlotMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		T::get(self, identifier)
	}
}

impl<'a, T> SlotMap<'a> for std::rc::Rc<T>
where
	T: ?Sized + SlotMap<'a>,
{
	type Value = <T as SlotMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		T::get(self, identifier)
	}
}

impl<'a, T> SlotMap<'a> for std::sync::Arc<T>
where
	T: ?Sized + SlotMap<'a>,
{
	type Value = <T as SlotMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		T::get(self, identifier)
	}
}

/// A "map" that never returns any values.
///
/// With this map, every replacement is a no-op.
#[derive(Debug)]
pub struct NoReplacement;

impl<'a> SlotMap<'a> for NoReplacement {
	type Value = NeverValue;

	#[inline]
	fn get(&'a self, _identifier: &str) -> Option<Self::Value> {
		None
	}
}

/// Value returned by the [`NoReplacement`] map.
#[derive(Debug)]
pub enum NeverValue {}

impl<T: ?Sized> AsRef<T> for NeverValue {
	#[inline]
	fn as_ref(&self) -> &T {
		match *self {}
	}
}

/// A map that fills slots with strings from the environment.
#[derive(Debug)]
pub struct Env;

impl<'a> SlotMap<'a> for Env {
	type Value = String;

	#[inline]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		std::env::var(identifier).ok()
	}
}

impl<'a, V: 'a> SlotMap<'a> for BTreeMap<&str, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.get(identifier)
	}
}

impl<'a, V: 'a> SlotMap<'a> for BTreeMap<String, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.get(identifier)
	}
}

impl<'a, V: 'a, S: BuildHasher> SlotMap<'a> for HashMap<&str, V, S> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.get(identifier)
	}
}

impl<'a, V: 'a, S: BuildHasher> SlotMap<'a> for HashMap<String, V, S> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, identifier: &str) -> Option<Self::Value> {
		self.get(identifier)
	}
}
