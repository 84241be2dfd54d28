//! Query and replace named "slot" regions in text templates.
//!
//! A slot is a span of text delimited by a start marker carrying an identifier
//! and a matching end marker:
//!
//! ```text
//! /*<slot name>*/content/*</slot>*/
//! ```
//!
//! The marker syntax is fixed.
//! Since the markers are block comments in many languages,
//! a template file stays valid source code until its slots are filled.
//! Identifiers consist of ASCII letters, digits and underscores.
//! They do not need to be unique: several slots may share one identifier.
//!
//! # Features
//!
//! * Locate slot matches with exact byte offsets, lazily and at most once per [`Template`].
//! * Replace the first slot or every slot with a given identifier.
//! * Replace from any [`SlotMap`]: a [`HashMap`][std::collections::HashMap],
//!   [`BTreeMap`][std::collections::BTreeMap], key-value slice, closure or the environment.
//! * Keep or strip the markers when replacing (see [`Tags`]).
//! * Compute replacements per match with [`Template::replace_with()`].
//!
//! # Examples
//!
//! The [`fill()`] function performs one-shot replacement on a `&str`.
//! Slots whose identifier is not in the map are left untouched.
//!
//! ```
//! # use std::collections::HashMap;
//! let mut slots = HashMap::new();
//! slots.insert("name", "world");
//! assert_eq!(slotted::fill("Hello /*<slot name>*/?/*</slot>*/!", &slots), "Hello world!");
//! ```
//!
//! The replacements can also be taken directly from the environment with the [`Env`] map.
//!
//! ```
//! # std::env::set_var("GREETED", "world");
//! assert_eq!(
//!   slotted::fill("Hello /*<slot GREETED>*/?/*</slot>*/!", &slotted::Env),
//!   "Hello world!",
//! );
//! ```
//!
//! For repeated queries and replacements, use the [`Template`] type directly.
//! Templates are never edited in place: every replacement returns a new [`Template`].
//!
//! ```
//! use slotted::Template;
//!
//! let template = Template::new("I am a /*<slot role>*/developer/*</slot>*/");
//! assert_eq!(template.first_match("role")?.inner_content, "developer");
//!
//! let replaced = template.replace("role", "designer")?;
//! assert_eq!(replaced.content(), "I am a designer");
//! # Ok::<_, slotted::NoSuchSlot>(())
//! ```
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]
#![warn(missing_docs, missing_debug_implementations)]

pub mod error;
pub use error::NoSuchSlot;

mod features;

mod map;
pub use map::*;

mod template;
pub use template::{SlotMatch, Tags, Template};

/// Fill slots in a string with values from a map, removing the markers.
///
/// Every slot whose identifier resolves in `slots` is replaced,
/// markers included, by the value from the map.
/// Slots whose identifier does not resolve are left untouched.
///
/// You can pass a [`HashMap`][std::collections::HashMap],
/// [`BTreeMap`][std::collections::BTreeMap], a slice of key-value pairs
/// or any other [`SlotMap`] as the `slots` parameter.
/// The values must be [`AsRef<str>`].
///
/// This is shorthand for [`Template::replace_map()`] with [`Tags::Strip`].
pub fn fill<'a, M>(source: &str, slots: &'a M) -> String
where
	M: SlotMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	Template::new(source).replace_map(slots, Tags::Strip).into_content()
}

/// Fill slots in a string with values from a map, keeping the markers.
///
/// Like [`fill()`], but only the content between the markers is replaced,
/// so the output is itself a valid template with the same slots.
///
/// This is shorthand for [`Template::replace_map()`] with [`Tags::Keep`].
pub fn fill_keeping_tags<'a, M>(source: &str, slots: &'a M) -> String
where
	M: SlotMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	Template::new(source).replace_map(slots, Tags::Keep).into_content()
}

#[cfg(test)]
mod test {
	use std::collections::BTreeMap;

	use assert2::{assert, check};

	use super::*;

	#[test]
	fn test_fill() {
		let mut map: BTreeMap<String, String> = BTreeMap::new();
		map.insert("name".into(), "world".into());
		check!(fill("Hello /*<slot name>*/?/*</slot>*/!", &map) == "Hello world!");
		check!(fill("Hello /*<slot other>*/?/*</slot>*/!", &map) == "Hello /*<slot other>*/?/*</slot>*/!");

		let mut map: BTreeMap<&str, &str> = BTreeMap::new();
		map.insert("name", "world");
		check!(fill("Hello /*<slot name>*/?/*</slot>*/!", &map) == "Hello world!");
	}

	#[test]
	fn test_fill_keeping_tags() {
		let mut map: BTreeMap<&str, &str> = BTreeMap::new();
		map.insert("name", "world");
		let filled = fill_keeping_tags("Hello /*<slot name>*/?/*</slot>*/!", &map);
		check!(filled == "Hello /*<slot name>*/world/*</slot>*/!");
		// The output is still a template with the same slot.
		check!(fill(&filled, &map) == "Hello world!");
	}

	#[test]
	fn test_fill_from_fn() {
		let slots = from_fn(|identifier| match identifier {
			"name" => Some("world"),
			_ => None,
		});
		check!(fill("Hello /*<slot name>*/?/*</slot>*/!", &slots) == "Hello world!");
	}

	#[test]
	fn test_fill_from_env() {
		std::env::set_var("SLOTTED_TEST_NAME", "world");
		check!(fill("Hello /*<slot SLOTTED_TEST_NAME>*/?/*</slot>*/!", &Env) == "Hello world!");
	}

	#[test]
	fn test_fill_with_fallback() {
		let slots = fallback([("name", "world")], [("name", "nobody"), ("greeting", "Hi")]);
		let filled = fill("/*<slot greeting>*/?/*</slot>*/ /*<slot name>*/?/*</slot>*/!", &slots);
		assert!(filled == "Hi world!");
	}

	#[test]
	fn test_fill_no_replacement() {
		let source = "Hello /*<slot name>*/?/*</slot>*/!";
		check!(fill(source, &NoReplacement) == source);
	}

	#[test]
	fn test_dyn_slot_map() {
		let mut map = BTreeMap::new();
		map.insert(String::from("name"), String::from("world"));
		let map: &dyn SlotMap<Value = &String> = &map;

		check!(fill("Hello /*<slot name>*/?/*</slot>*/!", map) == "Hello world!");
	}
}
