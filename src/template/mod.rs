use once_cell::sync::OnceCell;

use crate::SlotMap;
use crate::error::NoSuchSlot;

mod scan;

pub use scan::SlotMatch;
use scan::SlotIndex;

/// Selects which part of a slot a replacement rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tags {
	/// Rewrite the outer span: the markers are removed along with the old content.
	Strip,

	/// Rewrite only the inner span: the markers stay in the output verbatim.
	Keep,
}

impl Tags {
	/// The byte range of `slot` that this mode rewrites.
	fn span(self, slot: &SlotMatch) -> std::ops::Range<usize> {
		match self {
			Self::Strip => slot.start_index..slot.end_index,
			Self::Keep => slot.inner_start_index..slot.inner_end_index,
		}
	}
}

/// A text buffer with queryable, replaceable slot regions.
///
/// A slot is a span delimited by a start marker carrying an identifier
/// and a matching end marker:
///
/// ```text
/// /*<slot name>*/content/*</slot>*/
/// ```
///
/// The buffer is scanned lazily on the first query or replacement,
/// and the resulting matches are cached for the lifetime of the instance.
/// A template is never edited in place:
/// every replacement returns a new `Template` over the edited buffer,
/// with its own empty cache.
///
/// # Examples
///
/// ```
/// use slotted::Template;
///
/// let template = Template::new("Hello, my name is /*<slot name>*/John Doe/*</slot>*/");
/// let replaced = template.replace("name", "Jane Doe")?;
/// assert_eq!(replaced.content(), "Hello, my name is Jane Doe");
/// # Ok::<_, slotted::NoSuchSlot>(())
/// ```
#[derive(Clone)]
pub struct Template {
	/// The text buffer. Never modified after construction.
	content: String,

	/// Lazily computed slot matches, written at most once.
	slots: OnceCell<SlotIndex>,
}

impl std::fmt::Debug for Template {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Template").field(&self.content).finish()
	}
}

impl Template {
	/// Create a template from a text buffer.
	///
	/// This never fails:
	/// a buffer without well-formed markers is a template with zero slots.
	#[inline]
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			slots: OnceCell::new(),
		}
	}

	/// Get the text buffer.
	#[inline]
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Consume the template to get the text buffer.
	#[inline]
	pub fn into_content(self) -> String {
		self.content
	}

	/// Get the slot index, scanning the buffer if this is the first query.
	fn index(&self) -> &SlotIndex {
		self.slots.get_or_init(|| SlotIndex::build(&self.content))
	}

	/// Get all slot matches in scan order (ascending start offset).
	///
	/// All offsets in the returned matches are byte offsets into [`Self::content()`].
	pub fn matches(&self) -> &[SlotMatch] {
		&self.index().ordered
	}

	/// Get all slot matches in descending start-offset order.
	///
	/// This is the order in which matches must be applied when splicing the buffer,
	/// so that an edit never shifts the offsets of matches that are still pending.
	pub fn matches_reversed(&self) -> impl Iterator<Item = &SlotMatch> {
		self.matches().iter().rev()
	}

	/// Get the first slot match (by scan order) with the given identifier.
	pub fn first_match(&self, identifier: &str) -> Result<&SlotMatch, NoSuchSlot> {
		self.matches_for(identifier)
			.first()
			.ok_or_else(|| NoSuchSlot::new(identifier))
	}

	/// Get all slot matches with the given identifier, in scan order.
	///
	/// Returns an empty slice if the identifier does not match any slot.
	pub fn matches_for(&self, identifier: &str) -> &[SlotMatch] {
		self.index()
			.by_identifier
			.get(identifier)
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	/// Replace the first slot with the given identifier.
	///
	/// The whole outer span, markers included, is replaced by `replacement`.
	/// Later slots with the same identifier are left untouched.
	pub fn replace(&self, identifier: &str, replacement: &str) -> Result<Template, NoSuchSlot> {
		let slot = self.first_match(identifier)?;
		let mut content = self.content.clone();
		content.replace_range(slot.start_index..slot.end_index, replacement);
		Ok(Template::new(content))
	}

	/// Replace every slot with the given identifier.
	///
	/// Each outer span is replaced by the same `replacement`.
	/// Returns [`NoSuchSlot`] without editing anything if the identifier matches no slot.
	pub fn replace_all(&self, identifier: &str, replacement: &str) -> Result<Template, NoSuchSlot> {
		if self.matches_for(identifier).is_empty() {
			return Err(NoSuchSlot::new(identifier));
		}

		let mut content = self.content.clone();
		for slot in self.matches_reversed() {
			if slot.identifier == identifier {
				content.replace_range(slot.start_index..slot.end_index, replacement);
			}
		}
		Ok(Template::new(content))
	}

	/// Replace every slot whose identifier resolves in the given map.
	///
	/// Slots whose identifier is not in the map are passed through unchanged.
	/// This is not an error, so the operation is infallible.
	///
	/// You can pass a [`HashMap`][std::collections::HashMap], [`BTreeMap`][std::collections::BTreeMap],
	/// a slice of key-value pairs or any other [`SlotMap`] as the `slots` parameter.
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::HashMap;
	/// use slotted::{Tags, Template};
	///
	/// let template = Template::new("/*<slot role>*/developer/*</slot>*/");
	/// let mut slots = HashMap::new();
	/// slots.insert("role", "designer");
	///
	/// assert_eq!(template.replace_map(&slots, Tags::Strip).content(), "designer");
	/// assert_eq!(
	///     template.replace_map(&slots, Tags::Keep).content(),
	///     "/*<slot role>*/designer/*</slot>*/",
	/// );
	/// ```
	pub fn replace_map<'a, M>(&self, slots: &'a M, tags: Tags) -> Template
	where
		M: SlotMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		let mut content = self.content.clone();
		for slot in self.matches_reversed() {
			if let Some(replacement) = slots.get(&slot.identifier) {
				content.replace_range(tags.span(slot), replacement.as_ref());
			}
		}
		Template::new(content)
	}

	/// Replace every slot with content computed per match.
	///
	/// The callback is invoked once per match, in descending start-offset order,
	/// and the returned content replaces the whole outer span.
	/// The [`SlotMatch`] argument carries the identifier and the inner and outer content.
	///
	/// A callback that returns `slot.outer_content.clone()` for every match
	/// leaves the buffer byte-for-byte identical.
	pub fn replace_with<F>(&self, mut replacement: F) -> Template
	where
		F: FnMut(&SlotMatch) -> String,
	{
		let mut content = self.content.clone();
		for slot in self.matches_reversed() {
			content.replace_range(slot.start_index..slot.end_index, &replacement(slot));
		}
		Template::new(content)
	}

	/// Replace every slot, regardless of identifier, with the same literal content.
	pub fn replace_any(&self, replacement: &str, tags: Tags) -> Template {
		let mut content = self.content.clone();
		for slot in self.matches_reversed() {
			content.replace_range(tags.span(slot), replacement);
		}
		Template::new(content)
	}
}

impl From<String> for Template {
	#[inline]
	fn from(content: String) -> Self {
		Self::new(content)
	}
}

impl From<&str> for Template {
	#[inline]
	fn from(content: &str) -> Self {
		Self::new(content)
	}
}

impl PartialEq for Template {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.content == other.content
	}
}

impl Eq for Template {}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use assert2::{assert, check, let_assert};

	use super::*;

	#[test]
	fn test_content_round_trip() {
		let template = Template::new("no markers here");
		check!(template.content() == "no markers here");
		check!(template.into_content() == "no markers here");
	}

	#[test]
	fn test_matches_populates_once() {
		let template = Template::new("/*<slot a>*/1/*</slot>*/ /*<slot b>*/2/*</slot>*/");
		let first: Vec<_> = template.matches().to_vec();
		let second: Vec<_> = template.matches().to_vec();
		assert!(first == second);
		assert!(first.len() == 2);
	}

	#[test]
	fn test_matches_reversed_order() {
		let template = Template::new("/*<slot a>*/1/*</slot>*/ /*<slot b>*/2/*</slot>*/ /*<slot a>*/3/*</slot>*/");
		let starts: Vec<_> = template.matches_reversed().map(|slot| slot.start_index).collect();
		let mut sorted = starts.clone();
		sorted.sort_by(|a, b| b.cmp(a));
		assert!(starts == sorted);
		assert!(starts.len() == 3);
	}

	#[test]
	fn test_first_match() {
		let template = Template::new("/*<slot name>*/content/*</slot>*/");
		let_assert!(Ok(slot) = template.first_match("name"));
		check!(slot.identifier == "name");
		check!(slot.inner_content == "content");
		check!(slot.outer_content == "/*<slot name>*/content/*</slot>*/");
	}

	#[test]
	fn test_first_match_not_found() {
		let template = Template::new("/*<slot name>*/content/*</slot>*/");
		let_assert!(Err(error) = template.first_match("missing_id"));
		check!(error.identifier == "missing_id");
	}

	#[test]
	fn test_matches_for_groups_in_scan_order() {
		let template = Template::new("/*<slot x>*/1/*</slot>*/ /*<slot y>*/2/*</slot>*/ /*<slot x>*/3/*</slot>*/");
		let inner: Vec<_> = template.matches_for("x").iter().map(|slot| slot.inner_content.as_str()).collect();
		assert!(inner == ["1", "3"]);
		check!(template.matches_for("z").is_empty());
	}

	#[test]
	fn test_replace_first() {
		let template = Template::new("Hello, my name is /*<slot name>*/John Doe/*</slot>*/");
		let_assert!(Ok(replaced) = template.replace("name", "Jane Doe"));
		check!(replaced.content() == "Hello, my name is Jane Doe");
		// The original template is untouched.
		check!(template.content() == "Hello, my name is /*<slot name>*/John Doe/*</slot>*/");
	}

	#[test]
	fn test_replace_first_leaves_later_slots() {
		let template = Template::new("/*<slot name>*/a/*</slot>*/ /*<slot name>*/b/*</slot>*/");
		let_assert!(Ok(replaced) = template.replace("name", "x"));
		check!(replaced.content() == "x /*<slot name>*/b/*</slot>*/");
	}

	#[test]
	fn test_replace_not_found() {
		let template = Template::new("/*<slot name>*/content/*</slot>*/");
		let_assert!(Err(error) = template.replace("missing_id", "x"));
		check!(error.identifier == "missing_id");
		check!(error.to_string() == "No such slot: `missing_id`");
	}

	#[test]
	fn test_replace_all() {
		let template = Template::new(
			"Hello, my name is /*<slot name>*/John Doe/*</slot>*/ and I am a /*<slot name>*/developer/*</slot>*/",
		);
		let_assert!(Ok(replaced) = template.replace_all("name", "Jane Doe"));
		check!(replaced.content() == "Hello, my name is Jane Doe and I am a Jane Doe");
	}

	#[test]
	fn test_replace_all_not_found() {
		let template = Template::new("/*<slot name>*/content/*</slot>*/");
		let_assert!(Err(error) = template.replace_all("missing_id", "x"));
		check!(error.identifier == "missing_id");
	}

	#[test]
	fn test_replace_all_leaves_other_identifiers() {
		let template = Template::new(
			"/*<slot a>*/1/*</slot>*/ mid /*<slot b>*/2/*</slot>*/ tail /*<slot a>*/3/*</slot>*/",
		);
		let_assert!(Ok(replaced) = template.replace_all("a", "X"));
		check!(replaced.content() == "X mid /*<slot b>*/2/*</slot>*/ tail X");
	}

	#[test]
	fn test_replace_map() {
		let template = Template::new(
			"Hello, my name is /*<slot name>*/John Doe/*</slot>*/ and I am a /*<slot role>*/developer/*</slot>*/",
		);
		let mut slots = HashMap::new();
		slots.insert("name", "Jane Doe");
		slots.insert("role", "designer");
		let replaced = template.replace_map(&slots, Tags::Strip);
		check!(replaced.content() == "Hello, my name is Jane Doe and I am a designer");
	}

	#[test]
	fn test_replace_map_repeated_identifiers() {
		let template = Template::new(concat!(
			"Hello, my name is /*<slot name>*/John Doe/*</slot>*/ and I am a /*<slot role>*/developer/*</slot>*/\n",
			"Hello, my name is /*<slot name>*/Claire Doe/*</slot>*/ and I am a /*<slot role>*/designer/*</slot>*/",
		));
		let mut slots = HashMap::new();
		slots.insert("name", "Dane Doe");
		slots.insert("role", "architect");
		let replaced = template.replace_map(&slots, Tags::Strip);
		check!(
			replaced.content()
				== concat!(
					"Hello, my name is Dane Doe and I am a architect\n",
					"Hello, my name is Dane Doe and I am a architect",
				)
		);
	}

	#[test]
	fn test_replace_map_keeping_tags() {
		let template = Template::new(
			"Hello, my name is /*<slot name>*/John Doe/*</slot>*/ and I am a /*<slot role>*/developer/*</slot>*/",
		);
		let mut slots = HashMap::new();
		slots.insert("name", "Jane Doe");
		slots.insert("role", "designer");
		let replaced = template.replace_map(&slots, Tags::Keep);
		check!(
			replaced.content()
				== "Hello, my name is /*<slot name>*/Jane Doe/*</slot>*/ and I am a /*<slot role>*/designer/*</slot>*/"
		);
	}

	#[test]
	fn test_replace_map_skips_unmapped_identifiers() {
		let template = Template::new("/*<slot a>*/1/*</slot>*/ /*<slot b>*/2/*</slot>*/");
		let mut slots = HashMap::new();
		slots.insert("a", "one");
		let replaced = template.replace_map(&slots, Tags::Strip);
		check!(replaced.content() == "one /*<slot b>*/2/*</slot>*/");
	}

	#[test]
	fn test_replace_with() {
		let template = Template::new(
			"Hello, my name is /*<slot name>*/John Doe/*</slot>*/ and I am a /*<slot name>*/developer/*</slot>*/",
		);
		let replaced = template.replace_with(|slot| format!("[{}={}]", slot.identifier, slot.inner_content));
		check!(replaced.content() == "Hello, my name is [name=John Doe] and I am a [name=developer]");
	}

	#[test]
	fn test_replace_with_identity_round_trip() {
		let source = "a /*<slot x>*/1/*</slot>*/ b /*<slot y>*/🐱/*</slot>*/ c /*<slot x>*/3/*</slot>*/";
		let template = Template::new(source);
		let replaced = template.replace_with(|slot| slot.outer_content.clone());
		check!(replaced.content() == source);
	}

	#[test]
	fn test_replace_with_call_order_is_descending() {
		let template = Template::new("/*<slot a>*/1/*</slot>*/ /*<slot b>*/2/*</slot>*/");
		let mut seen = Vec::new();
		template.replace_with(|slot| {
			seen.push(slot.identifier.clone());
			String::new()
		});
		assert!(seen == ["b", "a"]);
	}

	#[test]
	fn test_replace_any() {
		let template = Template::new(
			"Hello, my name is /*<slot name>*/John Doe/*</slot>*/ and I am a /*<slot name>*/developer/*</slot>*/",
		);
		let replaced = template.replace_any("Jane Doe", Tags::Strip);
		check!(replaced.content() == "Hello, my name is Jane Doe and I am a Jane Doe");
	}

	#[test]
	fn test_replace_any_keeping_tags() {
		let template = Template::new(
			"Hello, my name is /*<slot name>*/John Doe/*</slot>*/ and I am a /*<slot name>*/developer/*</slot>*/",
		);
		let replaced = template.replace_any("Jane Doe", Tags::Keep);
		check!(
			replaced.content()
				== "Hello, my name is /*<slot name>*/Jane Doe/*</slot>*/ and I am a /*<slot name>*/Jane Doe/*</slot>*/"
		);
	}

	#[test]
	fn test_replacement_does_not_drift_offsets() {
		// Replacements with lengths different from the original content must not
		// corrupt the text around untouched slots.
		let template = Template::new(
			"head /*<slot a>*/aa/*</slot>*/ mid /*<slot b>*/bb/*</slot>*/ tail /*<slot c>*/cc/*</slot>*/ end",
		);
		let mut slots = HashMap::new();
		slots.insert("a", "a much longer replacement value");
		slots.insert("c", "");
		let replaced = template.replace_map(&slots, Tags::Strip);
		check!(replaced.content() == "head a much longer replacement value mid /*<slot b>*/bb/*</slot>*/ tail  end");
	}

	#[test]
	fn test_multiline_slot() {
		let template = Template::new("Big\n/*<slot name>*/Band/*</slot>*/\nBeat");
		let_assert!(Ok(slot) = template.first_match("name"));
		check!(slot.start_index == 4);
		check!(slot.end_index == 34);
		check!(slot.inner_content == "Band");
		let_assert!(Ok(replaced) = template.replace("name", "Bang"));
		check!(replaced.content() == "Big\nBang\nBeat");
	}

	#[test]
	fn test_replaced_template_has_fresh_matches() {
		let template = Template::new("/*<slot name>*/old/*</slot>*/ rest");
		let replaced = template.replace_any("/*<slot other>*/new/*</slot>*/", Tags::Strip);
		let_assert!(Ok(slot) = replaced.first_match("other"));
		check!(slot.inner_content == "new");
		let_assert!(Err(_) = replaced.first_match("name"));
	}
}
