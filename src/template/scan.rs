use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a start marker, capturing the slot identifier.
///
/// Identifiers consist of ASCII letters, digits and underscores.
static START_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*<slot\s*([0-9A-Za-z_]+)>\*/").unwrap());

/// Pattern for an end marker.
static END_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*</\s*slot>\*/").unwrap());

/// One matched slot region in a template.
///
/// All offsets are byte offsets into the buffer the match was scanned from.
/// They are invalidated by any replacement,
/// since every replacement produces a new [`Template`][crate::Template] with its own buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMatch {
	/// The offset of the first byte of the start marker.
	pub start_index: usize,

	/// The offset one past the last byte of the end marker.
	pub end_index: usize,

	/// The offset of the first byte after the start marker.
	pub inner_start_index: usize,

	/// The offset of the first byte of the end marker.
	pub inner_end_index: usize,

	/// The identifier declared by the start marker.
	///
	/// Not unique: multiple slots may share an identifier.
	pub identifier: String,

	/// The content strictly between the markers.
	pub inner_content: String,

	/// The content including both markers.
	pub outer_content: String,
}

/// Scan a buffer for slot regions.
///
/// Pure function of the buffer content:
/// scanning the same buffer twice yields identical matches.
///
/// Each start marker is paired with the first end marker that follows it.
/// There is no notion of nesting:
/// a start marker between a pair of markers is consumed as literal inner content.
/// A start marker without a following end marker is silently ignored.
pub(crate) fn scan(content: &str) -> Vec<SlotMatch> {
	let mut matches = Vec::new();
	let mut remaining = content;
	let mut offset = 0;

	loop {
		let Some(captures) = START_MARKER.captures(remaining) else {
			break;
		};
		// Group 0 is the full match and group 1 is the identifier, both always present.
		let start = captures.get(0).unwrap();
		let identifier = captures.get(1).unwrap();

		let Some(end) = END_MARKER.find_at(remaining, start.end()) else {
			break;
		};

		matches.push(SlotMatch {
			start_index: offset + start.start(),
			end_index: offset + end.end(),
			inner_start_index: offset + start.end(),
			inner_end_index: offset + end.start(),
			identifier: identifier.as_str().to_owned(),
			inner_content: remaining[start.end()..end.start()].to_owned(),
			outer_content: remaining[start.start()..end.end()].to_owned(),
		});

		offset += end.end();
		remaining = &remaining[end.end()..];
	}

	matches
}

/// The memoized result of scanning a buffer, grouped by identifier.
#[derive(Debug, Clone)]
pub(crate) struct SlotIndex {
	/// All matches in scan order (ascending start offset).
	pub ordered: Vec<SlotMatch>,

	/// Matches grouped by identifier, scan order preserved within each group.
	pub by_identifier: HashMap<String, Vec<SlotMatch>>,
}

impl SlotIndex {
	/// Scan a buffer and group the matches by identifier.
	pub fn build(content: &str) -> Self {
		let ordered = scan(content);
		let mut by_identifier: HashMap<String, Vec<SlotMatch>> = HashMap::new();
		for slot in &ordered {
			by_identifier.entry(slot.identifier.clone()).or_default().push(slot.clone());
		}
		Self { ordered, by_identifier }
	}
}
