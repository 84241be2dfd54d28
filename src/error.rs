//! Module containing error details.

/// A query or replacement referenced an identifier with zero matching slots.
///
/// This is the only error the library produces.
/// Unpaired or malformed markers are not errors:
/// they are simply absent from the match set.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct NoSuchSlot {
	/// The identifier that did not match any slot.
	pub identifier: String,
}

impl NoSuchSlot {
	pub(crate) fn new(identifier: &str) -> Self {
		Self {
			identifier: identifier.to_owned(),
		}
	}
}

impl std::error::Error for NoSuchSlot {}

impl std::fmt::Display for NoSuchSlot {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "No such slot: `{}`", self.identifier)
	}
}

#[cfg(test)]
mod test {
	use assert2::assert;

	use super::*;

	#[test]
	fn test_display() {
		let error = NoSuchSlot::new("name");
		assert!(error.to_string() == "No such slot: `name`");
	}
}
