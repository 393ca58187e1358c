use crate::{
	grammar::blocks::list::list_item,
	parser::{basic::empty_lines, span::line_node},
	scope::{ElementType, ScopeTemplate},
};

/// `p` element
///
/// a paragraph, produced for consecutive lines of text
///
/// # content
///
/// one `line` node per source line, each holding markup
pub mod paragraph {
	use super::*;

	/// the element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("p").with_body(line_node().repeated().flatten())
	}
}

/// `section` element
///
/// produced for underlined titles that do not name another element
///
/// ```text
/// Title
/// =====
///
/// content
/// ```
///
/// # content
///
/// blocks, up to the next title underlined with the same character
pub mod section {
	use super::*;

	/// the element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("section")
	}
}

/// `ul`/`li` elements
///
/// bullet lists, items start with one of `-*•◦` and a space, continuation lines are indented by
/// two spaces
///
/// # content
///
/// `ul` holds `li` elements, `li` holds blocks
pub mod list {
	use super::*;

	/// the list element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("ul").with_body(
			list_item()
				.repeated()
				.skipping(empty_lines())
				.flatten(),
		)
	}

	/// the item element
	#[must_use]
	pub fn item() -> ElementType {
		ElementType::new("li")
	}
}

/// `blockquote` element
///
/// lines starting with `> `
///
/// # content
///
/// blocks
pub mod quote {
	use super::*;

	/// the element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("blockquote")
	}
}

/// `example`/`table` elements
///
/// structural containers without special syntax
///
/// # content
///
/// blocks
pub mod containers {
	use super::*;

	/// the `example` element
	#[must_use]
	pub fn example() -> ElementType {
		ElementType::new("example")
	}

	/// the `table` element
	#[must_use]
	pub fn table() -> ElementType {
		ElementType::new("table")
	}
}

/// `TBD` element
///
/// marks unfinished content, as a block (`TBD: ...`) or inline (`[TBD: ...]`)
pub mod tbd {
	use super::*;

	/// the element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("TBD")
	}
}

/// the elements of this module
#[must_use]
pub fn elements() -> ScopeTemplate {
	ScopeTemplate::new()
		.with_block(paragraph::element())
		.with_block(section::element())
		.with_block(list::element())
		.with_block(list::item())
		.with_block(quote::element())
		.with_block(containers::example())
		.with_block(containers::table())
		.with_block(tbd::element())
		.with_markup(tbd::element())
}
