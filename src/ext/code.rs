use crate::{
	parser::{basic::code_line, span::raw_text},
	scope::{ElementType, ScopeTemplate},
};

/// `code` elements
///
/// verbatim code, as a fenced block or inline between backticks
///
/// ````text
/// ```
/// fn main() {}
/// ```
///
/// call `main`
/// ````
///
/// # content
///
/// blocks hold one `code-text` node per line, inline code holds text without markup
pub mod code {
	use super::*;

	/// the block element
	#[must_use]
	pub fn block() -> ElementType {
		ElementType::new("code").with_body(code_line().repeated().at_least(0).flatten())
	}

	/// the markup element
	#[must_use]
	pub fn markup() -> ElementType {
		ElementType::new("code").with_title(raw_text())
	}
}

/// `raw` element
///
/// text that is not parsed for markup, written `~like this~` or produced by backslash escapes
///
/// # content
///
/// text
pub mod raw {
	use super::*;

	/// the element
	#[must_use]
	pub fn markup() -> ElementType {
		ElementType::new("raw").with_title(raw_text())
	}
}

/// the elements of this module, with the fence and delimiter aliases
#[must_use]
pub fn elements() -> ScopeTemplate {
	let mut elements = ScopeTemplate::new()
		.with_block(code::block())
		.with_markup(code::markup())
		.with_markup(raw::markup());

	elements.alias_block("block:`", "code");
	elements.alias_markup("span:`", "code");
	elements.alias_markup("span:~", "raw");
	elements
}
