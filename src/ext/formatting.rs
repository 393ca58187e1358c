use crate::{
	parser::basic::code_line,
	scope::{ElementType, ScopeTemplate},
};

/// `em` element
///
/// add emphasis, written `*like this*` or `_like this_`
///
/// # content
///
/// gaintext
pub mod emphasis {
	use super::*;

	/// the element
	#[must_use]
	pub fn markup() -> ElementType {
		ElementType::new("em")
	}
}

/// `math` elements
///
/// formulas, as a fenced block delimited by `$$$` or inline between `$`
///
/// # content
///
/// blocks hold one `code-text` node per line, inline math holds gaintext
pub mod math {
	use super::*;

	/// the block element
	#[must_use]
	pub fn block() -> ElementType {
		ElementType::new("math").with_body(code_line().repeated().at_least(0).flatten())
	}

	/// the markup element
	#[must_use]
	pub fn markup() -> ElementType {
		ElementType::new("math")
	}
}

/// the elements of this module, with the fence and delimiter aliases
#[must_use]
pub fn elements() -> ScopeTemplate {
	let mut elements = ScopeTemplate::new()
		.with_markup(emphasis::markup())
		.with_block(math::block())
		.with_markup(math::markup());

	elements.alias_markup("span:*", "em");
	elements.alias_markup("span:_", "em");
	elements.alias_block("block:$", "math");
	elements.alias_markup("span:$", "math");
	elements
}
