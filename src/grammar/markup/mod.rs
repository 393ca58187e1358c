/// `[name: content]`
pub mod brackets;
/// `*em*`, `` `code` `` and other delimited spans
pub mod delimiters;
/// `&name;` and numeric character references
pub mod entity;
/// backslash escapes
pub mod escaped;

use {
	crate::{
		parser::{cursor::Cursor, ParseFailure},
		scope::ElementType,
	},
	::std::rc::Rc,
};

/// the markup element `name` in the cursor's scope
fn markup_element(cursor: &Cursor, name: &str) -> Result<Rc<ElementType>, ParseFailure> {
	cursor
		.scope()
		.markup(name)
		.ok_or_else(|| ParseFailure::not_found(cursor.position()))
}
