/// indented and nested element blocks
pub mod element_block;
/// fenced blocks
pub mod fenced;
/// bullet lists
pub mod list;
/// paragraphs
pub mod paragraph;
/// block quotes
pub mod quote;
/// underlined section titles
pub mod section;

use {
	crate::{
		parser::{cursor::Cursor, ParseFailure},
		scope::ElementType,
	},
	::std::rc::Rc,
};

/// the block element `name` in the cursor's scope
fn block_element(cursor: &Cursor, name: &str) -> Result<Rc<ElementType>, ParseFailure> {
	cursor
		.scope()
		.block(name)
		.ok_or_else(|| ParseFailure::not_found(cursor.position()))
}
