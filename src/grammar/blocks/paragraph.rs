use {
	super::{
		block_element, fenced::fence_start, list::starts_list_item, quote::QUOTE_PREFIX,
		section::section_start,
	},
	crate::{
		parser::{cursor::Cursor, ParseFailure, Parser},
		scope::{finish_element, Element},
		tree::Node,
	},
};

/// whether the line at `cursor` continues a paragraph
///
/// blank lines, indented lines and lines starting another construct end it
fn continues(cursor: &Cursor) -> bool {
	!cursor.at_end_of_block()
		&& !cursor.at_whitespace_only_line()
		&& !cursor.at_whitespace()
		&& !starts_list_item(cursor)
		&& !cursor.tail().starts_with(QUOTE_PREFIX)
		&& fence_start(cursor).is_none()
		&& section_start(cursor, None).is_none()
}

/// consecutive lines of text, parsed as the body of a `p` element
#[must_use]
pub fn paragraph() -> Parser<Vec<Node>> {
	Parser::new(|cursor| {
		if cursor.at_end_of_block() || cursor.at_whitespace_only_line() {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let start = cursor.position();
		let mut element = Element::new(block_element(cursor, "p")?, cursor);

		let mut end = cursor.clone();
		let mut lines = Vec::new();
		loop {
			lines.extend(end.tail_line());
			end.advance_line()?;
			if !continues(&end) {
				break;
			}
		}
		element.parse_body(cursor, lines)?;

		let node = finish_element(element, start, end.position());
		end.skip_empty_lines();
		Ok((vec![node], end))
	})
}
