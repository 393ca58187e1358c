use crate::{
	grammar::element_start,
	parser::{basic::error_line, indent::indentation, Parser},
	scope::{finish_element, Element, Registry},
	tree::Node,
};

/// `name attributes: title` followed by optionally indented content, which is parsed as the
/// element's body
#[must_use]
pub fn indented_element() -> Parser<Vec<Node>> {
	let start_parser = element_start(Registry::Block);
	let content = indentation().optional();

	Parser::new(move |cursor| {
		let start = cursor.position();
		let ((element_type, attributes), title_start) = start_parser.parse(cursor)?;

		let mut element = Element::new(element_type, cursor);
		element.add_attribute_nodes(attributes);
		if !title_start.at_end_of_line() {
			element.parse_title(&title_start);
		}

		let mut end = title_start;
		end.advance_line()?;

		let (lines, after_content) = content.parse(&end)?;
		if let Some(lines) = lines {
			element.parse_body(&end, lines)?;
			end = after_content;
		}

		Ok((vec![finish_element(element, start, end.position())], end))
	})
}

/// consecutive elements up to a blank line
///
/// lines within the block that do not start an element become `expected element` errors
#[must_use]
pub fn element_block() -> Parser<Vec<Node>> {
	let element = indented_element();

	Parser::new(move |cursor| {
		let (mut nodes, mut cursor) = element.parse(cursor)?;

		while !cursor.at_end_of_block() && !cursor.at_whitespace_only_line() {
			let (found, next) = match element.parse(&cursor) {
				Ok(result) => result,
				Err(failure) if failure.committed => return Err(failure),
				Err(_) => error_line(&cursor, "expected element")?,
			};
			nodes.extend(found);
			cursor = next;
		}

		Ok((nodes, cursor))
	})
}
