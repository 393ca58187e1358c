use {
	crate::{
		parser::{basic::literal_char, cursor::Cursor, ParseFailure, Parser},
		scope::{attributes::attribute_list, finish_element, Element, ElementType},
		tree::{Node, NodeAttribute},
	},
	::std::rc::Rc,
};

/// the element registered for fences of `c`
fn fence_element(cursor: &Cursor, c: char) -> Option<Rc<ElementType>> {
	cursor.scope().block(&format!("block:{c}"))
}

/// the element and the cursor after the opening delimiter if a fence starts at `cursor`
///
/// a fence is three or more of a character that has a `block:<c>` element registered
#[must_use]
pub fn fence_start(cursor: &Cursor) -> Option<(Rc<ElementType>, Cursor)> {
	let c = cursor.char()?;
	let element_type = fence_element(cursor, c)?;

	let mut after = cursor.clone();
	let mut count = 0;
	while after.at_char(c) {
		after.advance().ok()?;
		count += 1;
	}

	(count >= 3).then_some((element_type, after))
}

/// a delimiter line, an optional title and attributes, then lines verbatim up to a line
/// consisting of the same delimiter
///
/// running into the end of the block before the closing delimiter cannot be recovered from
#[must_use]
pub fn fenced() -> Parser<Vec<Node>> {
	let attributes = attribute_list().then_ignore(literal_char(':'));

	Parser::new(move |cursor| {
		let Some((element_type, mut scan)) = fence_start(cursor) else {
			return Err(ParseFailure::not_found(cursor.position()));
		};

		let start = cursor.position();
		let delimiter = scan.head(start).to_string();
		let mut element = Element::new(element_type, cursor);

		scan.skip_whitespace();
		if let Ok((nodes, after)) = attributes.parse(&scan) {
			element.add_attribute_nodes(nodes);
			scan = after;
			scan.skip_whitespace();
		}
		element.parse_title(&scan);
		scan.advance_line()?;

		let body_start = scan.clone();
		let mut lines = Vec::new();
		loop {
			if scan.at_end_of_block() {
				::tracing::error!(
					delimiter = delimiter.as_str(),
					opened = %start,
					"fenced block is never closed"
				);
				return Err(ParseFailure::end_of_scope(scan.position()).commit());
			}
			if scan.tail() == delimiter {
				break;
			}
			lines.extend(scan.line().copied());
			scan.advance_line()?;
		}
		scan.advance_line()?;

		element.parse_body(&body_start, lines)?;
		element.add_attribute(NodeAttribute::Text("delimiter".to_string(), delimiter));

		let node = finish_element(element, start, scan.position());
		scan.skip_empty_lines();
		Ok((vec![node], scan))
	})
}
