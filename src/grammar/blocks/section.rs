use {
	super::block_element,
	crate::{
		grammar::element_start,
		parser::{cursor::Cursor, ParseFailure, Parser},
		scope::{finish_element, Element, Registry},
		tree::{Node, NodeAttribute},
	},
};

/// characters a title may be underlined with
pub const UNDERLINE_CHARS: &str = "=-~_+'\"";

/// the underline character of the line at `cursor`, which must consist of at least three of the
/// same underline character and optional whitespace
fn underline(cursor: &Cursor) -> Option<char> {
	let c = cursor.char().filter(|&c| UNDERLINE_CHARS.contains(c))?;

	let mut scan = cursor.clone();
	let mut count = 0;
	while let Some(next) = scan.char() {
		if next == c {
			count += 1;
		} else if next != ' ' && next != '\t' {
			return None;
		}
		scan.advance().ok()?;
	}

	(count >= 3).then_some(c)
}

/// whether a titled section starts at `cursor`, underlined with `expected` if given
///
/// returns the underline character and the cursor after the underline and the blank line
/// following it
#[must_use]
pub fn section_start(cursor: &Cursor, expected: Option<char>) -> Option<(char, Cursor)> {
	if cursor.at_end_of_block() || cursor.at_whitespace_only_line() {
		return None;
	}

	let mut scan = cursor.clone();
	scan.advance_line().ok()?;
	if scan.at_end_of_block() {
		return None;
	}

	let c = underline(&scan)?;
	if expected.is_some_and(|expected| expected != c) {
		return None;
	}

	scan.advance_line().ok()?;
	if !scan.at_end_of_block() {
		if !scan.at_whitespace_only_line() {
			return None;
		}
		scan.advance_line().ok()?;
	}

	Some((c, scan))
}

/// a title, its underline and the content up to the next title underlined the same way
///
/// the title line may name an element (`name: title`), otherwise the element is `section`
#[must_use]
pub fn titled_section() -> Parser<Vec<Node>> {
	let named = element_start(Registry::Block);

	Parser::new(move |cursor| {
		let Some((c, body_start)) = section_start(cursor, None) else {
			return Err(ParseFailure::not_found(cursor.position()));
		};

		let start = cursor.position();
		let (element_type, attributes, title_start) = match named.parse(cursor) {
			Ok(((element_type, attributes), after)) => (element_type, attributes, after),
			Err(failure) if failure.committed => return Err(failure),
			Err(_) => (block_element(cursor, "section")?, Vec::new(), cursor.clone()),
		};

		let mut element = Element::new(element_type, cursor);
		element.add_attribute_nodes(attributes);
		element.add_title_attribute(NodeAttribute::Text("underline".to_string(), c.to_string()));
		element.parse_title(&title_start);

		let mut end = body_start.clone();
		let mut lines = Vec::new();
		while !end.at_end_of_block() && section_start(&end, Some(c)).is_none() {
			lines.extend(end.line().copied());
			end.advance_line()?;
		}
		element.parse_body(&body_start, lines)?;

		let node = finish_element(element, start, end.position());
		end.skip_empty_lines();
		Ok((vec![node], end))
	})
}
