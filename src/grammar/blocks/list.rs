use {
	super::block_element,
	crate::{
		parser::{cursor::Cursor, indent::prefixed_lines, ParseFailure, Parser},
		scope::{finish_element, Element},
		tree::Node,
	},
};

/// characters that start a list item
pub const BULLETS: &str = "-*•◦";

/// the cursor after a bullet and the whitespace following it
#[must_use]
pub fn bullet(cursor: &Cursor) -> Option<Cursor> {
	if !cursor.at_one_of(BULLETS) {
		return None;
	}

	let mut after = cursor.clone();
	after.advance().ok()?;
	if !after.at_whitespace() {
		return None;
	}
	after.skip_whitespace();

	Some(after)
}

/// whether a list item starts on this line, possibly indented
#[must_use]
pub fn starts_list_item(cursor: &Cursor) -> bool {
	let mut start = cursor.clone();
	start.skip_whitespace();
	bullet(&start).is_some()
}

/// a `ul` element of list items
///
/// an indented list is taken from the lines sharing its indentation, otherwise the list ends
/// with the first line that is not an item
#[must_use]
pub fn list() -> Parser<Vec<Node>> {
	Parser::new(|cursor| {
		if !starts_list_item(cursor) {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let start = cursor.position();
		let mut element = Element::new(block_element(cursor, "ul")?, cursor);

		let mut end = if cursor.at_whitespace() {
			let mut first = cursor.clone();
			first.skip_whitespace();
			let prefix = first.head(start).to_string();

			let (lines, next) = prefixed_lines(prefix).parse(&first)?;
			element.parse_body(cursor, lines)?;
			next
		} else {
			element.parse_body_here(cursor)?.1
		};

		let node = finish_element(element, start, end.position());
		end.skip_empty_lines();
		Ok((vec![node], end))
	})
}

/// an `li` element: the rest of the bullet line and the lines indented by two spaces after it,
/// parsed as a block
#[must_use]
pub fn list_item() -> Parser<Vec<Node>> {
	let content = prefixed_lines("  ");

	Parser::new(move |cursor| {
		let Some(after_bullet) = bullet(cursor) else {
			return Err(ParseFailure::not_found(cursor.position()));
		};

		let start = cursor.position();
		let mut element = Element::new(block_element(cursor, "li")?, cursor);

		let (lines, end) = content.parse(&after_bullet)?;
		element.parse_body(cursor, lines)?;

		Ok((vec![finish_element(element, start, end.position())], end))
	})
}
