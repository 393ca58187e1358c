use {
	super::block_element,
	crate::{
		parser::{indent::prefixed_lines, ParseFailure, Parser},
		scope::{finish_element, Element},
		tree::Node,
	},
};

/// what every line of a block quote starts with
pub const QUOTE_PREFIX: &str = "> ";

/// lines starting with `> `, without the prefix, parsed as a `blockquote` element's body
#[must_use]
pub fn block_quote() -> Parser<Vec<Node>> {
	let content = prefixed_lines(QUOTE_PREFIX);

	Parser::new(move |cursor| {
		if !cursor.tail().starts_with(QUOTE_PREFIX) {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let start = cursor.position();
		let mut element = Element::new(block_element(cursor, "blockquote")?, cursor);

		let mut after_prefix = cursor.clone();
		after_prefix.advance_by(QUOTE_PREFIX.chars().count())?;
		let (lines, mut end) = content.parse(&after_prefix)?;
		element.parse_body(cursor, lines)?;

		let node = finish_element(element, start, end.position());
		end.skip_empty_lines();
		Ok((vec![node], end))
	})
}
