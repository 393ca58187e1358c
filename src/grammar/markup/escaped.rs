use {
	super::markup_element,
	crate::{
		parser::{ParseFailure, Parser},
		scope::{finish_element, Element},
		tree::Node,
	},
	::std::rc::Rc,
};

/// `\` and the character after it, as a `raw` element
///
/// a `\` at the end of a line is an error, whether or not `raw` is known
#[must_use]
pub fn escaped() -> Parser<Vec<Node>> {
	Parser::new(|cursor| {
		if !cursor.at_char('\\') {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let start = cursor.position();
		let source = Rc::clone(cursor.document().source());

		let mut end = cursor.clone();
		end.advance()?;

		if end.at_end_of_line() {
			let error = Node::error(
				start.to(end.position()),
				"cannot escape end-of-line",
				source,
				Vec::new(),
			);
			return Ok((vec![error], end));
		}

		let mut element = Element::new(markup_element(cursor, "raw")?, cursor);
		let text_start = end.position();
		end.advance()?;
		element.push_body(vec![Node::text(text_start.to(end.position()), source)]);

		Ok((vec![finish_element(element, start, end.position())], end))
	})
}
