use crate::{
	grammar::element_start,
	parser::{basic::literal_char, ParseFailure, Parser},
	scope::{finish_element, Element, Registry},
	tree::Node,
};

/// `[name attributes: content]` for a registered markup element `name`
///
/// the content is parsed with the element's title parser
#[must_use]
pub fn brackets() -> Parser<Vec<Node>> {
	let start_parser = element_start(Registry::Markup);
	let close = literal_char(']');

	Parser::new(move |cursor| {
		if !cursor.at_char('[') {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let start = cursor.position();
		let mut inner = cursor.clone();
		inner.advance()?;

		let ((element_type, attributes), content) = start_parser.parse(&inner)?;
		let mut element = Element::new(element_type, cursor);
		element.add_attribute_nodes(attributes);

		let ((), end) = element.parse_span(&content, &close)?;
		Ok((vec![finish_element(element, start, end.position())], end))
	})
}
