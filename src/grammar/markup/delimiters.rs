use {
	super::markup_element,
	crate::{
		parser::{basic::literal_char, combinators::satisfying, ParseFailure, Parser},
		scope::{finish_element, Element},
		tree::Node,
	},
};

/// content between two of the same character, for which a `span:<c>` element is registered
///
/// the opening character starts a word and is not followed by whitespace, the closing one ends
/// a word
#[must_use]
pub fn delimiters() -> Parser<Vec<Node>> {
	Parser::new(|cursor| {
		let Some(c) = cursor.char().filter(|_| cursor.at_start_of_word()) else {
			return Err(ParseFailure::not_found(cursor.position()));
		};

		let start = cursor.position();
		let mut element = Element::new(markup_element(cursor, &format!("span:{c}"))?, cursor);

		let mut content = cursor.clone();
		content.advance()?;
		if content.at_whitespace() {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let close = satisfying(|cursor| !cursor.at_start_of_word()).ignore_then(literal_char(c));
		let ((), end) = element.parse_span(&content, &close)?;
		Ok((vec![finish_element(element, start, end.position())], end))
	})
}
