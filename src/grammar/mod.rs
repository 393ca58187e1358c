/// block constructs
pub mod blocks;
/// markup within lines
pub mod markup;

use {
	crate::{
		parser::{
			basic::{empty_lines, identifier, literal_char, whitespace},
			combinators::alternatives,
			span::{text_with_markup, SpanParser},
			ParseFailure, Parser,
		},
		scope::{attributes::attribute_list, ElementType, Registry},
		tree::Node,
	},
	::std::rc::Rc,
};

/// the default block parser: block constructs in priority order, separated by blank lines
#[must_use]
pub fn block_parser() -> Parser<Vec<Node>> {
	alternatives(vec![
		blocks::list::list(),
		blocks::section::titled_section(),
		blocks::element_block::element_block(),
		blocks::fenced::fenced(),
		blocks::quote::block_quote(),
		blocks::paragraph::paragraph(),
	])
	.repeated()
	.at_least(0)
	.skipping(empty_lines())
	.flatten()
}

/// markup constructs in priority order, cached per block
#[must_use]
pub fn markup_parser() -> Parser<Vec<Node>> {
	alternatives(vec![
		markup::escaped::escaped(),
		markup::brackets::brackets(),
		markup::delimiters::delimiters(),
		markup::entity::entity(),
	])
	.cached()
}

/// the default span parser: text with markup
#[must_use]
pub fn span_parser() -> SpanParser {
	text_with_markup(markup_parser())
}

/// `name attributes:` where `name` is registered in `registry`, followed by optional whitespace
///
/// produces the element type and the attribute nodes
#[must_use]
pub fn element_start(registry: Registry) -> Parser<(Rc<ElementType>, Vec<Node>)> {
	let name = identifier();
	let attributes = whitespace().ignore_then(attribute_list()).optional();
	let colon = literal_char(':');

	Parser::new(move |cursor| {
		let (name, after_name) = name.parse(cursor)?;
		let element = cursor
			.scope()
			.registry(registry)
			.get(&name)
			.ok_or_else(|| ParseFailure::not_found(cursor.position()))?;

		let (attributes, after_attributes) = attributes.parse(&after_name)?;
		let ((), mut after) = colon.parse(&after_attributes)?;
		after.skip_whitespace();

		Ok(((element, attributes.unwrap_or_default()), after))
	})
}
