use {
	crate::{
		parser::{
			basic::{collect_while, leaf_node, literal, literal_char},
			combinators::alternatives,
			Parser,
		},
		tree::{Node, SyntaxNodeType},
	},
	::std::rc::Rc,
};

/// an html entity: `&name;`, `&#decimal;` or `&#xhex;`, as an `html` node
#[must_use]
pub fn entity() -> Parser<Vec<Node>> {
	let reference = alternatives(vec![
		literal("#x").ignore_then(collect_while(1, |c| c.is_ascii_hexdigit())),
		literal_char('#').ignore_then(collect_while(1, |c| c.is_ascii_digit())),
		collect_while(1, |c| c.is_ascii_alphanumeric()),
	]);

	leaf_node(
		Rc::new(SyntaxNodeType::new("html")),
		literal_char('&')
			.ignore_then(reference)
			.then_ignore(literal_char(';')),
	)
}
