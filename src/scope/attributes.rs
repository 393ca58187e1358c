use {
	crate::{
		parser::{
			basic::{identifier, literal_char, quoted_string, whitespace},
			cursor::Cursor,
			ParseFailure, Parser,
		},
		tree::{Node, NodeAttribute, SyntaxNodeType},
	},
	::std::rc::Rc,
};

struct AttributeTypes {
	attribute: Rc<SyntaxNodeType>,
	key: Rc<SyntaxNodeType>,
	value: Rc<SyntaxNodeType>,
}

impl AttributeTypes {
	fn new() -> Rc<Self> {
		Rc::new(Self {
			attribute: Rc::new(SyntaxNodeType::new("attribute")),
			key: Rc::new(SyntaxNodeType::new("attribute-key")),
			value: Rc::new(SyntaxNodeType::new("attribute-value")),
		})
	}
}

/// `#id`, `.class`, `key=value` or `key="value"`
///
/// produces an `attribute` node with an `attribute-key` child (attribute `name`) and an
/// `attribute-value` child (attribute `value`)
#[must_use]
pub fn attribute() -> Parser<Vec<Node>> {
	let types = AttributeTypes::new();
	let identifier = identifier();
	let quoted = quoted_string();
	let equals = literal_char('=');

	Parser::new(move |cursor| {
		let start = cursor.position();

		let (key, key_end, value_start) = match cursor.char() {
			Some('#') => shorthand(cursor, "id")?,
			Some('.') => shorthand(cursor, "class")?,
			_ => {
				let (key, after_key) = identifier.parse(cursor)?;
				let ((), value_start) = equals.parse(&after_key)?;
				(key, after_key, value_start)
			}
		};

		let (value, end) = quoted
			.parse(&value_start)
			.or_else(|_| identifier.parse(&value_start))?;

		let source = Rc::clone(cursor.document().source());
		let key_node = Node::new(
			types.key.clone(),
			start.to(key_end.position()),
			Rc::clone(&source),
			vec![NodeAttribute::Text("name".to_string(), key)],
			Vec::new(),
		);
		let value_node = Node::new(
			types.value.clone(),
			value_start.position().to(end.position()),
			Rc::clone(&source),
			vec![NodeAttribute::Text("value".to_string(), value)],
			Vec::new(),
		);

		Ok((
			vec![Node::new(
				types.attribute.clone(),
				start.to(end.position()),
				source,
				Vec::new(),
				vec![key_node, value_node],
			)],
			end,
		))
	})
}

/// `#` or `.`, the value follows directly
fn shorthand(cursor: &Cursor, key: &str) -> Result<(String, Cursor, Cursor), ParseFailure> {
	let mut after = cursor.clone();
	after.advance()?;
	Ok((key.to_string(), after.clone(), after))
}

/// one or more attributes separated by whitespace
#[must_use]
pub fn attribute_list() -> Parser<Vec<Node>> {
	let attribute = attribute();

	attribute.clone().append(
		whitespace()
			.ignore_then(attribute)
			.repeated()
			.at_least(0)
			.flatten(),
	)
}

/// an attribute list in braces, `{#id .class key=value}`
#[must_use]
pub fn attribute_group() -> Parser<Vec<Node>> {
	literal_char('{')
		.then(whitespace().optional())
		.ignore_then(attribute_list())
		.then_ignore(whitespace().optional())
		.then_ignore(literal_char('}'))
}
