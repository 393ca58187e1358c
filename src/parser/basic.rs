use {
	crate::{
		parser::{combinators::satisfying, cursor::Cursor, ParseFailure, ParseResult, Parser},
		tree::{Node, NodeType, SyntaxNodeType, TextNodeType},
	},
	::std::rc::Rc,
};

/// exactly `text`, which must not span lines
#[must_use]
pub fn literal(text: &'static str) -> Parser<()> {
	Parser::new(move |cursor| {
		if !cursor.tail().starts_with(text) {
			return Err(ParseFailure::not_found(cursor.position()));
		}
		let mut cursor = cursor.clone();
		cursor.advance_by(text.chars().count())?;
		Ok(((), cursor))
	})
}

/// exactly `c`
#[must_use]
pub fn literal_char(c: char) -> Parser<()> {
	Parser::new(move |cursor| {
		if !cursor.at_char(c) {
			return Err(ParseFailure::not_found(cursor.position()));
		}
		let mut cursor = cursor.clone();
		cursor.advance()?;
		Ok(((), cursor))
	})
}

/// any single character
#[must_use]
pub fn character() -> Parser<char> {
	Parser::new(|cursor| {
		let Some(c) = cursor.char() else {
			return Err(ParseFailure::end_of_scope(cursor.position()));
		};
		let mut cursor = cursor.clone();
		cursor.advance()?;
		Ok((c, cursor))
	})
}

/// any one of `chars`
#[must_use]
pub fn one_of(chars: &'static str) -> Parser<char> {
	character().try_map(move |c| chars.contains(c).then_some(c))
}

fn collect(
	cursor: &Cursor,
	min: usize,
	accept: impl Fn(char) -> bool,
) -> ParseResult<String> {
	let mut end = cursor.clone();
	let mut count = 0;

	while end.char().is_some_and(&accept) {
		end.advance()?;
		count += 1;
	}

	if count < min {
		return Err(ParseFailure::not_found(cursor.position()));
	}

	Ok((end.head(cursor.position()).to_string(), end))
}

/// at least `min` characters for which `predicate` holds, up to the end of the line
#[must_use]
pub fn collect_while(min: usize, predicate: impl Fn(char) -> bool + 'static) -> Parser<String> {
	Parser::new(move |cursor| collect(cursor, min, &predicate))
}

/// at least `min` characters up to one for which `predicate` holds or the end of the line
#[must_use]
pub fn collect_until(min: usize, predicate: impl Fn(char) -> bool + 'static) -> Parser<String> {
	Parser::new(move |cursor| collect(cursor, min, |c| !predicate(c)))
}

/// one or more spaces or tabs
#[must_use]
pub fn whitespace() -> Parser<()> {
	collect_while(1, |c| c == ' ' || c == '\t').map(|_| ())
}

/// whether `c` may appear in an identifier
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// whether `name` is a valid identifier
#[must_use]
pub fn is_identifier(name: &str) -> bool {
	name.starts_with(|c: char| c.is_ascii_alphanumeric()) && name.chars().all(is_identifier_char)
}

/// an ascii letter or digit followed by letters, digits, `-` and `_`
#[must_use]
pub fn identifier() -> Parser<String> {
	satisfying(Cursor::at_alphanumeric).ignore_then(collect_while(1, is_identifier_char))
}

/// a string in double quotes, `\` escapes the next character
#[must_use]
pub fn quoted_string() -> Parser<String> {
	Parser::new(|cursor| {
		if !cursor.at_char('"') {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let mut cursor = cursor.clone();
		cursor.advance()?;

		let mut value = String::new();
		loop {
			match cursor.char() {
				Some('"') => {
					cursor.advance()?;
					return Ok((value, cursor));
				}
				Some('\\') => {
					cursor.advance()?;
					let Some(escaped) = cursor.char() else {
						return Err(ParseFailure::not_found(cursor.position()));
					};
					value.push(escaped);
					cursor.advance()?;
				}
				Some(c) => {
					value.push(c);
					cursor.advance()?;
				}
				None => return Err(ParseFailure::not_found(cursor.position())),
			}
		}
	})
}

/// at the end of a line, consuming nothing
#[must_use]
pub fn end_of_line() -> Parser<()> {
	satisfying(Cursor::at_end_of_line)
}

/// at the end of the block, consuming nothing
#[must_use]
pub fn end_of_block() -> Parser<()> {
	satisfying(Cursor::at_end_of_block)
}

/// skip blank lines, always succeeds
#[must_use]
pub fn empty_lines() -> Parser<()> {
	Parser::new(|cursor| {
		let mut cursor = cursor.clone();
		cursor.skip_empty_lines();
		Ok(((), cursor))
	})
}

/// the end of a line, producing a `newline` node, then moves to the next line
#[must_use]
pub fn newline() -> Parser<Vec<Node>> {
	let newline_type = Rc::new(SyntaxNodeType::new("newline"));

	Parser::new(move |cursor| {
		if !cursor.at_end_of_line() {
			return Err(ParseFailure::not_found(cursor.position()));
		}
		let node = Node::leaf(
			newline_type.clone(),
			cursor.position().to(cursor.position()),
			Rc::clone(cursor.document().source()),
		);
		let mut cursor = cursor.clone();
		cursor.advance_line()?;
		Ok((vec![node], cursor))
	})
}

/// exactly `text`, producing a `token` node
#[must_use]
pub fn token(text: &'static str) -> Parser<Vec<Node>> {
	leaf_node(Rc::new(SyntaxNodeType::new("token")), literal(text))
}

/// a leaf node of `node_type` covering what `parser` consumes
#[must_use]
pub fn leaf_node<T: 'static>(node_type: Rc<dyn NodeType>, parser: Parser<T>) -> Parser<Vec<Node>> {
	Parser::new(move |cursor| {
		let (_, end) = parser.parse(cursor)?;
		Ok((
			vec![Node::leaf(
				Rc::clone(&node_type),
				cursor.position().to(end.position()),
				Rc::clone(cursor.document().source()),
			)],
			end,
		))
	})
}

/// a `text` node covering what `parser` consumes
#[must_use]
pub fn text_node<T: 'static>(parser: Parser<T>) -> Parser<Vec<Node>> {
	leaf_node(Rc::new(TextNodeType), parser)
}

/// a node of `node_type` around the nodes `parser` produces
#[must_use]
pub fn node(node_type: Rc<dyn NodeType>, parser: Parser<Vec<Node>>) -> Parser<Vec<Node>> {
	Parser::new(move |cursor| {
		let (children, end) = parser.parse(cursor)?;
		Ok((
			vec![Node::new(
				Rc::clone(&node_type),
				cursor.position().to(end.position()),
				Rc::clone(cursor.document().source()),
				Vec::new(),
				children,
			)],
			end,
		))
	})
}

/// the rest of a non-blank line as a `text` node, then moves to the next line
#[must_use]
pub fn plain_line() -> Parser<Vec<Node>> {
	whole_text_line(Rc::new(TextNodeType), false)
}

/// the rest of a line verbatim as a `code-text` node, then moves to the next line
#[must_use]
pub fn code_line() -> Parser<Vec<Node>> {
	whole_text_line(Rc::new(SyntaxNodeType::new("code-text")), true)
}

fn whole_text_line(node_type: Rc<dyn NodeType>, allow_blank: bool) -> Parser<Vec<Node>> {
	Parser::new(move |cursor| {
		if cursor.at_end_of_block() || (!allow_blank && cursor.at_whitespace_only_line()) {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let mut end = cursor.clone();
		while end.advance().is_ok() {}

		let node = Node::leaf(
			Rc::clone(&node_type),
			cursor.position().to(end.position()),
			Rc::clone(cursor.document().source()),
		);
		end.advance_line()?;
		Ok((vec![node], end))
	})
}

/// an empty error node, consuming nothing
#[must_use]
pub fn error_marker(message: &'static str) -> Parser<Vec<Node>> {
	Parser::new(move |cursor| {
		Ok((
			vec![Node::error(
				cursor.position().to(cursor.position()),
				message,
				Rc::clone(cursor.document().source()),
				Vec::new(),
			)],
			cursor.clone(),
		))
	})
}

/// an error node covering the rest of the line, then moves to the next line
///
/// # errors
///
/// at the end of the block
pub fn error_line(cursor: &Cursor, message: &str) -> ParseResult<Vec<Node>> {
	let mut end = cursor.clone();
	while end.advance().is_ok() {}
	let error = Node::error(
		cursor.position().to(end.position()),
		message,
		Rc::clone(cursor.document().source()),
		Vec::new(),
	);
	end.advance_line()?;
	Ok((vec![error], end))
}

/// `parser`, or an error node covering the rest of the line if it fails
///
/// committed failures are passed on
#[must_use]
pub fn whole_line(message: &'static str, parser: Parser<Vec<Node>>) -> Parser<Vec<Node>> {
	Parser::new(move |cursor| match parser.parse(cursor) {
		Ok(result) => Ok(result),
		Err(failure) if failure.committed => Err(failure),
		Err(_) => error_line(cursor, message),
	})
}

/// `parser` over the whole block
///
/// if it fails the block becomes one error node, if it stops early the rest becomes an
/// `unexpected input` error node, committed failures are passed on
#[must_use]
pub fn whole_block(message: &'static str, parser: Parser<Vec<Node>>) -> Parser<Vec<Node>> {
	Parser::new(move |cursor| {
		let (mut nodes, end) = match parser.parse(cursor) {
			Ok(result) => result,
			Err(failure) if failure.committed => return Err(failure),
			Err(_) => (Vec::new(), cursor.clone()),
		};

		if end.at_end_of_block() {
			return Ok((nodes, end));
		}

		let rest = end.to_end_of_block();
		let message = if nodes.is_empty() && end == *cursor {
			message
		} else {
			"unexpected input"
		};
		nodes.push(Node::error(
			end.position().to(rest.position()),
			message,
			Rc::clone(cursor.document().source()),
			Vec::new(),
		));

		Ok((nodes, rest))
	})
}
