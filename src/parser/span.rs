use {
	crate::{
		document::Position,
		parser::{basic::end_of_line, cursor::Cursor, ParseFailure, Parser},
		tree::{Node, SyntaxNodeType},
	},
	::core::fmt,
	::std::rc::Rc,
};

/// builds a parser for inline content that ends where `end` matches
///
/// the end marker is consumed, its own result is dropped
#[derive(Clone)]
pub struct SpanParser(Rc<dyn Fn(&Parser<()>) -> Parser<Vec<Node>>>);

impl SpanParser {
	/// construct a span parser from a builder function
	pub fn new(build: impl Fn(&Parser<()>) -> Parser<Vec<Node>> + 'static) -> Self {
		Self(Rc::new(build))
	}

	/// a parser for content up to and including `end`
	#[must_use]
	pub fn until(&self, end: &Parser<()>) -> Parser<Vec<Node>> {
		(self.0)(end)
	}
}

impl fmt::Debug for SpanParser {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SpanParser")
	}
}

fn flush_text(nodes: &mut Vec<Node>, start: Position, cursor: &Cursor) {
	if start != cursor.position() {
		nodes.push(Node::text(
			start.to(cursor.position()),
			Rc::clone(cursor.document().source()),
		));
	}
}

/// try `end` at `cursor`, only committed failures are errors
fn try_end(end: &Parser<()>, cursor: &Cursor) -> Result<Option<Cursor>, ParseFailure> {
	match end.parse(cursor) {
		Ok(((), after)) => Ok(Some(after)),
		Err(failure) if failure.committed => Err(failure),
		Err(_) => Ok(None),
	}
}

/// text interleaved with `markup`
///
/// at every character the markup is tried first, text between markup becomes `text` nodes
///
/// fails if the line ends before the end marker matches
#[must_use]
pub fn text_with_markup(markup: Parser<Vec<Node>>) -> SpanParser {
	SpanParser::new(move |end| {
		let markup = markup.clone();
		let end = end.clone();

		Parser::new(move |cursor| {
			let mut cursor = cursor.clone();
			cursor.mark_start_of_word();

			let mut nodes = Vec::new();
			let mut text_start = cursor.position();

			if let Some(after) = try_end(&end, &cursor)? {
				return Ok((nodes, after));
			}

			while !cursor.at_end_of_line() {
				match markup.parse(&cursor) {
					Ok((found, after)) => {
						flush_text(&mut nodes, text_start, &cursor);
						nodes.extend(found);
						cursor = after;
						text_start = cursor.position();
					}
					Err(failure) if failure.committed => return Err(failure),
					Err(_) => cursor.advance()?,
				}

				if let Some(after) = try_end(&end, &cursor)? {
					flush_text(&mut nodes, text_start, &cursor);
					return Ok((nodes, after));
				}
			}

			Err(ParseFailure::not_found(cursor.position()))
		})
	})
}

/// text without any markup
///
/// fails if the line ends before the end marker matches
#[must_use]
pub fn raw_text() -> SpanParser {
	SpanParser::new(|end| {
		let end = end.clone();

		Parser::new(move |cursor| {
			let mut cursor = cursor.clone();
			cursor.mark_start_of_word();

			let start = cursor.position();
			let mut nodes = Vec::new();

			loop {
				if let Some(after) = try_end(&end, &cursor)? {
					flush_text(&mut nodes, start, &cursor);
					return Ok((nodes, after));
				}
				if cursor.at_end_of_line() {
					return Err(ParseFailure::not_found(cursor.position()));
				}
				cursor.advance()?;
			}
		})
	})
}

/// the rest of the line, parsed with the scope's span parser, then moves to the next line
#[must_use]
pub fn line() -> Parser<Vec<Node>> {
	let end = end_of_line();

	Parser::new(move |cursor| {
		let (nodes, mut after) = cursor.scope().span_parser().until(&end).parse(cursor)?;
		after.advance_line()?;
		Ok((nodes, after))
	})
}

/// like [`line`], wrapping the content in a `line` node which ends with the line
#[must_use]
pub fn line_node() -> Parser<Vec<Node>> {
	let line_type = Rc::new(SyntaxNodeType::new("line"));
	let end = end_of_line();

	Parser::new(move |cursor| {
		let (children, mut after) = cursor.scope().span_parser().until(&end).parse(cursor)?;
		let node = Node::new(
			line_type.clone(),
			cursor.position().to(after.position()),
			Rc::clone(cursor.document().source()),
			Vec::new(),
			children,
		);
		after.advance_line()?;
		Ok((vec![node], after))
	})
}
