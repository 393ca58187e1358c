use {
	crate::{
		document::Line,
		parser::{cursor::Cursor, ParseFailure, Parser},
	},
	::std::rc::Rc,
};

/// collect lines starting at `cursor` (which must be at the start of a line) that begin with
/// `prefix`, stripping it
///
/// blank lines are only kept if more prefixed lines follow, the returned cursor is after the
/// last kept non-blank line
fn collect_prefixed(start: &Cursor, prefix: &str, mut lines: Vec<Line>) -> (Vec<Line>, Cursor) {
	let prefix_chars = prefix.chars().count();

	let mut cursor = start.clone();
	let mut next = start.clone();
	let mut tentative = Vec::new();

	while !cursor.at_end_of_block() {
		let stripped = cursor.tail().starts_with(prefix).then(|| {
			let mut stripped = cursor.clone();
			stripped.advance_by(prefix_chars).ok();
			stripped
		});

		if cursor.at_whitespace_only_line() {
			tentative.extend(stripped.unwrap_or_else(|| cursor.clone()).tail_line());
		} else if let Some(stripped) = stripped {
			lines.append(&mut tentative);
			lines.extend(stripped.tail_line());
			next = cursor.clone();
			next.advance_line().ok();
		} else {
			break;
		}

		if cursor.advance_line().is_err() {
			break;
		}
	}

	(lines, next)
}

/// the rest of the current line, followed by the lines starting with `prefix`
///
/// the first line is dropped if it is blank
#[must_use]
pub fn prefixed_lines(prefix: impl Into<Rc<str>>) -> Parser<Vec<Line>> {
	let prefix = prefix.into();

	Parser::new(move |cursor| {
		let mut lines = Vec::new();
		if !cursor.at_whitespace_only_line() {
			lines.extend(cursor.tail_line());
		}

		let mut after_first = cursor.clone();
		after_first.advance_line()?;

		Ok(collect_prefixed(&after_first, &prefix, lines))
	})
}

/// the lines starting with `prefix`, beginning with the current one
///
/// fails if no line with the prefix is found
#[must_use]
pub fn indented_lines(prefix: impl Into<Rc<str>>) -> Parser<Vec<Line>> {
	let prefix = prefix.into();

	Parser::new(move |cursor| {
		let (lines, next) = collect_prefixed(cursor, &prefix, Vec::new());
		if lines.is_empty() {
			return Err(ParseFailure::not_found(cursor.position()));
		}
		Ok((lines, next))
	})
}

/// the lines indented like the first non-blank line at or after the cursor
///
/// fails if that line is not indented
#[must_use]
pub fn indentation() -> Parser<Vec<Line>> {
	Parser::new(|cursor| {
		let mut probe = cursor.clone();
		probe.skip_empty_lines();

		if probe.at_end_of_block() || !probe.at_whitespace() {
			return Err(ParseFailure::not_found(cursor.position()));
		}

		let prefix = probe
			.tail()
			.chars()
			.take_while(|&c| c == ' ' || c == '\t')
			.collect::<String>();

		indented_lines(prefix).parse(cursor)
	})
}
