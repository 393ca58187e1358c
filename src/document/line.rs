use crate::document::{DocumentId, Position};

/// one line of a document, excluding its line terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
	start: Position,
	end: usize,
}

impl Line {
	/// construct a line from its start and the byte index of its end
	#[must_use]
	pub fn new(start: Position, end: usize) -> Self {
		Self { start, end }
	}

	/// the first position of the line
	#[must_use]
	pub fn start(&self) -> Position {
		self.start
	}

	/// byte index just after the last character of the line
	#[must_use]
	pub fn end(&self) -> usize {
		self.end
	}

	/// whether the line has no characters at all
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.start.index() == self.end
	}

	/// the text of the line in `source`
	#[must_use]
	pub fn content<'s>(&self, source: &'s str) -> &'s str {
		&source[self.start.index()..self.end]
	}

	/// the position just after the last character of the line
	#[must_use]
	pub fn end_position(&self, source: &str) -> Position {
		self.content(source)
			.chars()
			.fold(self.start, Position::step)
	}
}

/// split `source` into lines
///
/// `\n` ends a line, `\r` never extends a line's end (so `\r\n` works), and trailing text only
/// forms a line if it is not empty
#[must_use]
pub fn line_table(document: DocumentId, source: &str) -> Vec<Line> {
	let mut lines = Vec::new();

	let mut position = Position::new(document, 0, 1, 0);
	let mut line_start = position;
	let mut line_end = 0;

	for c in source.chars() {
		let next = position.step(c);

		match c {
			'\n' => {
				lines.push(Line::new(line_start, line_end));
				line_start = next;
				line_end = next.index();
			}
			'\r' => {}
			_ => line_end = next.index(),
		}

		position = next;
	}

	if line_start.index() != line_end {
		lines.push(Line::new(line_start, line_end));
	}

	lines
}
