use {
	crate::document::DocumentId,
	::core::{
		cmp::Ordering,
		fmt,
		hash::{Hash, Hasher},
	},
	::miette::SourceSpan,
};

/// a location in a document
///
/// lines start at 1, columns start at 0 and count characters, the index is a byte offset into the
/// source
///
/// two positions are equal if they point at the same byte of the same document
#[derive(Debug, Clone, Copy)]
pub struct Position {
	document: DocumentId,
	index: usize,
	line: u32,
	column: u32,
}

impl Position {
	/// construct a position, the caller is responsible for `line`/`column` matching `index`
	#[must_use]
	pub fn new(document: DocumentId, index: usize, line: u32, column: u32) -> Self {
		Self {
			document,
			index,
			line,
			column,
		}
	}

	/// the document this position points into
	#[must_use]
	pub fn document(&self) -> DocumentId {
		self.document
	}

	/// byte offset into the source
	#[must_use]
	pub fn index(&self) -> usize {
		self.index
	}

	/// line number, starting at 1
	#[must_use]
	pub fn line(&self) -> u32 {
		self.line
	}

	/// column, starting at 0
	#[must_use]
	pub fn column(&self) -> u32 {
		self.column
	}

	/// `line:column`, the form used for the end of a range
	#[must_use]
	pub fn left(&self) -> String {
		format!("{}:{}", self.line, self.column)
	}

	/// `line:column+1`, the form used for the start of a range
	#[must_use]
	pub fn right(&self) -> String {
		format!("{}:{}", self.line, self.column + 1)
	}

	/// the position after `c`, which must be the character at this position
	#[must_use]
	pub fn step(self, c: char) -> Self {
		if c == '\n' {
			Self {
				index: self.index + c.len_utf8(),
				line: self.line + 1,
				column: 0,
				..self
			}
		} else {
			Self {
				index: self.index + c.len_utf8(),
				column: self.column + 1,
				..self
			}
		}
	}

	/// the range from this position to `end`
	#[must_use]
	pub fn to(self, end: Position) -> SourceRange {
		SourceRange::new(self, end)
	}
}

impl PartialEq for Position {
	fn eq(&self, other: &Self) -> bool {
		self.document == other.document && self.index == other.index
	}
}

impl Eq for Position {}

impl Hash for Position {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.document.hash(state);
		self.index.hash(state);
	}
}

impl PartialOrd for Position {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		(self.document == other.document).then(|| self.index.cmp(&other.index))
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

/// a half-open range between two positions of the same document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceRange {
	/// first position covered
	pub start: Position,
	/// first position after the range
	pub end: Position,
}

impl SourceRange {
	/// construct a range
	#[must_use]
	pub fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// the text covered by this range in `source`
	///
	/// # panics
	///
	/// if `source` is not the text of the range's document
	#[must_use]
	pub fn slice<'s>(&self, source: &'s str) -> &'s str {
		&source[self.start.index..self.end.index]
	}

	/// whether `other` lies within this range
	#[must_use]
	pub fn contains(&self, other: &SourceRange) -> bool {
		self.start.document == other.start.document
			&& self.start.index <= other.start.index
			&& other.end.index <= self.end.index
	}

	/// the span used for diagnostics
	#[must_use]
	pub fn span(&self) -> SourceSpan {
		(self.start.index..self.end.index).into()
	}
}

impl fmt::Display for SourceRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}..{}", self.start.right(), self.end.left())
	}
}
