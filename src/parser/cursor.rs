use {
	crate::{
		document::{Document, Line, Position},
		parser::{cache::ResultCache, ParseFailure},
		scope::Scope,
	},
	::core::fmt,
	::std::rc::Rc,
};

/// a sequence of lines parsed as one unit
///
/// nested constructs re-parse their content as a new block, each block has its own result cache
pub struct Block {
	document: Document,
	lines: Vec<Line>,
	cache: ResultCache,
}

impl Block {
	/// construct a block over `lines` of `document`
	#[must_use]
	pub fn new(document: Document, lines: Vec<Line>) -> Rc<Self> {
		Rc::new(Self {
			document,
			lines,
			cache: ResultCache::default(),
		})
	}

	/// the document the lines belong to
	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// the lines of this block
	#[must_use]
	pub fn lines(&self) -> &[Line] {
		&self.lines
	}

	/// the block's result cache
	#[must_use]
	pub fn cache(&self) -> &ResultCache {
		&self.cache
	}
}

impl fmt::Debug for Block {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Block")
			.field("document", &self.document.id())
			.field("lines", &self.lines.len())
			.field("cached", &self.cache.len())
			.finish()
	}
}

/// the cursor fields that do not refer to the block or scope
#[derive(Debug, Clone, Copy)]
pub(crate) struct CursorState {
	position: Position,
	line_index: usize,
	start_of_word: bool,
}

/// a position within a [`Block`], in a [`Scope`]
///
/// cursors are values: moving one never affects its clones
#[derive(Clone)]
pub struct Cursor {
	position: Position,
	line_index: usize,
	start_of_word: bool,
	block: Rc<Block>,
	scope: Rc<Scope>,
}

impl Cursor {
	/// a cursor at the start of `block`
	#[must_use]
	pub fn new(block: Rc<Block>, scope: Rc<Scope>) -> Self {
		let position = block
			.lines
			.first()
			.map_or_else(|| block.document.end_position(), Line::start);

		Self {
			position,
			line_index: 0,
			start_of_word: true,
			block,
			scope,
		}
	}

	/// a cursor at the start of a new block made of `lines`, in the same scope
	#[must_use]
	pub fn sub_block(&self, lines: Vec<Line>) -> Self {
		Self::new(
			Block::new(self.block.document.clone(), lines),
			Rc::clone(&self.scope),
		)
	}

	/// the same cursor, in another scope
	#[must_use]
	pub fn with_scope(&self, scope: Rc<Scope>) -> Self {
		Self {
			scope,
			..self.clone()
		}
	}

	/// current position
	#[must_use]
	pub fn position(&self) -> Position {
		self.position
	}

	/// index of the current line within the block, equal to the number of lines at its end
	#[must_use]
	pub fn line_index(&self) -> usize {
		self.line_index
	}

	/// the block this cursor moves in
	#[must_use]
	pub fn block(&self) -> &Rc<Block> {
		&self.block
	}

	/// the scope elements are looked up in
	#[must_use]
	pub fn scope(&self) -> &Rc<Scope> {
		&self.scope
	}

	/// the document this cursor moves in
	#[must_use]
	pub fn document(&self) -> &Document {
		&self.block.document
	}

	/// the whole source text of the document
	#[must_use]
	pub fn source(&self) -> &str {
		self.block.document.source()
	}

	/// the current line, `None` at the end of the block
	#[must_use]
	pub fn line(&self) -> Option<&Line> {
		self.block.lines.get(self.line_index)
	}

	fn line_end(&self) -> usize {
		self.line().map_or(self.position.index(), Line::end)
	}

	/// the character at the cursor, `None` at the end of a line
	#[must_use]
	pub fn char(&self) -> Option<char> {
		self.tail().chars().next()
	}

	/// the rest of the current line
	#[must_use]
	pub fn tail(&self) -> &str {
		&self.source()[self.position.index()..self.line_end()]
	}

	/// the rest of the current line as a [`Line`]
	#[must_use]
	pub fn tail_line(&self) -> Option<Line> {
		self.line().map(|line| Line::new(self.position, line.end()))
	}

	/// the text between `from` and the cursor
	#[must_use]
	pub fn head(&self, from: Position) -> &str {
		&self.source()[from.index()..self.position.index()]
	}

	/// whether the cursor is past the last line of the block
	#[must_use]
	pub fn at_end_of_block(&self) -> bool {
		self.line_index >= self.block.lines.len()
	}

	/// whether there are no characters left on the current line
	#[must_use]
	pub fn at_end_of_line(&self) -> bool {
		self.position.index() >= self.line_end()
	}

	/// whether the cursor is at a space or tab
	#[must_use]
	pub fn at_whitespace(&self) -> bool {
		matches!(self.char(), Some(' ' | '\t'))
	}

	/// whether the cursor is at an ascii letter or digit
	#[must_use]
	pub fn at_alphanumeric(&self) -> bool {
		self.char().is_some_and(|c| c.is_ascii_alphanumeric())
	}

	/// whether the cursor is at `c`
	#[must_use]
	pub fn at_char(&self, c: char) -> bool {
		self.char() == Some(c)
	}

	/// whether the cursor is at any of `chars`
	#[must_use]
	pub fn at_one_of(&self, chars: &str) -> bool {
		self.char().is_some_and(|c| chars.contains(c))
	}

	/// whether the rest of the current line is blank
	#[must_use]
	pub fn at_whitespace_only_line(&self) -> bool {
		self.tail().chars().all(|c| c == ' ' || c == '\t')
	}

	/// whether a word starts at the cursor
	#[must_use]
	pub fn at_start_of_word(&self) -> bool {
		self.start_of_word && !self.at_whitespace()
	}

	/// treat the cursor position as the start of a word
	pub fn mark_start_of_word(&mut self) {
		self.start_of_word = true;
	}

	/// move one character forward on the current line
	///
	/// # errors
	///
	/// [`EndOfScope`](crate::parser::FailureKind::EndOfScope) at the end of the line
	pub fn advance(&mut self) -> Result<(), ParseFailure> {
		let Some(c) = self.char() else {
			return Err(ParseFailure::end_of_scope(self.position));
		};

		self.start_of_word = c == ' ' || c == '\t';
		self.position = self.position.step(c);

		Ok(())
	}

	/// move `count` characters forward on the current line
	///
	/// # errors
	///
	/// [`EndOfScope`](crate::parser::FailureKind::EndOfScope) if the line ends first
	pub fn advance_by(&mut self, count: usize) -> Result<(), ParseFailure> {
		for _ in 0..count {
			self.advance()?;
		}
		Ok(())
	}

	/// move to the start of the next line
	///
	/// moving past the last line leaves the cursor at the end of that line
	///
	/// # errors
	///
	/// [`EndOfScope`](crate::parser::FailureKind::EndOfScope) at the end of the block
	pub fn advance_line(&mut self) -> Result<(), ParseFailure> {
		if self.at_end_of_block() {
			return Err(ParseFailure::end_of_scope(self.position));
		}

		self.line_index += 1;

		if let Some(line) = self.block.lines.get(self.line_index) {
			self.position = line.start();
			self.start_of_word = true;
		} else if let Some(last) = self.block.lines.get(self.line_index - 1) {
			self.position = last.end_position(self.block.document.source());
		}

		Ok(())
	}

	/// skip spaces and tabs
	pub fn skip_whitespace(&mut self) {
		while self.at_whitespace() && self.advance().is_ok() {}
	}

	/// skip lines that are blank from the cursor on
	pub fn skip_empty_lines(&mut self) {
		while !self.at_end_of_block()
			&& self.at_whitespace_only_line()
			&& self.advance_line().is_ok()
		{}
	}

	/// the same cursor, moved past every remaining line of the block
	#[must_use]
	pub fn to_end_of_block(&self) -> Self {
		let mut end = self.clone();
		while end.advance_line().is_ok() {}
		end
	}

	pub(crate) fn state(&self) -> CursorState {
		CursorState {
			position: self.position,
			line_index: self.line_index,
			start_of_word: self.start_of_word,
		}
	}

	/// a cursor in this cursor's block and scope at a previously saved state
	pub(crate) fn restore(&self, state: CursorState) -> Self {
		Self {
			position: state.position,
			line_index: state.line_index,
			start_of_word: state.start_of_word,
			..self.clone()
		}
	}

	pub(crate) fn start_of_word_flag(&self) -> bool {
		self.start_of_word
	}
}

impl PartialEq for Cursor {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.block, &other.block)
			&& self.position == other.position
			&& self.start_of_word == other.start_of_word
	}
}

impl fmt::Debug for Cursor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Cursor")
			.field("position", &self.position.left())
			.field("line_index", &self.line_index)
			.field("start_of_word", &self.start_of_word)
			.finish_non_exhaustive()
	}
}
