/// basic parsers: literals, character classes, lines and node builders
pub mod basic;
/// the per-block result cache
pub mod cache;
/// composing parsers
pub mod combinators;
/// cursors and blocks
pub mod cursor;
/// indented and prefixed line collection
pub mod indent;
/// span parsers, which parse inline content up to an end marker
pub mod span;

use {
	crate::{document::Position, parser::cursor::Cursor},
	::core::{
		fmt,
		sync::atomic::{AtomicU32, Ordering},
	},
	::std::rc::Rc,
};

/// identity of a parser
///
/// every constructed parser gets a fresh id, the result cache is keyed by it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParserId(u32);

impl ParserId {
	/// a new id, never handed out before
	#[must_use]
	pub fn fresh() -> Self {
		static NEXT: AtomicU32 = AtomicU32::new(0);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}
}

/// why a parser did not match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
	/// the input at the position does not match
	NotFound,
	/// the end of the current line or block was reached
	EndOfScope,
}

impl fmt::Display for FailureKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::NotFound => "nothing found",
			Self::EndOfScope => "end of scope",
		})
	}
}

/// a structural parse failure
///
/// a committed failure was raised past a point of no return, backtracking combinators pass it
/// on instead of trying something else
#[derive(Debug, Clone, Copy, PartialEq, Eq, ::thiserror::Error)]
#[error("{kind} at {at}")]
pub struct ParseFailure {
	/// what went wrong
	pub kind: FailureKind,
	/// where it went wrong
	pub at: Position,
	/// whether alternatives must not be tried
	pub committed: bool,
}

impl ParseFailure {
	/// the input at `at` does not match
	#[must_use]
	pub fn not_found(at: Position) -> Self {
		Self {
			kind: FailureKind::NotFound,
			at,
			committed: false,
		}
	}

	/// the end of the current line or block was reached at `at`
	#[must_use]
	pub fn end_of_scope(at: Position) -> Self {
		Self {
			kind: FailureKind::EndOfScope,
			at,
			committed: false,
		}
	}

	/// the same failure, marked as committed
	#[must_use]
	pub fn commit(self) -> Self {
		Self {
			committed: true,
			..self
		}
	}
}

/// the value produced by a parser and the cursor after it, or a failure
pub type ParseResult<T> = Result<(T, Cursor), ParseFailure>;

/// a parser producing a `T`
///
/// parsers are immutable and cheap to clone, they never modify the cursor they are given
pub struct Parser<T> {
	id: ParserId,
	run: Rc<dyn Fn(&Cursor) -> ParseResult<T>>,
}

impl<T: 'static> Parser<T> {
	/// construct a parser from a function
	pub fn new(run: impl Fn(&Cursor) -> ParseResult<T> + 'static) -> Self {
		Self {
			id: ParserId::fresh(),
			run: Rc::new(run),
		}
	}

	/// the identity of this parser
	#[must_use]
	pub fn id(&self) -> ParserId {
		self.id
	}

	/// run the parser at `cursor`
	///
	/// # errors
	///
	/// if the input at `cursor` does not match
	pub fn parse(&self, cursor: &Cursor) -> ParseResult<T> {
		(self.run)(cursor)
	}
}

impl<T> Clone for Parser<T> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			run: Rc::clone(&self.run),
		}
	}
}

impl<T> fmt::Debug for Parser<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Parser").field(&self.id).finish()
	}
}
