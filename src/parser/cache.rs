use {
	crate::{
		document::Position,
		parser::{
			cursor::{Cursor, CursorState},
			ParseFailure, ParseResult, Parser, ParserId,
		},
		scope::ScopeId,
		tree::Node,
	},
	::core::cell::RefCell,
	::hashbrown::HashMap,
};

/// what a cached result is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
	parser: ParserId,
	scope: ScopeId,
	position: Position,
	start_of_word: bool,
}

impl CacheKey {
	fn new(parser: ParserId, cursor: &Cursor) -> Self {
		Self {
			parser,
			scope: cursor.scope().id(),
			position: cursor.position(),
			start_of_word: cursor.start_of_word_flag(),
		}
	}
}

#[derive(Clone)]
enum CachedResult {
	Parsed { nodes: Vec<Node>, end: CursorState },
	Failed(ParseFailure),
}

/// results of cached parsers within one block
///
/// results are kept per parser, scope, position and start-of-word state. the end cursor is
/// stored without its block and scope, both are taken from the cursor asking
#[derive(Default)]
pub struct ResultCache {
	entries: RefCell<HashMap<CacheKey, CachedResult>>,
}

impl ResultCache {
	/// number of stored results
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// whether nothing is stored
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}

	fn lookup(&self, key: &CacheKey, cursor: &Cursor) -> Option<ParseResult<Vec<Node>>> {
		self.entries.borrow().get(key).map(|cached| match cached {
			CachedResult::Parsed { nodes, end } => Ok((nodes.clone(), cursor.restore(*end))),
			CachedResult::Failed(failure) => Err(*failure),
		})
	}

	fn store(&self, key: CacheKey, result: &ParseResult<Vec<Node>>) {
		let cached = match result {
			Ok((nodes, end)) => CachedResult::Parsed {
				nodes: nodes.clone(),
				end: end.state(),
			},
			Err(failure) => CachedResult::Failed(*failure),
		};
		self.entries.borrow_mut().insert(key, cached);
	}
}

impl Parser<Vec<Node>> {
	/// remember the results of this parser per block, scope, position and start-of-word state
	///
	/// failures are remembered as well
	#[must_use]
	pub fn cached(self) -> Self {
		Parser::new(move |cursor| {
			let key = CacheKey::new(self.id(), cursor);
			let cache = cursor.block().cache();

			if let Some(result) = cache.lookup(&key, cursor) {
				return result;
			}

			let result = self.parse(cursor);
			cache.store(key, &result);
			result
		})
	}
}
