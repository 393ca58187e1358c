use {
	crate::parser::{cursor::Cursor, ParseFailure, ParseResult, Parser},
	::core::cell::OnceCell,
	::std::rc::Rc,
};

impl<T: 'static> Parser<T> {
	/// transform the produced value
	#[must_use]
	pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
		Parser::new(move |cursor| {
			let (value, end) = self.parse(cursor)?;
			Ok((f(value), end))
		})
	}

	/// transform the produced value, `None` turns the match into a failure at the start
	#[must_use]
	pub fn try_map<U: 'static>(self, f: impl Fn(T) -> Option<U> + 'static) -> Parser<U> {
		Parser::new(move |cursor| {
			let (value, end) = self.parse(cursor)?;
			f(value)
				.map(|mapped| (mapped, end))
				.ok_or_else(|| ParseFailure::not_found(cursor.position()))
		})
	}

	/// run `next` after this parser, producing both values
	#[must_use]
	pub fn then<U: 'static>(self, next: Parser<U>) -> Parser<(T, U)> {
		Parser::new(move |cursor| {
			let (first, cursor) = self.parse(cursor)?;
			let (second, cursor) = next.parse(&cursor)?;
			Ok(((first, second), cursor))
		})
	}

	/// run `next` after this parser, keeping only this parser's value
	#[must_use]
	pub fn then_ignore<U: 'static>(self, next: Parser<U>) -> Parser<T> {
		self.then(next).map(|(value, _)| value)
	}

	/// run `next` after this parser, keeping only `next`'s value
	#[must_use]
	pub fn ignore_then<U: 'static>(self, next: Parser<U>) -> Parser<U> {
		self.then(next).map(|(_, value)| value)
	}

	/// run the parser `f` builds from this parser's value
	#[must_use]
	pub fn and_then<U: 'static>(self, f: impl Fn(T) -> Parser<U> + 'static) -> Parser<U> {
		Parser::new(move |cursor| {
			let (value, cursor) = self.parse(cursor)?;
			f(value).parse(&cursor)
		})
	}

	/// try `other` from the same cursor if this parser fails
	#[must_use]
	pub fn or(self, other: Parser<T>) -> Parser<T> {
		alternatives(vec![self, other])
	}

	/// `None` instead of a failure, without moving the cursor
	#[must_use]
	pub fn optional(self) -> Parser<Option<T>> {
		Parser::new(move |cursor| match self.parse(cursor) {
			Ok((value, end)) => Ok((Some(value), end)),
			Err(failure) if failure.committed => Err(failure),
			Err(_) => Ok((None, cursor.clone())),
		})
	}

	/// match without consuming anything
	#[must_use]
	pub fn lookahead(self) -> Parser<T> {
		Parser::new(move |cursor| {
			let (value, _) = self.parse(cursor)?;
			Ok((value, cursor.clone()))
		})
	}

	/// mark every failure of this parser as committed
	#[must_use]
	pub fn commit(self) -> Parser<T> {
		Parser::new(move |cursor| self.parse(cursor).map_err(ParseFailure::commit))
	}

	/// repeat this parser, see [`Repeated`]
	#[must_use]
	pub fn repeated(self) -> Repeated<T> {
		Repeated {
			item: self,
			skip: None,
			min: 1,
			max: None,
		}
	}
}

impl<T: 'static> Parser<Vec<T>> {
	/// run `next` after this parser, concatenating both results
	#[must_use]
	pub fn append(self, next: Parser<Vec<T>>) -> Parser<Vec<T>> {
		self.then(next).map(|(mut first, second)| {
			first.extend(second);
			first
		})
	}
}

/// always succeeds with a clone of `value`, consuming nothing
#[must_use]
pub fn pure<T: Clone + 'static>(value: T) -> Parser<T> {
	Parser::new(move |cursor| Ok((value.clone(), cursor.clone())))
}

/// succeeds without consuming anything if `predicate` holds at the cursor
#[must_use]
pub fn satisfying(predicate: impl Fn(&Cursor) -> bool + 'static) -> Parser<()> {
	Parser::new(move |cursor| {
		if predicate(cursor) {
			Ok(((), cursor.clone()))
		} else {
			Err(ParseFailure::not_found(cursor.position()))
		}
	})
}

/// succeeds without consuming anything if `parser` fails at the cursor
#[must_use]
pub fn not<T: 'static>(parser: Parser<T>) -> Parser<()> {
	Parser::new(move |cursor| match parser.parse(cursor) {
		Ok(_) => Err(ParseFailure::not_found(cursor.position())),
		Err(failure) if failure.committed => Err(failure),
		Err(_) => Ok(((), cursor.clone())),
	})
}

/// the first of `parsers` that matches, each tried from the same cursor
#[must_use]
pub fn alternatives<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
	Parser::new(move |cursor| {
		for parser in &parsers {
			match parser.parse(cursor) {
				Ok(result) => return Ok(result),
				Err(failure) if failure.committed => return Err(failure),
				Err(_) => {}
			}
		}
		Err(ParseFailure::not_found(cursor.position()))
	})
}

/// all of `parsers` one after another, concatenating their results
#[must_use]
pub fn sequence<T: 'static>(parsers: Vec<Parser<Vec<T>>>) -> Parser<Vec<T>> {
	Parser::new(move |cursor| {
		let mut values = Vec::new();
		let mut cursor = cursor.clone();
		for parser in &parsers {
			let (found, next) = parser.parse(&cursor)?;
			values.extend(found);
			cursor = next;
		}
		Ok((values, cursor))
	})
}

/// a parser defined after it is used, for recursive grammars
///
/// running the parser before [`DeferredSlot::define`] is called fails with `NotFound`
#[must_use]
pub fn deferred<T: 'static>() -> (Parser<T>, DeferredSlot<T>) {
	let slot = Rc::new(OnceCell::<Parser<T>>::new());

	let parser = {
		let slot = Rc::clone(&slot);
		Parser::new(move |cursor| match slot.get() {
			Some(parser) => parser.parse(cursor),
			None => Err(ParseFailure::not_found(cursor.position())),
		})
	};

	(parser, DeferredSlot(slot))
}

/// where the definition of a [`deferred`] parser goes
pub struct DeferredSlot<T>(Rc<OnceCell<Parser<T>>>);

impl<T: 'static> DeferredSlot<T> {
	/// set the parser, returns `false` if it was already set
	pub fn define(&self, parser: Parser<T>) -> bool {
		self.0.set(parser).is_ok()
	}
}

/// a repetition of a parser
///
/// matches at least `min` times (1 unless changed), at most `max` times, stopping at the end of
/// the block, when the item fails, or when an item consumes nothing
///
/// the skip parser runs before the first item and after every item
pub struct Repeated<T> {
	item: Parser<T>,
	skip: Option<Parser<()>>,
	min: usize,
	max: Option<usize>,
}

impl<T: 'static> Repeated<T> {
	/// require at least `min` items
	#[must_use]
	pub fn at_least(mut self, min: usize) -> Self {
		self.min = min;
		self
	}

	/// stop after `max` items
	#[must_use]
	pub fn at_most(mut self, max: usize) -> Self {
		self.max = Some(max);
		self
	}

	/// run `skip` around items
	#[must_use]
	pub fn skipping(mut self, skip: Parser<()>) -> Self {
		self.skip = Some(skip);
		self
	}

	/// produce the items as a list
	#[must_use]
	pub fn collect(self) -> Parser<Vec<T>> {
		let Self {
			item,
			skip,
			min,
			max,
		} = self;

		Parser::new(move |start| {
			let skip_from = |cursor: &Cursor| -> ParseResult<()> {
				match &skip {
					Some(skip) => skip.parse(cursor),
					None => Ok(((), cursor.clone())),
				}
			};

			let mut values = Vec::new();
			let ((), mut cursor) = skip_from(start)?;

			while !cursor.at_end_of_block() && max.map_or(true, |max| values.len() < max) {
				let (value, next) = match item.parse(&cursor) {
					Ok(found) => found,
					Err(failure) if failure.committed => return Err(failure),
					Err(_) => break,
				};
				let progressed = next != cursor;

				values.push(value);
				cursor = skip_from(&next)?.1;

				if !progressed {
					break;
				}
			}

			if values.len() < min {
				return Err(ParseFailure::not_found(start.position()));
			}

			Ok((values, cursor))
		})
	}
}

impl<T: 'static> Repeated<Vec<T>> {
	/// produce the items' results concatenated
	#[must_use]
	pub fn flatten(self) -> Parser<Vec<T>> {
		self.collect().map(|lists| lists.into_iter().flatten().collect())
	}
}
