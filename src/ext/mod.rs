/// `code`/`raw` elements
pub mod code;
/// paragraphs, sections, lists, quotes and placeholders
pub mod common;
/// `define`/`param` elements
pub mod define;
/// `em`/`math` elements
pub mod formatting;
/// `import` element
pub mod import;

use {
	crate::{
		grammar,
		scope::{Scope, ScopeTemplate},
	},
	::std::rc::Rc,
};

/// every standard element and alias
#[must_use]
pub fn elements() -> ScopeTemplate {
	let mut elements = common::elements();
	elements.merge(code::elements());
	elements.merge(formatting::elements());
	elements.merge(define::elements());
	elements.merge(import::elements());
	elements
}

/// a root scope using the default grammar, without any elements
#[must_use]
pub fn empty_scope() -> Rc<Scope> {
	Scope::root(grammar::block_parser(), grammar::span_parser())
}

/// a root scope using the default grammar and `elements`
#[must_use]
pub fn scope_with(elements: &ScopeTemplate) -> Rc<Scope> {
	let scope = empty_scope();
	scope.extend(elements);
	scope
}

/// a root scope using the default grammar and the standard elements
#[must_use]
pub fn standard_scope() -> Rc<Scope> {
	scope_with(&elements())
}
