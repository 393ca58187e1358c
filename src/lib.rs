#![doc = include_str!("../README.md")]
#![warn(
	clippy::pedantic,
	clippy::allow_attributes_without_reason,
	missing_docs
)]
#![allow(clippy::missing_errors_doc, reason = "capitalization :(")]
#![allow(
	clippy::match_same_arms,
	reason = "more confusing to merge in many cases"
)]
#![allow(clippy::wildcard_imports, reason = "used in element modules")]
#![allow(
	clippy::module_inception,
	reason = "elements may share their module name, but it doesn't make sense to merge them"
)]
#![allow(
	clippy::return_self_not_must_use,
	reason = "parser builders are obviously useless when dropped"
)]

use {
	crate::{
		diagnostics::{ContentDiagnostic, DiagnosticKind},
		document::{Document, DocumentLoader},
		scope::{ElementType, ScopeTemplate},
		tree::Node,
	},
	::miette::{Diagnostic, Severity},
	::std::rc::Rc,
	::tracing::{instrument, Level},
};
pub use {::miette, ::thiserror};

/// diagnostics collected while parsing
pub mod diagnostics;
/// documents, lines and positions
pub mod document;
/// the debug dump of a node tree
pub mod emit;
/// the standard elements
pub mod ext;
/// the block and markup grammar
pub mod grammar;
/// the parser combinator core
pub mod parser;
/// scopes, element types and the element parsing protocol
pub mod scope;
/// the parsed tree
pub mod tree;

#[cfg(test)]
mod tests;

/// gaintext's main context
#[derive(Debug)]
pub struct GainText {
	/// the elements every document starts out with
	pub elements: ScopeTemplate,
	/// supplies the documents named by `import`
	pub loader: Option<Rc<dyn DocumentLoader>>,

	/// whether the current operation is "ok"
	///
	/// this shouldn't really be set to `true` by anything except the parser
	pub ok: bool,
	/// diagnostics from the current document
	pub diagnostics: Vec<DiagnosticKind>,
}

impl GainText {
	/// construct an instance without any elements
	#[must_use]
	pub fn new() -> Self {
		Self {
			elements: ScopeTemplate::new(),
			loader: None,

			ok: true,
			diagnostics: Vec::new(),
		}
	}

	/// construct an instance with the [standard elements](ext::elements)
	#[must_use]
	pub fn standard() -> Self {
		Self {
			elements: ext::elements(),
			..Self::new()
		}
	}

	/// add a block element
	pub fn add_block(&mut self, element: ElementType) {
		self.elements.add_block(Rc::new(element));
	}

	/// add multiple block elements
	pub fn add_blocks(&mut self, elements: impl IntoIterator<Item = ElementType>) {
		for element in elements {
			self.add_block(element);
		}
	}

	/// add a markup element
	pub fn add_markup(&mut self, element: ElementType) {
		self.elements.add_markup(Rc::new(element));
	}

	/// add multiple markup elements
	pub fn add_markups(&mut self, elements: impl IntoIterator<Item = ElementType>) {
		for element in elements {
			self.add_markup(element);
		}
	}

	/// add every element of `elements`, replacing elements with the same name
	pub fn add_elements(&mut self, elements: ScopeTemplate) {
		self.elements.merge(elements);
	}

	/// make the block element `name` also available as `alias`, such as `block:%` for fences
	/// of `%`
	///
	/// returns `false` if there is no block element `name`
	pub fn alias_block(&mut self, alias: impl Into<String>, name: &str) -> bool {
		self.elements.alias_block(alias, name)
	}

	/// make the markup element `name` also available as `alias`, such as `span:%` for spans
	/// delimited by `%`
	///
	/// returns `false` if there is no markup element `name`
	pub fn alias_markup(&mut self, alias: impl Into<String>, name: &str) -> bool {
		self.elements.alias_markup(alias, name)
	}

	/// supply the documents named by `import`
	pub fn set_loader(&mut self, loader: impl DocumentLoader + 'static) {
		self.loader = Some(Rc::new(loader));
	}

	/// a document with its own root scope, seeded with this instance's elements
	#[must_use]
	pub fn document(&self, name: impl Into<String>, source: impl Into<String>) -> Document {
		let global = ext::scope_with(&self.elements);
		match &self.loader {
			Some(loader) => Document::with_loader(name, source, global, Rc::clone(loader)),
			None => Document::new(name, source, global),
		}
	}

	/// parse a complete document
	///
	/// returns
	/// - whether the operation was successful
	/// - the diagnostics produced during the operation (may not be empty on success)
	/// - the nodes, empty if the operation was not successful
	#[instrument(skip(self, source), level = Level::INFO)]
	pub fn parse_document(
		&mut self,
		name: String,
		source: String,
	) -> (bool, Vec<DiagnosticKind>, Vec<Node>) {
		// stash state
		let old_ok = ::core::mem::replace(&mut self.ok, true);
		let old_diagnostics = ::core::mem::take(&mut self.diagnostics);

		// parse
		let nodes = match self.document(name, source).parse() {
			Ok(nodes) => {
				for node in &nodes {
					for error in node.errors() {
						if let Some(diagnostic) = ContentDiagnostic::from_node(&error) {
							self.diag(DiagnosticKind::Content(diagnostic));
						}
					}
				}
				nodes
			}
			Err(error) => {
				self.diag(DiagnosticKind::Parse(error));
				Vec::new()
			}
		};

		// restore stash
		let ok = ::core::mem::replace(&mut self.ok, old_ok);
		let diagnostics = ::core::mem::replace(&mut self.diagnostics, old_diagnostics);

		(ok, diagnostics, nodes)
	}

	/// record a diagnostic
	#[track_caller]
	#[instrument(skip(self), level = Level::ERROR)]
	pub fn diag(&mut self, diagnostic: DiagnosticKind) {
		if let None | Some(Severity::Error) = diagnostic.severity() {
			self.ok = false;
		}

		::tracing::info!(origin = %::core::panic::Location::caller(), "rust origin");

		self.diagnostics.push(diagnostic);
	}
}

impl Default for GainText {
	fn default() -> Self {
		Self::standard()
	}
}
