/// `#id .class key=value` attribute lists
pub mod attributes;
/// element types and the element parsing protocol
pub mod element;

pub use element::{finish_element, Element, ElementHook, ElementType};
use {
	crate::{
		parser::{span::SpanParser, Parser},
		tree::Node,
	},
	::core::{
		cell::RefCell,
		fmt,
		sync::atomic::{AtomicU32, Ordering},
	},
	::hashbrown::HashMap,
	::std::rc::Rc,
};

/// which of a scope's registries to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registry {
	/// elements that start blocks
	Block,
	/// elements within lines
	Markup,
}

/// element types by name, falling back to a parent registry
#[derive(Default)]
pub struct ElementRegistry {
	parent: Option<Rc<ElementRegistry>>,
	elements: RefCell<HashMap<String, Rc<ElementType>>>,
}

impl ElementRegistry {
	/// construct an empty registry
	#[must_use]
	pub fn new(parent: Option<Rc<ElementRegistry>>) -> Self {
		Self {
			parent,
			elements: RefCell::new(HashMap::new()),
		}
	}

	/// look `name` up here and in the parents
	#[must_use]
	pub fn get(&self, name: &str) -> Option<Rc<ElementType>> {
		if let Some(element) = self.elements.borrow().get(name) {
			return Some(Rc::clone(element));
		}
		self.parent.as_ref().and_then(|parent| parent.get(name))
	}

	/// register `element` under `name`, replacing what was registered here before
	pub fn insert(&self, name: impl Into<String>, element: Rc<ElementType>) {
		self.elements.borrow_mut().insert(name.into(), element);
	}

	/// everything registered here, ignoring parents, sorted by name
	#[must_use]
	pub fn local(&self) -> Vec<(String, Rc<ElementType>)> {
		let mut local = self
			.elements
			.borrow()
			.iter()
			.map(|(name, element)| (name.clone(), Rc::clone(element)))
			.collect::<Vec<_>>();
		local.sort_by(|(a, _), (b, _)| a.cmp(b));
		local
	}

	/// whether `name` is registered here, ignoring parents
	#[must_use]
	pub fn contains_local(&self, name: &str) -> bool {
		self.elements.borrow().contains_key(name)
	}
}

impl fmt::Debug for ElementRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let elements = self.elements.borrow();
		let mut names = elements.keys().collect::<Vec<_>>();
		names.sort();
		f.debug_struct("ElementRegistry")
			.field("elements", &names)
			.field("parent", &self.parent)
			.finish()
	}
}

/// element types a child scope starts out with
#[derive(Debug, Clone, Default)]
pub struct ScopeTemplate {
	block: HashMap<String, Rc<ElementType>>,
	markup: HashMap<String, Rc<ElementType>>,
}

impl ScopeTemplate {
	/// construct an empty template
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// add a block element under its own name
	#[must_use]
	pub fn with_block(mut self, element: ElementType) -> Self {
		self.add_block(Rc::new(element));
		self
	}

	/// add a markup element under its own name
	#[must_use]
	pub fn with_markup(mut self, element: ElementType) -> Self {
		self.add_markup(Rc::new(element));
		self
	}

	/// add a block element under its own name
	pub fn add_block(&mut self, element: Rc<ElementType>) {
		self.block.insert(element.name().to_string(), element);
	}

	/// add a markup element under its own name
	pub fn add_markup(&mut self, element: Rc<ElementType>) {
		self.markup.insert(element.name().to_string(), element);
	}

	/// make the block element `name` also available as `alias`
	///
	/// returns `false` if there is no block element `name`
	pub fn alias_block(&mut self, alias: impl Into<String>, name: &str) -> bool {
		let Some(element) = self.block.get(name).cloned() else {
			return false;
		};
		self.block.insert(alias.into(), element);
		true
	}

	/// make the markup element `name` also available as `alias`
	///
	/// returns `false` if there is no markup element `name`
	pub fn alias_markup(&mut self, alias: impl Into<String>, name: &str) -> bool {
		let Some(element) = self.markup.get(name).cloned() else {
			return false;
		};
		self.markup.insert(alias.into(), element);
		true
	}

	/// add everything from `other`, replacing entries with the same name
	pub fn merge(&mut self, other: ScopeTemplate) {
		self.block.extend(other.block);
		self.markup.extend(other.markup);
	}

	/// the element registered under `name`
	#[must_use]
	pub fn get(&self, registry: Registry, name: &str) -> Option<&Rc<ElementType>> {
		match registry {
			Registry::Block => self.block.get(name),
			Registry::Markup => self.markup.get(name),
		}
	}

	/// whether the template adds nothing
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.block.is_empty() && self.markup.is_empty()
	}
}

/// a change to a scope requested by a finished element
#[derive(Debug, Clone)]
pub enum Registration {
	/// register an element type under a name
	Element {
		/// which registry to change
		registry: Registry,
		/// the name to register under
		name: String,
		/// the element type
		element: Rc<ElementType>,
	},
}

/// identity of a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
	fn fresh() -> Self {
		static NEXT: AtomicU32 = AtomicU32::new(0);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}
}

/// a lexical scope, deciding which elements are recognized and how text is parsed
///
/// child scopes see everything their parent sees, registrations only ever affect the scope
/// they are made in
pub struct Scope {
	id: ScopeId,
	parent: Option<Rc<Scope>>,
	block: Rc<ElementRegistry>,
	markup: Rc<ElementRegistry>,
	block_parser: Parser<Vec<Node>>,
	span_parser: SpanParser,
}

impl Scope {
	/// construct a scope without parent
	#[must_use]
	pub fn root(block_parser: Parser<Vec<Node>>, span_parser: SpanParser) -> Rc<Self> {
		Rc::new(Self {
			id: ScopeId::fresh(),
			parent: None,
			block: Rc::new(ElementRegistry::new(None)),
			markup: Rc::new(ElementRegistry::new(None)),
			block_parser,
			span_parser,
		})
	}

	/// construct a child scope seeded with the elements of `template`
	#[must_use]
	pub fn child(self: &Rc<Self>, template: &ScopeTemplate) -> Rc<Self> {
		let child = Rc::new(Self {
			id: ScopeId::fresh(),
			parent: Some(Rc::clone(self)),
			block: Rc::new(ElementRegistry::new(Some(Rc::clone(&self.block)))),
			markup: Rc::new(ElementRegistry::new(Some(Rc::clone(&self.markup)))),
			block_parser: self.block_parser.clone(),
			span_parser: self.span_parser.clone(),
		});
		child.extend(template);
		child
	}

	/// this scope's identity, cached results are only reused within the same scope
	#[must_use]
	pub fn id(&self) -> ScopeId {
		self.id
	}

	/// the enclosing scope
	#[must_use]
	pub fn parent(&self) -> Option<&Rc<Scope>> {
		self.parent.as_ref()
	}

	/// the parser for a block's content
	#[must_use]
	pub fn block_parser(&self) -> &Parser<Vec<Node>> {
		&self.block_parser
	}

	/// the parser for inline content
	#[must_use]
	pub fn span_parser(&self) -> &SpanParser {
		&self.span_parser
	}

	/// the registry of `kind`
	#[must_use]
	pub fn registry(&self, kind: Registry) -> &ElementRegistry {
		match kind {
			Registry::Block => &self.block,
			Registry::Markup => &self.markup,
		}
	}

	/// look up the block element `name`
	#[must_use]
	pub fn block(&self, name: &str) -> Option<Rc<ElementType>> {
		self.block.get(name)
	}

	/// look up the markup element `name`
	#[must_use]
	pub fn markup(&self, name: &str) -> Option<Rc<ElementType>> {
		self.markup.get(name)
	}

	/// register a block element under its own name
	pub fn register_block(&self, element: Rc<ElementType>) {
		let name = element.name().to_string();
		self.block.insert(name, element);
	}

	/// register a markup element under its own name
	pub fn register_markup(&self, element: Rc<ElementType>) {
		let name = element.name().to_string();
		self.markup.insert(name, element);
	}

	/// add all elements of `template` to this scope
	pub fn extend(&self, template: &ScopeTemplate) {
		for (name, element) in &template.block {
			self.block.insert(name.as_str(), Rc::clone(element));
		}
		for (name, element) in &template.markup {
			self.markup.insert(name.as_str(), Rc::clone(element));
		}
	}

	/// the registrations that would recreate what is registered in this scope itself
	#[must_use]
	pub fn registrations(&self) -> Vec<Registration> {
		[Registry::Block, Registry::Markup]
			.into_iter()
			.flat_map(|registry| {
				self.registry(registry)
					.local()
					.into_iter()
					.map(move |(name, element)| Registration::Element {
						registry,
						name,
						element,
					})
			})
			.collect()
	}

	/// carry out a registration
	pub fn apply(&self, registration: Registration) {
		match registration {
			Registration::Element {
				registry,
				name,
				element,
			} => {
				::tracing::debug!(?registry, name = name.as_str(), "registering element");
				self.registry(registry).insert(name, element);
			}
		}
	}
}

impl fmt::Debug for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Scope")
			.field("id", &self.id)
			.field("block", &self.block)
			.field("markup", &self.markup)
			.finish_non_exhaustive()
	}
}
