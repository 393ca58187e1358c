use {
	crate::{
		document::{Document, Line, Position},
		parser::{
			basic::{end_of_line, whitespace, whole_block},
			combinators::satisfying,
			cursor::Cursor,
			span::SpanParser,
			ParseFailure, ParseResult, Parser,
		},
		scope::{attributes::attribute_group, Registration, Scope, ScopeTemplate},
		tree::{ElementNodeType, Node, NodeAttribute, NodeType, SyntaxNodeType},
	},
	::core::fmt,
	::std::rc::Rc,
};

/// runs when an element is finished, may request changes to the scope the element was found in
pub trait ElementHook {
	/// inspect the finished element and its node
	///
	/// # errors
	///
	/// a message if the element is malformed, the node is then wrapped in an error node
	fn finish(&self, element: &Element, node: &Node) -> Result<Vec<Registration>, String>;
}

/// describes an element: its name, how its title and body are parsed and which elements its
/// content may use
pub struct ElementType {
	name: String,
	node_type: Rc<dyn NodeType>,
	body: Option<Parser<Vec<Node>>>,
	title: Option<SpanParser>,
	template: ScopeTemplate,
	hook: Option<Rc<dyn ElementHook>>,
	definition: Vec<Node>,
}

impl ElementType {
	/// construct an element type producing nodes called `name`
	///
	/// without a body or title parser the scope's defaults are used
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			node_type: Rc::new(ElementNodeType::new(name.clone())),
			name,
			body: None,
			title: None,
			template: ScopeTemplate::new(),
			hook: None,
			definition: Vec::new(),
		}
	}

	/// parse the body with `body` instead of the scope's block parser
	#[must_use]
	pub fn with_body(mut self, body: Parser<Vec<Node>>) -> Self {
		self.body = Some(body);
		self
	}

	/// parse titles and span content with `title` instead of the scope's span parser
	#[must_use]
	pub fn with_title(mut self, title: SpanParser) -> Self {
		self.title = Some(title);
		self
	}

	/// make the elements of `template` available within the element
	#[must_use]
	pub fn with_template(mut self, template: ScopeTemplate) -> Self {
		self.template = template;
		self
	}

	/// run `hook` whenever an element of this type is finished
	#[must_use]
	pub fn with_hook(mut self, hook: impl ElementHook + 'static) -> Self {
		self.hook = Some(Rc::new(hook));
		self
	}

	/// keep the nodes of the `define` element this type was created by
	#[must_use]
	pub fn with_definition(mut self, definition: Vec<Node>) -> Self {
		self.definition = definition;
		self
	}

	/// the element's name
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// the type of the nodes this element produces
	#[must_use]
	pub fn node_type(&self) -> &Rc<dyn NodeType> {
		&self.node_type
	}

	/// the body parser, if not the scope's
	#[must_use]
	pub fn body(&self) -> Option<&Parser<Vec<Node>>> {
		self.body.as_ref()
	}

	/// the title parser, if not the scope's
	#[must_use]
	pub fn title(&self) -> Option<&SpanParser> {
		self.title.as_ref()
	}

	/// elements available within this element
	#[must_use]
	pub fn template(&self) -> &ScopeTemplate {
		&self.template
	}

	/// the content of the definition of a document-defined element, empty for others
	#[must_use]
	pub fn definition(&self) -> &[Node] {
		&self.definition
	}
}

impl fmt::Debug for ElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementType")
			.field("name", &self.name)
			.field("body", &self.body.is_some())
			.field("title", &self.title.is_some())
			.field("hook", &self.hook.is_some())
			.field("definition", &self.definition.len())
			.finish_non_exhaustive()
	}
}

/// an element being parsed
///
/// construct parsers own it while they work on an element and turn it into a node with
/// [`finish_element`]
pub struct Element {
	element_type: Rc<ElementType>,
	scope: Rc<Scope>,
	document: Document,
	source: Rc<str>,
	title: Vec<Node>,
	attributes: Vec<Node>,
	trailing_attributes: Vec<Node>,
	body: Vec<Node>,
	node_attributes: Vec<NodeAttribute>,
	title_attributes: Vec<NodeAttribute>,
}

impl Element {
	/// start an element of `element_type` found at `cursor`
	#[must_use]
	pub fn new(element_type: Rc<ElementType>, cursor: &Cursor) -> Self {
		Self {
			element_type,
			scope: Rc::clone(cursor.scope()),
			document: cursor.document().clone(),
			source: Rc::clone(cursor.document().source()),
			title: Vec::new(),
			attributes: Vec::new(),
			trailing_attributes: Vec::new(),
			body: Vec::new(),
			node_attributes: Vec::new(),
			title_attributes: Vec::new(),
		}
	}

	/// the element's type
	#[must_use]
	pub fn element_type(&self) -> &Rc<ElementType> {
		&self.element_type
	}

	/// the scope the element was found in
	#[must_use]
	pub fn scope(&self) -> &Rc<Scope> {
		&self.scope
	}

	/// the document the element is in
	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// the `gaintext-title` node, if there is one
	#[must_use]
	pub fn title(&self) -> Option<&Node> {
		self.title.first()
	}

	/// the parsed body
	#[must_use]
	pub fn body(&self) -> &[Node] {
		&self.body
	}

	/// the scope the element's content is parsed in
	#[must_use]
	pub fn child_scope(&self) -> Rc<Scope> {
		self.scope.child(self.element_type.template())
	}

	/// add a node attribute
	pub fn add_attribute(&mut self, attribute: NodeAttribute) {
		self.node_attributes.push(attribute);
	}

	/// add an attribute to the title node, must be called before [`Element::parse_title`]
	pub fn add_title_attribute(&mut self, attribute: NodeAttribute) {
		self.title_attributes.push(attribute);
	}

	/// add attribute nodes that precede the title
	pub fn add_attribute_nodes(&mut self, nodes: Vec<Node>) {
		self.attributes.extend(nodes);
	}

	/// add nodes to the body
	pub fn push_body(&mut self, nodes: Vec<Node>) {
		self.body.extend(nodes);
	}

	fn span_parser(&self, cursor: &Cursor) -> SpanParser {
		self.element_type
			.title()
			.cloned()
			.unwrap_or_else(|| cursor.scope().span_parser().clone())
	}

	fn body_parser(&self, cursor: &Cursor) -> Parser<Vec<Node>> {
		self.element_type
			.body()
			.cloned()
			.unwrap_or_else(|| cursor.scope().block_parser().clone())
	}

	/// parse the rest of the line at `cursor` as the title
	///
	/// trailing `{...}` attributes are split off first, a title that cannot be parsed becomes an
	/// `invalid title` error node
	pub fn parse_title(&mut self, cursor: &Cursor) {
		let line_end = {
			let mut end = cursor.clone();
			while end.advance().is_ok() {}
			end.position()
		};
		let (title_end, trailing) =
			trailing_attributes(cursor).unwrap_or_else(|| (line_end, Vec::new()));
		self.trailing_attributes = trailing;

		let end = satisfying(move |cursor| cursor.position() == title_end);
		match self.span_parser(cursor).until(&end).parse(cursor) {
			Ok((nodes, _)) if nodes.is_empty() => {}
			Ok((nodes, _)) => self.title.push(Node::new(
				Rc::new(SyntaxNodeType::new("gaintext-title")),
				cursor.position().to(title_end),
				Rc::clone(&self.source),
				self.title_attributes.clone(),
				nodes,
			)),
			Err(_) => self.title.push(Node::error(
				cursor.position().to(line_end),
				"invalid title",
				Rc::clone(&self.source),
				Vec::new(),
			)),
		}
	}

	/// parse inline content from `cursor` up to `end` in the child scope
	///
	/// # errors
	///
	/// if the content does not end with `end` on the current line
	pub fn parse_span(&mut self, cursor: &Cursor, end: &Parser<()>) -> ParseResult<()> {
		let scoped = cursor.with_scope(self.child_scope());
		let (nodes, after) = self.span_parser(&scoped).until(end).parse(&scoped)?;
		self.body.extend(nodes);
		Ok(((), after.with_scope(Rc::clone(cursor.scope()))))
	}

	/// parse `lines` as a new block with the body parser, in the child scope
	///
	/// content the body parser does not consume becomes error nodes
	///
	/// # errors
	///
	/// committed failures of the body parser
	pub fn parse_body(&mut self, cursor: &Cursor, lines: Vec<Line>) -> Result<(), ParseFailure> {
		let block = cursor.sub_block(lines).with_scope(self.child_scope());
		let parser = whole_block("wrong block", self.body_parser(&block));
		let (nodes, _) = parser.parse(&block)?;
		self.body.extend(nodes);
		Ok(())
	}

	/// parse the body from `cursor` on within the current block, in the child scope
	///
	/// # errors
	///
	/// if the body parser fails
	pub fn parse_body_here(&mut self, cursor: &Cursor) -> ParseResult<()> {
		let scoped = cursor.with_scope(self.child_scope());
		let (nodes, after) = self.body_parser(&scoped).parse(&scoped)?;
		self.body.extend(nodes);
		Ok(((), after.with_scope(Rc::clone(cursor.scope()))))
	}

	fn to_node(&self, start: Position, end: Position) -> Node {
		let children = self
			.title
			.iter()
			.chain(&self.attributes)
			.chain(&self.trailing_attributes)
			.chain(&self.body)
			.cloned()
			.collect();

		Node::new(
			Rc::clone(self.element_type.node_type()),
			start.to(end),
			Rc::clone(&self.source),
			self.node_attributes.clone(),
			children,
		)
	}
}

/// turn `element` into a node covering `start..end`
///
/// the element type's hook runs and its registrations are applied to the scope the element was
/// found in, so they are visible to everything parsed after it
#[must_use]
pub fn finish_element(element: Element, start: Position, end: Position) -> Node {
	let node = element.to_node(start, end);

	::tracing::trace!(element = element.element_type.name(), range = %node.range(), "element");

	let Some(hook) = &element.element_type.hook else {
		return node;
	};

	match hook.finish(&element, &node) {
		Ok(registrations) => {
			for registration in registrations {
				element.scope.apply(registration);
			}
			node
		}
		Err(message) => Node::error(node.range(), message, Rc::clone(&element.source), vec![node]),
	}
}

/// `{...}` at the end of the line at `cursor`
///
/// returns where the title before it ends (excluding whitespace) and the attribute nodes
fn trailing_attributes(cursor: &Cursor) -> Option<(Position, Vec<Node>)> {
	let group = attribute_group()
		.then_ignore(whitespace().optional())
		.then_ignore(end_of_line());

	let mut scan = cursor.clone();
	let mut content_end = cursor.position();

	loop {
		if scan.at_char('{') {
			if let Ok((nodes, _)) = group.parse(&scan) {
				return Some((content_end, nodes));
			}
		}

		let c = scan.char()?;
		scan.advance().ok()?;
		if c != ' ' && c != '\t' {
			content_end = scan.position();
		}
	}
}
