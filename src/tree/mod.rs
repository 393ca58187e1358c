use {
	crate::document::{Position, SourceRange},
	::core::fmt,
	::std::rc::Rc,
};

/// what kind of node a [`Node`] is, effectively [`Any`](core::any::Any) with a name
///
/// two node types are the same if they have the same concrete type and name
pub trait NodeType: ::downcast_rs::Downcast + fmt::Debug {
	/// the name used in dumps
	fn name(&self) -> &str;
}

::downcast_rs::impl_downcast!(NodeType);

/// whether `a` and `b` are the same node type
#[must_use]
pub fn same_type(a: &dyn NodeType, b: &dyn NodeType) -> bool {
	::downcast_rs::Downcast::as_any(a).type_id() == ::downcast_rs::Downcast::as_any(b).type_id()
		&& a.name() == b.name()
}

/// a node produced by an element
#[derive(Debug)]
pub struct ElementNodeType {
	name: String,
}

impl ElementNodeType {
	/// construct a node type for elements called `name`
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

impl NodeType for ElementNodeType {
	fn name(&self) -> &str {
		&self.name
	}
}

/// plain text
#[derive(Debug)]
pub struct TextNodeType;

impl NodeType for TextNodeType {
	fn name(&self) -> &str {
		"text"
	}
}

/// structure the grammar produces that is not an element, such as lines, titles and attributes
#[derive(Debug)]
pub struct SyntaxNodeType {
	name: &'static str,
}

impl SyntaxNodeType {
	/// construct a syntax node type
	#[must_use]
	pub const fn new(name: &'static str) -> Self {
		Self { name }
	}
}

impl NodeType for SyntaxNodeType {
	fn name(&self) -> &str {
		self.name
	}
}

/// malformed content
#[derive(Debug)]
pub struct ErrorNodeType {
	/// what is wrong
	pub message: String,
}

impl NodeType for ErrorNodeType {
	fn name(&self) -> &str {
		"error"
	}
}

/// a named attribute of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAttribute {
	/// present or not
	Bool(String),
	/// a number
	Number(String, i64),
	/// a string
	Text(String, String),
}

impl NodeAttribute {
	/// the attribute's name
	#[must_use]
	pub fn name(&self) -> &str {
		match self {
			Self::Bool(name) | Self::Number(name, _) | Self::Text(name, _) => name,
		}
	}

	/// the attribute's value, if it is a string
	#[must_use]
	pub fn text(&self) -> Option<&str> {
		match self {
			Self::Text(_, value) => Some(value),
			_ => None,
		}
	}
}

struct NodeData {
	node_type: Rc<dyn NodeType>,
	range: SourceRange,
	attributes: Vec<NodeAttribute>,
	children: Vec<Node>,
	source: Rc<str>,
}

/// an immutable node of the parsed tree
///
/// cloning shares the node, equality compares the range and node type only
#[derive(Clone)]
pub struct Node(Rc<NodeData>);

impl Node {
	/// construct a node
	///
	/// `source` is the text of the document `range` points into
	#[must_use]
	pub fn new(
		node_type: Rc<dyn NodeType>,
		range: SourceRange,
		source: Rc<str>,
		attributes: Vec<NodeAttribute>,
		children: Vec<Node>,
	) -> Self {
		Self(Rc::new(NodeData {
			node_type,
			range,
			attributes,
			children,
			source,
		}))
	}

	/// construct a node without children or attributes
	#[must_use]
	pub fn leaf(node_type: Rc<dyn NodeType>, range: SourceRange, source: Rc<str>) -> Self {
		Self::new(node_type, range, source, Vec::new(), Vec::new())
	}

	/// construct a text node
	#[must_use]
	pub fn text(range: SourceRange, source: Rc<str>) -> Self {
		Self::leaf(Rc::new(TextNodeType), range, source)
	}

	/// construct an error node, logging the error
	#[must_use]
	pub fn error(
		range: SourceRange,
		message: impl Into<String>,
		source: Rc<str>,
		children: Vec<Node>,
	) -> Self {
		let message = message.into();
		::tracing::warn!(%range, message = message.as_str(), "malformed content");

		Self::new(
			Rc::new(ErrorNodeType { message }),
			range,
			source,
			Vec::new(),
			children,
		)
	}

	/// the node's type
	#[must_use]
	pub fn node_type(&self) -> &Rc<dyn NodeType> {
		&self.0.node_type
	}

	/// the node type's name
	#[must_use]
	pub fn name(&self) -> &str {
		self.0.node_type.name()
	}

	/// the node type, if it is a `T`
	#[must_use]
	pub fn downcast<T: NodeType>(&self) -> Option<&T> {
		self.0.node_type.downcast_ref::<T>()
	}

	/// the error message, if this is an error node
	#[must_use]
	pub fn error_message(&self) -> Option<&str> {
		self.downcast::<ErrorNodeType>()
			.map(|error| error.message.as_str())
	}

	/// the covered range
	#[must_use]
	pub fn range(&self) -> SourceRange {
		self.0.range
	}

	/// first covered position
	#[must_use]
	pub fn start(&self) -> Position {
		self.0.range.start
	}

	/// first position after the node
	#[must_use]
	pub fn end(&self) -> Position {
		self.0.range.end
	}

	/// attributes in insertion order
	#[must_use]
	pub fn attributes(&self) -> &[NodeAttribute] {
		&self.0.attributes
	}

	/// the first attribute called `name`
	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&NodeAttribute> {
		self.0.attributes.iter().find(|attr| attr.name() == name)
	}

	/// child nodes
	#[must_use]
	pub fn children(&self) -> &[Node] {
		&self.0.children
	}

	/// the first child of type `gaintext-title`
	#[must_use]
	pub fn title(&self) -> Option<&Node> {
		self.children()
			.iter()
			.find(|child| child.name() == "gaintext-title")
	}

	/// the source text the node covers
	#[must_use]
	pub fn source_content(&self) -> &str {
		self.0.range.slice(&self.0.source)
	}

	/// visit this node and all descendants, parents first
	pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
		visit(self);
		for child in self.children() {
			child.walk(visit);
		}
	}

	/// all error nodes in this subtree, outermost first
	#[must_use]
	pub fn errors(&self) -> Vec<Node> {
		let mut errors = Vec::new();
		self.walk(&mut |node| {
			if node.error_message().is_some() {
				errors.push(node.clone());
			}
		});
		errors
	}
}

impl PartialEq for Node {
	fn eq(&self, other: &Self) -> bool {
		self.0.range == other.0.range && same_type(&*self.0.node_type, &*other.0.node_type)
	}
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut debug = f.debug_struct("Node");
		debug
			.field("type", &self.name())
			.field("range", &format_args!("{}", self.0.range));
		if !self.0.attributes.is_empty() {
			debug.field("attributes", &self.0.attributes);
		}
		if !self.0.children.is_empty() {
			debug.field("children", &self.0.children);
		}
		debug.finish()
	}
}
