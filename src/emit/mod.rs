use crate::tree::{Node, NodeAttribute};

/// a structural dump of a node tree, used to inspect and test the parser
///
/// ```text
/// <p start="1:1" end="1:5">
///  <line start="1:1" end="1:5">
///   <text start="1:1" end="1:5">
///    <src>hello</src>
///   </text>
///  </line>
/// </p>
/// ```
#[derive(Debug, Default)]
pub struct Dump {
	/// the output
	pub write: String,
}

impl Dump {
	/// construct an empty dump
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// write `node` and its descendants, indented by `level` spaces
	pub fn node(&mut self, node: &Node, level: usize) {
		self.indent(level);
		self.write.push('<');
		self.write.push_str(node.name());
		self.write.push_str(&format!(
			" start=\"{}\" end=\"{}\"",
			node.start().right(),
			node.end().left()
		));
		for attribute in node.attributes() {
			self.attribute(attribute);
		}
		self.write.push_str(">\n");

		if node.children().is_empty() {
			self.indent(level + 1);
			self.write.push_str("<src>");
			self.write
				.push_str(&html_escape::encode_text(node.source_content()));
			self.write.push_str("</src>\n");
		} else {
			for child in node.children() {
				self.node(child, level + 1);
			}
		}

		self.indent(level);
		self.write.push_str("</");
		self.write.push_str(node.name());
		self.write.push_str(">\n");
	}

	fn attribute(&mut self, attribute: &NodeAttribute) {
		match attribute {
			NodeAttribute::Bool(name) => self.write.push_str(&format!(" {name}")),
			NodeAttribute::Number(name, value) => {
				self.write.push_str(&format!(" {name}='{value}'"));
			}
			NodeAttribute::Text(name, value) => self.write.push_str(&format!(
				" {name}='{}'",
				html_escape::encode_single_quoted_attribute(value)
			)),
		}
	}

	fn indent(&mut self, level: usize) {
		self.write.extend(::core::iter::repeat(' ').take(level));
	}
}

/// dump `nodes` one after another
#[must_use]
pub fn dump(nodes: &[Node]) -> String {
	let mut dump = Dump::new();
	for node in nodes {
		dump.node(node, 0);
	}
	dump.write
}
