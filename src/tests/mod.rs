use {
	crate::{
		document::Document,
		ext,
		parser::{cursor::Cursor, Parser},
		scope::ElementType,
		tree::{Node, NodeAttribute},
	},
	::std::rc::Rc,
};

mod blocks;
mod combinators;
mod cursor;
mod markup;

fn init_tracing() {
	let _ = ::tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(::tracing::Level::TRACE)
		.try_init();
}

/// a document using the standard elements
fn document(source: &str) -> Document {
	init_tracing();
	Document::new("test", source, ext::standard_scope())
}

/// a document using the standard elements and a `test` block and markup element
fn document_with_test(source: &str) -> Document {
	let document = document(source);
	document
		.global()
		.register_block(Rc::new(ElementType::new("test")));
	document
		.global()
		.register_markup(Rc::new(ElementType::new("test")));
	document
}

/// run `parser` at the start of `document`, which must succeed
fn parse<T: 'static>(parser: &Parser<T>, document: &Document) -> (T, Cursor) {
	match parser.parse(&document.start()) {
		Ok(result) => result,
		Err(failure) => panic!("unexpected failure: {failure}"),
	}
}

/// whether `parser` fails at the start of `document`
fn rejects<T: 'static>(parser: &Parser<T>, document: &Document) -> bool {
	parser.parse(&document.start()).is_err()
}

fn range(node: &Node) -> String {
	node.range().to_string()
}

fn names(nodes: &[Node]) -> Vec<&str> {
	nodes.iter().map(Node::name).collect()
}

fn text(name: &str, value: &str) -> NodeAttribute {
	NodeAttribute::Text(name.to_string(), value.to_string())
}
