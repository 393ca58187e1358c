use {
	super::*,
	crate::{
		grammar::markup::{brackets::brackets, entity::entity},
		parser::span::line,
	},
	::pretty_assertions::assert_eq,
	::rstest::rstest,
};

/// the inline content of the first line of `source`
fn inline(source: &str) -> Vec<Node> {
	parse(&line(), &document(source)).0
}

#[rstest]
#[case("The costs are $5 and $10.\n", "1:1..1:25")]
#[case("-$10 and -$5.\n", "1:1..1:13")]
#[case("~10$.\n", "1:1..1:5")]
#[case("a * b * c\n", "1:1..1:9")]
fn unmatched_delimiters_are_text(#[case] source: &str, #[case] expected: &str) {
	let nodes = inline(source);
	assert_eq!(names(&nodes), ["text"]);
	assert_eq!(range(&nodes[0]), expected);
}

#[test]
fn inline_math() {
	let nodes = inline("The formula is $E = mc^2$.\n");

	assert_eq!(names(&nodes), ["text", "math", "text"]);
	assert_eq!(range(&nodes[0]), "1:1..1:15");
	assert_eq!(range(&nodes[1]), "1:16..1:25");
	assert_eq!(range(&nodes[1].children()[0]), "1:17..1:24");
	assert_eq!(range(&nodes[2]), "1:26..1:26");
	assert_eq!(nodes[2].source_content(), ".");
}

#[rstest]
#[case("*~**foo**~*", "~**foo**~", "**foo**")]
#[case("*~20*x*30~*", "~20*x*30~", "20*x*30")]
#[case("*~*~*", "~*~", "*")]
fn raw_within_emphasis(#[case] source: &str, #[case] raw: &str, #[case] content: &str) {
	let nodes = inline(source);

	assert_eq!(names(&nodes), ["em"]);
	assert_eq!(names(nodes[0].children()), ["raw"]);
	let raw_node = &nodes[0].children()[0];
	assert_eq!(raw_node.source_content(), raw);
	assert_eq!(names(raw_node.children()), ["text"]);
	assert_eq!(raw_node.children()[0].source_content(), content);
}

#[test]
fn delimiters_need_word_boundaries() {
	let nodes = inline("*~*");
	assert_eq!(names(&nodes), ["em"]);
	assert_eq!(names(nodes[0].children()), ["text"]);
	assert_eq!(nodes[0].children()[0].source_content(), "~");

	let nodes = inline("*~*~*~");
	assert_eq!(names(&nodes), ["em", "text"]);
	assert_eq!(nodes[1].source_content(), "~");
}

#[test]
fn nested_emphasis_and_code() {
	let nodes = inline("*a `b*c` d* _e_\n");

	assert_eq!(names(&nodes), ["em", "text", "em"]);
	assert_eq!(names(nodes[0].children()), ["text", "code", "text"]);
	assert_eq!(nodes[0].children()[1].children()[0].source_content(), "b*c");
}

#[test]
fn raw_brackets() {
	let nodes = inline("brackets: ~[~ and ~]~");
	assert_eq!(names(&nodes), ["text", "raw", "text", "raw"]);

	let nodes = inline("tilde: [raw:~]");
	assert_eq!(names(&nodes), ["text", "raw"]);
	assert_eq!(nodes[1].source_content(), "[raw:~]");
	assert_eq!(nodes[1].children()[0].source_content(), "~");
}

#[test]
fn escapes() {
	let nodes = inline("\\[raw:]\n");
	assert_eq!(names(&nodes), ["raw", "text"]);
	assert_eq!(nodes[0].source_content(), "\\[");
	assert_eq!(nodes[0].children()[0].source_content(), "[");
	assert_eq!(nodes[1].source_content(), "raw:]");

	let nodes = inline("\\\n");
	assert_eq!(names(&nodes), ["error"]);
	assert_eq!(range(&nodes[0]), "1:1..1:1");
	assert_eq!(nodes[0].error_message(), Some("cannot escape end-of-line"));
}

#[test]
fn escaped_line_ends_need_no_raw() {
	init_tracing();
	let doc = Document::new("test", "a\\\n", ext::empty_scope());
	let nodes = parse(&line(), &doc).0;

	assert_eq!(names(&nodes), ["text", "error"]);
	assert_eq!(range(&nodes[1]), "1:2..1:2");
	assert_eq!(nodes[1].error_message(), Some("cannot escape end-of-line"));

	let doc = Document::new("test", "\\a\n", ext::empty_scope());
	assert_eq!(names(&parse(&line(), &doc).0), ["text"]);
}

#[rstest]
#[case("[test:text]stuff", "1:1..1:11", "1:7..1:10")]
#[case("[test: text] stuff", "1:1..1:12", "1:8..1:11")]
fn bracketed_elements(#[case] source: &str, #[case] expected: &str, #[case] body: &str) {
	let (nodes, _) = parse(&brackets(), &document_with_test(source));

	assert_eq!(names(&nodes), ["test"]);
	assert_eq!(range(&nodes[0]), expected);
	assert_eq!(names(nodes[0].children()), ["text"]);
	assert_eq!(range(&nodes[0].children()[0]), body);
}

#[test]
fn bracketed_elements_take_attributes() {
	let (nodes, _) = parse(&brackets(), &document_with_test("[test #a: x]"));
	assert_eq!(names(nodes[0].children()), ["attribute", "text"]);
}

#[rstest]
#[case("no[]")]
#[case("[]")]
#[case("[raw:")]
#[case("[nothing: x]")]
fn not_brackets(#[case] source: &str) {
	assert!(rejects(&brackets(), &document_with_test(source)));
}

#[rstest]
#[case("&para;")]
#[case("&#182;")]
#[case("&#x00b6;")]
fn entities(#[case] source: &str) {
	let (nodes, cursor) = parse(&entity(), &document(source));
	assert_eq!(names(&nodes), ["html"]);
	assert_eq!(nodes[0].source_content(), source);
	assert!(cursor.at_end_of_line());
}

#[rstest]
#[case("amp;")]
#[case("&amp")]
#[case("& amp;")]
#[case("&am p;")]
#[case("&amp ;")]
#[case("&#x;")]
fn not_entities(#[case] source: &str) {
	assert!(rejects(&entity(), &document(source)));
}
