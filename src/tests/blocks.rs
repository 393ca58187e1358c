use {
	super::*,
	crate::{
		grammar::blocks::{
			element_block::indented_element,
			fenced::fenced,
			list::{list, list_item},
			paragraph::paragraph,
			quote::block_quote,
			section::titled_section,
		},
		parser::FailureKind,
	},
	::pretty_assertions::assert_eq,
	::rstest::rstest,
};

mod paragraphs {
	use {super::*, ::pretty_assertions::assert_eq};

	#[rstest]
	#[case("")]
	#[case("\n")]
	#[case("\n\n")]
	fn rejects_blank_input(#[case] source: &str) {
		assert!(rejects(&paragraph(), &document(source)));
	}

	#[rstest]
	#[case("a\n", "1:1..1:1", &["1:1..1:1"])]
	#[case("a\n\n", "1:1..2:0", &["1:1..1:1"])]
	#[case("a\nb\nc\n", "1:1..3:1", &["1:1..1:1", "2:1..2:1", "3:1..3:1"])]
	fn holds_lines(#[case] source: &str, #[case] expected: &str, #[case] lines: &[&str]) {
		let (nodes, _) = parse(&paragraph(), &document(source));

		assert_eq!(names(&nodes), ["p"]);
		assert_eq!(range(&nodes[0]), expected);
		assert!(nodes[0].children().iter().all(|line| line.name() == "line"));
		assert_eq!(
			nodes[0].children().iter().map(range).collect::<Vec<_>>(),
			lines
		);
	}

	#[test]
	fn end_at_blank_lines() {
		let nodes = document("a\nb\n\nc\n").parse().unwrap();
		assert_eq!(names(&nodes), ["p", "p"]);
		assert_eq!(range(&nodes[0]), "1:1..3:0");
		assert_eq!(range(&nodes[1]), "4:1..4:1");
	}

	#[test]
	fn end_at_indented_lines() {
		let nodes = document("a\nb\n   c\nd\n").parse().unwrap();
		assert_eq!(names(&nodes), ["p", "p"]);
		assert_eq!(range(&nodes[0]), "1:1..3:0");
		assert_eq!(range(&nodes[1]), "3:1..4:1");
		assert_eq!(nodes[1].children().len(), 2);
	}

	#[rstest]
	#[case("a\nb\n - c\n", "3:1..3:4")]
	#[case("a\nb\n- c\n", "3:1..3:3")]
	#[case("a\nb\n* c\n", "3:1..3:3")]
	fn end_at_lists(#[case] source: &str, #[case] list_range: &str) {
		let nodes = document(source).parse().unwrap();
		assert_eq!(names(&nodes), ["p", "ul"]);
		assert_eq!(range(&nodes[1]), list_range);
	}

	#[test]
	fn end_at_quotes_and_fences() {
		let nodes = document("a\n> b\nc\n```\nd\n```\n").parse().unwrap();
		assert_eq!(names(&nodes), ["p", "blockquote", "p", "code"]);
	}
}

mod lists {
	use {super::*, ::pretty_assertions::assert_eq};

	#[rstest]
	#[case("")]
	#[case("\n")]
	#[case("-abc\n")]
	#[case("abc\n")]
	fn item_rejects(#[case] source: &str) {
		assert!(rejects(&list_item(), &document(source)));
	}

	#[test]
	fn item_holds_a_paragraph() {
		let (nodes, _) = parse(&list_item(), &document("- item1\n"));

		assert_eq!(names(&nodes), ["li"]);
		assert_eq!(range(&nodes[0]), "1:1..1:7");
		let paragraph = &nodes[0].children()[0];
		assert_eq!(paragraph.name(), "p");
		assert_eq!(names(paragraph.children()), ["line"]);
		assert_eq!(paragraph.children()[0].source_content(), "item1");
	}

	#[test]
	fn item_continues_on_indented_lines() {
		let (nodes, _) = parse(&list_item(), &document("- line one\n  line two"));

		assert_eq!(range(&nodes[0]), "1:1..2:10");
		assert_eq!(names(nodes[0].children()), ["p"]);
		assert_eq!(nodes[0].children()[0].children().len(), 2);
	}

	#[rstest]
	#[case("- item1\n- item2", "1:1..2:7", &["1:1..2:0", "2:1..2:7"])]
	#[case(" - item1\n - item2", "1:1..2:8", &["1:2..2:1", "2:2..2:8"])]
	#[case("- item1\n\n- item2\n", "1:1..3:7", &["1:1..2:0", "3:1..3:7"])]
	fn list_of_items(#[case] source: &str, #[case] expected: &str, #[case] items: &[&str]) {
		let (nodes, _) = parse(&list(), &document(source));

		assert_eq!(names(&nodes), ["ul"]);
		assert_eq!(range(&nodes[0]), expected);
		assert!(nodes[0].children().iter().all(|item| item.name() == "li"));
		assert_eq!(
			nodes[0].children().iter().map(range).collect::<Vec<_>>(),
			items
		);
	}

	#[test]
	fn nested_lists() {
		let (nodes, _) = parse(&list(), &document("- a\n  - b\n  - c\n- d\n"));

		assert_eq!(names(nodes[0].children()), ["li", "li"]);
		let first = &nodes[0].children()[0];
		assert_eq!(names(first.children()), ["p", "ul"]);
		assert_eq!(names(first.children()[1].children()), ["li", "li"]);
	}
}

mod sections {
	use {super::*, ::pretty_assertions::assert_eq};

	#[rstest]
	#[case("")]
	#[case("abc\ndef\n\n")]
	#[case("abc\n==\n")]
	#[case("abc\n=-=\n")]
	#[case("abc\n===\ndef\n")]
	fn not_sections(#[case] source: &str) {
		assert!(rejects(&titled_section(), &document(source)));
	}

	#[rstest]
	#[case("abc\n===\n", "1:1..2:3")]
	#[case("abc\n===\n\n", "1:1..3:0")]
	#[case("abc\n= = =\n", "1:1..2:5")]
	fn title_only(#[case] source: &str, #[case] expected: &str) {
		let (nodes, _) = parse(&titled_section(), &document(source));

		assert_eq!(names(&nodes), ["section"]);
		assert_eq!(range(&nodes[0]), expected);
		assert_eq!(names(nodes[0].children()), ["gaintext-title"]);
		assert_eq!(range(&nodes[0].children()[0]), "1:1..1:3");
		assert!(nodes[0].attributes().is_empty());
		assert_eq!(
			nodes[0].children()[0].attributes(),
			[text("underline", "=")]
		);
	}

	#[test]
	fn named_element() {
		let (nodes, _) = parse(&titled_section(), &document_with_test("test: abc\n===\n\n"));

		assert_eq!(names(&nodes), ["test"]);
		let title = nodes[0].title().unwrap();
		assert_eq!(title.source_content(), "abc");
	}

	#[test]
	fn content() {
		let (nodes, _) = parse(&titled_section(), &document("abc\n===\n\ndef\n"));

		assert_eq!(range(&nodes[0]), "1:1..4:3");
		assert_eq!(names(nodes[0].children()), ["gaintext-title", "p"]);

		let paragraph = &nodes[0].children()[1];
		assert_eq!(range(paragraph), "4:1..4:3");
		let line = &paragraph.children()[0];
		assert_eq!(names(line.children()), ["text"]);
		assert_eq!(range(&line.children()[0]), "4:1..4:3");
	}

	#[test]
	fn hierarchy() {
		let nodes = document("abc\n===\n\ndef\n---\n\nghi\n===\n").parse().unwrap();

		assert_eq!(names(&nodes), ["section", "section"]);
		assert!(nodes.iter().all(|section| {
			section.title().unwrap().attributes() == [text("underline", "=")]
		}));

		let nested = &nodes[0].children()[1];
		assert_eq!(nested.name(), "section");
		assert_eq!(
			nested.title().unwrap().attributes(),
			[text("underline", "-")]
		);
		assert_eq!(nested.title().unwrap().source_content(), "def");
	}

	#[test]
	fn attributes() {
		let (nodes, _) = parse(&titled_section(), &document("section #name: abc\n===\n"));
		assert_eq!(names(nodes[0].children()), ["gaintext-title", "attribute"]);

		let (nodes, _) = parse(
			&titled_section(),
			&document("section #name x=y: title text\n===\n\ncontent\n"),
		);
		assert_eq!(
			names(nodes[0].children()),
			["gaintext-title", "attribute", "attribute", "p"]
		);
		assert_eq!(nodes[0].title().unwrap().source_content(), "title text");
	}
}

mod elements {
	use {super::*, ::pretty_assertions::assert_eq};

	#[rstest]
	#[case("test:\n", "1:1..1:5", 0)]
	#[case("test: title\n", "1:1..1:11", 1)]
	#[case("test: title\n content\n", "1:1..2:8", 2)]
	#[case("test: title\n\n content\n", "1:1..3:8", 2)]
	#[case("test #name:\n", "1:1..1:11", 1)]
	#[case("test: {#name}\n", "1:1..1:13", 1)]
	fn indented(#[case] source: &str, #[case] expected: &str, #[case] children: usize) {
		let (nodes, _) = parse(&indented_element(), &document_with_test(source));

		assert_eq!(names(&nodes), ["test"]);
		assert_eq!(range(&nodes[0]), expected);
		assert_eq!(nodes[0].children().len(), children);
	}

	#[test]
	fn title_and_trailing_attributes() {
		let (nodes, _) = parse(
			&indented_element(),
			&document_with_test("test: title text {#name x=y}\n  content\n"),
		);

		assert_eq!(
			names(nodes[0].children()),
			["gaintext-title", "attribute", "attribute", "p"]
		);
		let title = nodes[0].title().unwrap();
		assert_eq!(names(title.children()), ["text"]);
		assert_eq!(title.children()[0].source_content(), "title text");
	}

	#[test]
	fn unknown_names_are_not_elements() {
		assert!(rejects(&indented_element(), &document("nothing: here\n")));
		assert!(rejects(&indented_element(), &document_with_test("test here\n")));
	}

	#[test]
	fn element_blocks_report_stray_lines() {
		let nodes = document_with_test("test: a\nstray line\ntest: b\n").parse().unwrap();

		assert_eq!(names(&nodes), ["test", "error", "test"]);
		assert_eq!(nodes[1].error_message(), Some("expected element"));
		assert_eq!(range(&nodes[1]), "2:1..2:10");
	}
}

mod fences {
	use {super::*, ::pretty_assertions::assert_eq};

	#[rstest]
	#[case("```\n```\n", "1:1..2:3", &[])]
	#[case("```\nabc\ndef\n```\n", "1:1..4:3", &["code-text", "code-text"])]
	#[case("```\n\n  x\n```\n", "1:1..4:3", &["code-text", "code-text"])]
	#[case("``` title text\nabc\ndef\n```\n", "1:1..4:3", &["gaintext-title", "code-text", "code-text"])]
	#[case("``` .name:\nabc\ndef\n```\n", "1:1..4:3", &["attribute", "code-text", "code-text"])]
	#[case(
		"```#name x=y: title text\nabc\ndef\n```\n",
		"1:1..4:3",
		&["gaintext-title", "attribute", "attribute", "code-text", "code-text"],
	)]
	fn fenced_blocks(#[case] source: &str, #[case] expected: &str, #[case] children: &[&str]) {
		let (nodes, _) = parse(&fenced(), &document(source));

		assert_eq!(names(&nodes), ["code"]);
		assert_eq!(range(&nodes[0]), expected);
		assert_eq!(names(nodes[0].children()), children);
		assert_eq!(nodes[0].attribute("delimiter"), Some(&text("delimiter", "```")));
	}

	#[test]
	fn longer_delimiters() {
		let (nodes, _) = parse(&fenced(), &document("````\n```\n````\n"));
		assert_eq!(nodes[0].children()[0].source_content(), "```");
	}

	#[test]
	fn math_blocks() {
		let (nodes, _) = parse(&fenced(), &document("$$$\nE = mc^2\n$$$\n"));
		assert_eq!(names(&nodes), ["math"]);
		assert_eq!(names(nodes[0].children()), ["code-text"]);
	}

	#[rstest]
	#[case("```\nabc\ndef\n\n")]
	#[case("```\n")]
	#[case("```\nabc\n``\n")]
	fn unclosed_fences_are_fatal(#[case] source: &str) {
		let failure = fenced().parse(&document(source).start()).unwrap_err();
		assert!(failure.committed);
		assert_eq!(failure.kind, FailureKind::EndOfScope);
	}

	#[rstest]
	#[case("``\nabc\n``\n")]
	#[case("%%%\nabc\n%%%\n")]
	fn not_fences(#[case] source: &str) {
		assert!(rejects(&fenced(), &document(source)));
	}
}

mod quotes {
	use {super::*, ::pretty_assertions::assert_eq};

	#[rstest]
	#[case("")]
	#[case("\n")]
	#[case("\n\n")]
	#[case(">a\n")]
	fn not_quotes(#[case] source: &str) {
		assert!(rejects(&block_quote(), &document(source)));
	}

	#[test]
	fn single_line() {
		let (nodes, _) = parse(&block_quote(), &document("> a\n"));
		assert_eq!(names(&nodes), ["blockquote"]);
		assert_eq!(range(&nodes[0]), "1:1..1:3");
		assert_eq!(names(nodes[0].children()), ["p"]);
	}

	#[test]
	fn ends_without_prefix() {
		let (nodes, cursor) = parse(&block_quote(), &document("> a\nb\n"));
		assert_eq!(range(&nodes[0]), "1:1..2:0");
		assert_eq!(cursor.position(), nodes[0].end());
	}

	#[test]
	fn continues_with_prefix() {
		let (nodes, _) = parse(&block_quote(), &document("> a\n> b\n"));
		assert_eq!(range(&nodes[0]), "1:1..2:3");
		assert_eq!(names(nodes[0].children()), ["p"]);
		assert_eq!(nodes[0].children()[0].children().len(), 2);
	}
}
