use {
	super::*,
	crate::parser::{
		basic::{character, literal, literal_char, token, whitespace},
		combinators::{alternatives, deferred, not, pure, satisfying, sequence},
		FailureKind,
	},
	::pretty_assertions::assert_eq,
	::rstest::rstest,
};

#[test]
fn map_and_try_map() {
	let doc = document("ab");
	assert_eq!(parse(&literal("ab").map(|()| 5), &doc).0, 5);

	let digit = character().try_map(|c| c.to_digit(10));
	assert!(rejects(&digit, &doc));
	assert_eq!(parse(&digit, &document("7")).0, 7);
}

#[test]
fn then_runs_in_order() {
	let both = literal("a").then(literal("b"));
	let ((), end) = parse(&both.clone().map(|_| ()), &document("abc"));
	assert_eq!(end.position().left(), "1:2");
	assert!(rejects(&both, &document("ac")));

	let (c, _) = parse(&literal("a").ignore_then(character()), &document("ab"));
	assert_eq!(c, 'b');
	let (c, end) = parse(&character().then_ignore(literal("b")), &document("ab"));
	assert_eq!(c, 'a');
	assert_eq!(end.position().left(), "1:2");
}

#[test]
fn and_then_picks_the_next_parser() {
	let twice = character().and_then(|c| if c == 'a' { literal("a") } else { literal("bb") });
	assert!(parse(&twice, &document("aa")).1.at_end_of_line());
	assert!(parse(&twice, &document("xbb")).1.at_end_of_line());
	assert!(rejects(&twice, &document("xa")));
}

#[test]
fn or_tries_from_the_same_cursor() {
	let doc = document("ab");
	let ((), end) = parse(&literal("x").or(literal("a")), &doc);
	assert_eq!(end.position().left(), "1:1");
	assert!(rejects(&literal("x").or(literal("y")), &doc));
	assert!(rejects(&alternatives::<()>(Vec::new()), &doc));
}

#[test]
fn optional_and_lookahead_keep_the_cursor() {
	let doc = document("ab");
	let start = doc.start();

	let (found, end) = literal("x").optional().parse(&start).unwrap();
	assert_eq!(found, None);
	assert_eq!(end, start);

	let ((), end) = literal("ab").lookahead().parse(&start).unwrap();
	assert_eq!(end, start);
}

#[test]
fn not_inverts() {
	let doc = document("ab");
	let start = doc.start();
	assert_eq!(not(literal("x")).parse(&start).unwrap().1, start);
	assert!(rejects(&not(literal("a")), &doc));
}

#[test]
fn satisfying_checks_the_cursor() {
	assert!(!rejects(&satisfying(Cursor::at_end_of_line), &document("")));
	assert!(rejects(&satisfying(Cursor::at_end_of_line), &document("a")));
}

#[test]
fn committed_failures_are_not_recovered() {
	let doc = document("a");
	let committed = literal("x").commit();

	for parser in [
		committed.clone().or(literal("a")),
		committed.clone().optional().map(|_| ()),
		not(committed.clone()),
		committed.clone().repeated().at_least(0).collect().map(|_| ()),
	] {
		let failure = parser.parse(&doc.start()).unwrap_err();
		assert!(failure.committed);
		assert_eq!(failure.kind, FailureKind::NotFound);
	}
}

#[rstest]
#[case("aaab", 1, None, Some(3), "1:3")]
#[case("aaab", 4, None, None, "")]
#[case("aaab", 1, Some(2), Some(2), "1:2")]
#[case("b", 1, None, None, "")]
#[case("b", 0, None, Some(0), "1:0")]
fn repeated_counts(
	#[case] source: &str,
	#[case] min: usize,
	#[case] max: Option<usize>,
	#[case] expected: Option<usize>,
	#[case] end: &str,
) {
	let mut repeated = literal_char('a').repeated().at_least(min);
	if let Some(max) = max {
		repeated = repeated.at_most(max);
	}

	match repeated.collect().parse(&document(source).start()) {
		Ok((items, cursor)) => {
			assert_eq!(Some(items.len()), expected);
			assert_eq!(cursor.position().left(), end);
		}
		Err(_) => assert_eq!(expected, None),
	}
}

#[test]
fn repeated_stops_without_progress() {
	let (items, _) = parse(&pure(()).repeated().at_least(0).collect(), &document("a"));
	assert_eq!(items.len(), 1);
}

#[test]
fn repeated_skips_around_items() {
	let skip = whitespace().optional().map(|_| ());
	let (items, cursor) = parse(
		&literal_char('a').repeated().skipping(skip).collect(),
		&document(" a a  a "),
	);
	assert_eq!(items.len(), 3);
	assert!(cursor.at_end_of_line());
}

#[test]
fn sequence_and_append_concatenate() {
	let doc = document("ab");

	let (nodes, _) = parse(&sequence(vec![token("a"), token("b")]), &doc);
	assert_eq!(names(&nodes), ["token", "token"]);

	let (nodes, end) = parse(&token("a").append(token("b")), &doc);
	assert_eq!(nodes.len(), 2);
	assert_eq!(range(&nodes[1]), "1:2..1:2");
	assert!(end.at_end_of_line());
}

#[test]
fn deferred_parsers_can_recurse() {
	let (nested, slot) = deferred::<usize>();
	assert!(rejects(&nested, &document("()")));

	assert!(slot.define(
		literal_char('(')
			.ignore_then(nested.clone())
			.then_ignore(literal_char(')'))
			.map(|depth| depth + 1)
			.or(pure(0)),
	));
	assert!(!slot.define(pure(0)));

	let (depth, end) = parse(&nested, &document("((()))"));
	assert_eq!(depth, 3);
	assert_eq!(end.position().left(), "1:6");
}
