use {super::*, ::pretty_assertions::assert_eq};

#[test]
fn moves_through_lines() {
	let doc = document("abc\ndef\n");
	let mut cursor = doc.start();
	assert!(!cursor.at_end_of_line());
	assert!(!cursor.at_end_of_block());

	let start = cursor.position();
	cursor.advance_by(1).unwrap();
	assert_ne!(cursor.position(), start);
	assert_eq!(cursor.position().right(), "1:2");
	assert!(!cursor.at_end_of_line());

	cursor.advance_by(2).unwrap();
	assert_eq!(cursor.position().right(), "1:4");
	assert!(cursor.at_end_of_line());
	assert!(!cursor.at_end_of_block());
	assert!(cursor.advance().is_err());

	cursor.advance_line().unwrap();
	assert_eq!(cursor.position().right(), "2:1");
	assert!(!cursor.at_end_of_line());

	cursor.advance_line().unwrap();
	assert!(cursor.at_end_of_block());
	assert_eq!(cursor.position().left(), "2:3");
	assert!(cursor.advance_line().is_err());
}

#[test]
fn clones_move_independently() {
	let doc = document("abc");
	let start = doc.start();
	let mut moved = start.clone();
	moved.advance().unwrap();

	assert_eq!(start.position().left(), "1:0");
	assert_eq!(moved.position().left(), "1:1");
	assert_ne!(start, moved);
}

#[test]
fn tracks_word_starts() {
	let doc = document("ab cd");
	let mut cursor = doc.start();
	assert!(cursor.at_start_of_word());

	cursor.advance().unwrap();
	assert!(!cursor.at_start_of_word());

	cursor.advance().unwrap();
	assert!(cursor.at_whitespace());
	assert!(!cursor.at_start_of_word());

	cursor.advance().unwrap();
	assert!(cursor.at_start_of_word());

	cursor.advance().unwrap();
	assert!(!cursor.at_start_of_word());
	cursor.mark_start_of_word();
	assert!(cursor.at_start_of_word());
}

#[test]
fn extracts_text() {
	let doc = document("abcdef\nghi");
	let mut cursor = doc.start();
	let start = cursor.position();
	cursor.advance_by(3).unwrap();

	assert_eq!(cursor.head(start), "abc");
	assert_eq!(cursor.tail(), "def");
	assert_eq!(cursor.char(), Some('d'));
	assert!(cursor.at_one_of("xyzd"));
	assert!(cursor.at_alphanumeric());
}

#[test]
fn skips_whitespace_and_empty_lines() {
	let doc = document("  \n\t\n  x\n");
	let mut cursor = doc.start();
	assert!(cursor.at_whitespace_only_line());

	cursor.skip_empty_lines();
	assert_eq!(cursor.position().right(), "3:1");
	assert!(!cursor.at_whitespace_only_line());

	cursor.skip_whitespace();
	assert_eq!(cursor.char(), Some('x'));
}

#[test]
fn starts_empty_blocks_at_the_end() {
	let doc = document("");
	let cursor = doc.start();

	assert!(cursor.at_end_of_block());
	assert!(cursor.at_end_of_line());
	assert_eq!(cursor.position(), doc.end_position());
	assert_eq!(cursor.char(), None);
}

#[test]
fn sub_blocks_see_only_their_lines() {
	let doc = document("a\nb\nc\n");
	let mut second = doc.start();
	second.advance_line().unwrap();

	let block = second.sub_block(second.line().copied().into_iter().collect());
	assert_eq!(block.block().lines().len(), 1);
	assert_eq!(block.tail(), "b");
	assert!(!Rc::ptr_eq(block.block(), second.block()));

	let mut end = block.clone();
	end.advance_line().unwrap();
	assert!(end.at_end_of_block());
	assert_eq!(end.position().left(), "2:1");
}
