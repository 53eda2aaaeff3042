// Chunk: docs/chunks/attribute_runs - Per-character display attributes

//! Property tests: after any sequence of valid edits and attribute writes,
//! the attribute runs partition the content exactly and the line index
//! matches a fresh build of the same text.

use dux_buffer::{Attributes, NewlineStyle, Style, TextBuffer, TokenCategory};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

#[derive(Debug, Clone)]
enum Operation {
    Edit { start: usize, len: usize, text: String },
    Paint { start: usize, len: usize, category: usize },
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('a'),
            Just('b'),
            Just(' '),
            Just('\n'),
            Just('\r'),
            Just('é'),
        ],
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    let edit = (0usize..64, 0usize..6, text_strategy())
        .prop_map(|(start, len, text)| Operation::Edit { start, len, text });
    let paint = (0usize..64, 0usize..10, 0usize..TokenCategory::ALL.len())
        .prop_map(|(start, len, category)| Operation::Paint {
            start,
            len,
            category,
        });
    prop_oneof![edit, paint]
}

fn clamp(buffer: &TextBuffer, start: usize, len: usize) -> (usize, usize) {
    let start = start.min(buffer.len());
    let end = (start + len).min(buffer.len());
    (start, end)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn attributes_always_partition_content(
        initial in text_strategy(),
        ops in proptest::collection::vec(operation_strategy(), 0..24)
    ) {
        let mut buffer = TextBuffer::new();
        buffer.load(initial.as_bytes(), NewlineStyle::Lf).unwrap();

        for op in ops {
            match op {
                Operation::Edit { start, len, text } => {
                    let (start, end) = clamp(&buffer, start, len);
                    buffer.edit(start..end, &text).unwrap();
                }
                Operation::Paint { start, len, category } => {
                    let (start, end) = clamp(&buffer, start, len);
                    let attrs = Attributes::new(TokenCategory::ALL[category], Style::default());
                    buffer.set_attributes(start..end, attrs).unwrap();
                }
            }
            prop_assert!(buffer.attribute_runs().is_partition_of(buffer.len()));
        }

        let fresh = TextBuffer::from_str(&buffer.content());
        prop_assert_eq!(buffer.line_count(), fresh.line_count());
        for line in 0..buffer.line_count() {
            prop_assert_eq!(buffer.line_range(line), fresh.line_range(line));
        }
    }

    #[test]
    fn conversion_is_idempotent(initial in text_strategy(), target in 0usize..3) {
        let target = [NewlineStyle::Lf, NewlineStyle::Cr, NewlineStyle::CrLf][target];
        let mut buffer = TextBuffer::new();
        buffer.load(initial.as_bytes(), NewlineStyle::Lf).unwrap();

        buffer.convert_newlines(target).unwrap();
        let once = buffer.content();
        let lines = buffer.line_count();
        prop_assert!(buffer.convert_newlines(target).unwrap().is_none());
        prop_assert_eq!(buffer.content(), once);
        prop_assert_eq!(buffer.line_count(), lines);
    }
}
