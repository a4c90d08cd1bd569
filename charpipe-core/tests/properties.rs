//! Property tests for the transduction laws

use charpipe_core::{
    classify_whitespace, collapse_spaces, copy, count_bytes, count_lines, escape, unescape,
};
use proptest::prelude::*;

fn run_filter<'a, F>(op: F, input: &'a [u8]) -> Vec<u8>
where
    F: FnOnce(&mut &'a [u8], &mut Vec<u8>) -> charpipe_core::Result<()>,
{
    let mut source = input;
    let mut out = Vec::new();
    op(&mut source, &mut out).unwrap();
    out
}

proptest! {
    #[test]
    fn copy_is_identity(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(run_filter(copy, &input), input);
    }

    #[test]
    fn count_bytes_equals_length(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut source: &[u8] = &input;
        prop_assert_eq!(count_bytes(&mut source).unwrap(), input.len() as u64);
    }

    #[test]
    fn count_lines_equals_newline_count(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let expected = input.iter().filter(|&&b| b == b'\n').count() as u64;
        let mut source: &[u8] = &input;
        prop_assert_eq!(count_lines(&mut source).unwrap(), expected);
    }

    #[test]
    fn whitespace_classes_are_disjoint_and_bounded(
        input in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut source: &[u8] = &input;
        let report = classify_whitespace(&mut source).unwrap();
        prop_assert!(report.total() <= input.len() as u64);
        prop_assert_eq!(
            report.spaces,
            input.iter().filter(|&&b| b == b' ').count() as u64
        );
        prop_assert_eq!(
            report.tabs,
            input.iter().filter(|&&b| b == b'\t').count() as u64
        );
        prop_assert_eq!(
            report.newlines,
            input.iter().filter(|&&b| b == b'\n').count() as u64
        );
    }

    #[test]
    fn collapse_spaces_is_idempotent(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let once = run_filter(collapse_spaces, &input);
        let twice = run_filter(collapse_spaces, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn collapse_preserves_non_space_bytes(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let collapsed = run_filter(collapse_spaces, &input);
        let non_space_in: Vec<u8> = input.iter().copied().filter(|&b| b != b' ').collect();
        let non_space_out: Vec<u8> = collapsed.iter().copied().filter(|&b| b != b' ').collect();
        prop_assert_eq!(non_space_in, non_space_out);
    }

    #[test]
    fn escape_then_unescape_recovers_input(
        input in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let encoded = run_filter(escape, &input);
        let decoded = run_filter(unescape, &encoded);
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn escape_output_has_no_bare_special_bytes(
        input in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let encoded = run_filter(escape, &input);
        // Tabs and backspaces never survive encoding, and every backslash
        // starts a two-byte escape.
        prop_assert!(!encoded.contains(&b'\t'));
        prop_assert!(!encoded.contains(&0x08));
        let mut i = 0;
        while i < encoded.len() {
            if encoded[i] == b'\\' {
                prop_assert!(i + 1 < encoded.len());
                prop_assert!(matches!(encoded[i + 1], b't' | b'b' | b'\\'));
                i += 2;
            } else {
                i += 1;
            }
        }
    }
}
