//! Property-based tests for journal_logger using proptest

use journal_logger::prelude::*;
use journal_logger::{terminate, KeyValues};
use proptest::prelude::*;

fn capture(verbosity: i32) -> (Logger, MemoryBuffer) {
    let buffer = MemoryBuffer::new();
    let sink = JournalSink::builder()
        .verbosity(verbosity)
        .log_caller_info(false)
        .destination(buffer.destination())
        .build();
    (Logger::new(sink), buffer)
}

// ============================================================================
// Line Termination Tests
// ============================================================================

proptest! {
    /// Test that a separator-terminated buffer ends in exactly one line feed
    #[test]
    fn test_terminate_replaces_separator(body in "[a-z0-9 :,]{0,64}") {
        let mut buf = format!("<6>{}, ", body).into_bytes();
        terminate(&mut buf);

        prop_assert_eq!(buf.last(), Some(&b'\n'));
        prop_assert_eq!(buf.iter().filter(|b| **b == b'\n').count(), 1);
        let expected = format!("<6>{}", body);
        prop_assert_eq!(&buf[..buf.len() - 1], expected.as_bytes());
    }

    /// Test that every written record is exactly one line without a trailing separator
    #[test]
    fn test_records_are_single_lines(
        message in "[a-zA-Z0-9_.-]{0,40}",
        key in "[a-z]{1,8}",
        value in "[a-zA-Z0-9_.-]{0,40}",
        extra in proptest::collection::vec(any::<i64>(), 0..6),
    ) {
        let (logger, buffer) = capture(0);
        let mut kv = vec![Value::from(key.as_str()), Value::from(value.as_str())];
        kv.extend(extra.into_iter().map(Value::from));
        logger.info(&message, &kv);

        let contents = buffer.contents();
        prop_assert!(contents.starts_with("<6>"));
        prop_assert!(contents.ends_with('\n'));
        prop_assert_eq!(contents.matches('\n').count(), 1);
        prop_assert!(!contents.ends_with(", \n"));
        prop_assert!(!contents.ends_with(": \n"));
    }

    /// Test that control characters in messages never split a record
    #[test]
    fn test_control_characters_are_escaped(
        parts in proptest::collection::vec("[a-z]{0,8}", 1..5),
        sep in prop_oneof![Just("\n"), Just("\r"), Just("\t"), Just("\r\n")],
    ) {
        let (logger, buffer) = capture(0);
        let message = format!("start{}", parts.join(sep));
        logger.error(None, &message, &[]);

        prop_assert_eq!(buffer.lines().len(), 1);
        prop_assert!(!buffer.contents().trim_end_matches('\n').contains(|c: char| matches!(c, '\n' | '\r' | '\t')));
    }
}

// ============================================================================
// Verbosity Tests
// ============================================================================

proptest! {
    /// Test that a level is enabled exactly when it does not exceed verbosity
    #[test]
    fn test_enabled_iff_within_verbosity(verbosity in 0i32..20, level in 0i32..40) {
        let (logger, buffer) = capture(verbosity);
        let leveled = logger.v(level);
        prop_assert_eq!(leveled.enabled(), level <= verbosity);

        leveled.info("probe", &[]);
        prop_assert_eq!(buffer.is_empty(), level > verbosity);
    }

    /// Test that V-levels are additive
    #[test]
    fn test_v_is_additive(a in 0i32..1000, b in 0i32..1000) {
        let (logger, _) = capture(0);
        prop_assert_eq!(logger.v(a).v(b).level(), logger.v(a + b).level());
        prop_assert_eq!(logger.v(a).v(b).level(), a + b);
    }

    /// Test that negative verbosity behaves like zero
    #[test]
    fn test_negative_verbosity_clamps(verbosity in i32::MIN..0) {
        let (logger, _) = capture(verbosity);
        prop_assert!(logger.enabled());
        prop_assert!(!logger.v(1).enabled());
    }
}

// ============================================================================
// Inherited Values Tests
// ============================================================================

proptest! {
    /// Test that merging the same pairs twice changes nothing
    #[test]
    fn test_merge_is_idempotent(
        pairs in proptest::collection::vec(("[a-z]{1,4}", any::<i32>()), 0..8),
    ) {
        let kv: Vec<Value> = pairs
            .iter()
            .flat_map(|(k, v)| [Value::from(k.as_str()), Value::from(*v)])
            .collect();
        let once = KeyValues::new().merge(&kv);
        let twice = once.merge(&kv);
        prop_assert_eq!(once.rendered(), twice.rendered());
        prop_assert_eq!(once.len(), twice.len());
    }

    /// Test that the last value for a key wins
    #[test]
    fn test_last_write_wins(key in "[a-z]{1,6}", first in any::<i64>(), last in any::<i64>()) {
        let values = KeyValues::new()
            .merge(&[Value::from(key.as_str()), Value::from(first)])
            .merge(&[Value::from(key.as_str()), Value::from(last)]);
        prop_assert_eq!(values.len(), 1);
        prop_assert_eq!(values.get(&key), Some(&Value::Int(last)));
        prop_assert_eq!(values.rendered(), format!("{}: {}, ", key, last));
    }

    /// Test that deriving a logger never changes its parent's output
    #[test]
    fn test_parent_output_is_stable(
        name in "[a-z]{1,6}",
        key in "[a-z]{1,6}",
        value in any::<u32>(),
    ) {
        let (logger, buffer) = capture(0);
        logger.info("before", &[]);
        let _child = logger.with_name(&name).with_values(&[Value::from(key.as_str()), Value::from(value)]);
        logger.info("before", &[]);

        let lines = buffer.lines();
        prop_assert_eq!(&lines[0], &lines[1]);
    }
}

// ============================================================================
// Name Tests
// ============================================================================

proptest! {
    /// Test that names join with '/'
    #[test]
    fn test_names_join(names in proptest::collection::vec("[a-z]{1,6}", 1..5)) {
        let (logger, buffer) = capture(0);
        let named = names.iter().fold(logger, |l, n| l.with_name(n));
        named.info("m", &[]);
        prop_assert_eq!(buffer.contents(), format!("<6>{}: m\n", names.join("/")));
    }
}
