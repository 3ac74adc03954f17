use crate::log_level::LogLevel;
use crate::logger::{Logger, FORMAT_ERROR};
use crate::memory_sink::MemorySink;
use crate::tests::test_utils::keys;
use chrono::DateTime;
use serde_json::{json, Value};
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;
use std::thread;

fn memory_logger(level: LogLevel) -> (MemorySink, Logger) {
    let sink = MemorySink::new();
    let logger = Logger::from_sink(sink.clone(), level);
    (sink, logger)
}

fn emit_at(logger: &Logger, level: LogLevel) {
    match level {
        LogLevel::Trace => logger.trace(format_args!("t")),
        LogLevel::Debug => logger.debug(format_args!("d")),
        LogLevel::Info => logger.info(format_args!("i")),
        LogLevel::Warn => logger.warn(format_args!("w")),
        LogLevel::Error => logger.error(format_args!("e")),
        LogLevel::Undefined => logger.emit(LogLevel::Undefined, format_args!("u")),
    }
}

#[test]
fn threshold_suppresses_lower_levels_and_emits_the_rest() {
    for threshold in LogLevel::ALL {
        for level in LogLevel::ALL {
            let (sink, logger) = memory_logger(threshold);
            emit_at(&logger, level);
            let expected = usize::from(threshold <= level);
            assert_eq!(
                sink.len(),
                expected,
                "threshold {threshold} at level {level}"
            );
        }
    }
}

#[test]
fn info_record_has_base_fields_in_order() {
    let (sink, logger) = memory_logger(LogLevel::Info);

    logger.debug(format_args!("x={}", 5));
    assert!(sink.is_empty());

    logger.info(format_args!("hello {}", "world"));
    let records = sink.records();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(keys(record), vec!["ts", "level", "message"]);
    assert_eq!(record["level"], "Info");
    assert_eq!(record["message"], "hello world");
    let ts = record["ts"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
}

#[test]
fn with_method_tags_records() {
    let (sink, base) = memory_logger(LogLevel::Warn);
    let save = base.with_method("Save");

    save.error(format_args!("failed: {}", "disk full"));

    let record = sink.last().unwrap();
    assert_eq!(record["method"], "Save");
    assert_eq!(record["level"], "Error");
    assert_eq!(record["message"], "failed: disk full");
    assert_eq!(keys(&record), vec!["ts", "level", "message", "method"]);
}

#[test]
fn chained_context_keeps_attachment_order() {
    let (sink, base) = memory_logger(LogLevel::Info);
    let logger = base
        .with(vec![json!("a"), json!(1)])
        .with(vec![json!("b"), json!(2)]);

    logger.info(format_args!("go"));

    let record = sink.last().unwrap();
    assert_eq!(record["a"], 1);
    assert_eq!(record["b"], 2);
    assert_eq!(keys(&record), vec!["ts", "level", "message", "a", "b"]);
}

#[test]
fn nested_and_flat_with_produce_the_same_context() {
    let (sink, base) = memory_logger(LogLevel::Info);

    base.with(["k1", "v1"]).with(["k2", "v2"]).info(format_args!("m"));
    base.with(["k1", "v1", "k2", "v2"]).info(format_args!("m"));

    let records = sink.take();
    assert_eq!(records.len(), 2);
    let context = |r: &serde_json::Map<String, Value>| {
        r.iter()
            .filter(|(k, _)| !matches!(k.as_str(), "ts" | "level" | "message"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(context(&records[0]), context(&records[1]));
    assert_eq!(records[0]["k1"], "v1");
    assert_eq!(records[0]["k2"], "v2");
}

#[test]
fn deriving_never_changes_the_parent() {
    let (sink, parent) = memory_logger(LogLevel::Info);
    let strict = parent.with_level(LogLevel::Error);
    let tagged = parent.with_method("Load");

    assert_eq!(parent.level(), LogLevel::Info);
    assert_eq!(strict.level(), LogLevel::Error);
    assert_eq!(tagged.level(), LogLevel::Info);

    parent.info(format_args!("parent"));
    strict.info(format_args!("dropped"));

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["message"], "parent");
    assert!(records[0].get("method").is_none());
}

#[test]
fn context_cannot_replace_base_fields() {
    let (sink, base) = memory_logger(LogLevel::Info);
    let logger = base.with(["level", "debug", "message", "ctx", "ts", "never", "user", "ana"]);

    logger.error(format_args!("disk full"));

    let record = sink.last().unwrap();
    assert_eq!(keys(&record), vec!["ts", "level", "message", "user"]);
    assert_eq!(record["level"], "Error");
    assert_eq!(record["message"], "disk full");
    let ts = record["ts"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
    assert_eq!(record["user"], "ana");
}

#[test]
fn later_context_replaces_earlier_context() {
    let (sink, base) = memory_logger(LogLevel::Info);
    base.with_method("Load").with_method("Save").info(format_args!("m"));
    assert_eq!(sink.last().unwrap()["method"], "Save");
}

#[test]
fn with_level_shares_the_parent_sink() {
    let (_sink, parent) = memory_logger(LogLevel::Info);
    let strict = parent.with_level(LogLevel::Error);
    let tagged = parent.with_method("Load");

    assert!(Arc::ptr_eq(parent.sink(), strict.sink()));
    assert!(!Arc::ptr_eq(parent.sink(), tagged.sink()));
}

#[test]
fn with_level_keeps_the_context() {
    let (sink, base) = memory_logger(LogLevel::Error);
    let verbose = base.with_method("Sync").with_level(LogLevel::Trace);

    verbose.trace(format_args!("step"));

    let record = sink.last().unwrap();
    assert_eq!(record["level"], "Trace");
    assert_eq!(record["method"], "Sync");
}

#[test]
fn println_and_printf_match_info() {
    let (sink, logger) = memory_logger(LogLevel::Info);

    logger.println("ready");
    logger.printf(format_args!("ready"));
    logger.info(format_args!("ready"));

    let records = sink.take();
    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record["level"], "Info");
        assert_eq!(record["message"], "ready");
    }
}

#[test]
fn println_does_not_interpret_braces() {
    let (sink, logger) = memory_logger(LogLevel::Info);
    logger.println("{not a placeholder}");
    assert_eq!(sink.last().unwrap()["message"], "{not a placeholder}");
}

#[test]
fn aliases_respect_the_threshold() {
    let (sink, logger) = memory_logger(LogLevel::Warn);
    logger.println("quiet");
    logger.printf(format_args!("quiet {}", 1));
    assert!(sink.is_empty());
}

struct Faulty;

impl fmt::Display for Faulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("partial")?;
        Err(fmt::Error)
    }
}

#[test]
fn failing_display_degrades_to_marker() {
    let (sink, logger) = memory_logger(LogLevel::Info);

    logger.info(format_args!("value={}", Faulty));

    let message = sink.last().unwrap()["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("value="));
    assert!(message.ends_with(FORMAT_ERROR));
}

#[test]
fn macros_skip_argument_evaluation_when_filtered() {
    let (sink, logger) = memory_logger(LogLevel::Info);
    let evaluated = Cell::new(0);
    let count = || {
        evaluated.set(evaluated.get() + 1);
        evaluated.get()
    };

    crate::debug!(logger: logger, "x={}", count());
    assert_eq!(evaluated.get(), 0);
    assert!(sink.is_empty());

    crate::info!(logger: logger, "x={}", count());
    assert_eq!(evaluated.get(), 1);
    assert_eq!(sink.last().unwrap()["message"], "x=1");
}

#[test]
fn level_macros_tag_the_right_level() {
    let (sink, logger) = memory_logger(LogLevel::Trace);

    crate::trace!(logger: logger, "a");
    crate::debug!(logger: logger, "b");
    crate::info!(logger: logger, "c");
    crate::warn!(logger: logger, "d");
    crate::error!(logger: logger, "e {}", 1);
    crate::log_at!(logger: logger, LogLevel::Warn, "f");

    let levels: Vec<Value> = sink.take().into_iter().map(|r| r["level"].clone()).collect();
    assert_eq!(
        levels,
        vec![
            json!("Trace"),
            json!("Debug"),
            json!("Info"),
            json!("Warn"),
            json!("Error"),
            json!("Warn")
        ]
    );
}

#[test]
fn keyvals_macro_accepts_mixed_values() {
    let (sink, base) = memory_logger(LogLevel::Info);
    let logger = base.with(crate::keyvals!["user", "ana", "retries", 3, "ok", true]);

    logger.info(format_args!("done"));

    let record = sink.last().unwrap();
    assert_eq!(record["user"], "ana");
    assert_eq!(record["retries"], 3);
    assert_eq!(record["ok"], true);
}

#[test]
fn odd_context_is_completed_by_the_sink() {
    let (sink, base) = memory_logger(LogLevel::Info);
    base.with(["orphan"]).info(format_args!("m"));
    assert_eq!(sink.last().unwrap()["orphan"], "(MISSING)");
}

#[test]
fn loggers_share_a_sink_across_threads() {
    let (sink, base) = memory_logger(LogLevel::Info);
    let base = Arc::new(base);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let logger = base.with(vec![json!("worker"), json!(i)]);
            thread::spawn(move || {
                for n in 0..25 {
                    logger.info(format_args!("tick {n}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = sink.records();
    assert_eq!(records.len(), 200);
    assert!(records.iter().all(|r| r.contains_key("worker")));
}

#[test]
fn debug_output_hides_the_sink() {
    let (_sink, logger) = memory_logger(LogLevel::Warn);
    let rendered = format!("{logger:?}");
    assert!(rendered.contains("Warn"));
}
