//! Logger builder tests
//!
//! File sinks write through a background worker; each test drops the logger
//! before reading files so pending records are flushed.

use crate::test_utils::{SharedBuffer, prod_config, read_file};
use logwire_domain::{FormatterKind, LogConfiguration, RoutingPlan, Severity};
use logwire_infrastructure::{CollectingDiagnostics, LoggerBuilder};
use std::sync::Arc;
use tempfile::TempDir;

fn builder() -> (LoggerBuilder, Arc<CollectingDiagnostics>) {
    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let builder = LoggerBuilder::new().with_diagnostics(diagnostics.clone());
    (builder, diagnostics)
}

fn emit_all(logger: &logwire_infrastructure::Logger) {
    logger.trace("trace-msg");
    logger.debug("debug-msg");
    logger.info("info-msg");
    logger.warn("warn-msg");
    logger.error("error-msg");
    logger.fatal("fatal-msg");
    logger.panic("panic-msg");
}

#[test]
fn test_without_configuration_uses_defaults() {
    let buffer = SharedBuffer::default();
    let sink = buffer.clone();
    let (builder, diagnostics) = builder();
    let logger = builder
        .with_default_writer(move || sink.clone())
        .build("svc", None);

    assert_eq!(logger.name(), "svc");
    assert_eq!(logger.threshold(), Severity::Debug);
    assert_eq!(logger.formatter(), FormatterKind::Text);
    assert_eq!(logger.routing(), &RoutingPlan::Default);
    assert!(diagnostics.notices().is_empty());

    emit_all(&logger);
    let output = buffer.contents();
    assert!(!output.contains("trace-msg"));
    assert!(output.contains("debug-msg"));
    assert!(output.contains("panic-msg"));
}

#[test]
fn test_combined_mode_writes_one_file() {
    let dir = TempDir::new().unwrap();
    let (builder, diagnostics) = builder();
    let logger = builder.build("svc", Some(&prod_config(dir.path(), "info")));
    emit_all(&logger);
    drop(logger);

    let log = read_file(dir.path(), "svc.log");
    assert!(!log.contains("debug-msg"));
    for message in ["info-msg", "warn-msg", "error-msg", "fatal-msg", "panic-msg"] {
        assert!(log.contains(message), "missing {message}");
    }
    assert!(!dir.path().join("svc.err").exists());
    assert!(
        diagnostics
            .infos()
            .iter()
            .any(|m| m.starts_with("Redirecting all levels to file: "))
    );
}

#[test]
fn test_split_mode_separates_errors_from_info() {
    let dir = TempDir::new().unwrap();
    let config = LogConfiguration {
        split_error_file: true,
        ..prod_config(dir.path(), "trace")
    };
    let (builder, _) = builder();
    let logger = builder.build("svc", Some(&config));
    emit_all(&logger);
    drop(logger);

    let errors = read_file(dir.path(), "svc.err");
    let info = read_file(dir.path(), "svc.log");

    for message in ["panic-msg", "fatal-msg", "error-msg", "warn-msg"] {
        assert!(errors.contains(message), "missing {message} in .err");
        assert!(!info.contains(message), "unexpected {message} in .log");
    }
    for message in ["info-msg", "debug-msg"] {
        assert!(info.contains(message), "missing {message} in .log");
        assert!(!errors.contains(message), "unexpected {message} in .err");
    }
    assert!(!errors.contains("trace-msg"));
    assert!(!info.contains("trace-msg"));
}

#[test]
fn test_split_mode_discards_primary_output() {
    let dir = TempDir::new().unwrap();
    let buffer = SharedBuffer::default();
    let sink = buffer.clone();
    let config = LogConfiguration {
        split_error_file: true,
        ..prod_config(dir.path(), "debug")
    };
    let (builder, _) = builder();
    let logger = builder
        .with_default_writer(move || sink.clone())
        .build("svc", Some(&config));
    emit_all(&logger);
    drop(logger);

    assert!(buffer.contents().is_empty());
}

#[test]
fn test_split_mode_honours_threshold() {
    let dir = TempDir::new().unwrap();
    let config = LogConfiguration {
        split_error_file: true,
        ..prod_config(dir.path(), "warn")
    };
    let (builder, _) = builder();
    let logger = builder.build("svc", Some(&config));
    emit_all(&logger);
    drop(logger);

    assert!(read_file(dir.path(), "svc.err").contains("warn-msg"));
    assert!(!dir.path().join("svc.log").exists());
}

#[test]
fn test_development_environment_skips_routing() {
    let dir = TempDir::new().unwrap();
    let buffer = SharedBuffer::default();
    let sink = buffer.clone();
    let config = LogConfiguration {
        environment: "dev".to_string(),
        split_error_file: true,
        ..prod_config(dir.path(), "error")
    };
    let (builder, diagnostics) = builder();
    let logger = builder
        .with_default_writer(move || sink.clone())
        .build("svc", Some(&config));

    assert_eq!(logger.threshold(), Severity::Debug);
    assert_eq!(logger.routing(), &RoutingPlan::Default);

    emit_all(&logger);
    drop(logger);

    assert!(buffer.contents().contains("debug-msg"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(
        diagnostics
            .infos()
            .contains(&"Log level defaults to DEBUG for environments `dev` and `local`".to_string())
    );
}

#[test]
fn test_fatal_threshold_suppresses_error() {
    let dir = TempDir::new().unwrap();
    let (builder, _) = builder();
    let logger = builder.build("svc", Some(&prod_config(dir.path(), "fatal")));
    emit_all(&logger);
    drop(logger);

    let log = read_file(dir.path(), "svc.log");
    assert!(!log.contains("error-msg"));
    assert!(log.contains("fatal-msg"));
    assert!(log.contains("panic-msg"));
}

#[test]
fn test_unknown_level_keeps_debug() {
    let dir = TempDir::new().unwrap();
    let (builder, diagnostics) = builder();
    let logger = builder.build("svc", Some(&prod_config(dir.path(), "verbose")));

    assert_eq!(logger.threshold(), Severity::Debug);
    assert_eq!(diagnostics.advisories().len(), 1);
}

#[test]
fn test_json_formatter_renders_json_lines() {
    let dir = TempDir::new().unwrap();
    let config = LogConfiguration {
        formatter: "JSON".to_string(),
        ..prod_config(dir.path(), "info")
    };
    let (builder, _) = builder();
    let logger = builder.build("svc", Some(&config));
    logger.warn("json-msg");
    drop(logger);

    let line = read_file(dir.path(), "svc.log");
    let record: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(record["level"], "WARN");
    assert_eq!(record["fields"]["message"], "json-msg");
    assert_eq!(record["fields"]["severity"], "warn");
    assert_eq!(record["fields"]["logger"], "svc");
}

#[test]
fn test_unknown_formatter_falls_back_to_text() {
    let dir = TempDir::new().unwrap();
    let config = LogConfiguration {
        formatter: "xml".to_string(),
        ..prod_config(dir.path(), "info")
    };
    let (builder, diagnostics) = builder();
    let logger = builder.build("svc", Some(&config));

    assert_eq!(logger.formatter(), FormatterKind::Text);
    assert!(
        diagnostics
            .advisories()
            .iter()
            .any(|m| m.starts_with("Formatter unknown"))
    );
}

#[test]
fn test_report_caller_records_call_site() {
    let dir = TempDir::new().unwrap();
    let config = LogConfiguration {
        report_caller: true,
        formatter: "json".to_string(),
        ..prod_config(dir.path(), "info")
    };
    let (builder, _) = builder();
    let logger = builder.build("svc", Some(&config));
    logger.info("where-msg");
    let call_line = line!() - 1;
    drop(logger);

    let line = read_file(dir.path(), "svc.log");
    let record: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    let caller = record["fields"]["caller"].as_str().unwrap();
    assert!(
        caller.contains(&format!("builder_tests.rs:{call_line}:")),
        "caller was {caller}"
    );
}

#[test]
fn test_in_scope_routes_tracing_macros() {
    let dir = TempDir::new().unwrap();
    let (builder, _) = builder();
    let logger = builder.build("svc", Some(&prod_config(dir.path(), "info")));
    logger.in_scope(|| {
        tracing::info!(attempt = 3, "scoped-msg");
        tracing::debug!("scoped-debug");
    });
    drop(logger);

    let log = read_file(dir.path(), "svc.log");
    assert!(log.contains("scoped-msg"));
    assert!(log.contains("attempt=3"));
    assert!(!log.contains("scoped-debug"));
}

#[test]
fn test_output_directory_is_a_plain_prefix() {
    let dir = TempDir::new().unwrap();
    let config = LogConfiguration {
        output_directory: format!("{}/app-", dir.path().display()),
        ..prod_config(dir.path(), "info")
    };
    let (builder, _) = builder();
    let logger = builder.build("svc", Some(&config));
    logger.info("prefixed");
    drop(logger);

    assert!(read_file(dir.path(), "app-svc.log").contains("prefixed"));
}

#[test]
fn test_logger_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<logwire_infrastructure::Logger>();

    let dir = TempDir::new().unwrap();
    let (builder, _) = builder();
    let logger = Arc::new(builder.build("svc", Some(&prod_config(dir.path(), "info"))));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || logger.info(format_args!("worker-{worker}")))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    drop(logger);

    let log = read_file(dir.path(), "svc.log");
    for worker in 0..4 {
        assert!(log.contains(&format!("worker-{worker}")));
    }
}
