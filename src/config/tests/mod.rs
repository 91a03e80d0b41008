//! Unit tests for the configuration stream protocol
//!
//! Streams are parsed from strings and dispatched to a recording host.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use serde_yaml::Value;

use crate::{
    components::{ComponentHost, ConfigureError, LoadError},
    config::{ConfigDocument, ConfigLoader, ConfigLocator, ModuleLoadPolicy, Settings},
    core::{ConfigError, DispatchError, TagError},
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(String),
    Configure(String, Value),
}

/// Host that knows a fixed set of components and records every call.
#[derive(Default)]
struct RecordingHost {
    available: Vec<&'static str>,
    rejecting: Vec<&'static str>,
    loaded: Vec<String>,
    calls: Vec<Call>,
}

impl RecordingHost {
    fn with(available: &[&'static str]) -> Self {
        Self {
            available: available.to_vec(),
            ..Self::default()
        }
    }

    fn loads(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Load(name) => Some(name.as_str()),
                Call::Configure(..) => None,
            })
            .collect()
    }

    fn configures(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Configure(name, _) => Some(name.as_str()),
                Call::Load(_) => None,
            })
            .collect()
    }
}

impl ComponentHost for RecordingHost {
    fn load(&mut self, name: &str) -> Result<(), LoadError> {
        self.calls.push(Call::Load(name.to_string()));

        if !self.available.iter().any(|candidate| *candidate == name) {
            return Err(LoadError::NotAvailable {
                name: name.to_string(),
            });
        }
        self.loaded.push(name.to_string());
        Ok(())
    }

    fn configure(&mut self, name: &str, document: &ConfigDocument) -> Result<(), ConfigureError> {
        self.calls
            .push(Call::Configure(name.to_string(), document.value().clone()));

        if !self.loaded.iter().any(|loaded| loaded == name) {
            return Err(ConfigureError::UnknownComponent {
                name: name.to_string(),
            });
        }
        if self.rejecting.iter().any(|candidate| *candidate == name) {
            return Err(ConfigureError::Rejected {
                name: name.to_string(),
                reason: "refused".to_string(),
            });
        }
        Ok(())
    }
}

fn loader() -> ConfigLoader {
    ConfigLoader::new(ConfigLocator::with_candidates(Vec::new()))
}

#[test]
fn missing_file_completes_without_calls() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let report = loader().load(&mut host, &mut settings).unwrap();

    assert!(host.calls.is_empty());
    assert!(report.source.is_none());
    assert!(report.settings.is_none());
    assert_eq!(settings, Settings::default());
}

#[test]
fn empty_stream_completes_with_defaults() {
    let mut host = RecordingHost::default();
    let mut settings = Settings::default();

    let report = loader().load_str("", &mut host, &mut settings).unwrap();

    assert!(host.calls.is_empty());
    assert!(report.is_clean());
}

#[test]
fn blank_and_commented_out_streams_complete_with_defaults() {
    for yaml in ["\n\n", "   \n", "# border_width: 9\n# modules: [a]\n"] {
        let mut host = RecordingHost::with(&["a"]);
        let mut settings = Settings::default();

        let report = loader().load_str(yaml, &mut host, &mut settings).unwrap();

        assert!(host.calls.is_empty(), "{yaml:?}");
        assert!(report.is_clean(), "{yaml:?}");
        assert!(report.settings.is_none(), "{yaml:?}");
        assert_eq!(settings, Settings::default(), "{yaml:?}");
    }
}

#[test]
fn tagged_empty_root_aborts() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let err = loader()
        .load_str("--- !strata:a\n", &mut host, &mut settings)
        .unwrap_err();

    assert!(matches!(err, ConfigError::MalformedRoot { found: "tagged value", .. }));
    assert!(host.calls.is_empty());
}

#[test]
fn blocks_after_empty_root_target_unloaded_components() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let report = loader()
        .load_str("---\n--- !strata:a\nx: 1\n", &mut host, &mut settings)
        .unwrap();

    assert!(host.loads().is_empty());
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        &report.failures[0].error,
        DispatchError::UnknownComponent { name } if name == "a"
    ));
}

#[test]
fn modules_load_in_order_before_dispatch() {
    let mut host = RecordingHost::with(&["a", "b"]);
    let mut settings = Settings::default();
    let yaml = "modules: [a, b]\nborder_width: 7\n--- !strata:b\nx: 1\n--- !strata:a\ny: 2\n";

    let report = loader().load_str(yaml, &mut host, &mut settings).unwrap();

    assert_eq!(
        host.calls,
        vec![
            Call::Load("a".to_string()),
            Call::Load("b".to_string()),
            Call::Configure("b".to_string(), serde_yaml::from_str("x: 1").unwrap()),
            Call::Configure("a".to_string(), serde_yaml::from_str("y: 2").unwrap()),
        ]
    );
    assert_eq!(settings.border_width, 7);
    assert_eq!(report.loaded_modules, vec!["a", "b"]);
    assert_eq!(report.configured, vec!["b", "a"]);
    assert!(report.is_clean());
}

#[test]
fn malformed_border_width_aborts_before_anything_runs() {
    for value in ["\"-1\"", "-1", "seven", "[7]"] {
        let mut host = RecordingHost::with(&["a"]);
        let mut settings = Settings::default();
        let yaml = format!("modules: [a]\nborder_width: {value}\n--- !strata:a\nx: 1\n");

        let err = loader().load_str(&yaml, &mut host, &mut settings).unwrap_err();

        assert!(
            matches!(&err, ConfigError::MalformedScalar { key, .. } if key == "border_width"),
            "{value}: {err}"
        );
        assert!(host.configures().is_empty(), "{value}");
        assert!(host.loads().is_empty(), "{value}");
        assert_eq!(settings, Settings::default());
    }
}

#[test]
fn scalar_root_aborts() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let err = loader()
        .load_str("42\n--- !strata:a\nx: 1\n", &mut host, &mut settings)
        .unwrap_err();

    assert!(matches!(err, ConfigError::MalformedRoot { found: "number", .. }));
    assert!(host.calls.is_empty());
}

#[test]
fn malformed_module_list_aborts() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let err = loader()
        .load_str("modules: {a: 1}\n", &mut host, &mut settings)
        .unwrap_err();

    assert!(matches!(err, ConfigError::MalformedModuleList { .. }));
    assert!(host.calls.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let report = loader()
        .load_str("modules: [a]\nstatus_bar: top\n", &mut host, &mut settings)
        .unwrap();

    assert_eq!(report.settings.unwrap().unrecognized, vec!["status_bar"]);
    assert_eq!(host.loads(), vec!["a"]);
}

#[test]
fn failed_module_stops_remaining_loads() {
    let mut host = RecordingHost::with(&["a", "c"]);
    let mut settings = Settings::default();
    let yaml = "modules: [a, b, c]\nborder_width: 5\n--- !strata:a\nx: 1\n";

    let err = loader().load_str(yaml, &mut host, &mut settings).unwrap_err();

    assert!(matches!(err, ConfigError::ComponentLoad { ref name, .. } if name == "b"));
    assert_eq!(host.loads(), vec!["a", "b"]);
    assert!(host.configures().is_empty());
    assert_eq!(settings.border_width, Settings::default().border_width);
}

#[test]
fn best_effort_keeps_loading() {
    let mut host = RecordingHost::with(&["a", "c"]);
    let mut settings = Settings::default();
    let yaml = "modules: [a, b, c]\nborder_width: 5\n--- !strata:c\nx: 1\n";

    let report = loader()
        .with_policy(ModuleLoadPolicy::BestEffort)
        .load_str(yaml, &mut host, &mut settings)
        .unwrap();

    assert_eq!(host.loads(), vec!["a", "b", "c"]);
    assert_eq!(report.loaded_modules, vec!["a", "c"]);
    assert_eq!(report.module_failures.len(), 1);
    assert_eq!(report.module_failures[0].name, "b");
    assert_eq!(report.configured, vec!["c"]);
    assert_eq!(settings.border_width, 5);
}

#[test]
fn unknown_component_does_not_erase_earlier_success() {
    let mut host = RecordingHost::with(&["foo"]);
    let mut settings = Settings::default();
    let yaml = "modules: [foo]\n--- !strata:foo\nx: 1\n--- !strata:bar\ny: 2\n";

    let report = loader().load_str(yaml, &mut host, &mut settings).unwrap();

    assert_eq!(report.configured, vec!["foo"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 2);
    assert!(matches!(
        &report.failures[0].error,
        DispatchError::UnknownComponent { name } if name == "bar"
    ));
}

#[test]
fn malformed_tags_are_isolated() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();
    let yaml = concat!(
        "modules: [a]\n",
        "---\nuntagged: 1\n",
        "--- !other:a\nx: 1\n",
        "--- !strata:\nx: 1\n",
        "--- !strata:a\nx: 1\n",
    );

    let report = loader().load_str(yaml, &mut host, &mut settings).unwrap();

    assert_eq!(report.configured, vec!["a"]);
    assert_eq!(host.configures(), vec!["a"]);

    let reasons: Vec<&TagError> = report
        .failures
        .iter()
        .map(|failure| match &failure.error {
            DispatchError::MalformedTag { source, .. } => source,
            other => panic!("unexpected failure: {other}"),
        })
        .collect();
    assert_eq!(reasons[0], &TagError::Missing);
    assert!(matches!(reasons[1], TagError::WrongNamespace { .. }));
    assert_eq!(reasons[2], &TagError::EmptyName);
}

#[test]
fn rejected_block_is_reported() {
    let mut host = RecordingHost::with(&["a"]);
    host.rejecting.push("a");
    let mut settings = Settings::default();

    let report = loader()
        .load_str("modules: [a]\n--- !strata:a\nx: 1\n", &mut host, &mut settings)
        .unwrap();

    assert!(report.configured.is_empty());
    assert!(matches!(
        &report.failures[0].error,
        DispatchError::ComponentConfigRejected { name, reason } if name == "a" && reason == "refused"
    ));
}

#[test]
fn empty_documents_are_skipped() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let report = loader()
        .load_str("modules: [a]\n---\n--- !strata:a\nx: 1\n---\n", &mut host, &mut settings)
        .unwrap();

    assert_eq!(report.configured, vec!["a"]);
    assert!(report.failures.is_empty());
}

#[test]
fn syntax_error_in_later_document_stops_the_stream() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();
    let yaml = "modules: [a]\n--- !strata:a\nx: 1\n--- !strata:a\nx: [unclosed\n";

    let report = loader().load_str(yaml, &mut host, &mut settings).unwrap();

    assert_eq!(report.configured, vec!["a"]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].error, DispatchError::Parse { .. }));
}

#[test]
fn syntax_error_in_settings_aborts() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let err = loader()
        .load_str("modules: [a\n", &mut host, &mut settings)
        .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(host.calls.is_empty());
}

#[test]
fn custom_namespace_is_honored() {
    let mut host = RecordingHost::with(&["a"]);
    let mut settings = Settings::default();

    let report = loader()
        .with_namespace("wm")
        .load_str("modules: [a]\n--- !wm:a\nx: 1\n", &mut host, &mut settings)
        .unwrap();

    assert_eq!(report.configured, vec!["a"]);
}
