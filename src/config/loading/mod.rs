mod report;

pub use report::{DocumentFailure, LoadReport, ModuleFailure};

use std::{io::Read, path::Path};

use serde::Deserialize;
use serde_yaml::{Deserializer, Value};
use tracing::{debug, info, instrument, warn};

use super::{CONFIG_FILE_NAME, ConfigDocument, ConfigLocator, GlobalSettings, Settings, TAG_NAMESPACE};
use crate::{
    components::ComponentHost,
    core::{ConfigError, DispatchError, Result, describe_location},
};

/// What to do when a module listed in `modules` fails to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleLoadPolicy {
    /// Abort the load at the first failure. Later modules are not loaded
    /// and no configuration block is dispatched.
    #[default]
    StopOnError,

    /// Record the failure and keep loading the rest of the list.
    BestEffort,
}

/// Reads the configuration stream and drives the component host.
///
/// The stream is a sequence of YAML documents. The first one holds the
/// global settings and names the modules to load. Every following document
/// is tagged with the component it configures:
///
/// ```yaml
/// modules: [tile, spawn]
/// border_width: 2
/// --- !strata:tile
/// master_factor: 0.6
/// --- !strata:spawn
/// terminal: alacritty
/// ```
///
/// A malformed settings document, or a module that fails to load under
/// [`ModuleLoadPolicy::StopOnError`], aborts the load with a
/// [`ConfigError`]. Problems with individual configuration blocks are
/// collected in the [`LoadReport`] and the remaining blocks are still
/// dispatched.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    locator: ConfigLocator,
    file_name: String,
    namespace: String,
    policy: ModuleLoadPolicy,
}

impl ConfigLoader {
    /// Creates a loader that reads `strata.yaml` through `locator`.
    pub fn new(locator: ConfigLocator) -> Self {
        Self {
            locator,
            file_name: CONFIG_FILE_NAME.to_string(),
            namespace: TAG_NAMESPACE.to_string(),
            policy: ModuleLoadPolicy::default(),
        }
    }

    /// Sets the module load failure policy.
    pub fn with_policy(mut self, policy: ModuleLoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the logical file name handed to the locator.
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    /// Sets the namespace expected in component tags.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    /// Locates the configuration file and runs both phases over it.
    ///
    /// A missing file is not an error: the report is empty and `settings`
    /// keeps its current values.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the settings document is malformed or a
    /// module fails to load under [`ModuleLoadPolicy::StopOnError`].
    #[instrument(skip(self, host, settings), fields(file = %self.file_name))]
    pub fn load<H: ComponentHost>(&self, host: &mut H, settings: &mut Settings) -> Result<LoadReport> {
        let Some(source) = self.locator.locate(&self.file_name) else {
            info!("no configuration file found, using defaults");
            return Ok(LoadReport::default());
        };

        let path = source.path().to_path_buf();
        info!(path = %path.display(), "loading configuration");

        self.load_reader(source, Some(&path), host, settings)
    }

    /// Runs both phases over an in-memory stream.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub fn load_str<H: ComponentHost>(
        &self,
        yaml: &str,
        host: &mut H,
        settings: &mut Settings,
    ) -> Result<LoadReport> {
        self.run(Deserializer::from_str(yaml), None, host, settings)
    }

    /// Runs both phases over `reader`, which is dropped before returning.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub fn load_reader<R, H>(
        &self,
        reader: R,
        location: Option<&Path>,
        host: &mut H,
        settings: &mut Settings,
    ) -> Result<LoadReport>
    where
        R: Read,
        H: ComponentHost,
    {
        self.run(Deserializer::from_reader(reader), location, host, settings)
    }

    fn run<H: ComponentHost>(
        &self,
        mut documents: Deserializer<'_>,
        location: Option<&Path>,
        host: &mut H,
        settings: &mut Settings,
    ) -> Result<LoadReport> {
        let mut report = LoadReport {
            source: location.map(Path::to_path_buf),
            ..LoadReport::default()
        };

        let Some(first) = documents.next() else {
            info!("configuration stream is empty, using defaults");
            return Ok(report);
        };

        let root = Value::deserialize(first).map_err(|e| ConfigError::parse(e, location))?;
        if root.is_null() {
            info!("settings document is empty, using defaults");
            self.dispatch_blocks(documents, host, &mut report);
            return Ok(report);
        }

        let global = GlobalSettings::from_root(&root, &describe_location(location))?;

        self.load_modules(&global, host, &mut report)?;
        global.apply_to(settings);
        report.settings = Some(global);

        self.dispatch_blocks(documents, host, &mut report);

        info!(
            configured = report.configured.len(),
            failed = report.failures.len(),
            "configuration loaded"
        );
        Ok(report)
    }

    fn load_modules<H: ComponentHost>(
        &self,
        global: &GlobalSettings,
        host: &mut H,
        report: &mut LoadReport,
    ) -> Result<()> {
        for name in &global.modules {
            match host.load(name) {
                Ok(()) => report.loaded_modules.push(name.clone()),
                Err(source) if self.policy == ModuleLoadPolicy::StopOnError => {
                    return Err(ConfigError::ComponentLoad {
                        name: name.clone(),
                        source,
                    });
                }
                Err(error) => {
                    warn!(module = %name, "skipping module: {error}");
                    report.module_failures.push(ModuleFailure {
                        name: name.clone(),
                        error,
                    });
                }
            }
        }
        Ok(())
    }

    fn dispatch_blocks<H: ComponentHost>(
        &self,
        documents: Deserializer<'_>,
        host: &mut H,
        report: &mut LoadReport,
    ) {
        for (offset, next) in documents.enumerate() {
            let index = offset + 1;

            let document = match Value::deserialize(next) {
                Ok(value) => ConfigDocument::from_value(value),
                Err(e) => {
                    warn!(index, "stopping at unparseable document: {e}");
                    report.failures.push(DocumentFailure {
                        index,
                        error: DispatchError::Parse {
                            details: e.to_string(),
                        },
                    });
                    break;
                }
            };

            if document.is_empty() {
                debug!(index, "skipping empty document");
                continue;
            }

            match self.dispatch(&document, host) {
                Ok(component) => report.configured.push(component),
                Err(error) => {
                    warn!(index, "configuration block not applied: {error}");
                    report.failures.push(DocumentFailure { index, error });
                }
            }
        }
    }

    fn dispatch<H: ComponentHost>(
        &self,
        document: &ConfigDocument,
        host: &mut H,
    ) -> std::result::Result<String, DispatchError> {
        let block = document
            .component_block(&self.namespace)
            .map_err(|source| DispatchError::MalformedTag {
                tag: document.tag().map(str::to_string),
                source,
            })?;

        debug!(component = block.component(), "dispatching configuration block");
        host.configure(block.component(), block.document())?;

        Ok(block.component().to_string())
    }
}
