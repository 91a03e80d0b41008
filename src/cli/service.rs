use std::path::PathBuf;

use tracing::instrument;

use crate::{
    components::ModuleRegistry,
    config::{ConfigLoader, ConfigLocator, LoadReport, ModuleLoadPolicy, Settings},
    docs::component_page,
    layout::LayoutRegistry,
};

use super::{
    CliError, Command,
    formatting::{format_layouts, format_report},
};

/// Text produced by a command, and whether it found problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text to print on stdout
    pub text: String,
    /// `false` if the configuration loaded with per-module or
    /// per-document failures
    pub clean: bool,
}

impl CommandOutput {
    fn clean(text: String) -> Self {
        Self { text, clean: true }
    }
}

/// Runs CLI commands against the built-in components.
pub struct CliService {
    locator: ConfigLocator,
}

impl CliService {
    /// Creates a service that reads the configuration through `locator`.
    pub fn new(locator: ConfigLocator) -> Self {
        Self { locator }
    }

    /// Creates a service for an optional `--config` override.
    pub fn for_override(config: Option<PathBuf>) -> Self {
        let locator = match config {
            Some(path) => ConfigLocator::with_override(path),
            None => ConfigLocator::from_env(),
        };
        Self::new(locator)
    }

    /// Executes `command`.
    ///
    /// # Errors
    /// Returns `CliError::Config` if the load aborts, `CliError::UnknownComponent`
    /// if `schema` names a component that is not built in, and
    /// documentation or serialization errors from `schema`.
    #[instrument(skip(self))]
    pub fn execute(&self, command: &Command) -> Result<CommandOutput, CliError> {
        match command {
            Command::Check { json, best_effort } => self.check(*json, *best_effort),
            Command::Layouts => self.layouts(),
            Command::Schema { component, json } => Self::schema(component.as_deref(), *json),
        }
    }

    fn check(&self, json: bool, best_effort: bool) -> Result<CommandOutput, CliError> {
        let policy = if best_effort {
            ModuleLoadPolicy::BestEffort
        } else {
            ModuleLoadPolicy::StopOnError
        };

        let mut layouts = LayoutRegistry::init();
        let mut settings = Settings::default();

        let (report, components) = {
            let mut modules = ModuleRegistry::builtin(&mut layouts);
            let report = ConfigLoader::new(self.locator.clone())
                .with_policy(policy)
                .load(&mut modules, &mut settings)?;
            let components = component_settings(&modules, &report);
            (report, components)
        };
        layouts.teardown();

        let text = if json {
            let mut value = report.to_json();
            value["border_width"] = settings.border_width.into();
            value["components"] = components;
            serde_json::to_string_pretty(&value)?
        } else {
            format_report(&report, &settings)
        };

        Ok(CommandOutput {
            text,
            clean: report.is_clean(),
        })
    }

    fn layouts(&self) -> Result<CommandOutput, CliError> {
        let mut layouts = LayoutRegistry::init();
        let mut settings = Settings::default();

        {
            let mut modules = ModuleRegistry::builtin(&mut layouts);
            ConfigLoader::new(self.locator.clone()).load(&mut modules, &mut settings)?;
        }

        let text = format_layouts(&layouts);
        layouts.teardown();
        Ok(CommandOutput::clean(text))
    }

    fn schema(component: Option<&str>, json: bool) -> Result<CommandOutput, CliError> {
        let mut scratch = LayoutRegistry::init();
        let modules = ModuleRegistry::builtin(&mut scratch);

        let names = match component {
            Some(name) => vec![name.to_string()],
            None => modules.available(),
        };

        let mut sections = Vec::with_capacity(names.len());
        for name in &names {
            let instance = modules
                .instantiate(name)
                .ok_or_else(|| CliError::UnknownComponent(name.clone()))?;

            sections.push(if json {
                serde_json::to_string_pretty(&instance.schema())?
            } else {
                component_page(instance.as_ref())?
            });
        }

        Ok(CommandOutput::clean(sections.join("\n")))
    }
}

fn component_settings(modules: &ModuleRegistry<'_>, report: &LoadReport) -> serde_json::Value {
    report
        .loaded_modules
        .iter()
        .filter_map(|name| {
            modules
                .component(name)
                .map(|component| (name.clone(), component.settings()))
        })
        .collect::<serde_json::Map<_, _>>()
        .into()
}
