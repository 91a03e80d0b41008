use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::{config::ConfigDocument, layout::LayoutRegistry};

use super::{
    Component, ComponentHost, ConfigureError, FloatingComponent, LoadError, SpawnComponent,
    TileComponent,
};

/// Constructor for a component, invoked when the component is loaded.
pub type ComponentFactory = fn() -> Box<dyn Component>;

/// Host for compiled-in components.
///
/// Keeps a catalog of the components that can be loaded, the instances that
/// have been loaded (in load order), and a borrow of the process layout
/// registry that components populate while loading.
pub struct ModuleRegistry<'a> {
    catalog: HashMap<String, ComponentFactory>,
    loaded: Vec<Box<dyn Component>>,
    layouts: &'a mut LayoutRegistry,
}

impl<'a> ModuleRegistry<'a> {
    /// Creates a host with an empty catalog.
    pub fn new(layouts: &'a mut LayoutRegistry) -> Self {
        Self {
            catalog: HashMap::new(),
            loaded: Vec::new(),
            layouts,
        }
    }

    /// Creates a host whose catalog holds every built-in component.
    pub fn builtin(layouts: &'a mut LayoutRegistry) -> Self {
        let mut registry = Self::new(layouts);
        registry.add_factory("tile", || Box::new(TileComponent::default()));
        registry.add_factory("floating", || Box::new(FloatingComponent::default()));
        registry.add_factory("spawn", || Box::new(SpawnComponent::default()));
        registry
    }

    /// Makes a component loadable under `name`.
    ///
    /// A factory already registered under the same name is replaced.
    pub fn add_factory(&mut self, name: &str, factory: ComponentFactory) {
        self.catalog.insert(name.to_string(), factory);
    }

    /// Names of all loadable components, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.catalog.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds a fresh, unloaded instance of component `name`.
    ///
    /// Used to inspect a component (for example its schema) without
    /// loading it.
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn Component>> {
        self.catalog.get(name).map(|factory| factory())
    }

    /// Names of loaded components in load order.
    pub fn loaded_names(&self) -> Vec<String> {
        self.loaded
            .iter()
            .map(|component| component.name().to_string())
            .collect()
    }

    /// Returns the loaded component `name`, if any.
    pub fn component(&self, name: &str) -> Option<&dyn Component> {
        self.loaded
            .iter()
            .find(|component| component.name() == name)
            .map(|component| component.as_ref())
    }

    /// Read access to the layout registry the components populate.
    pub fn layouts(&self) -> &LayoutRegistry {
        &*self.layouts
    }

    fn component_mut(&mut self, name: &str) -> Option<&mut Box<dyn Component>> {
        self.loaded
            .iter_mut()
            .find(|component| component.name() == name)
    }
}

impl ComponentHost for ModuleRegistry<'_> {
    fn load(&mut self, name: &str) -> Result<(), LoadError> {
        if self.component(name).is_some() {
            warn!(module = name, "module already loaded, ignoring");
            return Ok(());
        }

        let factory = *self
            .catalog
            .get(name)
            .ok_or_else(|| LoadError::NotAvailable {
                name: name.to_string(),
            })?;

        let mut component = factory();
        component
            .load(self.layouts)
            .map_err(|error| LoadError::InitFailed {
                name: name.to_string(),
                reason: error.to_string(),
            })?;

        info!(module = name, "loaded module");
        self.loaded.push(component);
        Ok(())
    }

    fn configure(&mut self, name: &str, document: &ConfigDocument) -> Result<(), ConfigureError> {
        let component = self
            .component_mut(name)
            .ok_or_else(|| ConfigureError::UnknownComponent {
                name: name.to_string(),
            })?;

        component
            .configure(document)
            .map_err(|error| ConfigureError::Rejected {
                name: name.to_string(),
                reason: error.to_string(),
            })?;

        debug!(module = name, "configured module");
        Ok(())
    }
}
