//! Process-wide table of named layouts.
//!
//! Components register the layouts they provide while they load. The window
//! manager later selects among them by name. The table has an explicit
//! lifecycle: it is created with [`LayoutRegistry::init`] at startup,
//! mutated while components load, and emptied with
//! [`LayoutRegistry::teardown`] at shutdown.

use std::{collections::HashMap, fmt, sync::Arc};

use tracing::{debug, info, warn};

/// A window-arrangement strategy, identified by a unique name.
///
/// The registry treats layouts as opaque. Only the name is interpreted.
pub trait Layout: fmt::Debug + Send + Sync {
    /// Unique name the layout is selected by.
    fn name(&self) -> &str;

    /// Name of the component that provides this layout.
    fn provider(&self) -> &str;

    /// One-line description for listings.
    fn summary(&self) -> &str {
        ""
    }
}

/// Layout descriptor with fixed metadata, used by the built-in components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLayout {
    name: String,
    provider: String,
    summary: String,
}

impl StaticLayout {
    /// Creates a descriptor named `name`, provided by component `provider`.
    pub fn new(name: &str, provider: &str, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            provider: provider.to_string(),
            summary: summary.to_string(),
        }
    }
}

impl Layout for StaticLayout {
    fn name(&self) -> &str {
        &self.name
    }

    fn provider(&self) -> &str {
        &self.provider
    }

    fn summary(&self) -> &str {
        &self.summary
    }
}

/// Table from layout name to layout descriptor.
///
/// Registration happens while the configuration loads, which is single
/// threaded and holds the registry by `&mut`. Sharing it across threads
/// after startup needs external synchronization around `register`.
#[derive(Debug)]
pub struct LayoutRegistry {
    layouts: HashMap<String, Arc<dyn Layout>>,
    torn_down: bool,
}

impl LayoutRegistry {
    /// Creates the empty table at startup.
    pub fn init() -> Self {
        debug!("layout registry initialized");
        Self {
            layouts: HashMap::new(),
            torn_down: false,
        }
    }

    /// Inserts `layout` under its name.
    ///
    /// An existing entry with the same name is replaced (last write wins).
    /// Returns `true` if an entry was replaced. Registrations after
    /// [`teardown`](Self::teardown) are dropped.
    pub fn register(&mut self, layout: Arc<dyn Layout>) -> bool {
        if self.torn_down {
            warn!(layout = layout.name(), "layout registered after teardown, dropping");
            return false;
        }

        let name = layout.name().to_string();
        let provider = layout.provider().to_string();
        let replaced = self.layouts.insert(name.clone(), layout).is_some();

        if replaced {
            warn!(layout = %name, provider = %provider, "replaced existing layout");
        } else {
            debug!(layout = %name, provider = %provider, "registered layout");
        }

        replaced
    }

    /// Returns the layout registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Layout>> {
        self.layouts.get(name).cloned()
    }

    /// Names of all registered layouts, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.layouts.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether no layout is registered.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Releases every layout at shutdown.
    pub fn teardown(&mut self) {
        let released = self.layouts.len();
        self.layouts.clear();
        self.torn_down = true;
        info!(released, "layout registry torn down");
    }
}
