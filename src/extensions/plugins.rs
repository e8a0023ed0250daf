use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::{AdminMenu, TaskRegistry};

/// Caller privileges relevant to admin menu registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminAccess {
    pub has_some_admin_access: bool,
}

impl AdminAccess {
    #[must_use]
    pub fn admin() -> Self {
        Self {
            has_some_admin_access: true,
        }
    }

    #[must_use]
    pub fn view_only() -> Self {
        Self::default()
    }
}

/// Hook interface of dashboard plugins.
///
/// Every hook has an empty default so plugins only implement what they use.
pub trait DashboardPlugin {
    fn id(&self) -> &str;

    fn add_admin_menu(&self, _menu: &mut AdminMenu, _access: AdminAccess) {}

    fn scheduled_tasks(&self, _tasks: &mut TaskRegistry) {}
}

#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn DashboardPlugin>>,
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin with unique identifier.
    pub fn register(&mut self, plugin: Box<dyn DashboardPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        debug!(plugin = %plugin_id, "registered plugin");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self.plugins.iter().position(|p| p.id() == plugin_id) {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn admin_menu(&self, access: AdminAccess) -> AdminMenu {
        let mut menu = AdminMenu::new();
        for plugin in &self.plugins {
            plugin.add_admin_menu(&mut menu, access);
        }
        menu
    }

    #[must_use]
    pub fn scheduled_tasks(&self) -> TaskRegistry {
        let mut tasks = TaskRegistry::new();
        for plugin in &self.plugins {
            plugin.scheduled_tasks(&mut tasks);
        }
        debug!(count = tasks.len(), "collected scheduled tasks");
        tasks
    }
}
