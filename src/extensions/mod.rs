//! Dashboard plugin hooks: admin menu and scheduled task registration.
//!
//! Registration is declarative. Task bodies live with the hosting application.

mod admin_home;
mod admin_menu;
mod plugins;
mod scheduler;

pub use admin_home::{
    ADMIN_HOME_PLUGIN_ID, AdminHomePlugin, MENU_COMMUNITY, MENU_DIAGNOSTIC, MENU_GENERAL_SETTINGS,
    MENU_MANAGE, MENU_SETTINGS, MENU_TRACKING_CODE, TASK_OPTIMIZE_ARCHIVE_TABLE,
    TASK_PURGE_OUTDATED_ARCHIVES,
};
pub use admin_menu::{AdminMenu, MenuCategory, MenuEntry, MenuUrl};
pub use plugins::{AdminAccess, DashboardPlugin, PluginRegistry};
pub use scheduler::{Schedule, ScheduledTask, TaskPriority, TaskRegistry};
