use super::{
    AdminAccess, AdminMenu, DashboardPlugin, MenuUrl, Schedule, ScheduledTask, TaskPriority,
    TaskRegistry,
};

pub const ADMIN_HOME_PLUGIN_ID: &str = "CoreAdminHome";

pub const MENU_MANAGE: &str = "Manage";
pub const MENU_COMMUNITY: &str = "Community";
pub const MENU_DIAGNOSTIC: &str = "Diagnostic";
pub const MENU_SETTINGS: &str = "Settings";
pub const MENU_GENERAL_SETTINGS: &str = "General settings";
pub const MENU_TRACKING_CODE: &str = "Tracking code";

pub const TASK_PURGE_OUTDATED_ARCHIVES: &str = "purgeOutdatedArchives";
pub const TASK_OPTIMIZE_ARCHIVE_TABLE: &str = "optimizeArchiveTable";

/// Admin home: top-level admin menu layout and archive maintenance tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminHomePlugin;

impl DashboardPlugin for AdminHomePlugin {
    fn id(&self) -> &str {
        ADMIN_HOME_PLUGIN_ID
    }

    fn add_admin_menu(&self, menu: &mut AdminMenu, access: AdminAccess) {
        let display = access.has_some_admin_access;
        menu.add_sub_menu(MENU_MANAGE, None, None, display, 1);
        menu.add_sub_menu(MENU_COMMUNITY, None, None, display, 3);
        menu.add_sub_menu(MENU_DIAGNOSTIC, None, None, display, 20);
        menu.add_sub_menu(MENU_SETTINGS, None, None, display, 5);
        menu.add_sub_menu(
            MENU_SETTINGS,
            Some(MENU_GENERAL_SETTINGS),
            Some(MenuUrl::new(ADMIN_HOME_PLUGIN_ID, "generalSettings")),
            display,
            6,
        );
        menu.add_sub_menu(
            MENU_MANAGE,
            Some(MENU_TRACKING_CODE),
            Some(MenuUrl::new(ADMIN_HOME_PLUGIN_ID, "trackingCodeGenerator")),
            display,
            4,
        );
    }

    fn scheduled_tasks(&self, tasks: &mut TaskRegistry) {
        tasks.push(ScheduledTask::new(
            ADMIN_HOME_PLUGIN_ID,
            TASK_PURGE_OUTDATED_ARCHIVES,
            Schedule::Daily,
            TaskPriority::High,
        ));
        // Runs after the purge so tables are optimized once modified.
        tasks.push(ScheduledTask::new(
            ADMIN_HOME_PLUGIN_ID,
            TASK_OPTIMIZE_ARCHIVE_TABLE,
            Schedule::Daily,
            TaskPriority::Lowest,
        ));
    }
}
