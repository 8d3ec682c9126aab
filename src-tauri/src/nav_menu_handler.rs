use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log,
    main_window::{MainWindowBrowser, MainWindowChrome},
    nav_actions,
    shell_controller::ShellController,
    NavigationMenuState, MAIN_WINDOW_LABEL,
};

pub fn handle_nav_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = nav_actions::action_from_menu_id(menu_id) else {
        return;
    };
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_desktop_log(&format!(
            "navigation action {action:?} skipped: main window not found"
        ));
        return;
    };

    let controller = app_handle.state::<ShellController>();
    let menu_state = app_handle.try_state::<NavigationMenuState>();
    controller.handle_action(
        action,
        &MainWindowBrowser::new(&window, append_desktop_log),
        &MainWindowChrome::new(&window, menu_state.as_deref(), append_desktop_log),
        append_desktop_log,
    );
}
