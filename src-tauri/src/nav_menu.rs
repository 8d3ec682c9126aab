use tauri::{
    menu::{Menu, MenuItem},
    AppHandle, Wry,
};

use crate::{
    nav_actions::{
        NAV_LABEL_ABOUT, NAV_LABEL_BACK, NAV_LABEL_FORWARD, NAV_LABEL_RELOAD, NAV_MENU_ABOUT,
        NAV_MENU_BACK, NAV_MENU_FORWARD, NAV_MENU_RELOAD,
    },
    NavigationMenuState,
};

pub(crate) fn set_menu_enabled_safe<F>(
    item: &MenuItem<tauri::Wry>,
    enabled: bool,
    item_name: &str,
    log: F,
) where
    F: Fn(&str),
{
    if let Err(error) = item.set_enabled(enabled) {
        log(&format!(
            "failed to update navigation menu state for {}: {}",
            item_name, error
        ));
    }
}

fn nav_item(
    app_handle: &AppHandle,
    id: &str,
    label: &str,
    enabled: bool,
) -> Result<MenuItem<Wry>, String> {
    MenuItem::with_id(app_handle, id, label, enabled, None::<&str>)
        .map_err(|error| format!("Failed to create navigation menu item {id}: {error}"))
}

/// Back and Forward start disabled; nothing has loaded yet.
pub fn build_navigation_menu(
    app_handle: &AppHandle,
) -> Result<(Menu<Wry>, NavigationMenuState), String> {
    let back_item = nav_item(app_handle, NAV_MENU_BACK, NAV_LABEL_BACK, false)?;
    let forward_item = nav_item(app_handle, NAV_MENU_FORWARD, NAV_LABEL_FORWARD, false)?;
    let reload_item = nav_item(app_handle, NAV_MENU_RELOAD, NAV_LABEL_RELOAD, true)?;
    let about_item = nav_item(app_handle, NAV_MENU_ABOUT, NAV_LABEL_ABOUT, true)?;

    // The macOS menu bar only holds submenus.
    #[cfg(target_os = "macos")]
    let menu = {
        let navigate = tauri::menu::Submenu::with_items(
            app_handle,
            "Navigate",
            true,
            &[&back_item, &forward_item, &reload_item, &about_item],
        )
        .map_err(|error| format!("Failed to build navigation submenu: {error}"))?;
        Menu::with_items(app_handle, &[&navigate])
    };

    #[cfg(not(target_os = "macos"))]
    let menu = Menu::with_items(
        app_handle,
        &[&back_item, &forward_item, &reload_item, &about_item],
    );

    let menu = menu.map_err(|error| format!("Failed to build navigation menu: {error}"))?;

    Ok((
        menu,
        NavigationMenuState {
            back_item,
            forward_item,
        },
    ))
}
