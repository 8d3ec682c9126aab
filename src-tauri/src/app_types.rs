use tauri::menu::MenuItem;

/// Handles to the menu items whose enabled state follows navigation history.
#[derive(Clone)]
pub(crate) struct NavigationMenuState {
    pub(crate) back_item: MenuItem<tauri::Wry>,
    pub(crate) forward_item: MenuItem<tauri::Wry>,
}
