pub const NAV_MENU_BACK: &str = "nav_back";
pub const NAV_MENU_FORWARD: &str = "nav_forward";
pub const NAV_MENU_RELOAD: &str = "nav_reload";
pub const NAV_MENU_ABOUT: &str = "nav_about";

pub const NAV_LABEL_BACK: &str = "← Back";
pub const NAV_LABEL_FORWARD: &str = "→ Forward";
pub const NAV_LABEL_RELOAD: &str = "⟳ Reload";
pub const NAV_LABEL_ABOUT: &str = "ℹ About";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Forward,
    Reload,
    About,
}

pub fn action_from_menu_id(menu_id: &str) -> Option<NavAction> {
    match menu_id {
        NAV_MENU_BACK => Some(NavAction::Back),
        NAV_MENU_FORWARD => Some(NavAction::Forward),
        NAV_MENU_RELOAD => Some(NavAction::Reload),
        NAV_MENU_ABOUT => Some(NavAction::About),
        _ => None,
    }
}
