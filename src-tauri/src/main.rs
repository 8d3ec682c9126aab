#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod about_dialog;
mod app_constants;
mod app_runtime;
mod app_types;
mod dark_mode;
mod engine_log_env;
mod logging;
mod main_window;
mod nav_actions;
mod nav_history;
mod nav_menu;
mod nav_menu_handler;
mod shell_config;
mod shell_controller;
mod theme;
mod window_actions;
mod window_icon;

pub(crate) use app_constants::*;
pub(crate) use app_types::NavigationMenuState;
pub(crate) use logging::{append_desktop_log, append_startup_log};

fn main() {
    app_runtime::run();
}
