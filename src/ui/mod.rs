pub mod color_panel;
pub mod dialogs;
pub mod menu_bar;
pub mod status_bar;
pub mod tool_panel;
