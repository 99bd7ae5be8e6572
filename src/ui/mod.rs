mod button;

pub use button::MenuButton;

use crate::application::MenuAction;
use crate::config::LifeConfig;

/// Height of the menu bar above the board
pub const MENU_HEIGHT: f32 = 30.0;

/// Lay the menu entries out left to right, sized to their labels
pub fn create_menu() -> Vec<MenuButton> {
    let mut x = 0.0;
    MenuAction::all()
        .into_iter()
        .map(|action| {
            let button = MenuButton::new(x, 0.0, button::label_width(action), MENU_HEIGHT, action);
            x = button.right();
            button
        })
        .collect()
}

/// Board cell under a screen position, or None over the menu bar or past the board
pub fn cell_at(config: &LifeConfig, mouse_pos: (f32, f32)) -> Option<(i32, i32)> {
    let (x, y) = (mouse_pos.0, mouse_pos.1 - MENU_HEIGHT);
    if x < 0.0 || y < 0.0 {
        return None;
    }

    let cell_size = config.cell_size as f32;
    let row = (y / cell_size) as usize;
    let col = (x / cell_size) as usize;
    (row < config.rows() && col < config.cols()).then_some((row as i32, col as i32))
}
