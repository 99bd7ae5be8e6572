use macroquad::prelude::*;

use crate::application::MenuAction;

const FONT_SIZE: u16 = 18;

/// One entry of the menu bar, bound to the action it triggers
#[derive(Clone)]
pub struct MenuButton {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: MenuAction,
}

impl MenuButton {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: MenuAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
        }
    }

    pub fn action(&self) -> MenuAction {
        self.action
    }

    /// Right edge, where the next entry starts
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 < self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 < self.y + self.height
    }

    /// Draw as a flat menu entry, highlighted under the pointer
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        if self.is_hovered(mouse_pos) {
            let highlight = Color::from_rgba(184, 207, 229, 255);
            draw_rectangle(self.x, self.y, self.width, self.height, highlight);
        }

        let label = self.action.label();
        let text_size = measure_text(label, None, FONT_SIZE, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            FONT_SIZE as f32,
            BLACK,
        );
    }

    /// Check if the entry was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

/// Width an entry needs for its label plus padding
pub fn label_width(action: MenuAction) -> f32 {
    measure_text(action.label(), None, FONT_SIZE, 1.0).width + 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_excludes_far_edges() {
        let button = MenuButton::new(10.0, 0.0, 50.0, 30.0, MenuAction::Start);
        assert!(button.is_hovered((10.0, 0.0)));
        assert!(button.is_hovered((59.9, 29.9)));
        assert!(!button.is_hovered((60.0, 10.0)));
        assert!(!button.is_hovered((20.0, 30.0)));
        assert_eq!(button.right(), 60.0);
    }
}
