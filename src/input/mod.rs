use std::ops::ControlFlow;

use macroquad::prelude::*;

use crate::application::{Brush, Simulation};
use crate::config::LifeConfig;
use crate::domain::Result;
use crate::ui::{self, MenuButton};

/// Run the menu entry clicked this frame, if any
pub fn process_menu_clicks(
    sim: &mut Simulation,
    menu: &[MenuButton],
    mouse_pos: (f32, f32),
) -> Result<ControlFlow<()>> {
    match menu.iter().find(|button| button.is_clicked(mouse_pos)) {
        Some(button) => sim.apply(button.action()),
        None => Ok(ControlFlow::Continue(())),
    }
}

/// Route the left button to the brush: press toggles, drag paints, release ends the gesture
pub fn handle_mouse_paint(
    sim: &mut Simulation,
    brush: &mut Brush,
    config: &LifeConfig,
    mouse_pos: (f32, f32),
) -> Result<()> {
    let Some(cell) = ui::cell_at(config, mouse_pos) else {
        // Leaving the board ends the gesture
        brush.release();
        return Ok(());
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        brush.press(sim, cell)
    } else if is_mouse_button_down(MouseButton::Left) {
        brush.drag(sim, cell)
    } else {
        brush.release();
        Ok(())
    }
}
