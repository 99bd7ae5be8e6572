use macroquad::prelude::*;

use crate::application::Simulation;
use crate::config::LifeConfig;
use crate::ui::{MenuButton, MENU_HEIGHT};

/// Paint every cell: black when alive, white when dead
pub fn draw_grid(sim: &Simulation, config: &LifeConfig) {
    let cell_size = config.cell_size as f32;

    for (row, col, alive) in sim.engine().iter_cells() {
        let color = if alive { BLACK } else { WHITE };
        draw_rectangle(
            col as f32 * cell_size,
            MENU_HEIGHT + row as f32 * cell_size,
            cell_size,
            cell_size,
            color,
        );
    }
}

/// Menu bar background, entries and a right-aligned status readout
pub fn draw_menu(sim: &Simulation, menu: &[MenuButton], mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, screen_width(), MENU_HEIGHT, Color::from_rgba(238, 238, 238, 255));
    draw_line(0.0, MENU_HEIGHT, screen_width(), MENU_HEIGHT, 1.0, GRAY);

    menu.iter().for_each(|button| button.draw(mouse_pos));

    let status = format!(
        "{}  gen {}  pop {}",
        if sim.is_running() { "Running" } else { "Stopped" },
        sim.generation(),
        sim.engine().population()
    );
    let size = measure_text(&status, None, 14, 1.0);
    draw_text(
        &status,
        screen_width() - size.width - 8.0,
        (MENU_HEIGHT + size.height) / 2.0,
        14.0,
        DARKGRAY,
    );
}
