use std::time::Duration;

use macroquad::prelude::*;
use toroidal_life::{
    Brush, LifeConfig, LifeError, Simulation,
    input, rendering,
    ui::{self, MENU_HEIGHT},
};

fn window_conf() -> Conf {
    let config = LifeConfig::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32 + MENU_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Engine errors here are caller bugs: report and quit instead of carrying on
fn or_exit<T>(result: Result<T, LifeError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = LifeConfig::default();
    let mut sim = or_exit(Simulation::new(&config));
    let mut brush = Brush::new();
    let menu = ui::create_menu();
    log::info!("window open with a {}x{} board", config.rows(), config.cols());

    loop {
        let mouse_pos = mouse_position();

        let flow = or_exit(input::process_menu_clicks(&mut sim, &menu, mouse_pos));
        if flow.is_break() {
            break;
        }
        or_exit(input::handle_mouse_paint(&mut sim, &mut brush, &config, mouse_pos));

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(WHITE);
        rendering::draw_grid(&sim, &config);
        rendering::draw_menu(&sim, &menu, mouse_pos);

        next_frame().await;
    }

    log::info!("closing after {} generations", sim.generation());
}
