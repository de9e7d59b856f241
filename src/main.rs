use macroquad::prelude::*;

use lifepad::{
    application::{AppState, Config, Outcome},
    input, rendering,
    ui::{self, Theme},
};

fn window_conf() -> Conf {
    let cfg = Config::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: cfg.window_width() as i32,
        window_height: cfg.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Route window-close through the event drain so every exit path goes
    // through the same teardown
    prevent_quit();

    let cfg = Config::default();
    let theme = Theme::default();
    let buttons = ui::create_buttons(&cfg);
    let mut state = AppState::new(&cfg);

    info!(
        "board ready: {}x{} cells, {} gen/s",
        cfg.grid_width, cfg.grid_height, cfg.updates_per_second
    );

    loop {
        clear_background(theme.grid_lines);

        if state.is_running {
            // Preview the next generation while rendering the current one
            let next = state.grid.step();
            rendering::draw_cells(&state.grid, Some(&next), &cfg, &theme);
        } else {
            rendering::draw_cells(&state.grid, None, &cfg, &theme);
        }

        let mouse_pos = mouse_position();
        rendering::draw_button_bar(&buttons, &state, &theme, mouse_pos);
        rendering::draw_status(&state, &cfg, &theme);

        // Drain all pending input before the next simulation step, so a
        // pause click takes effect no later than the following frame
        for event in input::poll_events() {
            let (next_state, outcome) = state.apply(event, &buttons, &cfg);
            state = next_state;
            if outcome == Outcome::Exit {
                info!("quit after {} generations", state.generation);
                return;
            }
        }

        state = state.tick(get_frame_time());

        next_frame().await;
    }
}
