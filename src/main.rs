use log::{error, info};
use pongsty::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use pongsty::prelude::*;

fn run() -> Result<(), String> {
    let mut window = Window::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut game = Game::default();
    info!("window {WINDOW_WIDTH}x{WINDOW_HEIGHT} ready, press space to serve");

    pongsty::app::run(&mut window, &mut game);
    Ok(())
}

fn main() {
    env_logger::init();

    // Setup failures are reported, not turned into a crash or exit code.
    if let Err(e) = run() {
        error!("{e}");
    }
}
