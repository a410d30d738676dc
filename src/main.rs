use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod config;
mod constants;
mod error;
mod frame_cache;
mod player;
mod preloader;
mod render;
mod scheduler;
mod stage;
mod state;
mod texture_loader;

use crate::config::{Args, PlayerConfig};
use crate::constants::*;
use crate::player::FramePlayer;
use crate::preloader::Preloader;
use crate::texture_loader::upload_frame_texture;

fn main() -> Result<()> {
    env_logger::init(); // RUST_LOG=info shows the player lifecycle

    // --- Configuration from Command Line ---
    let args = Args::parse();
    let config = PlayerConfig::try_from(args).context("invalid player configuration")?;
    info!("Animation viewer setup initiated");

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Frame Player")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Start Preloading ---
    let mut player: FramePlayer<Texture2D> = FramePlayer::new(config.clone());
    player.begin_preload();
    let mut preloader = Preloader::start(&config);
    info!(
        "Queued {} fetches for frames {}..={} on {} workers",
        preloader.total(),
        config.min_frame,
        config.max_frame(),
        config.fetch_workers
    );

    // --- Main Loop: one iteration per display refresh ---
    while !rl.window_should_close() {
        // 1. Load completions: pixels arrive decoded, only the GPU upload happens here
        for fetched in preloader.poll(MAX_UPLOADS_PER_REFRESH) {
            let texture = fetched
                .frame
                .and_then(|frame| upload_frame_texture(&mut rl, &thread, &fetched.path, &frame));
            let loaded_at = rl.get_time() * 1000.0;
            player.on_frame_loaded(fetched.layer, fetched.index, texture, loaded_at);
        }

        // Read after the uploads so playback never starts from a stale clock
        let now_ms = rl.get_time() * 1000.0;

        // 2. User input
        let button = render::toggle_button_rect(rl.get_screen_height() as f32);
        let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            && button.check_collision_point_rec(rl.get_mouse_position());
        if clicked || rl.is_key_pressed(KeyboardKey::KEY_T) {
            player.toggle_overlay();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            player.toggle_playback(now_ms);
        }

        // 3. Scheduled animation callback
        player.on_refresh(now_ms);

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        render::draw_stage(&mut d, player.stage(), player.cache());
    }

    Ok(())
}
