//! Interactive Voxel Space viewer.
//!
//! ```bash
//! cargo run --release -- --color-map maps/C1W.png --height-map maps/D1.png
//! ```

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::{Duration, Instant};

use voxel_space::{
    assets::{load_terrain, load_texture},
    config::Opts,
    frame_clock::FrameClock,
    input::{Held, InputState},
    renderer::{
        FrameBuffer, RenderList,
        software::{SkyLayer, VoxelRenderer},
    },
    world::Command,
};

/// One-shot adjustments, auto-repeated while the key is down.
const ADJUST_KEYS: [(Key, Command); 13] = [
    (Key::Home, Command::HeightUp),
    (Key::End, Command::HeightDown),
    (Key::Space, Command::ToggleAttach),
    (Key::PageUp, Command::FovUp),
    (Key::PageDown, Command::FovDown),
    (Key::Insert, Command::HorizonUp),
    (Key::Delete, Command::HorizonDown),
    (Key::Comma, Command::DistanceUp),
    (Key::Period, Command::DistanceDown),
    (Key::LeftBracket, Command::FidelityUp),
    (Key::RightBracket, Command::FidelityDown),
    (Key::Minus, Command::DetailDown),
    (Key::Equal, Command::DetailUp),
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let opts = Opts::parse();
    let mut camera = opts.camera().context("invalid camera settings")?;

    let terrain = load_terrain(&opts.color_map, &opts.height_map)
        .context("failed to load terrain maps")?;
    info!("terrain is {0}×{0} texels", terrain.side());

    // ─────────── render list: sky first, terrain on top ────────────
    let mut layers = RenderList::new();
    if let Some(path) = &opts.sky {
        let sky = load_texture(path).and_then(|tex| Ok(SkyLayer::new(tex)?));
        match sky {
            Ok(sky) => {
                let sky = match opts.sky_window.as_deref() {
                    Some(&[w, h]) => sky.with_window(w, h),
                    _ => sky,
                };
                layers.push(sky);
            }
            Err(e) => warn!("sky disabled: {e}"),
        }
    }
    layers.push(VoxelRenderer::new(terrain));

    let (w, h) = (opts.width, opts.height);
    let mut fb = FrameBuffer::new(w, h);

    let mut win = Window::new("Voxel Space", w, h, WindowOptions::default())?;
    win.set_target_fps(opts.target_fps);

    let mut input = InputState::new();
    let mut clock = FrameClock::new();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    let mut running = win.is_open();
    while running {
        let t0 = Instant::now();

        poll_input(&win, &mut input);
        input.apply_to(&mut camera);

        layers.render(&camera, &mut fb);
        acc_time += t0.elapsed();
        acc_frames += 1;

        fb.present(|px, w, h| win.update_with_buffer(px, w, h))
            .context("failed to present frame")?;
        clock.tick();

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            info!(
                "avg render: {:.2} ms  ({} FPS presented)",
                avg_ms,
                clock.fps()
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }

        running = win.is_open() && !win.is_key_down(Key::Escape);
    }

    info!("bye");
    Ok(())
}

/// Translate the window's key state into camera input for this frame.
fn poll_input(win: &Window, input: &mut InputState) {
    let mut held = Held::empty();
    held.set(Held::FORWARD, win.is_key_down(Key::Up));
    held.set(Held::BACKWARD, win.is_key_down(Key::Down));
    held.set(Held::TURN_LEFT, win.is_key_down(Key::Left));
    held.set(Held::TURN_RIGHT, win.is_key_down(Key::Right));
    input.set_held(held);

    for &(key, cmd) in &ADJUST_KEYS {
        if win.is_key_pressed(key, KeyRepeat::Yes) {
            input.push(cmd);
        }
    }
}
