//! Talisman entry point
//!
//! Window creation, raw input polling, and the render pipeline are
//! external collaborators; this binary runs the simulation core headless
//! with a short scripted input sequence and logs what happens. Wire a
//! windowing backend to `sim::tick` + `render::draw_list` for the real
//! thing.

use std::time::{SystemTime, UNIX_EPOCH};

use talisman::debug::DebugOverlay;
use talisman::render::draw_list;
use talisman::sim::{FrameInput, World, tick};
use talisman::{FrameClock, Settings, consts};

/// Frames in the scripted demo run
const DEMO_FRAMES: u64 = 480;

fn main() {
    env_logger::init();
    log::info!("{} starting", consts::SCREEN_TITLE);

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut world = World::generate(seed);
    let mut clock = FrameClock::new(settings.target_fps);
    let mut overlay = DebugOverlay::new();
    if settings.debug_overlay {
        overlay.toggle();
    }

    log::info!(
        "seed={seed} target_fps={} terrain_tiles={}",
        settings.target_fps,
        world.terrain.len()
    );

    for frame in 0..DEMO_FRAMES {
        let input = scripted_input(frame);
        let dt = clock.tick();
        tick(&mut world, &input, dt);

        if frame % 120 == 0 {
            log::info!(
                "frame {frame}: player pos={} vel={} falling={}",
                world.player.pos,
                world.player.vel,
                world.player.falling
            );
            for line in overlay.lines(clock.fps(), &input) {
                log::info!("  {line}");
            }
        }
    }

    let sprites = draw_list(&world);
    log::info!(
        "demo finished after {} frames, {} sprites in final draw list, avg {} fps",
        world.frames,
        sprites.len(),
        clock.fps()
    );
}

/// Input script for the demo: walk right for two seconds, jump once,
/// then coast to a stop.
fn scripted_input(frame: u64) -> FrameInput {
    FrameInput {
        move_right: frame < 240,
        jump_pressed: frame == 300,
        ..FrameInput::default()
    }
}
