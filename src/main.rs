//! Rolling Ball entry point
//!
//! Runs the gameplay screen headlessly with built-in content, a recording
//! renderer and an attract-mode bot pressing jump.
//!
//! Usage: `rolling-ball [settings.json] [tuning.json]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use rolling_ball::content::BuiltinContent;
use rolling_ball::input::{GamePadState, InputState, Key, KeyboardState, PlayerIndex};
use rolling_ball::renderer::DrawList;
use rolling_ball::{GameError, GameplayScreen, Screen, ScreenHost, Settings, Tuning};

const SCREEN_SIZE: (u32, u32) = (800, 480);
const FRAME_DT: f32 = 1.0 / 60.0;
const RUN_FRAMES: u32 = 60 * 60;
/// Frames a pause overlay keeps focus before the bot dismisses it
const PAUSE_FRAMES: u32 = 90;
const BOT_SEED: u64 = 0x5eed;

/// Minimal screen manager: one gameplay screen and an optional pause overlay
#[derive(Default)]
struct HeadlessHost {
    pause_frames_left: u32,
    pauses: u32,
}

impl ScreenHost for HeadlessHost {
    fn push_pause_overlay(&mut self, player: PlayerIndex) {
        log::info!("Pause overlay pushed for {player:?}");
        self.pause_frames_left = PAUSE_FRAMES;
        self.pauses += 1;
    }
}

impl HeadlessHost {
    fn overlay_has_focus(&self) -> bool {
        self.pause_frames_left > 0
    }

    fn tick_overlay(&mut self) {
        if self.pause_frames_left > 0 {
            self.pause_frames_left -= 1;
            if self.pause_frames_left == 0 {
                log::info!("Pause overlay dismissed");
            }
        }
    }
}

/// Attract-mode player: taps jump at random, pauses once mid-run
fn bot_keys(rng: &mut Pcg32, frame: u32) -> KeyboardState {
    let mut keys = Vec::new();
    if rng.random_bool(0.15) {
        keys.push(Key::W);
    }
    if frame == RUN_FRAMES / 2 {
        keys.push(Key::Escape);
    }
    KeyboardState::with_keys(&keys)
}

fn run() -> Result<(), GameError> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut source = BuiltinContent::default();
    let mut screen =
        GameplayScreen::load(&mut source, SCREEN_SIZE, &settings, tuning, PlayerIndex::One)?;
    let mut host = HeadlessHost::default();
    let mut input = InputState::new();
    let mut renderer = DrawList::new();
    let mut rng = Pcg32::seed_from_u64(BOT_SEED);
    let mut quads = 0usize;

    for frame in 0..RUN_FRAMES {
        let has_focus = host.overlay_has_focus();
        screen.update(FRAME_DT, has_focus);
        host.tick_overlay();

        input.update_single(bot_keys(&mut rng, frame), GamePadState::disconnected());
        if !has_focus {
            screen.handle_input(Some(&input), &mut host)?;
        }

        renderer.clear_commands();
        screen.draw(&mut renderer);
        quads += renderer.quad_count();
    }

    let state = screen.state();
    log::info!(
        "Ran {} frames ({} simulated), {} pauses, {} quads drawn, ball at {:.1}",
        RUN_FRAMES,
        state.frames,
        host.pauses,
        quads,
        state.ball.pos.y
    );
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(state) {
            log::debug!("Final state: {json}");
        }
    }
    screen.unload();
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Rolling Ball (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
