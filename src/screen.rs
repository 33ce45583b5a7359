//! Screens driven by a host screen manager
//!
//! The host calls `update`, then `handle_input` for the focused screen, then
//! `draw`, once per frame each. Pausing is the host's business: while a pause
//! overlay has focus the gameplay screen is updated with
//! `other_screen_has_focus = true` and its simulation stays frozen.

use glam::Vec2;

use crate::audio::Cue;
use crate::content::{Content, ContentSource};
use crate::error::GameError;
use crate::input::{Button, InputState, Key, PlayerIndex};
use crate::renderer::{Color, RenderState, Renderer, Sprite, color};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, apply_input, should_start_music, tick};
use crate::tuning::Tuning;

/// What the host manager can be asked to do by a screen
pub trait ScreenHost {
    /// Put a pause overlay on top of the calling screen
    fn push_pause_overlay(&mut self, player: PlayerIndex);
}

/// The three capabilities a host manager drives
pub trait Screen {
    fn update(&mut self, dt: f32, other_screen_has_focus: bool);
    fn handle_input(
        &mut self,
        input: Option<&InputState>,
        host: &mut dyn ScreenHost,
    ) -> Result<(), GameError>;
    fn draw(&self, renderer: &mut dyn Renderer);
}

/// Transition phase of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    TransitionOn,
    Active,
    TransitionOff,
    Hidden,
}

/// Fade in/out bookkeeping
///
/// `position` runs from 1 (fully off) to 0 (fully on).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ScreenState,
    pub position: f32,
    on_time: f32,
    off_time: f32,
    exiting: bool,
}

impl Transition {
    pub fn new(on_time: f32, off_time: f32) -> Self {
        Self {
            state: ScreenState::TransitionOn,
            position: 1.0,
            on_time,
            off_time,
            exiting: false,
        }
    }

    pub fn alpha(&self) -> f32 {
        1.0 - self.position
    }

    /// Start fading out; the screen is finished once fully off
    pub fn exit(&mut self) {
        self.exiting = true;
    }

    pub fn is_finished(&self) -> bool {
        self.exiting && self.state == ScreenState::Hidden
    }

    pub fn update(&mut self, dt: f32, covered: bool) {
        if self.exiting || covered {
            self.state = if self.step(dt, self.off_time, 1.0) {
                ScreenState::TransitionOff
            } else {
                ScreenState::Hidden
            };
        } else {
            self.state = if self.step(dt, self.on_time, -1.0) {
                ScreenState::TransitionOn
            } else {
                ScreenState::Active
            };
        }
    }

    /// Move toward the target end; false once it is reached
    fn step(&mut self, dt: f32, time: f32, direction: f32) -> bool {
        let delta = if time <= 0.0 { 1.0 } else { dt / time };
        self.position += delta * direction;
        if (direction < 0.0 && self.position <= 0.0) || (direction > 0.0 && self.position >= 1.0)
        {
            self.position = self.position.clamp(0.0, 1.0);
            return false;
        }
        true
    }
}

/// The single gameplay screen
pub struct GameplayScreen {
    content: Content,
    state: GameState,
    render: RenderState,
    tuning: Tuning,
    transition: Transition,
    controlling_player: PlayerIndex,
    active: bool,
}

impl GameplayScreen {
    /// Acquire content and lay out a fresh run for the given screen size
    pub fn load(
        source: &mut dyn ContentSource,
        screen_size: (u32, u32),
        settings: &Settings,
        tuning: Tuning,
        controlling_player: PlayerIndex,
    ) -> Result<Self, GameError> {
        let (width, height) = screen_size;
        settings.validate()?;
        let content = Content::load(source, settings)?;
        let state = GameState::new(width, height, content.ball.height as f32, &tuning)?;
        let render = RenderState::from_state(&state);
        log::info!("Gameplay screen loaded at {width}x{height}");
        Ok(Self {
            content,
            state,
            render,
            tuning,
            transition: Transition::new(settings.transition_on_secs, settings.transition_off_secs),
            controlling_player,
            active: false,
        })
    }

    /// Release content; consumes the screen
    pub fn unload(self) {
        log::info!("Gameplay screen unloading after {} frames", self.state.frames);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn exit(&mut self) {
        self.transition.exit();
    }

    /// Simulation advanced on the last update
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn log_events(events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::BecameReady => log::info!("Gameplay started"),
                GameEvent::Landed => log::trace!("Ball landed"),
                GameEvent::Jumped(stage) => log::trace!("Jumped: {stage:?}"),
                GameEvent::Ambience => log::debug!("Ambience cue due"),
            }
        }
    }

    fn play_cues(&mut self, events: &[GameEvent]) {
        let audio = &mut self.content.audio;
        if should_start_music(audio.is_busy()) {
            audio.play(Cue::Music);
        }
        for event in events {
            if *event == GameEvent::Ambience {
                audio.play(Cue::Ambience);
            }
        }
        audio.update();
    }
}

impl Screen for GameplayScreen {
    fn update(&mut self, dt: f32, other_screen_has_focus: bool) {
        // A pause overlay never covers gameplay: it stays drawn underneath
        self.transition.update(dt, false);
        self.active = !other_screen_has_focus
            && matches!(
                self.transition.state,
                ScreenState::TransitionOn | ScreenState::Active
            );

        if self.active {
            tick(&mut self.state, dt, &self.tuning);
            let events = self.state.drain_events();
            Self::log_events(&events);
            if self.state.is_ready() {
                self.play_cues(&events);
            }
        }

        self.render = RenderState::from_state(&self.state);
    }

    fn handle_input(
        &mut self,
        input: Option<&InputState>,
        host: &mut dyn ScreenHost,
    ) -> Result<(), GameError> {
        let input = input.ok_or(GameError::MissingInput)?;
        let player = self.controlling_player;

        // Only a gamepad that was once connected can trigger a pause by
        // disappearing; keyboard-only players never had one.
        if input.is_pause_game(player) || input.gamepad_disconnected(player) {
            log::info!("Pause requested by {player:?}");
            host.push_pause_overlay(player);
            return Ok(());
        }

        let jump = input.keyboard(player).is_key_down(Key::W)
            || input.gamepad(player).is_button_down(Button::A);
        apply_input(&mut self.state, &TickInput { jump }, &self.tuning);
        Self::log_events(&self.state.drain_events());
        Ok(())
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let render = &self.render;
        renderer.clear(color::background(render.ready));

        renderer.begin();
        if render.ready {
            let ball = &self.content.ball;
            renderer.draw_sprite(&Sprite {
                texture: ball.id,
                position: render.ball_pos,
                rotation: render.ball_rotation,
                origin: Vec2::new((ball.width / 2) as f32, (ball.height / 2) as f32),
                scale: render.ball_scale,
                tint: Color::WHITE,
            });
            for rect in &render.blocks {
                renderer.draw_rect(self.content.grass_block.id, *rect, Color::WHITE);
            }
        }
        renderer.end();

        if self.transition.position > 0.0 {
            renderer.fade_to_black(1.0 - self.transition.alpha());
        }
    }
}
