//! Scoped game content
//!
//! Textures and the sound bank are acquired together when the gameplay
//! screen loads and released together when it unloads (or is dropped).

use crate::audio::{AudioBackend, AudioMixer, SimulatedBank};
use crate::consts::{
    AMBIENCE_CUE, AUDIO_ENGINE, BALL_TEXTURE, GAME_FONT, GRASS_BLOCK_TEXTURE, MUSIC_CUE,
    SOUND_BANK, WAVE_BANK,
};
use crate::error::GameError;
use crate::settings::Settings;

/// Backend-specific texture handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Backend-specific font handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// A loaded texture and its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Asset loading collaborator
pub trait ContentSource {
    fn load_texture(&mut self, name: &str) -> Result<TextureInfo, GameError>;
    fn load_font(&mut self, name: &str) -> Result<FontId, GameError>;
    /// Open the audio engine with its wave bank and sound bank
    fn open_audio(
        &mut self,
        engine: &str,
        wave_bank: &str,
        sound_bank: &str,
    ) -> Result<Box<dyn AudioBackend>, GameError>;
}

/// Content owned by the gameplay screen for its lifetime
pub struct Content {
    pub grass_block: TextureInfo,
    pub ball: TextureInfo,
    /// HUD font; nothing is drawn with it yet
    pub font: FontId,
    pub audio: AudioMixer,
}

impl Content {
    pub fn load(source: &mut dyn ContentSource, settings: &Settings) -> Result<Self, GameError> {
        let grass_block = source.load_texture(GRASS_BLOCK_TEXTURE)?;
        let ball = source.load_texture(BALL_TEXTURE)?;
        let font = source.load_font(GAME_FONT)?;
        let backend = source.open_audio(AUDIO_ENGINE, WAVE_BANK, SOUND_BANK)?;
        log::info!(
            "Content loaded: ball {}x{}, block {}x{}",
            ball.width,
            ball.height,
            grass_block.width,
            grass_block.height
        );
        Ok(Self {
            grass_block,
            ball,
            font,
            audio: AudioMixer::new(backend, settings),
        })
    }
}

impl Drop for Content {
    fn drop(&mut self) {
        log::info!("Content released");
    }
}

/// Built-in content for headless runs and tests
///
/// Textures are size descriptors only; audio is a `SimulatedBank`.
pub struct BuiltinContent {
    pub ball_size: (u32, u32),
    pub block_size: (u32, u32),
    /// Cue lengths in frames
    pub music_frames: u32,
    pub ambience_frames: u32,
    /// Frames before a started cue counts as busy
    pub audio_latency: u32,
}

impl Default for BuiltinContent {
    fn default() -> Self {
        Self {
            ball_size: (64, 64),
            block_size: (128, 128),
            music_frames: 60 * 30,
            ambience_frames: 60 * 2,
            audio_latency: 0,
        }
    }
}

impl ContentSource for BuiltinContent {
    fn load_texture(&mut self, name: &str) -> Result<TextureInfo, GameError> {
        let (id, (width, height)) = match name {
            BALL_TEXTURE => (1, self.ball_size),
            GRASS_BLOCK_TEXTURE => (2, self.block_size),
            _ => {
                return Err(GameError::Content {
                    name: name.to_string(),
                    reason: "not a built-in texture".to_string(),
                });
            }
        };
        Ok(TextureInfo {
            id: TextureId(id),
            width,
            height,
        })
    }

    fn load_font(&mut self, name: &str) -> Result<FontId, GameError> {
        match name {
            GAME_FONT => Ok(FontId(1)),
            _ => Err(GameError::Content {
                name: name.to_string(),
                reason: "not a built-in font".to_string(),
            }),
        }
    }

    fn open_audio(
        &mut self,
        engine: &str,
        wave_bank: &str,
        sound_bank: &str,
    ) -> Result<Box<dyn AudioBackend>, GameError> {
        log::debug!("Opening simulated audio: {engine}, {wave_bank}, {sound_bank}");
        let bank = SimulatedBank::new(self.audio_latency)
            .with_cue(MUSIC_CUE, self.music_frames)
            .with_cue(AMBIENCE_CUE, self.ambience_frames);
        Ok(Box::new(bank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_loads() {
        let mut source = BuiltinContent::default();
        let content = Content::load(&mut source, &Settings::default()).unwrap();
        assert_eq!(content.ball.height, 64);
        assert_eq!(content.font, FontId(1));
        assert_ne!(content.ball.id, content.grass_block.id);
        assert!(!content.audio.is_busy());
    }

    #[test]
    fn test_unknown_texture_is_an_error() {
        let mut source = BuiltinContent::default();
        let err = source.load_texture("Lava").unwrap_err();
        assert!(matches!(err, GameError::Content { ref name, .. } if name == "Lava"));
    }

    #[test]
    fn test_missing_font_fails_content_load() {
        struct NoFonts(BuiltinContent);

        impl ContentSource for NoFonts {
            fn load_texture(&mut self, name: &str) -> Result<TextureInfo, GameError> {
                self.0.load_texture(name)
            }
            fn load_font(&mut self, name: &str) -> Result<FontId, GameError> {
                Err(GameError::Content {
                    name: name.to_string(),
                    reason: "fonts unavailable".to_string(),
                })
            }
            fn open_audio(
                &mut self,
                engine: &str,
                wave_bank: &str,
                sound_bank: &str,
            ) -> Result<Box<dyn AudioBackend>, GameError> {
                self.0.open_audio(engine, wave_bank, sound_bank)
            }
        }

        let mut source = NoFonts(BuiltinContent::default());
        let result = Content::load(&mut source, &Settings::default());
        assert!(matches!(result, Err(GameError::Content { ref name, .. }) if name == "gamefont"));
    }
}
