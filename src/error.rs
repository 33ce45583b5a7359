use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("handle_input was called without an input state")]
    MissingInput,
    #[error("screen size {width}x{height} has a zero dimension")]
    InvalidScreenSize { width: u32, height: u32 },
    #[error("tuning value `{field}` must be finite and positive, got {value}")]
    InvalidTuning { field: &'static str, value: f64 },
    #[error("setting `{field}` must be finite and non-negative, got {value}")]
    InvalidSetting { field: &'static str, value: f32 },
    #[error("unable to load content `{name}`: {reason}")]
    Content { name: String, reason: String },
    #[error("settings file could not be read")]
    SettingsIo(#[from] std::io::Error),
    #[error("settings file is not valid JSON")]
    SettingsParse(#[from] serde_json::Error),
}
