use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme `{0}` (expected `dark` or `broken`)")]
    UnknownTheme(String),

    #[error("invalid theme overrides: {0}")]
    Parse(#[from] toml::de::Error),
}
