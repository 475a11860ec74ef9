#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
    #[error("`{field}` must be a single token, got {value:?}")]
    Whitespace { field: &'static str, value: String },
    #[error("breakpoint must be greater than zero")]
    ZeroBreakpoint,
    #[error("toggle and panel must be different elements, both are #{0}")]
    SameElement(String),
}
