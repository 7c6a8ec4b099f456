use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("failed to create canvas: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),
    #[error("invalid logging configuration: {0}")]
    LogConfig(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
