use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("total frames must be at least 1")]
    NoFrames,

    #[error("frame delay must be at least 1 ms")]
    ZeroDelay,

    #[error("at least one fetch worker is required")]
    NoWorkers,

    #[error("image format must not be empty")]
    EmptyFormat,

    #[error("frame range starting at {min_frame} with {total_frames} frames overflows")]
    RangeOverflow { min_frame: u32, total_frames: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to create texture for {path:?}: {message}")]
    Texture { path: PathBuf, message: String },
}

impl LoadError {
    pub fn decode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn texture(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Texture {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
