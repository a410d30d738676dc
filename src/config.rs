use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;
use crate::error::ConfigError;
use crate::frame_cache::Layer;

/// Plays a preloaded sequence of paired base/overlay frames in a loop.
#[derive(Parser, Debug, Clone)]
#[command(name = "frameplayer", version)]
pub struct Args {
    /// Directory prefix of the base frames (joined verbatim with the frame number)
    #[arg(long, default_value = DEFAULT_BASE_IMAGE_DIR)]
    pub base_dir: String,

    /// Directory prefix of the overlay frames
    #[arg(long, default_value = DEFAULT_OVERLAY_IMAGE_DIR)]
    pub overlay_dir: String,

    /// Image file extension, without the dot
    #[arg(long, default_value = DEFAULT_IMAGE_FORMAT)]
    pub format: String,

    /// Zero-padding width of the frame number in file names
    #[arg(long, default_value_t = DEFAULT_FRAME_PADDING)]
    pub padding: usize,

    /// Number of frames to preload and play
    #[arg(long, default_value_t = DEFAULT_TOTAL_FRAMES)]
    pub frames: usize,

    /// Number of the first frame
    #[arg(long, default_value_t = DEFAULT_MIN_FRAME)]
    pub min_frame: u32,

    /// Milliseconds between frame advances
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub delay: u32,

    /// Start with the overlay layer hidden
    #[arg(long)]
    pub hide_overlay: bool,

    /// Number of background threads reading frames from disk
    #[arg(long, default_value_t = DEFAULT_FETCH_WORKERS)]
    pub workers: usize,
}

/// Startup configuration. Read once; never changed while playing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub base_image_dir: String,
    pub overlay_image_dir: String,
    pub image_format: String,
    pub frame_padding: usize,
    pub total_frames: usize,
    pub min_frame: u32,
    pub frame_delay_ms: u32,
    pub overlay_visible: bool,
    pub fetch_workers: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_image_dir: DEFAULT_BASE_IMAGE_DIR.to_string(),
            overlay_image_dir: DEFAULT_OVERLAY_IMAGE_DIR.to_string(),
            image_format: DEFAULT_IMAGE_FORMAT.to_string(),
            frame_padding: DEFAULT_FRAME_PADDING,
            total_frames: DEFAULT_TOTAL_FRAMES,
            min_frame: DEFAULT_MIN_FRAME,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            overlay_visible: true,
            fetch_workers: DEFAULT_FETCH_WORKERS,
        }
    }
}

impl TryFrom<Args> for PlayerConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let config = Self {
            base_image_dir: args.base_dir,
            overlay_image_dir: args.overlay_dir,
            image_format: args.format,
            frame_padding: args.padding,
            total_frames: args.frames,
            min_frame: args.min_frame,
            frame_delay_ms: args.delay,
            overlay_visible: !args.hide_overlay,
            fetch_workers: args.workers,
        };
        config.validate()?;
        Ok(config)
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.frame_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        if self.fetch_workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.image_format.is_empty() {
            return Err(ConfigError::EmptyFormat);
        }
        let last = self.min_frame as u64 + self.total_frames as u64 - 1;
        if last > u32::MAX as u64 {
            return Err(ConfigError::RangeOverflow {
                min_frame: self.min_frame,
                total_frames: self.total_frames,
            });
        }
        Ok(())
    }

    pub fn total_images(&self) -> usize {
        self.total_frames * 2
    }

    pub fn max_frame(&self) -> u32 {
        self.min_frame + (self.total_frames - 1) as u32
    }

    pub fn format_frame_number(&self, frame: u32) -> String {
        format!("{:0width$}", frame, width = self.frame_padding)
    }

    pub fn frame_path(&self, layer: Layer, frame: u32) -> PathBuf {
        let dir = match layer {
            Layer::Base => &self.base_image_dir,
            Layer::Overlay => &self.overlay_image_dir,
        };
        PathBuf::from(format!(
            "{}{}.{}",
            dir,
            self.format_frame_number(frame),
            self.image_format
        ))
    }

    /// Position of `frame` in the preload cache, always in `0..total_frames`.
    pub fn display_index(&self, frame: u32) -> usize {
        let offset = frame as i64 - self.min_frame as i64;
        offset.rem_euclid(self.total_frames as i64) as usize
    }

    /// Frame number stored at cache position `index`.
    pub fn frame_at(&self, index: usize) -> u32 {
        self.min_frame + (index % self.total_frames) as u32
    }

    /// The frame after `frame`, wrapping to `min_frame` after the last one.
    pub fn next_frame(&self, frame: u32) -> u32 {
        self.frame_at(self.display_index(frame) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlayerConfig {
        PlayerConfig::default()
    }

    #[test]
    fn frame_numbers_resolve_to_cache_index_and_suffix() {
        let config = config();
        assert_eq!(config.display_index(1), 0);
        assert_eq!(config.format_frame_number(1), "000001");
        assert_eq!(config.display_index(100), 99);
        assert_eq!(config.format_frame_number(100), "000100");
        assert_eq!(config.display_index(101), 0);
        assert_eq!(config.format_frame_number(config.frame_at(config.display_index(101))), "000001");
    }

    #[test]
    fn display_index_stays_in_range() {
        let config = PlayerConfig {
            total_frames: 7,
            min_frame: 5,
            ..config()
        };
        for frame in 0..200 {
            let index = config.display_index(frame);
            assert!(index < 7, "frame {frame} -> {index}");
            assert_eq!(index as i64, (frame as i64 - 5).rem_euclid(7));
        }
    }

    #[test]
    fn next_frame_cycles_through_every_frame_once() {
        let config = PlayerConfig {
            total_frames: 5,
            min_frame: 3,
            ..config()
        };
        let mut frame = config.min_frame;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(frame);
            frame = config.next_frame(frame);
        }
        assert_eq!(seen, vec![3, 4, 5, 6, 7]);
        assert_eq!(frame, 3);
        assert_eq!(config.max_frame(), 7);
    }

    #[test]
    fn frame_paths_join_dir_padding_and_format() {
        let config = config();
        assert_eq!(
            config.frame_path(Layer::Base, 42),
            PathBuf::from("assets/images/rgb_frames/000042.webp")
        );
        assert_eq!(
            config.frame_path(Layer::Overlay, 100),
            PathBuf::from("assets/images/overlay_frames/000100.webp")
        );
    }

    #[test]
    fn args_map_onto_config() {
        let args = Args::parse_from([
            "frameplayer",
            "--base-dir",
            "a/",
            "--overlay-dir",
            "b/",
            "--format",
            "png",
            "--padding",
            "4",
            "--frames",
            "10",
            "--min-frame",
            "0",
            "--delay",
            "40",
            "--hide-overlay",
        ]);
        let config = PlayerConfig::try_from(args).unwrap();
        assert_eq!(config.frame_path(Layer::Base, 0), PathBuf::from("a/0000.png"));
        assert_eq!(config.frame_delay_ms, 40);
        assert!(!config.overlay_visible);
        assert_eq!(config.total_images(), 20);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let zero_frames = PlayerConfig {
            total_frames: 0,
            ..config()
        };
        assert!(matches!(zero_frames.validate(), Err(ConfigError::NoFrames)));

        let zero_delay = PlayerConfig {
            frame_delay_ms: 0,
            ..config()
        };
        assert!(matches!(zero_delay.validate(), Err(ConfigError::ZeroDelay)));

        let overflow = PlayerConfig {
            min_frame: u32::MAX,
            total_frames: 2,
            ..config()
        };
        assert!(matches!(overflow.validate(), Err(ConfigError::RangeOverflow { .. })));

        let no_format = PlayerConfig {
            image_format: String::new(),
            ..config()
        };
        assert!(matches!(no_format.validate(), Err(ConfigError::EmptyFormat)));
    }
}
