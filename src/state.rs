use crate::scheduler::CallbackHandle;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PlaybackState {
    Stopped, // No refresh callback is scheduled
    Running, // A refresh callback is pending and frames advance on schedule
}

#[derive(Debug)]
pub struct PlayerState {
    pub playback: PlaybackState,
    pub overlay_visible: bool,
    pub current_frame: u32,
    pub last_tick_ms: f64, // Logical time of the last frame advance
    pub handle: Option<CallbackHandle>,
}

impl PlayerState {
    pub fn new(min_frame: u32, overlay_visible: bool) -> Self {
        Self {
            playback: PlaybackState::Stopped,
            overlay_visible,
            current_frame: min_frame,
            last_tick_ms: 0.0,
            handle: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Running
    }
}
