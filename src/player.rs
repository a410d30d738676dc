use log::{error, info, warn};

use crate::config::PlayerConfig;
use crate::error::LoadError;
use crate::frame_cache::{FrameCache, Layer, Resolution};
use crate::preloader::LoadCounter;
use crate::scheduler::{CallbackHandle, FrameScheduler};
use crate::stage::Stage;
use crate::state::{PlaybackState, PlayerState};

// One player per window, touched only from the UI thread
pub struct FramePlayer<T> {
    config: PlayerConfig,
    cache: FrameCache<T>,
    stage: Stage,
    scheduler: FrameScheduler,
    counter: LoadCounter,
    state: PlayerState,
}

impl<T> FramePlayer<T> {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            cache: FrameCache::new(config.total_frames),
            stage: Stage::new(config.overlay_visible),
            scheduler: FrameScheduler::new(),
            counter: LoadCounter::new(config.total_images()),
            state: PlayerState::new(config.min_frame, config.overlay_visible),
            config,
        }
    }

    pub fn cache(&self) -> &FrameCache<T> {
        &self.cache
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[cfg(test)]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    #[cfg(test)]
    pub fn current_frame(&self) -> u32 {
        self.state.current_frame
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn begin_preload(&mut self) {
        let total = self.counter.total();
        info!("Starting preload of {} images...", total);
        self.stage.set_status(format!("Loading: 0 / {}", total));
    }

    // --- Preloader completion ---
    // Failures count toward completion but leave the slot empty
    pub fn on_frame_loaded(
        &mut self,
        layer: Layer,
        index: usize,
        result: Result<T, LoadError>,
        now_ms: f64,
    ) {
        let resource = match result {
            Ok(resource) => Some(resource),
            Err(e) => {
                error!("Failed to load image: {}", e);
                None
            }
        };
        match self.cache.resolve(layer, index, resource) {
            Resolution::Stored => {}
            Resolution::AlreadyResolved => {
                warn!("Ignoring repeated completion for {:?} frame index {}", layer, index);
                return;
            }
            Resolution::OutOfRange => {
                warn!("Ignoring completion for {:?} frame index {} outside the cache", layer, index);
                return;
            }
        }

        let milestones = self.counter.record();
        if let Some((completed, total)) = milestones.progress {
            self.stage.set_status(format!("Loading: {} / {}", completed, total));
        }
        if milestones.first_pair_ready {
            self.stage.show_container();
            self.update_display(self.state.current_frame);
        }
        if milestones.all_complete {
            info!("All frames preloaded!");
            self.stage.hide_status();
            self.play(now_ms);
        }
    }

    // --- Display updater ---
    // Unready slots keep the previous base image and hide the overlay
    pub fn update_display(&mut self, frame: u32) {
        let index = self.config.display_index(frame);

        if self.cache.ready(Layer::Base, index).is_some() {
            self.stage.set_base_source(index);
        } else {
            warn!("Base image for frame index {} not ready", index);
        }

        if !self.state.overlay_visible {
            self.stage.set_overlay_hidden(true);
            return;
        }
        if self.cache.ready(Layer::Overlay, index).is_some() {
            self.stage.set_overlay_source(index);
            self.stage.set_overlay_hidden(false);
        } else {
            warn!("Overlay image for frame index {} not ready", index);
            self.stage.set_overlay_hidden(true);
        }
    }

    // --- Animation loop ---
    pub fn play(&mut self, now_ms: f64) {
        if self.state.is_playing() {
            return;
        }
        self.state.playback = PlaybackState::Running;
        self.state.last_tick_ms = now_ms;
        self.state.handle = Some(self.scheduler.request());
        info!("Animation started");
    }

    pub fn pause(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        self.state.playback = PlaybackState::Stopped;
        if let Some(handle) = self.state.handle.take() {
            self.scheduler.cancel(handle);
        }
        info!("Animation paused");
    }

    pub fn toggle_playback(&mut self, now_ms: f64) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play(now_ms);
        }
    }

    // Host display refresh
    pub fn on_refresh(&mut self, now_ms: f64) {
        if let Some(handle) = self.scheduler.take_due() {
            self.tick(handle, now_ms);
        }
    }

    // At most one advance per tick; the remainder of `elapsed` carries over
    pub fn tick(&mut self, handle: CallbackHandle, now_ms: f64) {
        if !self.state.is_playing() || self.state.handle != Some(handle) {
            return;
        }

        let delay = self.config.frame_delay_ms as f64;
        let elapsed = now_ms - self.state.last_tick_ms;
        if elapsed >= delay {
            self.state.last_tick_ms = now_ms - (elapsed % delay);
            self.state.current_frame = self.config.next_frame(self.state.current_frame);
            self.update_display(self.state.current_frame);
        }

        self.state.handle = Some(self.scheduler.request());
    }

    // --- Overlay toggle ---
    pub fn toggle_overlay(&mut self) {
        self.state.overlay_visible = !self.state.overlay_visible;
        if self.state.overlay_visible {
            self.stage.set_toggle_label(true);
            self.update_display(self.state.current_frame);
        } else {
            self.stage.set_overlay_hidden(true);
            self.stage.set_toggle_label(false);
        }
    }
}
