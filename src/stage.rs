use crate::constants::*;

// What the window shows. Every setter is one display mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub container_visible: bool,
    pub base_source: Option<usize>,    // Cache index in the base slot
    pub overlay_source: Option<usize>, // Cache index in the overlay slot
    pub overlay_hidden: bool,
    pub toggle_label: &'static str,
    pub status_text: String,
    pub status_visible: bool,
    revision: u64,
}

impl Stage {
    pub fn new(overlay_visible: bool) -> Self {
        Self {
            container_visible: false,
            base_source: None,
            overlay_source: None,
            overlay_hidden: !overlay_visible,
            toggle_label: toggle_label(overlay_visible),
            status_text: STATUS_LOADING.to_string(),
            status_visible: true,
            revision: 0,
        }
    }

    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn show_container(&mut self) {
        self.container_visible = true;
        self.revision += 1;
    }

    pub fn set_base_source(&mut self, index: usize) {
        self.base_source = Some(index);
        self.revision += 1;
    }

    pub fn set_overlay_source(&mut self, index: usize) {
        self.overlay_source = Some(index);
        self.revision += 1;
    }

    pub fn set_overlay_hidden(&mut self, hidden: bool) {
        self.overlay_hidden = hidden;
        self.revision += 1;
    }

    pub fn set_toggle_label(&mut self, overlay_visible: bool) {
        self.toggle_label = toggle_label(overlay_visible);
        self.revision += 1;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
        self.revision += 1;
    }

    pub fn hide_status(&mut self) {
        self.status_visible = false;
        self.revision += 1;
    }

    pub fn visible_overlay(&self) -> Option<usize> {
        if self.overlay_hidden {
            None
        } else {
            self.overlay_source
        }
    }
}

fn toggle_label(overlay_visible: bool) -> &'static str {
    if overlay_visible {
        LABEL_HIDE_TRACKS
    } else {
        LABEL_SHOW_TRACKS
    }
}
