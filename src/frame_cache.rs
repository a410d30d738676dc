#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Base,
    Overlay,
}

#[derive(Debug)]
pub enum Slot<T> {
    Pending,
    Loaded(T),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Stored,
    AlreadyResolved, // Slot keeps its first result
    OutOfRange,
}

// Two parallel frame sequences indexed by cache position.
// Slots are created once and resolve exactly once; nothing is evicted.
pub struct FrameCache<T> {
    base: Vec<Slot<T>>,
    overlay: Vec<Slot<T>>,
}

impl<T> FrameCache<T> {
    pub fn new(total_frames: usize) -> Self {
        Self {
            base: (0..total_frames).map(|_| Slot::Pending).collect(),
            overlay: (0..total_frames).map(|_| Slot::Pending).collect(),
        }
    }

    fn slots(&self, layer: Layer) -> &Vec<Slot<T>> {
        match layer {
            Layer::Base => &self.base,
            Layer::Overlay => &self.overlay,
        }
    }

    pub fn resolve(&mut self, layer: Layer, index: usize, resource: Option<T>) -> Resolution {
        let slots = match layer {
            Layer::Base => &mut self.base,
            Layer::Overlay => &mut self.overlay,
        };
        let Some(slot) = slots.get_mut(index) else {
            return Resolution::OutOfRange;
        };
        if !matches!(slot, Slot::Pending) {
            return Resolution::AlreadyResolved;
        }
        *slot = match resource {
            Some(resource) => Slot::Loaded(resource),
            None => Slot::Failed,
        };
        Resolution::Stored
    }

    // Resource at `index` if it finished loading
    pub fn ready(&self, layer: Layer, index: usize) -> Option<&T> {
        match self.slots(layer).get(index) {
            Some(Slot::Loaded(resource)) => Some(resource),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn slot(&self, layer: Layer, index: usize) -> Option<&Slot<T>> {
        self.slots(layer).get(index)
    }
}
