// Token for one pending refresh callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackHandle(u64);

// At most one callback is pending. The window loop calls `take_due` once per
// refresh; a cancelled handle is never handed out.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Option<CallbackHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    // Replaces any pending callback
    pub fn request(&mut self) -> CallbackHandle {
        self.next_id += 1;
        let handle = CallbackHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    pub fn cancel(&mut self, handle: CallbackHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    pub fn take_due(&mut self) -> Option<CallbackHandle> {
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
