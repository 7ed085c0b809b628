use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's "call me on the next frame" facility.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    queued: VecDeque<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl FrameQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.queued.pop_front()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    #[must_use]
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queued.push_back(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queued.len();
        self.queued.retain(|queued| *queued != handle);
        if self.queued.len() != before {
            self.cancelled += 1;
        }
    }
}
