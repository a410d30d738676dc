use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::config::PlayerConfig;
use crate::constants::*;
use crate::error::LoadError;
use crate::frame_cache::Layer;
use crate::texture_loader::{DecodedFrame, decode_frame};

// Milestones crossed by a single completion
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadMilestones {
    pub first_pair_ready: bool,
    pub progress: Option<(usize, usize)>,
    pub all_complete: bool,
}

// Finished (loaded or failed) preload attempts. Only ever grows.
#[derive(Debug)]
pub struct LoadCounter {
    completed: usize,
    total: usize,
}

impl LoadCounter {
    pub fn new(total: usize) -> Self {
        Self { completed: 0, total }
    }

    #[cfg(test)]
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    // Completions past the total are ignored
    pub fn record(&mut self) -> LoadMilestones {
        if self.is_complete() {
            return LoadMilestones::default();
        }
        self.completed += 1;

        let all_complete = self.completed == self.total;
        let progress = (self.completed % PROGRESS_REPORT_INTERVAL == 0 || all_complete)
            .then_some((self.completed, self.total));

        LoadMilestones {
            first_pair_ready: self.completed == FIRST_PAIR_COMPLETIONS,
            progress,
            all_complete,
        }
    }
}

// One finished fetch: decoded pixels, or why the frame is unusable
#[derive(Debug)]
pub struct FetchResult {
    pub layer: Layer,
    pub index: usize,
    pub path: PathBuf,
    pub frame: Result<DecodedFrame, LoadError>,
}

#[derive(Debug)]
struct FetchJob {
    layer: Layer,
    index: usize,
    path: PathBuf,
}

// Reads and decodes every frame of both layers on a pool of worker threads.
// No retries; in-flight fetches are never cancelled.
pub struct Preloader {
    receiver: Receiver<FetchResult>,
    backlog: VecDeque<FetchResult>,
    total: usize,
}

impl Preloader {
    pub fn start(config: &PlayerConfig) -> Self {
        // Interleaved so the first base/overlay pair tends to finish first
        let mut jobs = VecDeque::with_capacity(config.total_images());
        for index in 0..config.total_frames {
            let frame = config.frame_at(index);
            for layer in [Layer::Base, Layer::Overlay] {
                jobs.push_back(FetchJob {
                    layer,
                    index,
                    path: config.frame_path(layer, frame),
                });
            }
        }

        let total = jobs.len();
        let queue = Arc::new(Mutex::new(jobs));
        let (sender, receiver) = mpsc::channel();

        for _ in 0..config.fetch_workers.min(total) {
            let queue = Arc::clone(&queue);
            let sender = sender.clone();
            thread::spawn(move || fetch_worker(queue, sender));
        }

        Self {
            receiver,
            backlog: VecDeque::new(),
            total,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    // Non-blocking. Hands out at most `limit` results; the rest wait for the next call.
    pub fn poll(&mut self, limit: usize) -> Vec<FetchResult> {
        self.backlog.extend(self.receiver.try_iter());
        let take = limit.min(self.backlog.len());
        self.backlog.drain(..take).collect()
    }
}

fn fetch_worker(queue: Arc<Mutex<VecDeque<FetchJob>>>, sender: Sender<FetchResult>) {
    loop {
        let job = match queue.lock() {
            Ok(mut jobs) => jobs.pop_front(),
            Err(_) => return,
        };
        let Some(job) = job else { return };

        let frame = fs::read(&job.path)
            .map_err(|source| LoadError::Read {
                path: job.path.clone(),
                source,
            })
            .and_then(|bytes| decode_frame(&job.path, &bytes));
        let result = FetchResult {
            layer: job.layer,
            index: job.index,
            path: job.path,
            frame,
        };
        // Receiver gone means the window closed
        if sender.send(result).is_err() {
            return;
        }
    }
}
