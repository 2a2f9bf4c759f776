// src/crawl/orchestrator.rs
// =============================================================================
// This module implements the crawl itself: breadth-first discovery from a
// seed URL, bounded by a result quota.
//
// How it works:
// 1. The seed URL goes into the frontier (a FIFO queue)
// 2. A dispatcher loop pops URLs, skips anything already visited, and hands
//    the rest to a fixed-size worker pool over a bounded channel
// 3. Each worker fetches its page, extracts candidate links, classifies the
//    unseen ones, and appends matches to the result collection - which also
//    pushes them back onto the frontier for further expansion
// 4. The crawl ends when the quota is reached, or when the frontier is empty
//    and no worker has a unit in flight
//
// Shared state discipline:
// - frontier, visited set, result collection, and the in-flight counter all
//   live in one CrawlState behind a single mutex
// - every read-modify-write (visited check+insert, append+quota check,
//   frontier push/pop) is one critical section
// - the lock is never held across network I/O or the courtesy delay
//
// The dispatcher is the sole producer of work units. Workers signal it on an
// unbounded progress channel after every completed unit and every frontier
// push; because the channel buffers signals, the dispatcher can never miss a
// wakeup between checking the state and going to sleep.
// =============================================================================

use crate::classify::Classify;
use crate::extract;
use crate::fetch::Fetch;
use futures::StreamExt;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info};

// Tunables for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum number of matching sites to collect
    pub quota: usize,
    /// Fixed size of the worker pool
    pub workers: usize,
    /// Courtesy pause applied by each worker between requests
    pub delay: Duration,
}

// Configuration problems halt the run immediately with zero results; they
// are the only error class the orchestrator surfaces
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("worker pool size must be greater than 0")]
    NoWorkers,
}

// All shared discovery state, guarded by one mutex
struct CrawlState {
    frontier: VecDeque<String>,
    visited: HashSet<String>,
    results: Vec<String>,
    // Membership index over `results` for O(1) duplicate rejection
    collected: HashSet<String>,
    // Units claimed by workers and not yet finished
    in_flight: usize,
}

// What the dispatcher decided to do after inspecting the state
enum Step {
    Dispatch(String),
    AlreadyVisited,
    Wait,
    Finished,
}

pub struct Crawler {
    config: CrawlConfig,
    fetcher: Arc<dyn Fetch>,
    classifier: Arc<dyn Classify>,
}

impl Crawler {
    pub fn new(
        config: CrawlConfig,
        fetcher: Arc<dyn Fetch>,
        classifier: Arc<dyn Classify>,
    ) -> Result<Self, ConfigError> {
        if config.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(Self {
            config,
            fetcher,
            classifier,
        })
    }

    // Runs the crawl to completion and returns the collected sites in
    // discovery order. Network failures never surface here; an unreachable
    // seed simply yields an empty collection.
    pub async fn run(&self, seed: &str) -> Vec<String> {
        info!(
            "Starting crawl from {} (quota {}, {} workers)",
            seed, self.config.quota, self.config.workers
        );

        let state = Arc::new(Mutex::new(CrawlState {
            frontier: VecDeque::from([seed.to_string()]),
            visited: HashSet::new(),
            results: Vec::new(),
            collected: HashSet::new(),
            in_flight: 0,
        }));

        // Workers claim dispatch units from this bounded channel; capacity
        // equal to the pool size keeps the dispatcher just ahead of demand
        let (work_tx, work_rx) = mpsc::channel::<String>(self.config.workers);
        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel::<()>();

        let pool = self.spawn_workers(work_rx, progress_tx, state.clone());

        // Dispatch loop: sole producer of work units. The visited
        // check-and-insert below is the single atomic step that prevents two
        // workers from ever expanding the same URL.
        loop {
            let step = {
                let mut s = state.lock().await;
                if s.results.len() >= self.config.quota {
                    Step::Finished
                } else if let Some(url) = s.frontier.pop_front() {
                    if s.visited.insert(url.clone()) {
                        s.in_flight += 1;
                        Step::Dispatch(url)
                    } else {
                        Step::AlreadyVisited
                    }
                } else if s.in_flight == 0 {
                    Step::Finished
                } else {
                    // Frontier drained but workers may still discover links
                    Step::Wait
                }
            };

            match step {
                Step::Dispatch(url) => {
                    // A closed channel means the pool is gone; stop producing
                    if work_tx.send(url).await.is_err() {
                        break;
                    }
                }
                Step::AlreadyVisited => continue,
                Step::Wait => {
                    if progress_rx.recv().await.is_none() {
                        break;
                    }
                }
                Step::Finished => break,
            }
        }

        // Closing the work channel lets in-flight units run to completion
        // and the pool drain; nothing is cancelled mid-fetch
        drop(work_tx);
        if let Err(e) = pool.await {
            error!("Worker pool task failed: {}", e);
        }

        let mut s = state.lock().await;
        let results = std::mem::take(&mut s.results);
        info!("Crawl finished with {} collected site(s)", results.len());
        results
    }

    // Spawns the fixed-size pool: one task driving up to `workers` dispatch
    // units concurrently off the work channel
    fn spawn_workers(
        &self,
        work_rx: mpsc::Receiver<String>,
        progress_tx: mpsc::UnboundedSender<()>,
        state: Arc<Mutex<CrawlState>>,
    ) -> JoinHandle<()> {
        let fetcher = self.fetcher.clone();
        let classifier = self.classifier.clone();
        let quota = self.config.quota;
        let delay = self.config.delay;
        let workers = self.config.workers;

        tokio::spawn(async move {
            ReceiverStream::new(work_rx)
                .for_each_concurrent(workers, move |url| {
                    let fetcher = fetcher.clone();
                    let classifier = classifier.clone();
                    let state = state.clone();
                    let progress_tx = progress_tx.clone();

                    async move {
                        expand(url, fetcher, classifier, quota, delay, state, progress_tx).await;
                    }
                })
                .await;
        })
    }
}

// One dispatch unit: fetch the page, extract candidates, classify the unseen
// ones, collect and re-enqueue matches, then pause for courtesy.
async fn expand(
    url: String,
    fetcher: Arc<dyn Fetch>,
    classifier: Arc<dyn Classify>,
    quota: usize,
    delay: Duration,
    state: Arc<Mutex<CrawlState>>,
    progress_tx: mpsc::UnboundedSender<()>,
) {
    // A unit claimed after the quota filled does no network work, which
    // keeps post-quota overshoot to units already mid-request
    let quota_filled = { state.lock().await.results.len() >= quota };

    if !quota_filled {
        match fetcher.fetch(&url).await {
            Ok(page) => {
                let candidates = extract::extract_links(&page.body);
                debug!("Expanded {} ({} candidate links)", url, candidates.len());
                collect_matches(candidates, &*classifier, quota, &state, &progress_tx).await;
            }
            Err(e) => {
                // Logged and absorbed: one bad host contributes nothing
                error!("Failed to fetch {}: {}", url, e);
            }
        }

        // Courtesy pause between requests, on success and failure alike
        tokio::time::sleep(delay).await;
    }

    let mut s = state.lock().await;
    s.in_flight -= 1;
    drop(s);
    // Wake the dispatcher: this unit is done
    let _ = progress_tx.send(());
}

// Evaluates candidates in extraction order, appending matches to the result
// collection and the frontier under the quota
async fn collect_matches(
    candidates: Vec<String>,
    classifier: &dyn Classify,
    quota: usize,
    state: &Mutex<CrawlState>,
    progress_tx: &mpsc::UnboundedSender<()>,
) {
    for link in candidates {
        // Cheap pre-check so already-collected links and a filled quota do
        // not cost a classification fetch
        {
            let s = state.lock().await;
            if s.results.len() >= quota {
                // The quota never un-fills; the rest of the page is moot
                break;
            }
            if s.collected.contains(&link) {
                continue;
            }
        }

        if !classifier.is_target_site(&link).await {
            continue;
        }

        // Re-validate under the lock: another worker may have collected the
        // same link or filled the quota while this one was classifying
        let mut s = state.lock().await;
        if !s.collected.contains(&link) && s.results.len() < quota {
            info!("Found matching site: {}", link);
            s.collected.insert(link.clone());
            s.results.push(link.clone());
            s.frontier.push_back(link);
            drop(s);
            // Wake the dispatcher: the frontier grew
            let _ = progress_tx.send(());
        }
    }
}
