//! Background search worker
//!
//! Evaluation is the one step that may take a while, so it runs on a worker
//! thread. Every request carries the sequence number the session issued for
//! it; the session applies a reply only if its number is still the latest.
//! The worker also skips queued requests that a newer one has superseded.

use super::evaluator::{MatchEvaluator, SearchOutcome, corpus_total, search};
use super::ConstraintQuery;
use crate::errors::EvaluatorError;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

/// A query tagged with the sequence number it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: ConstraintQuery,
}

/// The outcome for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReply {
    pub seq: u64,
    pub outcome: SearchOutcome,
}

impl SearchReply {
    /// Reply for a request that never reached the worker
    #[must_use]
    pub fn failed(seq: u64, err: &EvaluatorError) -> Self {
        Self {
            seq,
            outcome: SearchOutcome::Unavailable(err.to_string()),
        }
    }
}

enum Job {
    Search(SearchRequest),
    CorpusSize(Sender<usize>),
}

/// Handle to the search worker thread
pub struct SearchDispatcher {
    jobs: Option<Sender<Job>>,
    replies: Receiver<SearchReply>,
    worker: Option<JoinHandle<()>>,
}

impl SearchDispatcher {
    /// Start a worker that owns `evaluator` and returns at most `limit` matches per query
    ///
    /// # Errors
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn<E>(evaluator: E, limit: usize) -> io::Result<Self>
    where
        E: MatchEvaluator + 'static,
    {
        let (job_tx, job_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("search-worker".to_string())
            .spawn(move || run_worker(&evaluator, limit, &job_rx, &reply_tx))?;

        Ok(Self {
            jobs: Some(job_tx),
            replies: reply_rx,
            worker: Some(worker),
        })
    }

    /// Queue a request
    ///
    /// # Errors
    /// Returns `EvaluatorError::Disconnected` if the worker has stopped.
    pub fn submit(&self, request: SearchRequest) -> Result<(), EvaluatorError> {
        log::debug!("search #{} submitted", request.seq);
        self.jobs
            .as_ref()
            .ok_or(EvaluatorError::Disconnected)?
            .send(Job::Search(request))
            .map_err(|_| EvaluatorError::Disconnected)
    }

    /// Next finished reply, if one is ready
    #[must_use]
    pub fn try_recv(&self) -> Option<SearchReply> {
        self.replies.try_recv().ok()
    }

    /// Wait for the next reply
    ///
    /// # Errors
    /// Returns `EvaluatorError::Disconnected` if the worker stopped without replying.
    pub fn recv(&self) -> Result<SearchReply, EvaluatorError> {
        self.replies.recv().map_err(|_| EvaluatorError::Disconnected)
    }

    /// Corpus size read through the worker; zero if it cannot be read
    #[must_use]
    pub fn corpus_total(&self) -> usize {
        let (tx, rx) = mpsc::channel();
        let sent = self
            .jobs
            .as_ref()
            .is_some_and(|jobs| jobs.send(Job::CorpusSize(tx)).is_ok());
        if !sent {
            log::warn!("could not read corpus size: search worker stopped");
            return 0;
        }
        rx.recv().unwrap_or(0)
    }
}

impl Drop for SearchDispatcher {
    fn drop(&mut self) {
        // Closing the job channel ends the worker loop
        self.jobs.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            log::warn!("search worker panicked");
        }
    }
}

fn run_worker<E: MatchEvaluator>(
    evaluator: &E,
    limit: usize,
    jobs: &Receiver<Job>,
    replies: &Sender<SearchReply>,
) {
    while let Ok(job) = jobs.recv() {
        let mut request = match job {
            Job::Search(request) => request,
            Job::CorpusSize(tx) => {
                let _ = tx.send(corpus_total(evaluator));
                continue;
            }
        };

        // Drain the queue: only the newest search is worth running
        loop {
            match jobs.try_recv() {
                Ok(Job::Search(newer)) => {
                    log::debug!("search #{} superseded by #{}", request.seq, newer.seq);
                    request = newer;
                }
                Ok(Job::CorpusSize(tx)) => {
                    let _ = tx.send(corpus_total(evaluator));
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        let outcome = search(evaluator, &request.query, limit);
        log::debug!("search #{} finished: {} matches", request.seq, outcome.total());

        if replies
            .send(SearchReply {
                seq: request.seq,
                outcome,
            })
            .is_err()
        {
            break;
        }
    }
}
