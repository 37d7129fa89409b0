//! Off-thread algorithm runs.
//!
//! A run works on its own clone of the graph, so the live session can keep
//! changing while it computes. At most one run is outstanding: starting a new
//! one or cancelling flips the shared token and forgets the old receiver, so
//! a stale result is never delivered.

use crate::algorithms::interrupt::CancelToken;
use crate::algorithms::run::{Algorithm, RunOutcome};
use crate::error::AlgorithmError;
use crate::Graph;
use crossbeam_channel::{bounded, Receiver, TryRecvError};

#[derive(Debug)]
pub struct RunReport {
    pub ticket: u64,
    pub algorithm: Algorithm,
    pub result: Result<Option<RunOutcome>, AlgorithmError>,
}

#[derive(Debug)]
struct PendingRun {
    ticket: u64,
    token: CancelToken,
    rx: Receiver<RunReport>,
}

#[derive(Debug, Default)]
pub struct AlgorithmWorker {
    pending: Option<PendingRun>,
    next_ticket: u64,
}

impl AlgorithmWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `algorithm` on `graph`, cancelling whatever was running.
    pub fn start(&mut self, graph: Graph, algorithm: Algorithm) -> u64 {
        self.cancel();
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let token = CancelToken::new();
        let (tx, rx) = bounded(1);
        let stop = token.clone();
        std::thread::spawn(move || {
            let result = algorithm.compute(&graph, &stop);
            // the receiver is gone when the run was superseded
            let _ = tx.send(RunReport { ticket, algorithm, result });
        });
        tracing::debug!("background {} started as run {}", algorithm.name(), ticket);
        self.pending = Some(PendingRun { ticket, token, rx });
        ticket
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(run) => {
                run.token.cancel();
                tracing::debug!("background run {} cancelled", run.ticket);
                true
            }
            None => false,
        }
    }

    /// Non-blocking: the finished report, if there is one.
    pub fn try_finish(&mut self) -> Option<RunReport> {
        let run = self.pending.as_ref()?;
        match run.rx.try_recv() {
            Ok(report) => {
                self.pending = None;
                Some(report)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("background run {} ended without a report", run.ticket);
                self.pending = None;
                None
            }
        }
    }

    /// Blocks until the outstanding run reports.
    pub fn wait(&mut self) -> Option<RunReport> {
        let run = self.pending.take()?;
        run.rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: u32) -> Graph {
        let mut g = Graph::new(false);
        for v in 1..=n {
            g.add_vertex(v);
        }
        for v in 1..n {
            g.add_edge(v, v + 1, (v % 7) as i32);
        }
        g
    }

    #[test]
    fn report_matches_synchronous_run() {
        let g = ring(50);
        let mut w = AlgorithmWorker::new();
        let ticket = w.start(g.clone(), Algorithm::Kruskal);
        let report = w.wait().unwrap();
        assert_eq!(report.ticket, ticket);
        assert_eq!(report.result, Algorithm::Kruskal.compute(&g, &()));
        assert!(!w.is_busy());
    }

    #[test]
    fn cancelled_run_is_never_delivered() {
        let mut w = AlgorithmWorker::new();
        w.start(ring(20), Algorithm::Prim);
        assert!(w.cancel());
        assert!(w.try_finish().is_none());
        assert!(w.wait().is_none());
    }

    #[test]
    fn restart_supersedes_previous_run() {
        let mut w = AlgorithmWorker::new();
        w.start(ring(10), Algorithm::Prim);
        let second = w.start(ring(10), Algorithm::Dfs { start: 1 });
        let report = w.wait().unwrap();
        assert_eq!(report.ticket, second);
        assert_eq!(report.algorithm, Algorithm::Dfs { start: 1 });
    }
}
