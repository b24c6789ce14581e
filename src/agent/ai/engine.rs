//! Engine facade: owns the shared context and evaluation memo and runs
//! searches either inline or on a worker thread.
//!
//! A background search hands its answer back through a one-slot channel.
//! The caller polls [`SearchHandle::try_result`] from its own loop (a UI
//! frame, say) or blocks on [`SearchHandle::wait`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Poll;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::error::{ConfigError, EngineError};
use crate::game_repr::{Color, Move, Position};
use super::context::EngineContext;
use super::eval_memo::EvalMemo;
use super::search::{iterative_deepening_search, SearchConfig, SearchResult};

/// Answer of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestMove {
    Move(Move),
    /// The side to move had no moves at all
    NoMove,
}

impl BestMove {
    pub fn as_move(&self) -> Option<Move> {
        match self {
            BestMove::Move(mv) => Some(*mv),
            BestMove::NoMove => None,
        }
    }
}

impl From<Option<Move>> for BestMove {
    fn from(mv: Option<Move>) -> Self {
        mv.map_or(BestMove::NoMove, BestMove::Move)
    }
}

pub struct Engine {
    ctx: Arc<EngineContext>,
    memo: Arc<Mutex<EvalMemo>>,
    config: SearchConfig,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_context(Arc::new(EngineContext::new()), config)
    }

    /// Engine sharing an existing context (and its Zobrist keys)
    pub fn with_context(ctx: Arc<EngineContext>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ctx,
            memo: Arc::new(Mutex::new(EvalMemo::new())),
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn context(&self) -> &Arc<EngineContext> {
        &self.ctx
    }

    /// Number of cached evaluations
    pub fn memo_len(&self) -> usize {
        self.memo.lock().len()
    }

    /// Search on the calling thread
    pub fn search(&self, pos: &Position, side: Color) -> SearchResult {
        let cancel = AtomicBool::new(false);
        let mut memo = self.memo.lock();
        iterative_deepening_search(&self.ctx, &mut memo, pos, side, &self.config, &cancel)
    }

    /// Start a search for `side` on a worker thread.
    ///
    /// The worker gets its own copy of `pos`; the caller's position is never
    /// touched. A second search started while one is running waits for the
    /// first to release the evaluation memo.
    pub fn get_best_move(&self, pos: &Position, side: Color) -> Result<SearchHandle, EngineError> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let cancel = Arc::new(AtomicBool::new(false));

        let pos = pos.clone();
        let ctx = Arc::clone(&self.ctx);
        let memo = Arc::clone(&self.memo);
        let config = self.config;
        let worker_cancel = Arc::clone(&cancel);

        let worker = thread::Builder::new()
            .name("search-worker".to_string())
            .spawn(move || {
                let result = {
                    let mut memo = memo.lock();
                    iterative_deepening_search(&ctx, &mut memo, &pos, side, &config, &worker_cancel)
                };

                let best = BestMove::from(result.best_move);
                match best {
                    BestMove::Move(mv) => info!(
                        "{} plays {} (score {:.2}, depth {}, {} nodes, {}ms)",
                        side,
                        mv,
                        result.score,
                        result.depth,
                        result.nodes_searched,
                        result.elapsed.as_millis()
                    ),
                    BestMove::NoMove => info!("{} has no move", side),
                }

                if tx.send(best).is_err() {
                    debug!("search handle dropped before the result arrived");
                }
            })
            .map_err(|e| EngineError::Spawn(e.to_string()))?;

        Ok(SearchHandle {
            receiver: rx,
            cancel,
            worker: Some(worker),
            delivered: None,
        })
    }
}

/// Handle to a running background search
pub struct SearchHandle {
    receiver: Receiver<BestMove>,
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    delivered: Option<BestMove>,
}

impl SearchHandle {
    /// Non-blocking poll. `Pending` until the worker delivers; once delivered
    /// the same answer is returned on every later call.
    pub fn try_result(&mut self) -> Poll<Result<BestMove, EngineError>> {
        if let Some(best) = self.delivered {
            return Poll::Ready(Ok(best));
        }
        match self.receiver.try_recv() {
            Ok(best) => {
                self.delivered = Some(best);
                Poll::Ready(Ok(best))
            }
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => Poll::Ready(Err(self.worker_failure())),
        }
    }

    /// Block until the worker delivers
    pub fn wait(mut self) -> Result<BestMove, EngineError> {
        if let Some(best) = self.delivered {
            return Ok(best);
        }
        match self.receiver.recv() {
            Ok(best) => Ok(best),
            Err(_) => Err(self.worker_failure()),
        }
    }

    /// Ask the worker to stop after its current iteration
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Classify a closed channel: a panic in the worker, or an exit without
    /// sending
    fn worker_failure(&mut self) -> EngineError {
        let Some(worker) = self.worker.take() else {
            return EngineError::Disconnected;
        };
        match worker.join() {
            Ok(()) => EngineError::Disconnected,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                warn!("search worker panicked: {}", message);
                EngineError::Panicked(message)
            }
        }
    }
}

impl Drop for SearchHandle {
    /// An abandoned search stops after its current iteration and releases
    /// the evaluation memo for the next one
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}
