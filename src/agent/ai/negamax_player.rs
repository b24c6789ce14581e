//! NegamaxPlayer - engine-backed [`Player`] with difficulty presets
//!
//! Moves are computed on a background worker through [`Engine::get_best_move`]
//! and the player blocks until the answer arrives.
//!
//! # Difficulty Levels
//!
//! - **Easy**: 100ms, depth 2
//! - **Medium**: 500ms, depth 4
//! - **Hard**: 2s, depth 6
//! - **Expert**: 5s, no practical depth cap

use std::time::Duration;

use log::warn;

use crate::agent::player::{GameResult, Player};
use crate::error::ConfigError;
use crate::game_repr::{Color, Move, Position};
use super::engine::Engine;
use super::search::{SearchConfig, StartDepth};

/// AI difficulty levels that map to time budget and search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 64,
        }
    }

    pub fn time_budget(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(100),
            Difficulty::Medium => Duration::from_millis(500),
            Difficulty::Hard => Duration::from_secs(2),
            Difficulty::Expert => Duration::from_secs(5),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            time_budget: self.time_budget(),
            start_depth: StartDepth::PhaseAdjusted,
            max_depth: self.max_depth(),
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// AI Player that asks the [`Engine`] for every move
pub struct NegamaxPlayer {
    engine: Engine,
    difficulty: Difficulty,
    name: String,
}

impl NegamaxPlayer {
    pub fn new(difficulty: Difficulty, name: String) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: Engine::new(difficulty.search_config())?,
            difficulty,
            name,
        })
    }

    /// Player named "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Result<Self, ConfigError> {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty, name)
    }

    /// Player driven by an already configured engine
    pub fn with_engine(engine: Engine, name: String) -> Self {
        Self {
            engine,
            difficulty: Difficulty::Expert,
            name,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ConfigError> {
        self.engine.set_config(difficulty.search_config())?;
        self.difficulty = difficulty;
        Ok(())
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Player for NegamaxPlayer {
    fn get_move(&mut self, pos: &Position, color: Color) -> Option<Move> {
        let best = self
            .engine
            .get_best_move(pos, color)
            .and_then(|handle| handle.wait());
        match best {
            Ok(best) => best.as_move(),
            Err(e) => {
                warn!("{}: search failed: {}", self.name, e);
                None
            }
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        log::info!("{}: game over, {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
