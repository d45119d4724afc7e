//! Training and evaluation pipelines
//!
//! This module provides:
//! - Self-play training with a staged exploration schedule
//! - Interactive evaluation against a human
//! - Observers that record or display progress during training

pub mod evaluation;
pub mod observers;
pub mod schedule;
pub mod training;

pub use evaluation::play_against_human;
pub use observers::{GameRecord, JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver};
pub use schedule::{EpsilonSchedule, SchedulePhase};
pub use training::{SeatSummary, TrainingConfig, TrainingPipeline, TrainingResult, train_agents};

pub use crate::ports::Observer;
