use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Reasons the optimizer could not produce a selection.
///
/// Returned by [`TradeSelector::optimize`](crate::application::selection::TradeSelector::optimize).
/// Each variant is a fallback trigger; callers that only need a result use
/// [`TradeSelector::select`](crate::application::selection::TradeSelector::select),
/// which collapses all of them into the fallback basket.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("invalid selection policy: {0}")]
    InvalidPolicy(String),

    #[error("invalid candidates: {0}")]
    InvalidCandidates(#[from] DomainError),

    #[error("insufficient candidates: {available} available, {required} required")]
    InsufficientCandidates { available: usize, required: usize },

    #[error("feature provider failed: {0}")]
    ProviderFailed(String),

    #[error("solver backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("no feasible selection satisfies the constraints")]
    Infeasible,

    #[error("selection model is unbounded")]
    Unbounded,

    #[error("solve exceeded the time budget")]
    TimedOut,

    #[error("solver stopped before proving optimality")]
    Unproven,

    #[error("solver returned an empty selection")]
    EmptySelection,

    #[error("solver selected {selected} instruments, {required} required")]
    CardinalityMismatch { selected: usize, required: usize },

    #[error("solver assignment violates the selection constraints")]
    ConstraintViolation,

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("solver error: {0}")]
    Solver(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
