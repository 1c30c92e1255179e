//! Caller-owned submission state and its pure transition function.
//!
//! [`PipelineState::apply`] is the only way state changes. The pipeline emits
//! [`PipelineEvent`]s as it moves through its stages and the caller folds them
//! into the state it owns, so no state is captured inside the pipeline.

use solarscope_core::SolarInsights;

use crate::error::ErrorKind;

/// Where a submission currently is.
///
/// Stages only move forward: `Idle → Validating → VerifyingCredentials →
/// Geocoding → FetchingMap → FetchingSolar → Done`, or to `Failed` from any
/// in-flight stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Idle,
    Validating,
    VerifyingCredentials,
    Geocoding,
    FetchingMap,
    FetchingSolar,
    Done,
    Failed(ErrorKind),
}

impl Stage {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed(_))
    }

    fn position(self) -> u8 {
        match self {
            Stage::Idle => 0,
            Stage::Validating => 1,
            Stage::VerifyingCredentials => 2,
            Stage::Geocoding => 3,
            Stage::FetchingMap => 4,
            Stage::FetchingSolar => 5,
            Stage::Done | Stage::Failed(_) => 6,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Idle => write!(f, "idle"),
            Stage::Validating => write!(f, "validating"),
            Stage::VerifyingCredentials => write!(f, "verifying credentials"),
            Stage::Geocoding => write!(f, "geocoding"),
            Stage::FetchingMap => write!(f, "fetching map"),
            Stage::FetchingSolar => write!(f, "fetching solar"),
            Stage::Done => write!(f, "done"),
            Stage::Failed(kind) => write!(f, "failed ({kind})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A new address was submitted; everything from the last run is cleared.
    Submitted,
    StageEntered(Stage),
    /// The satellite tile loaded.
    MapReady(String),
    Completed(SolarInsights),
    Failed { kind: ErrorKind, message: String },
    /// The user closed the error banner.
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineState {
    pub loading: bool,
    pub error: Option<String>,
    pub map_url: Option<String>,
    pub solar_data: Option<SolarInsights>,
    pub stage: Stage,
}

impl PipelineState {
    /// Applies one event and returns the resulting state.
    ///
    /// Events that do not fit the current stage (a result arriving while
    /// nothing is in flight, a stage that would move backwards) leave the
    /// state unchanged.
    ///
    /// On failure the map URL is cleared along with the solar data: a state
    /// carrying an error never carries results.
    #[must_use]
    pub fn apply(self, event: PipelineEvent) -> Self {
        match event {
            PipelineEvent::Submitted => Self {
                loading: true,
                stage: Stage::Validating,
                ..Self::default()
            },
            PipelineEvent::StageEntered(stage) => {
                if self.loading
                    && !stage.is_terminal()
                    && stage.position() > self.stage.position()
                {
                    Self { stage, ..self }
                } else {
                    self
                }
            }
            PipelineEvent::MapReady(url) => {
                if self.loading {
                    Self {
                        map_url: Some(url),
                        ..self
                    }
                } else {
                    self
                }
            }
            PipelineEvent::Completed(insights) => {
                if self.loading {
                    Self {
                        loading: false,
                        error: None,
                        solar_data: Some(insights),
                        stage: Stage::Done,
                        ..self
                    }
                } else {
                    self
                }
            }
            PipelineEvent::Failed { kind, message } => {
                if self.loading {
                    Self {
                        loading: false,
                        error: Some(message),
                        map_url: None,
                        solar_data: None,
                        stage: Stage::Failed(kind),
                    }
                } else {
                    self
                }
            }
            PipelineEvent::Dismissed => {
                if self.error.is_some() && !self.loading {
                    Self::default()
                } else {
                    self
                }
            }
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }
}
