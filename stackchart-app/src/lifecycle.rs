//! Loading / ready / failed state of a single chart
//!
//! A lifecycle starts in [`ChartState::Loading`] and moves exactly once, to
//! either [`ChartState::Ready`] or [`ChartState::Failed`]. Both are terminal.

use serde_json::Value;

use crate::error::StackchartAppError;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    Loading,
    Ready { options: Value },
    Failed { message: String },
}

impl ChartState {
    pub fn name(&self) -> &'static str {
        match self {
            ChartState::Loading => "loading",
            ChartState::Ready { .. } => "ready",
            ChartState::Failed { .. } => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChartState::Loading)
    }
}

/// What the presentation layer should show for a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartView<'a> {
    Loading,
    Error { message: &'a str },
    Chart { options: &'a Value },
}

pub fn render(state: &ChartState) -> ChartView<'_> {
    match state {
        ChartState::Loading => ChartView::Loading,
        ChartState::Ready { options } => ChartView::Chart { options },
        ChartState::Failed { message } => ChartView::Error { message },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLifecycle {
    state: ChartState,
}

impl ChartLifecycle {
    pub fn start() -> Self {
        Self {
            state: ChartState::Loading,
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn into_state(self) -> ChartState {
        self.state
    }

    pub fn succeed(&mut self, options: Value) -> Result<(), StackchartAppError> {
        self.transition(ChartState::Ready { options })
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), StackchartAppError> {
        self.transition(ChartState::Failed {
            message: message.into(),
        })
    }

    pub fn render(&self) -> ChartView<'_> {
        render(&self.state)
    }

    fn transition(&mut self, next: ChartState) -> Result<(), StackchartAppError> {
        if self.state.is_terminal() {
            return Err(StackchartAppError::InvalidTransition {
                from: self.state.name(),
                to: next.name(),
            });
        }
        tracing::debug!(from = self.state.name(), to = next.name(), "chart state change");
        self.state = next;
        Ok(())
    }
}
