//! One viewing session: the machine plus presentation settings.
//!
//! The session is the presentation boundary. Intents arrive here, are
//! checked against the control state the user can see, and only then reach
//! the machine. Save and restore of the routine also happen here.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::Config;
use crate::core::{Action, RoutineState};
use crate::scoring::{ScoringMachine, StepResult};
use crate::view::{Orientation, RoutineView};
use tracing::{info, trace};

#[derive(Debug)]
pub struct Session {
    machine: ScoringMachine,
    config: Config,
}

impl Session {
    /// Start a fresh routine.
    pub fn new(config: Config) -> Self {
        Self {
            machine: ScoringMachine::new(),
            config,
        }
    }

    /// Resume from a checkpoint, validating it first.
    pub fn from_checkpoint(config: Config, checkpoint: &Checkpoint) -> Result<Self, CheckpointError> {
        let state = checkpoint.restore()?;
        info!(
            element = state.current_element(),
            score = state.score(),
            "routine restored"
        );
        Ok(Self {
            machine: ScoringMachine::from_state(state),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &RoutineState {
        self.machine.current_state()
    }

    pub fn machine(&self) -> &ScoringMachine {
        &self.machine
    }

    /// Apply an intent coming from a control.
    ///
    /// Disabled controls cannot be invoked, so their intents are dropped
    /// here and never reach the machine.
    pub fn handle(&mut self, action: Action) -> StepResult {
        if !self.view().controls.enabled(action) {
            trace!(%action, "control disabled");
            return StepResult::Ignored;
        }
        self.machine.dispatch(action)
    }

    pub fn view(&self) -> RoutineView {
        RoutineView::new(self.machine.current_state(), self.config.locale)
    }

    /// Orientation for a screen of the given size. Only the layout
    /// changes on resize; the routine is untouched.
    pub fn orientation(&self, width: u16, height: u16) -> Orientation {
        self.config.orientation.resolve(width, height)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(self.machine.current_state())
    }

    /// Replace the routine with a validated checkpoint. On error the
    /// current routine is kept.
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        let state = checkpoint.restore()?;
        self.machine = ScoringMachine::from_state(state);
        Ok(())
    }

    /// Load the configured state file, if there is one and it exists.
    pub fn restore_from_state_file(&mut self) -> Result<bool, CheckpointError> {
        let Some(path) = self.config.state_file.clone() else {
            return Ok(false);
        };
        if !path.exists() {
            return Ok(false);
        }
        let checkpoint = Checkpoint::load(&path)?;
        self.restore(&checkpoint)?;
        info!(path = %path.display(), "routine restored from state file");
        Ok(true)
    }

    /// Save to the configured state file, if there is one.
    pub fn save_to_state_file(&self) -> Result<bool, CheckpointError> {
        let Some(path) = &self.config.state_file else {
            return Ok(false);
        };
        self.checkpoint().save(path)?;
        Ok(true)
    }
}
