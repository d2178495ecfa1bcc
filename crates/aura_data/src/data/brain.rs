use serde::{Deserialize, Serialize};

pub const SENSORY_INPUTS: usize = 8;
pub const HIDDEN_UNITS: usize = 12;
pub const ACTION_OUTPUTS: usize = 6;

/// Weights of the fixed 8-12-6 decision network.
///
/// A brain is a plain value: offspring receive a deep copy, never a shared
/// reference. Rows are indexed by the source unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Brain {
    pub input_hidden: [[f32; HIDDEN_UNITS]; SENSORY_INPUTS],
    pub hidden_bias: [f32; HIDDEN_UNITS],
    pub hidden_output: [[f32; ACTION_OUTPUTS]; HIDDEN_UNITS],
    pub output_bias: [f32; ACTION_OUTPUTS],
}

impl Brain {
    /// Number of tunable parameters, biases included.
    pub const PARAMETERS: usize = SENSORY_INPUTS * HIDDEN_UNITS
        + HIDDEN_UNITS
        + HIDDEN_UNITS * ACTION_OUTPUTS
        + ACTION_OUTPUTS;

    pub fn weights(&self) -> impl Iterator<Item = &f32> {
        self.input_hidden
            .iter()
            .flatten()
            .chain(self.hidden_bias.iter())
            .chain(self.hidden_output.iter().flatten())
            .chain(self.output_bias.iter())
    }

    pub fn weights_mut(&mut self) -> impl Iterator<Item = &mut f32> {
        self.input_hidden
            .iter_mut()
            .flatten()
            .chain(self.hidden_bias.iter_mut())
            .chain(self.hidden_output.iter_mut().flatten())
            .chain(self.output_bias.iter_mut())
    }
}
