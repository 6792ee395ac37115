use super::Predictor;
use crate::error::PredictError;
use crate::models::InputRecord;

/// Predictor returning a fixed value for every row. Stands in for the real
/// artifact in tests and demo mode.
#[derive(Debug, Clone, Copy)]
pub struct ConstantPredictor {
    value: f64,
}

impl ConstantPredictor {
    /// The demo baseline yield, in t/ha.
    pub const DEMO_YIELD: f64 = 2.5;

    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Default for ConstantPredictor {
    fn default() -> Self {
        Self::new(Self::DEMO_YIELD)
    }
}

impl Predictor for ConstantPredictor {
    fn predict(&self, batch: &[InputRecord]) -> Result<Vec<f64>, PredictError> {
        Ok(vec![self.value; batch.len()])
    }
}
