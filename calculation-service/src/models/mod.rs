pub mod calculation;

pub use calculation::{CalculationQuery, CalculationResult, ErrorPayload, Operation};
