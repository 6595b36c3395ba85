use serde::{Deserialize, Serialize};

/// Arithmetic operations accepted by the calculation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse an operation name from the query string, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Compute the selected operation only. Division by zero yields no value.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Operation::Add => Some(a + b),
            Operation::Subtract => Some(a - b),
            Operation::Multiply => Some(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    None
                } else {
                    Some(a / b)
                }
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

/// Query parameters for `GET /api/calculate`.
#[derive(Debug, Deserialize)]
pub struct CalculationQuery {
    pub a: f64,
    pub b: f64,
    #[serde(default = "default_operation")]
    pub operation: String,
}

fn default_operation() -> String {
    "add".to_string()
}

/// Successful calculation response, echoing the operands and the
/// canonical operation name alongside the result.
#[derive(Debug, Serialize)]
pub struct CalculationResult {
    pub a: f64,
    pub b: f64,
    pub operation: String,
    pub result: f64,
}

/// Recoverable computation error, returned with a success status.
/// Clients detect the failure by payload shape, not status code.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}
