//! Frontend Models
//!
//! Request and response shapes exchanged with the calculator API.

use serde::{Deserialize, Serialize};

/// Calculator operation (matches backend enum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    #[default]
    Addition,
    Subtraction,
    Multiplication,
    Division,
    SquareRoot,
    RandomString,
}

impl OperationType {
    pub const ALL: [OperationType; 6] = [
        OperationType::Addition,
        OperationType::Subtraction,
        OperationType::Multiplication,
        OperationType::Division,
        OperationType::SquareRoot,
        OperationType::RandomString,
    ];

    /// Wire name, e.g. `SQUARE_ROOT`
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Addition => "ADDITION",
            OperationType::Subtraction => "SUBTRACTION",
            OperationType::Multiplication => "MULTIPLICATION",
            OperationType::Division => "DIVISION",
            OperationType::SquareRoot => "SQUARE_ROOT",
            OperationType::RandomString => "RANDOM_STRING",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationType::Addition => "Addition",
            OperationType::Subtraction => "Subtraction",
            OperationType::Multiplication => "Multiplication",
            OperationType::Division => "Division",
            OperationType::SquareRoot => "Square Root",
            OperationType::RandomString => "Random String",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == value)
    }

    /// Whether a second operand is sent
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            OperationType::Addition
                | OperationType::Subtraction
                | OperationType::Multiplication
                | OperationType::Division
        )
    }

    /// Placeholder for the first operand field
    pub fn first_operand_hint(&self) -> &'static str {
        match self {
            OperationType::SquareRoot => "Number",
            OperationType::RandomString => "String Length (1~32)",
            _ => "Number 1",
        }
    }
}

/// Body of `POST /operation/`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub operation_type: OperationType,
    pub num1: String,
    pub num2: String,
}

/// Body of login and register calls
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Reply of `POST /user/register`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of `GET /user/{username}`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Balance {
    pub balance: f64,
}

/// One billed operation from the user's history
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    pub operation_type: String,
    pub amount: f64,
    #[serde(default)]
    pub operation_response: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub user_balance: f64,
}

/// Format an amount the way the banner shows it
pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}
