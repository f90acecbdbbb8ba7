//! Calculator Input Checks
//!
//! Applied before any network call, stopping at the first failure.
//! Bounds are compared as strings, so `"9"` sorts above `"32"`.

use thiserror::Error;

use crate::models::{OperationRequest, OperationType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Cannot divide by zero.")]
    DivideByZero,
    #[error("Cannot calculate the square root of a negative number.")]
    NegativeSquareRoot,
    #[error("String length must be between 1 and 32.")]
    StringLengthOutOfRange,
}

pub fn validate(
    operation: OperationType,
    num1: &str,
    num2: &str,
) -> Result<(), ValidationError> {
    match operation {
        OperationType::Division if num2 == "0" => Err(ValidationError::DivideByZero),
        OperationType::SquareRoot if num1 < "0" => Err(ValidationError::NegativeSquareRoot),
        OperationType::RandomString if num1 < "1" || num1 > "32" => {
            Err(ValidationError::StringLengthOutOfRange)
        }
        _ => Ok(()),
    }
}

/// Validate and build the request body; unary operations send an empty `num2`
pub fn prepare_operation(
    operation: OperationType,
    num1: &str,
    num2: &str,
) -> Result<OperationRequest, ValidationError> {
    validate(operation, num1, num2)?;
    let num2 = if operation.is_binary() { num2 } else { "" };
    Ok(OperationRequest {
        operation_type: operation,
        num1: num1.to_string(),
        num2: num2.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_divisor_only_blocks_division() {
        for op in OperationType::ALL {
            if op == OperationType::Division {
                continue;
            }
            // num1 chosen to satisfy the unary bounds so only the divisor matters
            assert!(
                prepare_operation(op, "2", "0").is_ok(),
                "{:?} should not be blocked by a zero second operand",
                op
            );
        }
    }

    #[test]
    fn test_division_by_zero_rejected() {
        assert_eq!(
            prepare_operation(OperationType::Division, "10", "0"),
            Err(ValidationError::DivideByZero)
        );
    }

    #[test]
    fn test_division_by_non_zero_produces_request() {
        for divisor in ["1", "2.5", "-3", "0.0", "00"] {
            let request = prepare_operation(OperationType::Division, "10", divisor)
                .expect("non-\"0\" divisor is accepted");
            assert_eq!(request.num2, divisor);
            assert_eq!(request.operation_type, OperationType::Division);
        }
    }

    #[test]
    fn test_square_root_uses_string_order() {
        assert_eq!(
            validate(OperationType::SquareRoot, "-4", ""),
            Err(ValidationError::NegativeSquareRoot)
        );
        assert!(validate(OperationType::SquareRoot, "16", "").is_ok());
        assert!(validate(OperationType::SquareRoot, "0", "").is_ok());
        // '+' sorts before '0', so an explicit plus sign is rejected
        assert_eq!(
            validate(OperationType::SquareRoot, "+4", ""),
            Err(ValidationError::NegativeSquareRoot)
        );
    }

    #[test]
    fn test_random_string_bounds_are_lexical() {
        for accepted in ["1", "2", "10", "32", "100", "3"] {
            assert!(
                validate(OperationType::RandomString, accepted, "").is_ok(),
                "{} is inside [\"1\", \"32\"] lexically",
                accepted
            );
        }
        for rejected in ["0", "4", "9", "33", "-1"] {
            assert_eq!(
                validate(OperationType::RandomString, rejected, ""),
                Err(ValidationError::StringLengthOutOfRange),
                "{} is outside [\"1\", \"32\"] lexically",
                rejected
            );
        }
    }

    #[test]
    fn test_unary_operations_drop_second_operand() {
        let request =
            prepare_operation(OperationType::SquareRoot, "9", "leftover").expect("valid");
        assert_eq!(request.num1, "9");
        assert_eq!(request.num2, "");

        let request = prepare_operation(OperationType::Addition, "1", "2").expect("valid");
        assert_eq!(request.num2, "2");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::DivideByZero.to_string(), "Cannot divide by zero.");
        assert_eq!(
            ValidationError::StringLengthOutOfRange.to_string(),
            "String length must be between 1 and 32."
        );
    }
}
