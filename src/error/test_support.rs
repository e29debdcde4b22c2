use super::AppError;

impl From<&'static str> for AppError {
    fn from(message: &'static str) -> Self {
        AppError::TestExpectation { message }
    }
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        AppError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
