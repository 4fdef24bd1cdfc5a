/// Validation utilities for user input

/// Longest answer the backend accepts for a single question.
const MAX_ANSWER_CHARS: usize = 10_000;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a lockout bypass code before sending it to the backend
pub fn validate_bypass_code(code: &str) -> ValidationResult {
    let code = code.trim();

    if code.is_empty() {
        return ValidationResult::err("Bypass code is required");
    }

    if code.len() < 6 || code.len() > 12 {
        return ValidationResult::err("Bypass code must be 6-12 characters");
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ValidationResult::err("Bypass code can only contain letters and numbers");
    }

    ValidationResult::ok()
}

/// Validate a free-text answer before it is queued for autosave
pub fn validate_answer(answer: &str) -> ValidationResult {
    if answer.chars().count() > MAX_ANSWER_CHARS {
        return ValidationResult::err("Answer is too long");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bypass_code_validation() {
        assert!(validate_bypass_code("ABC123").is_valid);
        assert!(validate_bypass_code("  ABC123  ").is_valid); // trimmed
        assert!(validate_bypass_code("x1y2z3w4").is_valid);
        assert!(!validate_bypass_code("").is_valid);
        assert!(!validate_bypass_code("short").is_valid);
        assert!(!validate_bypass_code("waytoolongforacode").is_valid);
        assert!(!validate_bypass_code("has spaces!").is_valid);
    }

    #[test]
    fn test_answer_validation() {
        assert!(validate_answer("").is_valid);
        assert!(validate_answer("a perfectly normal essay answer").is_valid);
        assert!(!validate_answer(&"x".repeat(10_001)).is_valid);
    }
}
