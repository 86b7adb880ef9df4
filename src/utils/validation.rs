//! Presentation-layer input validation.
//!
//! These checks exist to avoid a wasted round trip on obviously bad
//! form input. They are not business rules: balance limits, role
//! permissions, and everything else of consequence is validated by the
//! backend.

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

/// Validate a username: required, 2-20 characters
pub fn validate_username(username: &str) -> ValidationResult {
    let username = username.trim();
    if username.is_empty() {
        return ValidationResult::err("Username is required");
    }
    if username.chars().count() < 2 {
        return ValidationResult::err("Username must be at least 2 characters");
    }
    if username.chars().count() > 20 {
        return ValidationResult::err("Username must be at most 20 characters");
    }
    ValidationResult::ok()
}

/// Validate a password: required, 6-20 characters
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }
    if password.chars().count() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }
    if password.chars().count() > 20 {
        return ValidationResult::err("Password must be at most 20 characters");
    }
    ValidationResult::ok()
}

/// Validate an optional CN mobile number: 11 digits, `1` then `3`-`9`.
/// Empty input is accepted - the field is optional at registration.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::ok();
    }
    if !is_cn_mobile(phone) {
        return ValidationResult::err("Please enter a valid mobile number");
    }
    ValidationResult::ok()
}

fn is_cn_mobile(s: &str) -> bool {
    if s.len() != 11 {
        return false;
    }
    s.chars().enumerate().all(|(i, c)| match i {
        0 => c == '1',
        1 => ('3'..='9').contains(&c),
        _ => c.is_ascii_digit(),
    })
}

/// Validate an optional email address: non-empty local part, domain
/// containing a dot. Empty input is accepted.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::ok();
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Please enter a valid email address");
    }
    if parts[0].is_empty() || parts[0].contains(char::is_whitespace) {
        return ValidationResult::err("Please enter a valid email address");
    }
    if parts[1].is_empty() || !parts[1].contains('.') || parts[1].contains(char::is_whitespace) {
        return ValidationResult::err("Please enter a valid email address");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(validate_username("alice").is_valid);
        assert!(validate_username("ab").is_valid); // minimum length
        assert!(!validate_username("").is_valid);
        assert!(!validate_username("   ").is_valid);
        assert!(!validate_username("a").is_valid);
        assert!(!validate_username(&"x".repeat(21)).is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret").is_valid);
        assert!(!validate_password("").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password(&"p".repeat(21)).is_valid);
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("").is_valid); // optional
        assert!(validate_phone("13812345678").is_valid);
        assert!(validate_phone("19912345678").is_valid);
        assert!(!validate_phone("12812345678").is_valid); // second digit too low
        assert!(!validate_phone("1381234567").is_valid); // too short
        assert!(!validate_phone("138123456789").is_valid); // too long
        assert!(!validate_phone("1381234567a").is_valid);
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("").is_valid); // optional
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("test@nodot").is_valid);
        assert!(!validate_email("a b@example.com").is_valid);
    }
}
