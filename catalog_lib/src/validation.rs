//! Local checks for account input, matching what the server enforces.
//!
//! Product input is deliberately not validated here; the server's messages
//! are shown as-is.

use crate::error::CatalogError;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_NAME_LENGTH: usize = 120;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, CatalogError> {
    if input.len() > max_len {
        return Err(CatalogError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(CatalogError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a display name: non-empty after trimming.
pub fn validate_full_name(input: &str) -> Result<String, CatalogError> {
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Validate an email address: one `@` with text on both sides and a dot in the domain.
pub fn validate_email(input: &str) -> Result<String, CatalogError> {
    let email = input.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(email.to_string())
    } else {
        Err(CatalogError::InvalidInput(format!(
            "'{}' is not a valid email address",
            input
        )))
    }
}

/// Validate a password length (in characters).
pub fn validate_password(input: &str) -> Result<(), CatalogError> {
    let len = input.chars().count();
    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
        Ok(())
    } else {
        Err(CatalogError::InvalidInput(format!(
            "password must be between {} and {} characters",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize_text(" Ana\u{7}\n", 50).unwrap(), "Ana");
        assert!(sanitize_text("\n\t", 50).is_err());
        assert!(sanitize_text("abcdef", 3).is_err());
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate_email(" ana@example.com ").unwrap(), "ana@example.com");
        assert!(validate_email("ana").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("ana@@example.com").is_err());
        assert!(validate_email("a na@example.com").is_err());
    }

    #[test]
    fn password_bounds() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password(&"x".repeat(128)).is_ok());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn full_name_required() {
        assert_eq!(validate_full_name("  Ana Souza ").unwrap(), "Ana Souza");
        assert!(validate_full_name("   ").is_err());
    }
}
