//! Field Validation
//!
//! Side-effect-free per-field validators shared by the auth and task
//! forms. Each returns `Some(message)` for a rejected value; valid input
//! yields `None`. Rejected values are surfaced immediately and never sent
//! to the backend.

/// Loose shape check, not RFC conformance: something@something.something.
fn email_shape_ok(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !domain.contains(char::is_whitespace)
}

pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Email is required".to_string())
    } else if !email_shape_ok(value) {
        Some("Email is invalid".to_string())
    } else {
        None
    }
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if value.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| "@$!%*?&".contains(c));
    if has_lower && has_upper && has_digit && has_special {
        None
    } else {
        Some("Password must contain uppercase, lowercase, number and special character".to_string())
    }
}

pub fn validate_username(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Username is required".to_string())
    } else if value.len() < 3 || value.len() > 30 {
        Some("Username must be between 3 and 30 characters".to_string())
    } else if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        Some("Username can only contain letters, numbers, underscores, and hyphens".to_string())
    } else {
        None
    }
}

pub fn validate_name(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Name is required".to_string())
    } else if value.chars().count() > 100 {
        Some("Name must be between 1 and 100 characters".to_string())
    } else {
        None
    }
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Option<String> {
    (password != confirmation).then(|| "Passwords do not match".to_string())
}

pub fn validate_task_title(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Title is required".to_string())
    } else if value.chars().count() > 200 {
        Some("Title must be at most 200 characters".to_string())
    } else {
        None
    }
}

/// Dispatch by field name, for forms that validate on every keystroke.
pub fn validate_field(field: &str, value: &str) -> Option<String> {
    match field {
        "email" => validate_email(value),
        "password" => validate_password(value),
        "username" => validate_username(value),
        "name" => validate_name(value),
        "title" => validate_task_title(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(""), Some("Email is required".to_string()));
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("user@host").is_some());
        assert!(validate_email("user@test.com").is_none());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("").is_some());
        assert!(validate_password("short1!").is_some());
        assert!(validate_password("alllowercase1!").is_some());
        assert!(validate_password("NoSpecial123").is_some());
        assert!(validate_password("Secret1!").is_none());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("").is_some());
        assert!(validate_username("ab").is_some());
        assert!(validate_username(&"a".repeat(31)).is_some());
        assert!(validate_username("has space").is_some());
        assert!(validate_username("user_name-1").is_none());
    }

    #[test]
    fn name_rules() {
        assert!(validate_name("").is_some());
        assert!(validate_name(&"n".repeat(101)).is_some());
        assert!(validate_name("Ada").is_none());
    }

    #[test]
    fn confirmation_must_match() {
        assert_eq!(
            validate_password_confirmation("Secret1!", "Secret1?"),
            Some("Passwords do not match".to_string())
        );
        assert!(validate_password_confirmation("Secret1!", "Secret1!").is_none());
    }

    #[test]
    fn title_rules() {
        assert!(validate_task_title("   ").is_some());
        assert!(validate_task_title(&"t".repeat(201)).is_some());
        assert!(validate_task_title("Buy milk").is_none());
    }

    #[test]
    fn unknown_fields_pass() {
        assert!(validate_field("favourite_color", "").is_none());
    }
}
