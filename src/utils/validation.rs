// src/utils/validation.rs
use regex::Regex;

const MAX_PROJECT_ID_LENGTH: usize = 100;

lazy_static::lazy_static! {
    static ref COLOR_HEX_REGEX: Regex = Regex::new(r"^#?[0-9a-fA-F]{6}$").unwrap();
    static ref PROJECT_ID_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9_-]*$").unwrap();
}

/// Validates a six digit hex color, with or without the leading `#`
pub fn validate_color_hex(color: &str) -> bool {
    COLOR_HEX_REGEX.is_match(color)
}

/// Validates a project identifier taken from a URL path
pub fn validate_project_id(project_id: &str) -> Result<(), &'static str> {
    if project_id.is_empty() {
        return Err("Project identifier is empty");
    }

    if project_id.len() > MAX_PROJECT_ID_LENGTH {
        return Err("Project identifier too long (maximum 100 characters)");
    }

    if !PROJECT_ID_REGEX.is_match(project_id) {
        return Err("Project identifier can only contain lowercase letters, numbers, underscores, and hyphens, starting with a letter");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_validation() {
        assert!(validate_color_hex("#a1b2c3"));
        assert!(validate_color_hex("A1B2C3"));
        assert!(!validate_color_hex("#a1b2c"));
        assert!(!validate_color_hex("#a1b2c3d4"));
        assert!(!validate_color_hex("#zzzzzz"));
    }

    #[test]
    fn test_project_id_validation() {
        assert!(validate_project_id("ecookbook").is_ok());
        assert!(validate_project_id("sub-project_2").is_ok());
        assert!(validate_project_id("").is_err());
        assert!(validate_project_id("1abc").is_err());
        assert!(validate_project_id("Project").is_err());
        assert!(validate_project_id("a/../b").is_err());
        assert!(validate_project_id(&"a".repeat(101)).is_err());
    }
}
