use crate::utils::error::{ListError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const ALLOWED_FORMATS: &[&str] = &["markdown", "json"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_entry_file(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name cannot be empty".to_string(),
        });
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    Ok(())
}

pub fn validate_format(field_name: &str, format: &str) -> Result<()> {
    if !ALLOWED_FORMATS.contains(&format) {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Allowed formats: {}",
                ALLOWED_FORMATS.join(", ")
            ),
        });
    }
    Ok(())
}
