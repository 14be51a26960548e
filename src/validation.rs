use std::borrow::Cow;

use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required."));
    }
    Ok(())
}

/// Empty means "no image"; anything else must parse as a URL (data URIs included).
pub fn image_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || validator::validate_url(value) {
        return Ok(());
    }
    Err(error(
        "url",
        "Main image must be a valid URL or Data URI.",
    ))
}

pub fn gallery_urls(urls: &[String]) -> Result<(), ValidationError> {
    if urls.iter().all(|url| validator::validate_url(url.as_str())) {
        return Ok(());
    }
    Err(error(
        "url",
        "Each additional image must be a valid URL or Data URI.",
    ))
}

/// Blank means "keep the current password".
pub fn new_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= 6 {
        return Ok(());
    }
    Err(error(
        "length",
        "New password must be at least 6 characters long.",
    ))
}

pub fn not_blank_when_given(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error(
            "required",
            "New username cannot be empty if you intend to change it.",
        ));
    }
    Ok(())
}
