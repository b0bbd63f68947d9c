//! Helpers shared by `validator`-derived input DTOs.
//!
//! The derive attributes live on the DTOs in `enamorado_db::models`; the
//! custom checks and the error flattening they need are kept here so the
//! API layer can render one readable message per failing field.

use std::borrow::Cow;

use validator::{ValidateUrl, ValidationError, ValidationErrors};

/// Every entry must parse as an absolute URL.
pub fn validate_url_list(links: &[String]) -> Result<(), ValidationError> {
    if links.iter().all(|link| link.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed("Must be a valid URL")))
    }
}

/// Reject strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("Must not be blank")))
    } else {
        Ok(())
    }
}

/// Flatten field errors into `field: message; field: message`, sorted by
/// field name so responses are stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{field}: {}", messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
