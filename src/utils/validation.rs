use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::errors::AppError;

/// Validates `payload` and reports the first failing field as
/// `"<field>: <reason>"`. Fields are checked in `field_order`; the name is
/// rendered the way it appears on the wire (camelCase).
pub fn validate_payload<T: Validate>(payload: &T, field_order: &[&str]) -> Result<(), AppError> {
    let errors = match payload.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let field_errors = errors.field_errors();

    let mut fields: Vec<&str> = field_errors.keys().copied().collect();
    fields.sort_by_key(|field| {
        field_order
            .iter()
            .position(|candidate| candidate == field)
            .unwrap_or(usize::MAX)
    });

    let message = fields
        .first()
        .and_then(|field| {
            field_errors.get(field).and_then(|errs| errs.first()).map(|err| {
                let reason = err
                    .message
                    .clone()
                    .unwrap_or_else(|| err.code.clone());
                format!("{}: {}", to_camel_case(field), reason)
            })
        })
        .unwrap_or_else(|| "request validation failed".to_string());

    Err(AppError::Validation(message))
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::from("department name must not be blank"));
        return Err(err);
    }
    Ok(())
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
