//! Domain constants and field-level validation rules.
//!
//! The custom validators here plug into `#[validate(custom(function = ...))]`
//! on the request DTOs in `festival_db::models`.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

/// Default concert duration when the payload omits it.
pub const DEFAULT_CONCERT_DURATION_MINUTES: i32 = 60;

/// Ticket categories sold at the box office.
pub const TICKET_TYPES: &[&str] = &["VIP", "Geral"];

/// Ticket lifecycle states. New tickets start as [`DEFAULT_TICKET_STATE`].
pub const TICKET_STATES: &[&str] = &["disponivel", "reservado", "vendido"];

pub const DEFAULT_TICKET_STATE: &str = "disponivel";

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

pub fn validate_ticket_type(value: &str) -> Result<(), ValidationError> {
    if TICKET_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            "ticket_type",
            format!("must be one of {}", TICKET_TYPES.join(", ")),
        ))
    }
}

pub fn validate_ticket_state(value: &str) -> Result<(), ValidationError> {
    if TICKET_STATES.contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            "ticket_state",
            format!("must be one of {}", TICKET_STATES.join(", ")),
        ))
    }
}

/// Money columns are NUMERIC(10,2) and never negative.
pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(invalid("amount", "must not be negative".to_string()));
    }
    if value.round_dp(2) >= Decimal::new(100_000_000, 0) {
        return Err(invalid("amount", "must be below 100000000".to_string()));
    }
    Ok(())
}

/// Flatten validator output into one `field: message; ...` string, ordered
/// by field name so responses are stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_type_whitelist() {
        assert!(validate_ticket_type("VIP").is_ok());
        assert!(validate_ticket_type("Geral").is_ok());
        assert!(validate_ticket_type("vip").is_err());
        assert!(validate_ticket_type("").is_err());
    }

    #[test]
    fn ticket_state_whitelist() {
        assert!(validate_ticket_state(DEFAULT_TICKET_STATE).is_ok());
        assert!(validate_ticket_state("vendido").is_ok());
        assert!(validate_ticket_state("perdido").is_err());
    }

    #[test]
    fn amount_bounds() {
        assert!(validate_amount(&Decimal::new(6500, 2)).is_ok());
        assert!(validate_amount(&Decimal::ZERO).is_ok());
        assert!(validate_amount(&Decimal::new(-1, 2)).is_err());
        assert!(validate_amount(&Decimal::new(100_000_000, 0)).is_err());
    }

    #[test]
    fn describe_is_sorted_and_uses_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("preco", invalid("amount", "must not be negative".into()));
        errors.add("nome", ValidationError::new("length"));

        assert_eq!(describe(&errors), "nome: length; preco: must not be negative");
    }
}
