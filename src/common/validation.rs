// src/common/validation.rs

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

// Máscara fixa de celular: (##) #####-####
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").expect("regex de telefone válida")
});

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

// "   " conta como vazio
pub fn validate_not_blank(val: &str) -> Result<(), ValidationError> {
    if val.trim().is_empty() {
        return Err(error("blank", "Campo obrigatório."));
    }
    Ok(())
}

pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = error("range", "O valor não pode ser negativo.");
        err.add_param("min".into(), &0.0);
        return Err(err);
    }
    Ok(())
}

pub fn validate_positive(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        return Err(error("range", "O valor deve ser maior que zero."));
    }
    Ok(())
}

pub fn validate_percentage(val: &Decimal) -> Result<(), ValidationError> {
    if *val < Decimal::ZERO || *val > Decimal::ONE_HUNDRED {
        return Err(error("range", "A comissão deve estar entre 0 e 100."));
    }
    Ok(())
}

pub fn validate_phone(val: &str) -> Result<(), ValidationError> {
    if !PHONE_RE.is_match(val) {
        return Err(error("phone", "Telefone deve estar no formato (99) 99999-9999."));
    }
    Ok(())
}
