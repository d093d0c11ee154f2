use std::borrow::Cow;

use validator::ValidationError;

pub const CPF_DIGITS: usize = 11;
pub const CNPJ_DIGITS: usize = 14;

/// Drops mask characters, keeping only the digits.
pub fn strip(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn has_valid_length(value: &str) -> bool {
    let digits = strip(value).len();

    digits == CPF_DIGITS || digits == CNPJ_DIGITS
}

/// Renders `000.000.000-00` for a CPF and `00.000.000/0000-00` for a CNPJ.
/// Anything else comes back as bare digits.
pub fn format(value: &str) -> String {
    let digits = strip(value);

    match digits.len() {
        CPF_DIGITS => format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        ),
        CNPJ_DIGITS => format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        ),
        _ => digits,
    }
}

pub fn validate(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| c.is_ascii_alphabetic()) || !has_valid_length(value) {
        let mut error = ValidationError::new("cpf_cnpj");
        error.message = Some(Cow::from(
            "cpfCnpj must have 11 (CPF) or 14 (CNPJ) digits.",
        ));

        return Err(error);
    }

    Ok(())
}
