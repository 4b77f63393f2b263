use once_cell::sync::Lazy;
use regex::Regex;

use crate::cart::CartLedger;
use crate::error::AppError;
use crate::models::CheckoutInput;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

pub fn valid_name(name: &str) -> bool {
    NAME_RE.is_match(name.trim())
}

pub fn valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone.trim())
}

pub fn can_checkout(input: &CheckoutInput, cart: &CartLedger) -> bool {
    valid_name(&input.name) && valid_phone(&input.phone) && cart.total_count() > 0
}

/// Gate for order submission. Reports one combined message, deliberately not
/// pinpointing which field failed.
pub fn validate(input: &CheckoutInput, cart: &CartLedger) -> Result<(), AppError> {
    if can_checkout(input, cart) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Please provide a valid name (letters only), a valid phone (numbers only) and a non-empty cart.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLedger;
    use crate::catalog::CatalogStore;
    use crate::models::seed_courses;

    fn input(name: &str, phone: &str) -> CheckoutInput {
        CheckoutInput {
            name: name.to_string(),
            phone: phone.to_string(),
            email: String::new(),
        }
    }

    #[test]
    fn name_accepts_letters_and_whitespace_only() {
        assert!(valid_name("John Doe"));
        assert!(valid_name("  Jane  "));
        assert!(!valid_name("J0hn"));
        assert!(!valid_name("John-Doe"));
        assert!(!valid_name(""));
        assert!(!valid_name("   "));
    }

    #[test]
    fn phone_accepts_digits_only() {
        assert!(valid_phone("1234567"));
        assert!(valid_phone(" 042 "));
        assert!(!valid_phone("12-34"));
        assert!(!valid_phone("phone"));
        assert!(!valid_phone(""));
    }

    #[test]
    fn empty_cart_blocks_checkout_regardless_of_fields() {
        let cart = CartLedger::new();
        assert!(!can_checkout(&input("John Doe", "1234567"), &cart));
        assert!(validate(&input("John Doe", "1234567"), &cart).is_err());
    }

    #[test]
    fn valid_fields_and_nonempty_cart_pass() {
        let mut catalog = CatalogStore::new(seed_courses());
        let mut cart = CartLedger::new();
        cart.add(&mut catalog, "c1");

        assert!(can_checkout(&input("John Doe", "1234567"), &cart));
        assert!(validate(&input("John Doe", "1234567"), &cart).is_ok());
        assert!(!can_checkout(&input("J0hn", "1234567"), &cart));
    }
}
