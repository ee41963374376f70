//! Account identifier text handed to the encoder by the banking front end.

use std::fmt;

use crate::error::{QrError, Result};
use crate::qrcode::{QrCode, QrCodeEcc};

/// A validated account holder / account number pair.
///
/// ```rust
/// use qrsymbol::{AccountPayload, QrCodeEcc};
///
/// let payload = AccountPayload::new("Maria Gonzalez", "2100000014").unwrap();
/// assert_eq!(payload.to_text(), "NAME: MARIA GONZALEZ, ACCOUNT: 2100000014");
/// let qr = payload.encode(QrCodeEcc::Low).unwrap();
/// assert!(qr.size() >= 21);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountPayload {
    holder: String,
    account: String,
}

impl AccountPayload {
    pub const ACCOUNT_DIGITS: usize = 10;
    pub const MIN_HOLDER_LEN: usize = 2;
    pub const MAX_HOLDER_LEN: usize = 60;

    /// Validates both fields and upper-cases the holder name.
    pub fn new(holder: &str, account: &str) -> Result<Self> {
        let holder = holder.trim();
        let account = account.trim();
        if !Self::is_valid_account_number(account) {
            return Err(QrError::InvalidAccountNumber(account.to_string()));
        }
        if !Self::is_valid_holder_name(holder) {
            return Err(QrError::InvalidHolderName(holder.to_string()));
        }
        Ok(Self {
            holder: holder.to_uppercase(),
            account: account.to_string(),
        })
    }

    /// Exactly ten ASCII digits.
    pub fn is_valid_account_number(account: &str) -> bool {
        account.len() == Self::ACCOUNT_DIGITS && account.bytes().all(|b| b.is_ascii_digit())
    }

    /// Letters, spaces and hyphens only, between 2 and 60 characters.
    pub fn is_valid_holder_name(name: &str) -> bool {
        let len = name.chars().count();
        (Self::MIN_HOLDER_LEN..=Self::MAX_HOLDER_LEN).contains(&len)
            && name.chars().all(|c| c.is_alphabetic() || c == ' ' || c == '-')
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Encodes the payload text into a symbol.
    pub fn encode(&self, ecl: QrCodeEcc) -> Result<QrCode> {
        QrCode::encode_text(&self.to_text(), ecl)
    }
}

impl fmt::Display for AccountPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NAME: {}, ACCOUNT: {}", self.holder, self.account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_payload_text() {
        let payload = AccountPayload::new("  uriel andrade-hermosa ", "2100000014").unwrap();
        assert_eq!(payload.holder(), "URIEL ANDRADE-HERMOSA");
        assert_eq!(payload.account(), "2100000014");
        assert_eq!(
            payload.to_text(),
            "NAME: URIEL ANDRADE-HERMOSA, ACCOUNT: 2100000014"
        );
    }

    #[test]
    fn test_account_number_validation() {
        assert!(AccountPayload::is_valid_account_number("1234567890"));
        assert!(!AccountPayload::is_valid_account_number("123ABC"));
        assert!(!AccountPayload::is_valid_account_number("12345678901"));
        let err = AccountPayload::new("Ana", "123").unwrap_err();
        assert_eq!(err, QrError::InvalidAccountNumber("123".to_string()));
        assert_eq!(err.kind(), ErrorKind::InputEncoding);
    }

    #[test]
    fn test_holder_name_validation() {
        assert!(AccountPayload::is_valid_holder_name("MARIA GONZALEZ RODRIGUEZ"));
        assert!(AccountPayload::is_valid_holder_name("José Núñez"));
        assert!(!AccountPayload::is_valid_holder_name("NOMBRE_CON_SIMBOLOS@#$"));
        assert!(!AccountPayload::is_valid_holder_name("A"));
        assert!(!AccountPayload::is_valid_holder_name(&"A".repeat(61)));
        assert!(matches!(
            AccountPayload::new("R2D2", "1234567890"),
            Err(QrError::InvalidHolderName(_))
        ));
    }

    #[test]
    fn test_payload_encodes_in_byte_mode() {
        let payload = AccountPayload::new("Juan Carlos Perez", "9876543210").unwrap();
        let qr = payload.encode(QrCodeEcc::Low).unwrap();
        let again = QrCode::encode_text(&payload.to_text(), QrCodeEcc::Low).unwrap();
        assert_eq!(qr, again);
        // 4 + 8 + 8 * 44 bits does not fit version 2-L (272 bits)
        assert_eq!(payload.to_text().len(), 44);
        assert_eq!(qr.version().value(), 3);
    }
}
