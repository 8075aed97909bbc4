// src/modules/contact/domain/form.rs

use email_address::EmailAddress;

/// Raw form input as posted by the contact page.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub assunto: String,
    #[serde(default)]
    pub mensagem: String,
}

/// A contact request that passed validation and is ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Informe um nome com pelo menos 3 caracteres.")]
    NameTooShort,
    #[error("Email inválido.")]
    InvalidEmail,
    #[error("Informe um telefone válido com DDD.")]
    InvalidPhone,
    #[error("Informe o assunto da mensagem.")]
    MissingSubject,
    #[error("A mensagem deve ter pelo menos 10 caracteres.")]
    MessageTooShort,
}

impl ContactForm {
    /// Validates every field and produces the deliverable message.
    /// The phone is optional; when present it must hold 10 or 11 digits
    /// (landline or mobile with area code) and is stored masked.
    pub fn validated(self) -> Result<ContactMessage, ContactFormError> {
        let name = self.nome.trim();
        if name.chars().count() < 3 {
            return Err(ContactFormError::NameTooShort);
        }

        let email = self.email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(ContactFormError::InvalidEmail);
        }

        let phone = match self.telefone.trim() {
            "" => None,
            raw => Some(format_phone(raw).ok_or(ContactFormError::InvalidPhone)?),
        };

        let subject = self.assunto.trim();
        if subject.is_empty() {
            return Err(ContactFormError::MissingSubject);
        }

        let message = self.mensagem.trim();
        if message.chars().count() < 10 {
            return Err(ContactFormError::MessageTooShort);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            phone,
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

/// Normalizes a Brazilian phone number into `(DD) NNNN-NNNN` or
/// `(DD) NNNNN-NNNN`. Anything other than 10 or 11 digits is rejected.
pub fn format_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => Some(format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])),
        11 => Some(format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])),
        _ => None,
    }
}
