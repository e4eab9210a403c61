//! Email capture for the call-to-action section.
//!
//! Submitting does not talk to any service; a successful submit yields a
//! thank-you notice and clears the field.

use std::fmt;

use crate::error::{SiteError, SiteResult};

/// A syntactically plausible email address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse a raw form value.
    ///
    /// Surrounding whitespace is trimmed. The address needs exactly one `@`,
    /// a non-empty local part, and a domain with a `.` that is neither its
    /// first nor last character.
    pub fn parse(raw: &str) -> SiteResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SiteError::InvalidEmail("email is required".to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(SiteError::InvalidEmail(format!("'{}' contains whitespace", trimmed)));
        }

        let mut parts = trimmed.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => {
                return Err(SiteError::InvalidEmail(format!(
                    "'{}' must contain exactly one @",
                    trimmed
                )))
            }
        };

        if local.is_empty() {
            return Err(SiteError::InvalidEmail(format!("'{}' has no local part", trimmed)));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(SiteError::InvalidEmail(format!(
                "'{}' has an invalid domain",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Placeholder acknowledgement shown after subscribing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionNotice {
    pub email: EmailAddress,
    pub brand: String,
}

impl SubscriptionNotice {
    pub fn message(&self) -> String {
        format!(
            "Thank you for subscribing with {}! Welcome to {}.",
            self.email, self.brand
        )
    }
}

/// State of the subscribe form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscribeForm {
    pub email: String,
}

impl SubscribeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Validate and submit. On success the field is cleared; on failure it
    /// keeps what the visitor typed.
    pub fn submit(&mut self, brand: &str) -> SiteResult<SubscriptionNotice> {
        let email = EmailAddress::parse(&self.email).map_err(|e| {
            tracing::warn!(error = %e, "subscription rejected");
            e
        })?;
        self.email.clear();
        tracing::info!(email = %email, "subscription captured");
        Ok(SubscriptionNotice {
            email,
            brand: brand.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        let email = EmailAddress::parse("  asha@bodsphere.com ").unwrap();
        assert_eq!(email.as_str(), "asha@bodsphere.com");
        assert!(EmailAddress::parse("a.b+yoga@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in [
            "",
            "   ",
            "no-at-sign.com",
            "@bodsphere.com",
            "two@@bodsphere.com",
            "a@b@c.com",
            "asha@localhost",
            "asha@.com",
            "asha@bodsphere.",
            "as ha@bodsphere.com",
        ] {
            assert!(
                matches!(EmailAddress::parse(raw), Err(SiteError::InvalidEmail(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn submit_clears_field_and_builds_notice() {
        let mut form = SubscribeForm::new();
        form.set_email("asha@bodsphere.com");
        let notice = form.submit("Bodsphere").unwrap();
        assert_eq!(
            notice.message(),
            "Thank you for subscribing with asha@bodsphere.com! Welcome to Bodsphere."
        );
        assert!(form.email.is_empty());
    }

    #[test]
    fn failed_submit_keeps_input() {
        let mut form = SubscribeForm::new();
        form.set_email("asha@");
        assert!(form.submit("Bodsphere").is_err());
        assert_eq!(form.email, "asha@");
    }
}
