use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// "Valid e-mail address" as browsers check it for <input type="email">.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("please enter an email address")]
    Empty,
    #[error("'{0}' is not a valid email address")]
    Malformed(String),
}

/// Applies the same sanitizing and checks as a required email input.
pub fn validate_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(EmailError::Malformed(email.to_string()));
    }
    Ok(email)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
}

/// Whoever receives addresses captured by the signup form.
pub trait MailingList {
    fn forward(&self, subscription: &Subscription);
}

/// Stand-in recipient: no subscription service exists yet, addresses are only logged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogMailingList;

impl MailingList for LogMailingList {
    fn forward(&self, subscription: &Subscription) {
        info!("Email submitted: {}", subscription.email);
    }
}

/// Validates the field value and forwards it. On `Ok` the caller clears the field;
/// on `Err` nothing was forwarded.
pub fn submit<M: MailingList + ?Sized>(
    list: &M,
    field_value: &str,
) -> Result<Subscription, EmailError> {
    let email = validate_email(field_value).map_err(|e| {
        warn!("Signup blocked: {}", e);
        e
    })?;
    let subscription = Subscription {
        email: email.to_string(),
    };
    list.forward(&subscription);
    Ok(subscription)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        received: RefCell<Vec<String>>,
    }

    impl MailingList for Recorder {
        fn forward(&self, subscription: &Subscription) {
            self.received.borrow_mut().push(subscription.email.clone());
        }
    }

    #[test]
    fn accepts_ordinary_addresses() {
        for ok in [
            "user@example.com",
            "first.last+tag@sub.example.co",
            "a@b",
            "o'brien@example.org",
        ] {
            assert_eq!(validate_email(ok), Ok(ok), "{}", ok);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_email("  user@example.com\n"), Ok("user@example.com"));
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(validate_email(""), Err(EmailError::Empty));
        assert_eq!(validate_email("   "), Err(EmailError::Empty));
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "not-an-email",
            "user@",
            "@example.com",
            "user@-example.com",
            "user@example..com",
            "us er@example.com",
        ] {
            assert!(
                matches!(validate_email(bad), Err(EmailError::Malformed(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn valid_submit_forwards_once() {
        let list = Recorder::default();
        let sub = submit(&list, "user@example.com").unwrap();
        assert_eq!(sub.email, "user@example.com");
        assert_eq!(*list.received.borrow(), vec!["user@example.com".to_string()]);
    }

    #[test]
    fn invalid_submit_forwards_nothing() {
        let list = Recorder::default();
        assert_eq!(submit(&list, ""), Err(EmailError::Empty));
        assert!(submit(&list, "not-an-email").is_err());
        assert!(list.received.borrow().is_empty());
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            EmailError::Malformed("x".into()).to_string(),
            "'x' is not a valid email address"
        );
    }
}
