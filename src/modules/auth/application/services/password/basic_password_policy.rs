use crate::auth::application::{
    domain::credentials::PASSWORD_MIN_LEN,
    ports::incoming::password_policy::{PasswordPolicy, PasswordPolicyError},
};

const PASSWORD_MAX_LEN: usize = 128;

#[derive(Debug, Clone, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let len = password.chars().count();

        if len < PASSWORD_MIN_LEN {
            return Err(PasswordPolicyError::TooShort(PASSWORD_MIN_LEN));
        }

        if len > PASSWORD_MAX_LEN {
            return Err(PasswordPolicyError::TooLong(PASSWORD_MAX_LEN));
        }

        Ok(())
    }
}
