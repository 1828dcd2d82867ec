use rand::{Rng, distr::Alphanumeric};

use crate::consts::auth_const::INVITATION_TOKEN_LEN;

pub fn generate_invitation_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(INVITATION_TOKEN_LEN)
        .map(char::from)
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_opaque_alphanumeric() {
        let token = generate_invitation_token();
        assert_eq!(token.len(), INVITATION_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn tokens_do_not_repeat() {
        assert_ne!(generate_invitation_token(), generate_invitation_token());
    }
}
