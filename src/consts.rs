pub mod auth_const {
    pub const USER_TABLE: &str = "users";
    pub const AUTH_PASSWORD_TABLE: &str = "auth_passwords";
    pub const INVITATION_TABLE: &str = "invitations";

    pub const INVITATION_VALID_DAYS: i64 = 7;
    pub const SESSION_VALID_HOURS: i64 = 24;
    pub const INVITATION_TOKEN_LEN: usize = 32;
}
