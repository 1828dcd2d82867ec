pub mod identity;
pub mod invitations;
pub mod users;
