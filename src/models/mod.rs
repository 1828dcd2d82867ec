pub mod credential;
pub mod invitation;
pub mod user;
