pub mod issue_token;
pub mod verify_token;
