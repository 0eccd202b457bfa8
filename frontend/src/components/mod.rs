pub mod header;
pub mod login_button;
pub mod profile_card;
pub mod session_viewer;
