pub mod layout;
pub mod user_select;
