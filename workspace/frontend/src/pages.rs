pub mod residential_user_create;
pub mod residential_user_form;
pub mod residential_user_edit;
pub mod residential_users;
