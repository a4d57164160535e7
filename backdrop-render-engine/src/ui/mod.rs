/// "GET IN TOUCH" dropdown overlay with the social links.
pub mod contact_menu;
