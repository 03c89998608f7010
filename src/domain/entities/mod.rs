pub mod signup_view;
pub mod waitlist_entry;
