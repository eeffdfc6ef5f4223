pub mod home;
pub mod nav;
