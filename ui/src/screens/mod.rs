// This file makes the screen modules available to the rest of the application.

pub mod dashboards;
pub mod favorites;
pub mod home;
pub mod listings;
pub mod login;
pub mod not_found;
