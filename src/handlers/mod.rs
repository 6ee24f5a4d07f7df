pub mod entries;
pub mod health;
pub mod main_page;
