pub mod credential;
pub mod panels;
pub mod ui;
