pub mod hotel;
pub mod images;
