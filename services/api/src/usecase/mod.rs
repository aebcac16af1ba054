pub mod basket;
pub mod catalog;
pub mod order;
pub mod session;
