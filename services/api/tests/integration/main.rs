mod helpers;

mod basket_test;
mod catalog_test;
mod order_test;
mod session_test;
