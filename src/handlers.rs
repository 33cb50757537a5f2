pub mod brands;
pub mod catalog;
pub mod customers;
pub mod items;
pub mod orders;
pub mod promotions;
pub mod token;
pub mod warehouses;
