pub mod brand;
pub mod catalog;
pub mod customer;
pub mod item;
pub mod order;
pub mod promotion;
pub mod warehouse;
