pub mod brand_service;
pub use brand_service::BrandService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod customer_service;
pub use customer_service::CustomerService;
pub mod item_service;
pub use item_service::ItemService;
pub mod order_service;
pub use order_service::OrderService;
pub mod promotion_service;
pub use promotion_service::PromotionService;
pub mod token_service;
pub use token_service::TokenService;
pub mod warehouse_service;
pub use warehouse_service::WarehouseService;
