pub mod brand_repo;
pub use brand_repo::BrandRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod item_repo;
pub use item_repo::ItemRepository;
pub mod oauth_repo;
pub use oauth_repo::OauthRepository;
pub mod order_repo;
pub use order_repo::OrderRepository;
pub mod promotion_repo;
pub use promotion_repo::PromotionRepository;
pub mod warehouse_repo;
pub use warehouse_repo::WarehouseRepository;
