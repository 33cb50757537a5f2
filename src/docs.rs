// src/docs.rs

use crate::handlers;
use crate::models;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Clientes ---
        handlers::customers::upsert_customer,
        handlers::customers::register_customer,
        handlers::customers::delete_customer,
        handlers::customers::list_customers,

        // --- Itens ---
        handlers::items::upsert_item,

        // --- Depósitos ---
        handlers::warehouses::upsert_warehouse,

        // --- Pedidos ---
        handlers::orders::upsert_order,
        handlers::orders::list_orders,
    ),
    components(
        schemas(
            // --- Clientes ---
            models::customer::CustomerPayload,
            models::customer::RegisterCustomerPayload,
            models::customer::CustomerResponse,
            models::customer::BusinessDetailsResponse,
            models::customer::BusinessDocuments,

            // --- Itens ---
            models::item::ItemPayload,
            models::item::ChannelCatPayload,
            models::item::ItemResponse,
            models::item::ChannelCatResponse,

            // --- Depósitos ---
            models::warehouse::WarehousePayload,
            models::warehouse::WarehouseResponse,

            // --- Pedidos ---
            models::order::OrderPayload,
            models::order::OrderLinePayload,
            models::order::OrderResponse,
            models::order::OrderLineResponse,
            models::order::SalesTeamResponse,
        )
    ),
    tags(
        (name = "Clientes", description = "Upsert, cadastro estrito e remoção de clientes"),
        (name = "Itens", description = "Upsert de itens pelo skuCode"),
        (name = "Depósitos", description = "Upsert de depósitos pelo warehouse_name"),
        (name = "Pedidos", description = "Upsert e consulta de pedidos de venda")
    )
)]
pub struct ApiDoc;
