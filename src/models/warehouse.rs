// src/models/warehouse.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Warehouse {
    pub id: Uuid,
    pub warehouse_name: String,
    pub address_line_1: String,
    pub region: String,
    pub warehouse_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Warehouse {
    pub fn blank(warehouse_name: &str) -> Self {
        Self {
            id: Uuid::nil(),
            warehouse_name: warehouse_name.to_string(),
            address_line_1: String::new(),
            region: String::new(),
            warehouse_code: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WarehousePayload {
    // Chave natural.
    pub warehouse_name: Option<String>,
    pub address_line_1: Option<String>,
    pub region: Option<String>,
    pub warehouse_code: Option<String>,
}

impl WarehousePayload {
    pub fn apply_to(&self, warehouse: &mut Warehouse) {
        if let Some(v) = &self.address_line_1 {
            warehouse.address_line_1 = v.clone();
        }
        if let Some(v) = &self.region {
            warehouse.region = v.clone();
        }
        if let Some(v) = &self.warehouse_code {
            warehouse.warehouse_code = v.clone();
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseResponse {
    pub name: Uuid,
    pub warehouse_name: String,
    pub address_line_1: String,
    pub region: String,
    pub warehouse_code: String,
}

impl From<Warehouse> for WarehouseResponse {
    fn from(w: Warehouse) -> Self {
        Self {
            name: w.id,
            warehouse_name: w.warehouse_name,
            address_line_1: w.address_line_1,
            region: w.region,
            warehouse_code: w.warehouse_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_to_mantem_o_que_nao_veio() {
        let mut warehouse = Warehouse {
            id: Uuid::new_v4(),
            warehouse_name: "Riyadh Central".into(),
            address_line_1: "King Fahd Rd".into(),
            region: "Riyadh".into(),
            warehouse_code: "WH-01".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let payload = WarehousePayload {
            warehouse_name: Some("Riyadh Central".into()),
            address_line_1: None,
            region: Some("Najd".into()),
            warehouse_code: None,
        };
        payload.apply_to(&mut warehouse);

        assert_eq!(warehouse.address_line_1, "King Fahd Rd");
        assert_eq!(warehouse.region, "Najd");
        assert_eq!(warehouse.warehouse_code, "WH-01");
    }
}
