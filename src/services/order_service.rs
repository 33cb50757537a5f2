// src/services/order_service.rs

use std::collections::HashSet;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ItemRepository, OrderRepository},
    models::{
        catalog::OrderSummaryRow,
        order::{OrderLinePayload, OrderPayload, OrderResponse, SalesOrder},
    },
};

#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
    item_repo: ItemRepository,
}

impl OrderService {
    pub fn new(repo: OrderRepository, item_repo: ItemRepository) -> Self {
        Self { repo, item_repo }
    }

    /// Linhas que apontam para códigos inexistentes são descartadas em
    /// silêncio; o pedido segue com as que sobraram.
    pub fn filter_lines(
        lines: Vec<OrderLinePayload>,
        known_codes: &HashSet<String>,
    ) -> Vec<OrderLinePayload> {
        lines
            .into_iter()
            .filter(|line| {
                line.item_code
                    .as_deref()
                    .map(|code| known_codes.contains(code))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub async fn upsert(
        &self,
        pool: &PgPool,
        payload: OrderPayload,
    ) -> Result<(&'static str, OrderResponse), AppError> {
        let mut tx = pool.begin().await?;

        let requested: Vec<String> = payload
            .items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|line| line.item_code.clone())
            .collect();
        let known: HashSet<String> = self
            .item_repo
            .existing_codes(&mut *tx, &requested)
            .await?
            .into_iter()
            .collect();

        let lines = Self::filter_lines(payload.items.clone().unwrap_or_default(), &known);
        if lines.is_empty() {
            return Err(AppError::NoValidItems);
        }

        let today = Utc::now().date_naive();
        let lines: Vec<_> = lines.into_iter().map(|l| l.into_line(today)).collect();
        let team = payload.sales_team();

        let existing = match payload
            .order_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
        {
            Some(id) => self.repo.find_by_id(&mut *tx, id).await?,
            None => None,
        };

        let (message, order) = match existing {
            Some(mut order) => {
                payload.apply_to(&mut order);
                let updated = self.repo.update(&mut tx, &order).await?;
                ("Sales Order updated successfully", updated)
            }
            None => {
                let customer = payload.user_id.as_deref().unwrap_or_default();
                let mut order = SalesOrder::blank(customer);
                payload.apply_to(&mut order);
                let inserted = self.repo.insert(&mut tx, &order).await?;
                ("Sales Order created successfully", inserted)
            }
        };

        // Filhas sempre substituídas: nesse endpoint as chaves estão
        // sempre presentes quando a validação passa.
        self.repo.replace_lines(&mut tx, order.id, &lines).await?;
        self.repo.replace_sales_team(&mut tx, order.id, &team).await?;

        let lines = self.repo.lines(&mut *tx, order.id).await?;
        let team = self.repo.sales_team(&mut *tx, order.id).await?;

        tx.commit().await?;

        Ok((message, OrderResponse::from_rows(order, lines, team)))
    }

    pub async fn list_by_customer(
        &self,
        customer: &str,
    ) -> Result<Vec<OrderSummaryRow>, AppError> {
        self.repo.list_by_customer(customer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(code: &str) -> OrderLinePayload {
        OrderLinePayload {
            item_code: Some(code.to_string()),
            quantity: None,
            price: None,
            delivery_date: None,
            uom: None,
            warehouse: None,
        }
    }

    #[test]
    fn descarta_codigos_desconhecidos_mantendo_a_ordem() {
        let known: HashSet<String> = ["SKU-1".to_string(), "SKU-3".to_string()].into();
        let filtered = OrderService::filter_lines(
            vec![line("SKU-1"), line("SKU-2"), line("SKU-3")],
            &known,
        );

        let codes: Vec<_> = filtered
            .iter()
            .map(|l| l.item_code.as_deref().unwrap())
            .collect();
        assert_eq!(codes, vec!["SKU-1", "SKU-3"]);
    }

    #[test]
    fn linha_sem_item_code_tambem_cai_fora() {
        let known: HashSet<String> = ["SKU-1".to_string()].into();
        let mut orphan = line("SKU-1");
        orphan.item_code = None;
        let filtered = OrderService::filter_lines(vec![orphan], &known);
        assert!(filtered.is_empty());
    }

    #[test]
    fn nenhuma_linha_valida_e_erro() {
        let known: HashSet<String> = HashSet::new();
        let filtered = OrderService::filter_lines(vec![line("SKU-9")], &known);
        assert!(filtered.is_empty());
    }
}
