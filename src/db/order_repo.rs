// src/db/order_repo.rs

use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        catalog::OrderSummaryRow,
        order::{OrderLine, SalesOrder, SalesTeamRow},
    },
};

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<SalesOrder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, SalesOrder>("SELECT * FROM sales_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(order)
    }

    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        order: &SalesOrder,
    ) -> Result<SalesOrder, AppError> {
        let inserted = sqlx::query_as::<_, SalesOrder>(
            r#"
            INSERT INTO sales_orders (
                customer, discount_amount, grand_total, coupon_code, branch_id,
                order_by, address_display, shipping_address, region, payment_options
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&order.customer)
        .bind(order.discount_amount)
        .bind(order.grand_total)
        .bind(&order.coupon_code)
        .bind(&order.branch_id)
        .bind(order.order_by)
        .bind(&order.address_display)
        .bind(&order.shipping_address)
        .bind(&order.region)
        .bind(&order.payment_options)
        .fetch_one(conn)
        .await?;
        Ok(inserted)
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        order: &SalesOrder,
    ) -> Result<SalesOrder, AppError> {
        let updated = sqlx::query_as::<_, SalesOrder>(
            r#"
            UPDATE sales_orders SET
                discount_amount = $2, grand_total = $3, coupon_code = $4,
                branch_id = $5, order_by = $6, address_display = $7,
                shipping_address = $8, region = $9, payment_options = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(order.id)
        .bind(order.discount_amount)
        .bind(order.grand_total)
        .bind(&order.coupon_code)
        .bind(&order.branch_id)
        .bind(order.order_by)
        .bind(&order.address_display)
        .bind(&order.shipping_address)
        .bind(&order.region)
        .bind(&order.payment_options)
        .fetch_one(conn)
        .await?;
        Ok(updated)
    }

    pub async fn replace_lines(
        &self,
        conn: &mut PgConnection,
        order_id: Uuid,
        lines: &[OrderLine],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sales_order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *conn)
            .await?;

        for (idx, line) in lines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO sales_order_items
                    (order_id, item_code, qty, rate, delivery_date, uom, warehouse, idx)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(order_id)
            .bind(&line.item_code)
            .bind(line.qty)
            .bind(line.rate)
            .bind(line.delivery_date)
            .bind(&line.uom)
            .bind(&line.warehouse)
            .bind(idx as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn replace_sales_team(
        &self,
        conn: &mut PgConnection,
        order_id: Uuid,
        team: &[SalesTeamRow],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sales_order_sales_team WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *conn)
            .await?;

        for (idx, member) in team.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO sales_order_sales_team
                    (order_id, sales_person, allocated_percentage, idx)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(order_id)
            .bind(&member.sales_person)
            .bind(member.allocated_percentage)
            .bind(idx as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn lines<'e, E>(&self, executor: E, order_id: Uuid) -> Result<Vec<OrderLine>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let lines = sqlx::query_as::<_, OrderLine>(
            r#"
            SELECT item_code, qty, rate, delivery_date, uom, warehouse
            FROM sales_order_items
            WHERE order_id = $1
            ORDER BY idx ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(executor)
        .await?;
        Ok(lines)
    }

    pub async fn sales_team<'e, E>(
        &self,
        executor: E,
        order_id: Uuid,
    ) -> Result<Vec<SalesTeamRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let team = sqlx::query_as::<_, SalesTeamRow>(
            r#"
            SELECT sales_person, allocated_percentage
            FROM sales_order_sales_team
            WHERE order_id = $1
            ORDER BY idx ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(executor)
        .await?;
        Ok(team)
    }

    /// Resumo dos pedidos de um cliente, mais recente primeiro. A data é a
    /// menor delivery_date entre as linhas do pedido.
    pub async fn list_by_customer(
        &self,
        customer: &str,
    ) -> Result<Vec<OrderSummaryRow>, AppError> {
        let orders = sqlx::query_as::<_, OrderSummaryRow>(
            r#"
            SELECT o.id,
                   MIN(i.delivery_date) AS date,
                   o.grand_total        AS total
            FROM sales_orders o
            LEFT JOIN sales_order_items i ON i.order_id = o.id
            WHERE o.customer = $1
            GROUP BY o.id, o.grand_total, o.created_at
            ORDER BY o.created_at DESC
            "#,
        )
        .bind(customer)
        .fetch_all(&self.pool)
        .await?;
        Ok(orders)
    }
}
