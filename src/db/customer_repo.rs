// src/db/customer_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        catalog::{CustomerDeltaRow, CustomerListRow},
        customer::{BusinessDetails, Customer, CustomerPayload, User},
    },
};

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(customer)
    }

    /// Checagem de colisão da variante estrita: telefone, e-mail ou razão
    /// social já cadastrados derrubam a requisição antes de qualquer insert.
    pub async fn find_conflict<'e, E>(
        &self,
        executor: E,
        phone: &str,
        email: &str,
        business_name: Option<&str>,
    ) -> Result<Option<String>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, (String, Option<String>, Option<String>)>(
            r#"
            SELECT customer_name, mobile_no, email_id
            FROM customers
            WHERE mobile_no = $1
               OR email_id = $2
               OR customer_name = COALESCE($3, '')
            LIMIT 1
            "#,
        )
        .bind(phone)
        .bind(email)
        .bind(business_name)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(|(name, mobile, mail)| {
            if mobile.as_deref() == Some(phone) {
                format!("Customer with phone '{phone}' already exists")
            } else if mail.as_deref() == Some(email) {
                format!("Customer with email '{email}' already exists")
            } else {
                format!("Customer with business name '{name}' already exists")
            }
        }))
    }

    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        customer: &Customer,
    ) -> Result<Customer, AppError> {
        let inserted = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (
                customer_name, mobile_no, email_id, country_code, added_type,
                channel_user_id, channel_id, classification, profile_image,
                first_name, last_name, address, business_details_id, erp_user_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(&customer.customer_name)
        .bind(&customer.mobile_no)
        .bind(&customer.email_id)
        .bind(&customer.country_code)
        .bind(&customer.added_type)
        .bind(&customer.channel_user_id)
        .bind(&customer.channel_id)
        .bind(&customer.classification)
        .bind(&customer.profile_image)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.address)
        .bind(customer.business_details_id)
        .bind(customer.erp_user_id)
        .fetch_one(conn)
        .await?;
        Ok(inserted)
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        customer: &Customer,
    ) -> Result<Customer, AppError> {
        let updated = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers SET
                customer_name = $2, mobile_no = $3, email_id = $4,
                country_code = $5, added_type = $6, channel_user_id = $7,
                channel_id = $8, classification = $9, profile_image = $10,
                first_name = $11, last_name = $12, address = $13,
                business_details_id = $14, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(customer.id)
        .bind(&customer.customer_name)
        .bind(&customer.mobile_no)
        .bind(&customer.email_id)
        .bind(&customer.country_code)
        .bind(&customer.added_type)
        .bind(&customer.channel_user_id)
        .bind(&customer.channel_id)
        .bind(&customer.classification)
        .bind(&customer.profile_image)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.address)
        .bind(customer.business_details_id)
        .fetch_one(conn)
        .await?;
        Ok(updated)
    }

    /// Os detalhes do negócio são sempre gravados como um registro novo,
    /// montado a partir do payload da vez.
    pub async fn insert_business(
        &self,
        conn: &mut PgConnection,
        payload: &CustomerPayload,
    ) -> Result<BusinessDetails, AppError> {
        let business = sqlx::query_as::<_, BusinessDetails>(
            r#"
            INSERT INTO business_details (
                title, vat_number, cr_number,
                address_proof_front, address_proof_back,
                cr_document_front, cr_document_back,
                vat_doc_front, vat_doc_back,
                id_proof_front, id_proof_back,
                shop_image_front, shop_image_back
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, title, vat_number, cr_number,
                      address_proof_front, address_proof_back,
                      cr_document_front, cr_document_back,
                      vat_doc_front, vat_doc_back,
                      id_proof_front, id_proof_back,
                      shop_image_front, shop_image_back
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.vat_number)
        .bind(&payload.cr_number)
        .bind(&payload.address_proof_front)
        .bind(&payload.address_proof_back)
        .bind(&payload.cr_document_front)
        .bind(&payload.cr_document_back)
        .bind(&payload.vat_doc_front)
        .bind(&payload.vat_doc_back)
        .bind(&payload.id_proof_front)
        .bind(&payload.id_proof_back)
        .bind(&payload.shop_image_front)
        .bind(&payload.shop_image_back)
        .fetch_one(conn)
        .await?;
        Ok(business)
    }

    pub async fn insert_user(
        &self,
        conn: &mut PgConnection,
        first_name: &str,
        last_name: Option<&str>,
        email: &str,
        mobile_no: Option<&str>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, mobile_no)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, mobile_no
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(mobile_no)
        .fetch_one(conn)
        .await?;
        Ok(user)
    }

    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_user(&self, conn: &mut PgConnection, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list(&self) -> Result<Vec<CustomerListRow>, AppError> {
        let customers = sqlx::query_as::<_, CustomerListRow>(
            r#"
            SELECT id, customer_name AS name, mobile_no AS phone, email_id AS email
            FROM customers
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    /// Clientes alterados desde o timestamp (inclusive).
    pub async fn changed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<CustomerDeltaRow>, AppError> {
        let customers = sqlx::query_as::<_, CustomerDeltaRow>(
            r#"
            SELECT id, customer_name AS name, updated_at
            FROM customers
            WHERE updated_at >= $1
            ORDER BY updated_at ASC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }
}
