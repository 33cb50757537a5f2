// src/services/customer_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CustomerRepository,
    models::{
        catalog::CustomerListRow,
        customer::{Customer, CustomerPayload, CustomerResponse, RegisterCustomerPayload},
    },
};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
}

impl CustomerService {
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }

    /// Upsert pela chave natural (o customer_id devolvido em chamadas
    /// anteriores). Repetir a chamada com a mesma chave atualiza em vez de
    /// duplicar. No primeiro insert também nasce o usuário vinculado.
    pub async fn upsert(
        &self,
        pool: &PgPool,
        payload: CustomerPayload,
    ) -> Result<(&'static str, CustomerResponse), AppError> {
        let mut tx = pool.begin().await?;

        let existing = match payload
            .customer_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
        {
            Some(id) => self.repo.find_by_id(&mut *tx, id).await?,
            None => None,
        };

        // Os detalhes do negócio são regravados a cada chamada.
        let business = self.repo.insert_business(&mut tx, &payload).await?;

        let (message, customer) = match existing {
            Some(mut customer) => {
                payload.apply_to(&mut customer);
                customer.business_details_id = Some(business.id);
                let updated = self.repo.update(&mut tx, &customer).await?;
                ("Customer updated successfully", updated)
            }
            None => {
                // Primeiro contato com essa chave: nasce também o usuário.
                let first_name = payload
                    .first_name
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .or(payload.name.as_deref())
                    .unwrap_or_default();
                let user = self
                    .repo
                    .insert_user(
                        &mut tx,
                        first_name,
                        payload.last_name.as_deref(),
                        payload.email.as_deref().unwrap_or_default(),
                        payload.phone.as_deref(),
                    )
                    .await?;

                let mut customer = Customer::blank();
                payload.apply_to(&mut customer);
                customer.business_details_id = Some(business.id);
                customer.erp_user_id = Some(user.id);
                let inserted = self.repo.insert(&mut tx, &customer).await?;
                ("Customer created successfully", inserted)
            }
        };

        tx.commit().await?;

        Ok((message, CustomerResponse::from_rows(customer, business)))
    }

    /// Variante estrita: colisão de telefone/e-mail/razão social é 409,
    /// nada é persistido e nenhum merge acontece.
    pub async fn register(
        &self,
        pool: &PgPool,
        payload: &RegisterCustomerPayload,
    ) -> Result<Uuid, AppError> {
        let mut tx = pool.begin().await?;

        let phone = payload.phone.as_deref().unwrap_or_default();
        let email = payload.email.as_deref().unwrap_or_default();
        if let Some(conflict) = self
            .repo
            .find_conflict(&mut *tx, phone, email, payload.business_name.as_deref())
            .await?
        {
            return Err(AppError::DuplicateCustomer(conflict));
        }

        let mut customer = Customer::blank();
        customer.customer_name = payload.name.clone().unwrap_or_default();
        customer.mobile_no = payload.phone.clone();
        customer.email_id = payload.email.clone();
        let inserted = self.repo.insert(&mut tx, &customer).await?;

        tx.commit().await?;
        Ok(inserted.id)
    }

    /// Alvos da remoção: o próprio cliente e, quando vinculado, o usuário.
    /// Ausência de vínculo não é erro.
    fn delete_targets(customer: &Customer) -> (Uuid, Option<Uuid>) {
        (customer.id, customer.erp_user_id)
    }

    /// Remoção explícita; o usuário vinculado (quando existe) vai junto.
    pub async fn delete(&self, pool: &PgPool, id: Uuid) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;

        let customer = self
            .repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::CustomerNotFound)?;

        let (customer_id, user_id) = Self::delete_targets(&customer);
        self.repo.delete(&mut tx, customer_id).await?;
        if let Some(user_id) = user_id {
            self.repo.delete_user(&mut tx, user_id).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<CustomerListRow>, AppError> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remocao_leva_o_usuario_vinculado_junto() {
        let mut customer = Customer::blank();
        customer.id = Uuid::new_v4();
        customer.erp_user_id = Some(Uuid::new_v4());

        let (customer_id, user_id) = CustomerService::delete_targets(&customer);
        assert_eq!(customer_id, customer.id);
        assert_eq!(user_id, customer.erp_user_id);
    }

    #[test]
    fn remocao_sem_vinculo_nao_e_erro() {
        let mut customer = Customer::blank();
        customer.id = Uuid::new_v4();

        let (customer_id, user_id) = CustomerService::delete_targets(&customer);
        assert_eq!(customer_id, customer.id);
        assert!(user_id.is_none());
    }
}
