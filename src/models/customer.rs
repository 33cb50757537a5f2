// src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- LINHAS DO BANCO ---

#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub customer_name: String,
    pub mobile_no: Option<String>,
    pub email_id: Option<String>,
    pub country_code: Option<String>,
    pub added_type: Option<String>,
    // Id do usuário do lado do canal, copiado como veio.
    pub channel_user_id: Option<String>,
    pub channel_id: Option<String>,
    pub classification: Option<String>,
    pub profile_image: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub business_details_id: Option<Uuid>,
    // Usuário criado junto com o cliente no primeiro insert.
    pub erp_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct BusinessDetails {
    pub id: Uuid,
    pub title: Option<String>,
    pub vat_number: Option<String>,
    pub cr_number: Option<String>,
    pub address_proof_front: Option<String>,
    pub address_proof_back: Option<String>,
    pub cr_document_front: Option<String>,
    pub cr_document_back: Option<String>,
    pub vat_doc_front: Option<String>,
    pub vat_doc_back: Option<String>,
    pub id_proof_front: Option<String>,
    pub id_proof_back: Option<String>,
    pub shop_image_front: Option<String>,
    pub shop_image_back: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub mobile_no: Option<String>,
}

impl Customer {
    /// Linha em branco para o caminho de insert; id e timestamps são
    /// decididos pelo banco.
    pub fn blank() -> Self {
        Self {
            id: Uuid::nil(),
            customer_name: String::new(),
            mobile_no: None,
            email_id: None,
            country_code: None,
            added_type: None,
            channel_user_id: None,
            channel_id: None,
            classification: None,
            profile_image: None,
            first_name: None,
            last_name: None,
            address: None,
            business_details_id: None,
            erp_user_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

// --- PAYLOADS (contrato de entrada do canal) ---

// Upsert: campos ausentes não tocam o registro existente.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerPayload {
    // Chave natural: o id devolvido em chamadas anteriores.
    pub customer_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub added_type: Option<String>,
    pub user_id: Option<String>,
    pub channel_id: Option<String>,
    pub classification: Option<String>,
    pub profile_image: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,

    // Detalhes do negócio — sempre regravados como um registro novo.
    pub vat_number: Option<String>,
    pub cr_number: Option<String>,
    pub address_proof_front: Option<String>,
    pub address_proof_back: Option<String>,
    pub cr_document_front: Option<String>,
    pub cr_document_back: Option<String>,
    pub vat_doc_front: Option<String>,
    pub vat_doc_back: Option<String>,
    pub id_proof_front: Option<String>,
    pub id_proof_back: Option<String>,
    pub shop_image_front: Option<String>,
    pub shop_image_back: Option<String>,
}

impl CustomerPayload {
    /// Aplica somente os campos presentes (update parcial).
    /// Chamar duas vezes com o mesmo payload deixa o registro no mesmo estado.
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(v) = &self.name {
            customer.customer_name = v.clone();
        }
        if let Some(v) = &self.phone {
            customer.mobile_no = Some(v.clone());
        }
        if let Some(v) = &self.email {
            customer.email_id = Some(v.clone());
        }
        if let Some(v) = &self.country_code {
            customer.country_code = Some(v.clone());
        }
        if let Some(v) = &self.added_type {
            customer.added_type = Some(v.clone());
        }
        if let Some(v) = &self.user_id {
            customer.channel_user_id = Some(v.clone());
        }
        if let Some(v) = &self.channel_id {
            customer.channel_id = Some(v.clone());
        }
        if let Some(v) = &self.classification {
            customer.classification = Some(v.clone());
        }
        if let Some(v) = &self.profile_image {
            customer.profile_image = Some(v.clone());
        }
        if let Some(v) = &self.first_name {
            customer.first_name = Some(v.clone());
        }
        if let Some(v) = &self.last_name {
            customer.last_name = Some(v.clone());
        }
        if let Some(v) = &self.address {
            customer.address = Some(v.clone());
        }
    }
}

// Variante estrita: colisão de telefone/e-mail/razão social é conflito duro.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterCustomerPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub business_name: Option<String>,
}

// --- PROJEÇÕES DE RESPOSTA (nomes de campo são contrato, bit a bit) ---

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub customer_name: String,
    pub customer_id: Uuid,
    pub mobile_no: Option<String>,
    pub email_id: Option<String>,
    pub country_code: Option<String>,
    pub profile_image: Option<String>,
    pub classification: Option<String>,
    pub added_type: Option<String>,
    pub user_id: Option<String>,
    pub channel_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub business_details: BusinessDetailsResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessDetailsResponse {
    pub business_id: Uuid,
    pub title: Option<String>,
    pub vat_number: Option<String>,
    pub cr_number: Option<String>,
    pub documents: BusinessDocuments,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessDocuments {
    pub address_proof_front: Option<String>,
    pub address_proof_back: Option<String>,
    pub cr_document_front: Option<String>,
    pub cr_document_back: Option<String>,
    pub vat_doc_front: Option<String>,
    pub vat_doc_back: Option<String>,
    pub id_proof_front: Option<String>,
    pub id_proof_back: Option<String>,
    pub shop_image_front: Option<String>,
    pub shop_image_back: Option<String>,
}

impl CustomerResponse {
    pub fn from_rows(customer: Customer, business: BusinessDetails) -> Self {
        Self {
            customer_name: customer.customer_name,
            customer_id: customer.id,
            mobile_no: customer.mobile_no,
            email_id: customer.email_id,
            country_code: customer.country_code,
            profile_image: customer.profile_image,
            classification: customer.classification,
            added_type: customer.added_type,
            user_id: customer.channel_user_id,
            channel_id: customer.channel_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            address: customer.address,
            business_details: BusinessDetailsResponse {
                business_id: business.id,
                title: business.title,
                vat_number: business.vat_number,
                cr_number: business.cr_number,
                documents: BusinessDocuments {
                    address_proof_front: business.address_proof_front,
                    address_proof_back: business.address_proof_back,
                    cr_document_front: business.cr_document_front,
                    cr_document_back: business.cr_document_back,
                    vat_doc_front: business.vat_doc_front,
                    vat_doc_back: business.vat_doc_back,
                    id_proof_front: business.id_proof_front,
                    id_proof_back: business.id_proof_back,
                    shop_image_front: business.shop_image_front,
                    shop_image_back: business.shop_image_back,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_customer() -> Customer {
        Customer {
            id: Uuid::new_v4(),
            customer_name: "Loja da Esquina".into(),
            mobile_no: Some("+966500000001".into()),
            email_id: Some("loja@exemplo.com".into()),
            country_code: Some("+966".into()),
            added_type: Some("self".into()),
            channel_user_id: Some("u-9".into()),
            channel_id: Some("ch-1".into()),
            classification: None,
            profile_image: None,
            first_name: Some("Ana".into()),
            last_name: Some("Souza".into()),
            address: Some("Rua 1".into()),
            business_details_id: None,
            erp_user_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn apply_to_nao_toca_campos_ausentes() {
        let mut customer = existing_customer();
        let payload = CustomerPayload {
            customer_id: None,
            name: None,
            phone: Some("+966500000002".into()),
            email: None,
            country_code: None,
            added_type: None,
            user_id: None,
            channel_id: None,
            classification: None,
            profile_image: None,
            first_name: None,
            last_name: None,
            address: None,
            vat_number: None,
            cr_number: None,
            address_proof_front: None,
            address_proof_back: None,
            cr_document_front: None,
            cr_document_back: None,
            vat_doc_front: None,
            vat_doc_back: None,
            id_proof_front: None,
            id_proof_back: None,
            shop_image_front: None,
            shop_image_back: None,
        };

        payload.apply_to(&mut customer);

        assert_eq!(customer.mobile_no.as_deref(), Some("+966500000002"));
        // O restante permanece como estava.
        assert_eq!(customer.customer_name, "Loja da Esquina");
        assert_eq!(customer.email_id.as_deref(), Some("loja@exemplo.com"));
        assert_eq!(customer.first_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn apply_to_e_idempotente() {
        let mut once = existing_customer();
        let mut twice = existing_customer();
        let payload = CustomerPayload {
            customer_id: None,
            name: Some("Loja Nova".into()),
            phone: Some("+966500000009".into()),
            email: Some("nova@exemplo.com".into()),
            country_code: None,
            added_type: None,
            user_id: None,
            channel_id: None,
            classification: Some("gold".into()),
            profile_image: None,
            first_name: None,
            last_name: None,
            address: None,
            vat_number: None,
            cr_number: None,
            address_proof_front: None,
            address_proof_back: None,
            cr_document_front: None,
            cr_document_back: None,
            vat_doc_front: None,
            vat_doc_back: None,
            id_proof_front: None,
            id_proof_back: None,
            shop_image_front: None,
            shop_image_back: None,
        };

        payload.apply_to(&mut once);
        payload.apply_to(&mut twice);
        payload.apply_to(&mut twice);

        assert_eq!(once.customer_name, twice.customer_name);
        assert_eq!(once.mobile_no, twice.mobile_no);
        assert_eq!(once.email_id, twice.email_id);
        assert_eq!(once.classification, twice.classification);
    }
}
