use serde_json::Value;

use crate::common::error::AppError;

// ---
// Utilitários do contrato de upsert: checagem enumerada de campos
// obrigatórios e a coerção de ids "numéricos" usada nas listagens.
// ---

/// Valida a presença dos campos obrigatórios de uma operação.
///
/// Um campo ausente OU vazio conta como faltando, e todos os faltantes
/// entram juntos na mensagem de erro ("Missing required fields: a, b").
/// Nada é persistido antes dessa checagem passar.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing.join(", ")))
    }
}

/// Coerção condicional: vira número apenas quando o id é todo dígitos.
/// Ids alfanuméricos (ex.: "CUST-001") permanecem strings.
pub fn digits_to_value(id: &str) -> Value {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = id.parse::<i64>() {
            return Value::from(n);
        }
    }
    Value::from(id)
}

/// Coerção forçada: algumas listagens assumem ids numéricos e quebram
/// quando não são. Comportamento herdado do contrato, mantido como está.
pub fn force_int(id: &str) -> Result<i64, AppError> {
    id.parse::<i64>()
        .map_err(|e| anyhow::anyhow!("id não numérico '{}': {}", id, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_fields_aceita_quando_todos_presentes() {
        let result = require_fields(&[("name", Some("Maria")), ("phone", Some("5551"))]);
        assert!(result.is_ok());
    }

    #[test]
    fn require_fields_enumera_todos_os_faltantes() {
        let result = require_fields(&[
            ("name", Some("Maria")),
            ("phone", None),
            ("email", Some("")),
            ("country_code", Some("   ")),
        ]);
        match result {
            Err(AppError::MissingFields(msg)) => {
                assert_eq!(msg, "phone, email, country_code");
            }
            other => panic!("esperava MissingFields, veio {other:?}"),
        }
    }

    #[test]
    fn digits_to_value_coage_somente_numericos() {
        assert_eq!(digits_to_value("123"), Value::from(123));
        assert_eq!(digits_to_value("CUST-1"), Value::from("CUST-1"));
        assert_eq!(digits_to_value(""), Value::from(""));
    }

    #[test]
    fn force_int_falha_para_nao_numerico() {
        assert_eq!(force_int("42").unwrap(), 42);
        assert!(force_int("SKU-42").is_err());
    }
}
