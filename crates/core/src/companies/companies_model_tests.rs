//! Tests for company domain models.

#[cfg(test)]
mod tests {
    use crate::companies::{Company, CompanyUpdate, NewCompany};
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_company_requires_name() {
        assert!(NewCompany::new("Acme").validate().is_ok());

        let err = NewCompany::new("").validate().unwrap_err();
        assert!(err.is_bad_request());
        assert_eq!(err.to_string(), "Wrong company name");

        assert!(NewCompany::new("   ").validate().is_err());
    }

    #[test]
    fn test_missing_name_deserializes_as_invalid() {
        let payload: NewCompany = serde_json::from_str(r#"{"website":"acme.io"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_update_keeps_identity_and_shares() {
        let company = Company {
            id: 7,
            name: "Acme".to_string(),
            capitalization: Some(dec!(1000000)),
            share_ids: [1, 2].into_iter().collect(),
            ..Default::default()
        };

        let updated = company.with_update(CompanyUpdate {
            name: "Acme Corp".to_string(),
            capitalization: None,
            address: Some("1 Main St".to_string()),
            website: None,
        });

        assert_eq!(updated.id, 7);
        assert_eq!(updated.name, "Acme Corp");
        assert_eq!(updated.capitalization, None);
        assert_eq!(updated.address.as_deref(), Some("1 Main St"));
        assert!(updated.owns_share(1) && updated.owns_share(2));
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let company = NewCompany::new("Acme").into_company(3);
        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Acme");
        assert!(json.get("shareIds").is_some());
    }
}
