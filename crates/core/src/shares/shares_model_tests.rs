//! Tests for share domain models.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::shares::{NewShare, Share, ShareUpdate};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_share_requires_company() {
        let payload = NewShare {
            symbol: "ACM".to_string(),
            last_sale_price: Some(dec!(12.5)),
            ..Default::default()
        };

        match payload.validate() {
            Err(Error::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, "companyId")
            }
            other => panic!("expected missing companyId, got {:?}", other),
        }
    }

    #[test]
    fn test_new_share_requires_symbol_and_price() {
        assert!(NewShare::new("ACM", 1, dec!(12.5)).validate().is_ok());
        assert!(NewShare::new("", 1, dec!(12.5)).validate().is_err());

        let mut no_price = NewShare::new("ACM", 1, dec!(12.5));
        no_price.last_sale_price = None;
        assert!(no_price.validate().unwrap_err().is_bad_request());
    }

    #[test]
    fn test_into_share_keeps_company() {
        let share = NewShare::new("ACM", 4, dec!(10)).into_share(9);
        assert_eq!(share.id, 9);
        assert_eq!(share.company_id, Some(4));
        assert!(share.user_ids.is_empty());
    }

    #[test]
    fn test_update_replaces_quote_only() {
        let share = Share {
            id: 9,
            symbol: "ACM".to_string(),
            last_sale_price: Some(dec!(10)),
            company_id: Some(4),
            user_ids: [1, 2].into_iter().collect(),
            ..Default::default()
        };
        let now = Utc::now();

        let updated = share.with_update(ShareUpdate {
            symbol: "ACME".to_string(),
            last_sale_price: Some(dec!(11.25)),
            high_price: Some(dec!(12)),
            last_time_updated: Some(now),
            ..Default::default()
        });

        assert_eq!(updated.symbol, "ACME");
        assert_eq!(updated.last_sale_price, Some(dec!(11.25)));
        assert_eq!(updated.high_price, Some(dec!(12)));
        assert_eq!(updated.last_time_updated, Some(now));
        assert_eq!(updated.company_id, Some(4));
        assert!(updated.is_held_by(1) && updated.is_held_by(2));
    }
}
