#[cfg(test)]
mod tests {
    use crate::companies::Company;
    use crate::relations::{reassign_share, Association, CompanyShares, UserHoldings};
    use crate::shares::Share;
    use crate::users::User;

    fn company(id: i64) -> Company {
        Company {
            id,
            name: format!("Company {}", id),
            ..Default::default()
        }
    }

    fn share(id: i64) -> Share {
        Share {
            id,
            symbol: format!("S{}", id),
            ..Default::default()
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_company_attach_updates_both_sides() {
        let mut acme = company(1);
        let mut acm = share(10);

        CompanyShares::attach(&mut acme, &mut acm);

        assert_eq!(acm.company_id, Some(1));
        assert!(acme.share_ids.contains(&10));
        assert!(CompanyShares::is_linked(&acme, &acm));
    }

    #[test]
    fn test_company_detach_clears_both_sides() {
        let mut acme = company(1);
        let mut acm = share(10);
        CompanyShares::attach(&mut acme, &mut acm);

        assert!(CompanyShares::detach(&mut acme, &mut acm));

        assert_eq!(acm.company_id, None);
        assert!(!acme.share_ids.contains(&10));
        assert!(!CompanyShares::is_linked(&acme, &acm));

        // Second detach has nothing to do
        assert!(!CompanyShares::detach(&mut acme, &mut acm));
    }

    #[test]
    fn test_company_detach_leaves_foreign_owner_alone() {
        let mut acme = company(1);
        let mut globex = company(2);
        let mut gbx = share(20);
        CompanyShares::attach(&mut globex, &mut gbx);

        assert!(!CompanyShares::detach(&mut acme, &mut gbx));
        assert_eq!(gbx.company_id, Some(2));
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut acme = company(1);
        let mut acm = share(10);
        CompanyShares::attach(&mut acme, &mut acm);
        CompanyShares::attach(&mut acme, &mut acm);
        assert_eq!(acme.share_ids.len(), 1);

        let mut ada = user(5);
        UserHoldings::attach(&mut ada, &mut acm);
        UserHoldings::attach(&mut ada, &mut acm);
        assert_eq!(ada.share_ids.len(), 1);
        assert_eq!(acm.user_ids.len(), 1);
    }

    #[test]
    fn test_reassign_moves_share_between_companies() {
        let mut acme = company(1);
        let mut globex = company(2);
        let mut acm = share(10);
        CompanyShares::attach(&mut acme, &mut acm);

        reassign_share(&mut acme, &mut globex, &mut acm);

        assert!(acme.share_ids.is_empty());
        assert!(globex.share_ids.contains(&10));
        assert_eq!(acm.company_id, Some(2));
    }

    #[test]
    fn test_user_holdings_attach_and_detach() {
        let mut ada = user(5);
        let mut acm = share(10);

        UserHoldings::attach(&mut ada, &mut acm);
        assert!(ada.share_ids.contains(&10));
        assert!(acm.user_ids.contains(&5));
        assert!(UserHoldings::is_linked(&ada, &acm));

        assert!(UserHoldings::detach(&mut ada, &mut acm));
        assert!(!ada.share_ids.contains(&10));
        assert!(!acm.user_ids.contains(&5));
        assert!(!UserHoldings::detach(&mut ada, &mut acm));
    }

    #[test]
    fn test_user_detach_repairs_one_sided_link() {
        let mut ada = user(5);
        let mut acm = share(10);
        acm.user_ids.insert(5);

        assert!(!UserHoldings::is_linked(&ada, &acm));
        assert!(UserHoldings::detach(&mut ada, &mut acm));
        assert!(acm.user_ids.is_empty());
    }
}
