use log::debug;

use crate::companies::Company;
use crate::shares::Share;
use crate::users::User;

/// A bidirectional association between an owner and its members.
pub trait Association {
    type Owner;
    type Member;

    /// Links both sides. Linking an already linked pair is a no-op.
    fn attach(owner: &mut Self::Owner, member: &mut Self::Member);

    /// Unlinks both sides. Returns `false` when they were not linked.
    fn detach(owner: &mut Self::Owner, member: &mut Self::Member) -> bool;

    fn is_linked(owner: &Self::Owner, member: &Self::Member) -> bool;
}

/// Company one-to-many Share composition.
///
/// A share must be detached from its previous company before it is attached
/// to another one; use [`reassign_share`] for moves.
pub struct CompanyShares;

impl Association for CompanyShares {
    type Owner = Company;
    type Member = Share;

    fn attach(company: &mut Company, share: &mut Share) {
        debug!("Attaching share {} to company {}", share.id, company.id);
        company.share_ids.insert(share.id);
        share.company_id = Some(company.id);
    }

    fn detach(company: &mut Company, share: &mut Share) -> bool {
        let removed = company.share_ids.remove(&share.id);
        let owned = share.company_id == Some(company.id);
        if owned {
            share.company_id = None;
        }
        if removed || owned {
            debug!("Detached share {} from company {}", share.id, company.id);
        }
        removed || owned
    }

    fn is_linked(company: &Company, share: &Share) -> bool {
        company.share_ids.contains(&share.id) && share.company_id == Some(company.id)
    }
}

/// User many-to-many Share holdings.
pub struct UserHoldings;

impl Association for UserHoldings {
    type Owner = User;
    type Member = Share;

    fn attach(user: &mut User, share: &mut Share) {
        debug!("Attaching share {} to user {}", share.id, user.id);
        user.share_ids.insert(share.id);
        share.user_ids.insert(user.id);
    }

    fn detach(user: &mut User, share: &mut Share) -> bool {
        let from_user = user.share_ids.remove(&share.id);
        let from_share = share.user_ids.remove(&user.id);
        if from_user || from_share {
            debug!("Detached share {} from user {}", share.id, user.id);
        }
        from_user || from_share
    }

    fn is_linked(user: &User, share: &Share) -> bool {
        user.share_ids.contains(&share.id) && share.user_ids.contains(&user.id)
    }
}

/// Moves a share between companies: removal from `from`, then addition to `to`.
pub fn reassign_share(from: &mut Company, to: &mut Company, share: &mut Share) {
    CompanyShares::detach(from, share);
    CompanyShares::attach(to, share);
}
