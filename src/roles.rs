multiversx_sc::imports!();

use crate::errors::{ERR_NOT_ADMIN, ERR_NOT_AUTHORITY};

/// Administrator and authority set. Every privileged endpoint checks the
/// caller against these records.
#[multiversx_sc::module]
pub trait RolesModule: crate::events::EventsModule {
    /// Admin-only. Adding an existing authority is a no-op.
    #[endpoint(addAuthority)]
    fn add_authority(&self, authority: ManagedAddress) {
        self.require_admin();
        self.insert_authority(&authority);
    }

    fn insert_authority(&self, authority: &ManagedAddress) {
        if self.authorities().insert(authority.clone()) {
            self.authority_added_event(authority);
        }
    }

    fn require_admin(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(&caller), ERR_NOT_ADMIN);
        caller
    }

    fn require_authority(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.is_authority(&caller), ERR_NOT_AUTHORITY);
        caller
    }

    /// Size of the electorate for authority and stage-approval majorities.
    fn authority_count(&self) -> u64 {
        self.authorities().len() as u64
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAdmin)]
    fn get_admin(&self) -> ManagedAddress {
        self.admin().get()
    }

    #[view(isAdmin)]
    fn is_admin(&self, address: &ManagedAddress) -> bool {
        !self.admin().is_empty() && self.admin().get() == *address
    }

    #[view(isAuthority)]
    fn is_authority(&self, address: &ManagedAddress) -> bool {
        self.authorities().contains(address)
    }

    #[view(getAuthorities)]
    fn get_authorities(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for authority in self.authorities().iter() {
            result.push(authority);
        }
        result
    }

    #[view(getAuthorityCount)]
    fn get_authority_count(&self) -> u64 {
        self.authority_count()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("authorities")]
    fn authorities(&self) -> UnorderedSetMapper<ManagedAddress>;
}
