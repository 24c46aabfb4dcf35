multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_APPLIED, ERR_EMPTY_APPLICATION, ERR_NO_SUCH_APPLICATION, ERR_NULLIFIER_USED,
};
use crate::types::{page_window, Credential};

/// Voting credentials and the application queue that feeds them.
/// A credential is a storage record keyed by holder, so it cannot be
/// transferred.
#[multiversx_sc::module]
pub trait EligibilityModule: crate::roles::RolesModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: applyForCredential
    // Any identity, at most one pending application, never twice.
    // ========================================================

    #[endpoint(applyForCredential)]
    fn apply_for_credential(&self, application_reference: ManagedBuffer) {
        require!(!application_reference.is_empty(), ERR_EMPTY_APPLICATION);

        let caller = self.blockchain().get_caller();
        require!(
            !self.pending_applicants().contains(&caller) && !self.is_eligible_voter(&caller),
            ERR_ALREADY_APPLIED
        );

        self.applications(&caller).set(&application_reference);
        self.pending_applicants().insert(caller.clone());

        self.credential_applied_event(&caller, &application_reference);
    }

    // ========================================================
    // ENDPOINT: approveApplication
    // Mints one credential and clears the pending application.
    // ========================================================

    #[endpoint(approveApplication)]
    fn approve_application(&self, applicant: ManagedAddress, nullifier: u64) {
        self.require_admin();
        require!(
            self.pending_applicants().contains(&applicant),
            ERR_NO_SUCH_APPLICATION
        );
        require!(
            !self.used_nullifiers().contains(&nullifier),
            ERR_NULLIFIER_USED
        );

        let credential = Credential {
            nullifier,
            issued_at: self.blockchain().get_block_timestamp(),
        };
        self.credentials(&applicant).set(&credential);
        self.used_nullifiers().insert(nullifier);
        self.credential_count().update(|count| *count += 1);

        self.pending_applicants().swap_remove(&applicant);
        self.applications(&applicant).clear();

        self.credential_issued_event(&applicant, nullifier);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isEligibleVoter)]
    fn is_eligible_voter(&self, address: &ManagedAddress) -> bool {
        !self.credentials(address).is_empty()
    }

    #[view(getApplication)]
    fn get_application(&self, applicant: &ManagedAddress) -> ManagedBuffer {
        self.applications(applicant).get()
    }

    #[view(getApplicantCount)]
    fn get_applicant_count(&self) -> u64 {
        self.pending_applicants().len() as u64
    }

    #[view(getPendingApplicants)]
    fn get_pending_applicants(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<MultiValue2<ManagedAddress, ManagedBuffer>> {
        let mut result = MultiValueEncoded::new();
        let applicants = self.pending_applicants();
        // `from` is a zero-based offset; the set mapper is indexed from 1.
        let window = page_window(from.saturating_add(1), count, applicants.len() as u64);
        if let Some((first, last)) = window {
            for idx in first..=last {
                let applicant = applicants.get_by_index(idx as usize);
                let reference = self.applications(&applicant).get();
                result.push((applicant, reference).into());
            }
        }
        result
    }

    #[view(getCredential)]
    fn get_credential(&self, holder: &ManagedAddress) -> OptionalValue<Credential> {
        if self.credentials(holder).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.credentials(holder).get())
        }
    }

    #[view(getCredentialCount)]
    fn get_credential_count(&self) -> u64 {
        self.credential_count().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("applications")]
    fn applications(&self, applicant: &ManagedAddress) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("pendingApplicants")]
    fn pending_applicants(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("credentials")]
    fn credentials(&self, holder: &ManagedAddress) -> SingleValueMapper<Credential>;

    #[storage_mapper("usedNullifiers")]
    fn used_nullifiers(&self) -> UnorderedSetMapper<u64>;

    #[storage_mapper("credentialCount")]
    fn credential_count(&self) -> SingleValueMapper<u64>;
}
