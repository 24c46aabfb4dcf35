#![no_std]

multiversx_sc::imports!();

pub mod authority_voting;
pub mod eligibility;
pub mod errors;
pub mod events;
pub mod proposals;
pub mod public_voting;
pub mod roles;
pub mod stages;
pub mod treasury;
pub mod types;

use proposals::MAX_STAGES;

// ============================================================
// Contract
// ============================================================

/// Public fund governance: authorities pre-approve proposals, credential
/// holders ratify them, and the treasury pays each stage out once its
/// milestone evidence is approved by the authorities.
#[multiversx_sc::contract]
pub trait PublicFund:
    roles::RolesModule
    + treasury::TreasuryModule
    + eligibility::EligibilityModule
    + proposals::ProposalsModule
    + authority_voting::AuthorityVotingModule
    + public_voting::PublicVotingModule
    + stages::StagesModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the admin.
    #[init]
    fn init(
        &self,
        public_voting_period: u64,
        initial_authorities: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_valid_voting_period(public_voting_period);

        let deployer = self.blockchain().get_caller();
        self.admin().set(&deployer);
        self.public_voting_period().set(public_voting_period);
        self.proposal_count().set(0u64);
        self.treasury_balance().set(BigUint::zero());

        for authority in initial_authorities.into_iter() {
            self.insert_authority(&authority);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue2<u64, u32> {
        let period = self.public_voting_period().get();
        (period, MAX_STAGES).into()
    }
}
