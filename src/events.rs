multiversx_sc::imports!();

use crate::types::ProposalState;

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Treasury ──

    #[event("fundsDeposited")]
    fn funds_deposited_event(&self, #[indexed] admin: &ManagedAddress, amount: &BigUint);

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(&self, #[indexed] admin: &ManagedAddress, amount: &BigUint);

    #[event("stageFundsReleased")]
    fn stage_funds_released_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    // ── Roles & eligibility ──

    #[event("authorityAdded")]
    fn authority_added_event(&self, #[indexed] authority: &ManagedAddress);

    #[event("credentialApplied")]
    fn credential_applied_event(
        &self,
        #[indexed] applicant: &ManagedAddress,
        application_reference: &ManagedBuffer,
    );

    #[event("credentialIssued")]
    fn credential_issued_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] nullifier: u64,
    );

    // ── Proposals ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        total_amount: &BigUint,
    );

    #[event("proposalStateChanged")]
    fn proposal_state_changed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] from: &ProposalState,
        #[indexed] to: &ProposalState,
    );

    #[event("authorityVote")]
    fn authority_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] authority: &ManagedAddress,
        #[indexed] approve: bool,
    );

    #[event("publicVote")]
    fn public_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] approve: bool,
        comment: &ManagedBuffer,
    );

    #[event("publicVotingPeriodChanged")]
    fn public_voting_period_changed_event(&self, #[indexed] period: u64);

    // ── Stages ──

    #[event("stageReportSubmitted")]
    fn stage_report_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        report: &ManagedBuffer,
    );

    #[event("stageVote")]
    fn stage_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        #[indexed] authority: &ManagedAddress,
        #[indexed] approve: bool,
    );

    #[event("stageRejected")]
    fn stage_rejected_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] stage_index: u32,
        #[indexed] round: u32,
        report: &ManagedBuffer,
    );

    #[event("stageCompleted")]
    fn stage_completed_event(&self, #[indexed] proposal_id: u64, #[indexed] stage_index: u32);
}
