multiversx_sc::imports!();

use crate::errors::{
    ERR_EMPTY_DESCRIPTION, ERR_INVALID_RECIPIENT, ERR_NO_STAGES, ERR_PROPOSAL_NOT_FOUND,
    ERR_STAGE_AMOUNT_MISMATCH, ERR_STAGE_NOT_FOUND, ERR_TOO_MANY_STAGES, ERR_WRONG_STATE,
    ERR_ZERO_AMOUNT,
};
use crate::types::{page_window, Proposal, ProposalState, Stage, StageState};

/// Upper bound on stages per proposal
pub const MAX_STAGES: u32 = 20;

/// Canonical proposal set. Proposals and their stages are only written
/// through this module's helpers, which the voting modules and the
/// stage engine call.
#[multiversx_sc::module]
pub trait ProposalsModule: crate::roles::RolesModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: createProposal
    // Authority-only. Stage amounts must add up to the total;
    // nothing is stored unless every check passes.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        recipient: ManagedAddress,
        total_amount: BigUint,
        stage_amounts: MultiValueEncoded<BigUint>,
    ) -> Proposal<Self::Api> {
        let caller = self.require_authority();

        require!(!description.is_empty(), ERR_EMPTY_DESCRIPTION);
        require!(!recipient.is_zero(), ERR_INVALID_RECIPIENT);
        require!(total_amount > 0u64, ERR_ZERO_AMOUNT);

        let mut stage_count = 0u32;
        let mut sum = BigUint::zero();
        for amount in stage_amounts.clone().into_iter() {
            require!(amount > 0u64, ERR_ZERO_AMOUNT);
            stage_count += 1;
            require!(stage_count <= MAX_STAGES, ERR_TOO_MANY_STAGES);
            sum += &amount;
        }
        require!(stage_count > 0, ERR_NO_STAGES);
        require!(sum == total_amount, ERR_STAGE_AMOUNT_MISMATCH);

        let proposal_id = self.proposal_count().get() + 1u64;
        for amount in stage_amounts.into_iter() {
            self.stages(proposal_id).push(&Stage {
                amount,
                report: ManagedBuffer::new(),
                approval_votes: 0,
                rejection_votes: 0,
                round: 0,
                state: StageState::NotStarted,
            });
        }

        let mut proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            recipient,
            total_amount,
            state: ProposalState::Created,
            authority_yes_votes: 0,
            authority_no_votes: 0,
            public_yes_votes: 0,
            public_no_votes: 0,
            public_voting_deadline: 0,
            current_stage: 0,
            total_stages: stage_count,
            released_amount: BigUint::zero(),
            created_at: self.blockchain().get_block_timestamp(),
        };
        self.proposal_count().set(proposal_id);
        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.recipient,
            &proposal.total_amount,
        );

        // Authority voting opens immediately.
        self.transition(&mut proposal, ProposalState::UnderAuthorityVoting);
        self.proposals(proposal_id).set(&proposal);

        proposal
    }

    // ========================================================
    // INTERNAL: shared by the voting modules and the stage engine
    // ========================================================

    fn load_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    fn load_stage(&self, proposal: &Proposal<Self::Api>, stage_index: u32) -> Stage<Self::Api> {
        require!(stage_index < proposal.total_stages, ERR_STAGE_NOT_FOUND);
        self.stages(proposal.id).get(stage_index as usize + 1)
    }

    fn save_stage(&self, proposal_id: u64, stage_index: u32, stage: &Stage<Self::Api>) {
        self.stages(proposal_id).set(stage_index as usize + 1, stage);
    }

    /// The only place a proposal's state is changed. Rejects edges that
    /// are not part of the lifecycle.
    fn transition(&self, proposal: &mut Proposal<Self::Api>, next: ProposalState) {
        require!(proposal.state.can_transition_to(&next), ERR_WRONG_STATE);
        self.proposal_state_changed_event(proposal.id, &proposal.state, &next);
        proposal.state = next;
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalInfo)]
    fn get_proposal_info(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.load_proposal(proposal_id)
    }

    #[view(getStageInfo)]
    fn get_stage_info(&self, proposal_id: u64, stage_index: u32) -> Stage<Self::Api> {
        let proposal = self.load_proposal(proposal_id);
        self.load_stage(&proposal, stage_index)
    }

    #[view(getStages)]
    fn get_stages(&self, proposal_id: u64) -> MultiValueEncoded<Stage<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for stage in self.stages(proposal_id).iter() {
            result.push(stage);
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    /// Ids start at 1; `from == 0` is read as 1.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let start = core::cmp::max(from, 1);
        if let Some((first, last)) = page_window(start, count, self.proposal_count().get()) {
            for id in first..=last {
                result.push(self.proposals(id).get());
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("stages")]
    fn stages(&self, proposal_id: u64) -> VecMapper<Stage<Self::Api>>;
}
