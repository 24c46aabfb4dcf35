multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_INVALID_VOTING_PERIOD, ERR_NOT_ELIGIBLE, ERR_VOTING_ENDED,
    ERR_VOTING_STILL_OPEN, ERR_WRONG_STATE,
};
use crate::types::{Proposal, ProposalState, PublicVoteRecord};

/// Longest public voting window the admin can configure (one year).
pub const MAX_PUBLIC_VOTING_PERIOD: u64 = 365 * 24 * 60 * 60;

/// Ratification by credential holders. Open while `now < deadline`;
/// the admin closes it once the deadline has passed.
#[multiversx_sc::module]
pub trait PublicVotingModule:
    crate::roles::RolesModule
    + crate::eligibility::EligibilityModule
    + crate::proposals::ProposalsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: publicVoteOnProposal
    // The comment is kept for audit and does not affect tallies.
    // ========================================================

    #[endpoint(publicVoteOnProposal)]
    fn public_vote_on_proposal(
        &self,
        proposal_id: u64,
        approve: bool,
        comment: ManagedBuffer,
    ) -> Proposal<Self::Api> {
        let mut proposal = self.load_proposal(proposal_id);
        let caller = self.blockchain().get_caller();
        require!(self.is_eligible_voter(&caller), ERR_NOT_ELIGIBLE);
        require!(
            proposal.state == ProposalState::PublicVoting,
            ERR_WRONG_STATE
        );
        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.public_voting_deadline, ERR_VOTING_ENDED);
        require!(
            !self.public_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        if approve {
            proposal.public_yes_votes += 1;
        } else {
            proposal.public_no_votes += 1;
        }
        self.public_voted(proposal_id, &caller).set(true);
        self.public_votes(proposal_id).push(&PublicVoteRecord {
            voter: caller.clone(),
            approve,
            comment: comment.clone(),
            timestamp: now,
        });
        self.proposals(proposal_id).set(&proposal);

        self.public_vote_event(proposal_id, &caller, approve, &comment);
        proposal
    }

    // ========================================================
    // ENDPOINT: closePublicVoting
    // Admin-only, after the deadline. yes > no approves;
    // anything else, ties included, rejects.
    // ========================================================

    #[endpoint(closePublicVoting)]
    fn close_public_voting(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_admin();
        let mut proposal = self.load_proposal(proposal_id);
        require!(
            proposal.state == ProposalState::PublicVoting,
            ERR_WRONG_STATE
        );
        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.public_voting_deadline, ERR_VOTING_STILL_OPEN);

        let outcome = if proposal.public_yes_votes > proposal.public_no_votes {
            ProposalState::Approved
        } else {
            ProposalState::Rejected
        };
        self.transition(&mut proposal, outcome);
        self.proposals(proposal_id).set(&proposal);

        proposal
    }

    /// Affects only proposals whose public voting opens afterwards.
    #[endpoint(setPublicVotingPeriod)]
    fn set_public_voting_period(&self, period: u64) {
        self.require_admin();
        self.require_valid_voting_period(period);
        self.public_voting_period().set(period);
        self.public_voting_period_changed_event(period);
    }

    fn require_valid_voting_period(&self, period: u64) {
        require!(
            period > 0 && period <= MAX_PUBLIC_VOTING_PERIOD,
            ERR_INVALID_VOTING_PERIOD
        );
    }

    fn open_public_voting(&self, proposal: &mut Proposal<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        proposal.public_voting_deadline = now.saturating_add(self.public_voting_period().get());
        self.transition(proposal, ProposalState::PublicVoting);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPublicVotes)]
    fn get_public_votes(
        &self,
        proposal_id: u64,
    ) -> MultiValueEncoded<PublicVoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.public_votes(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    #[view(hasPublicVoted)]
    fn has_public_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.public_voted(proposal_id, voter).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("publicVotingPeriod")]
    fn public_voting_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("publicVoted")]
    fn public_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("publicVotes")]
    fn public_votes(&self, proposal_id: u64) -> VecMapper<PublicVoteRecord<Self::Api>>;
}
