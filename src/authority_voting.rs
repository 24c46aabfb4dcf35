multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_VOTED, ERR_WRONG_STATE};
use crate::types::{is_strict_majority, Proposal, ProposalState};

#[multiversx_sc::module]
pub trait AuthorityVotingModule:
    crate::roles::RolesModule
    + crate::eligibility::EligibilityModule
    + crate::proposals::ProposalsModule
    + crate::public_voting::PublicVotingModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: authorityVoteOnProposal
    // One vote per authority. A strict majority of the current
    // authority set either opens public voting or rejects.
    // ========================================================

    #[endpoint(authorityVoteOnProposal)]
    fn authority_vote_on_proposal(
        &self,
        proposal_id: u64,
        approve: bool,
    ) -> Proposal<Self::Api> {
        let mut proposal = self.load_proposal(proposal_id);
        let caller = self.require_authority();
        require!(
            proposal.state == ProposalState::UnderAuthorityVoting,
            ERR_WRONG_STATE
        );
        require!(
            !self.authority_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        if approve {
            proposal.authority_yes_votes += 1;
        } else {
            proposal.authority_no_votes += 1;
        }
        self.authority_voted(proposal_id, &caller).set(true);
        self.authority_vote_event(proposal_id, &caller, approve);

        let electorate = self.authority_count();
        if is_strict_majority(proposal.authority_yes_votes, electorate) {
            self.open_public_voting(&mut proposal);
        } else if is_strict_majority(proposal.authority_no_votes, electorate) {
            self.transition(&mut proposal, ProposalState::Rejected);
        }

        self.proposals(proposal_id).set(&proposal);
        proposal
    }

    #[view(hasAuthorityVoted)]
    fn has_authority_voted(&self, proposal_id: u64, authority: &ManagedAddress) -> bool {
        self.authority_voted(proposal_id, authority).get()
    }

    #[storage_mapper("authorityVoted")]
    fn authority_voted(
        &self,
        proposal_id: u64,
        authority: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
