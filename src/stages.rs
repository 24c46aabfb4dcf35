multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_EMPTY_REPORT, ERR_NOT_RECIPIENT, ERR_STAGE_NOT_READY,
    ERR_WRONG_STAGE_STATE, ERR_WRONG_STATE,
};
use crate::types::{is_strict_majority, Proposal, ProposalState, Stage, StageState};

/// Milestone disbursement. Releasing funds, submitting evidence and
/// approving it are three separate calls; a stage only completes on an
/// authority majority, and the next stage is only funded by another
/// explicit release.
#[multiversx_sc::module]
pub trait StagesModule:
    crate::roles::RolesModule
    + crate::treasury::TreasuryModule
    + crate::proposals::ProposalsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: releaseStageAmount
    // Admin-only. Funds the current stage. The first release also
    // moves an Approved proposal to InProgress.
    // ========================================================

    #[endpoint(releaseStageAmount)]
    fn release_stage_amount(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_admin();
        let mut proposal = self.load_proposal(proposal_id);
        match proposal.state {
            ProposalState::Approved => self.transition(&mut proposal, ProposalState::InProgress),
            ProposalState::InProgress => {}
            _ => sc_panic!(ERR_WRONG_STATE),
        }

        let stage_index = proposal.current_stage;
        require!(stage_index < proposal.total_stages, ERR_STAGE_NOT_READY);
        if stage_index > 0 {
            let previous = self.load_stage(&proposal, stage_index - 1);
            require!(previous.state == StageState::Completed, ERR_STAGE_NOT_READY);
        }
        let mut stage = self.load_stage(&proposal, stage_index);
        require!(
            stage.state.can_transition_to(&StageState::InProgress),
            ERR_STAGE_NOT_READY
        );

        self.release_funds(&proposal.recipient, &stage.amount);
        stage.state = StageState::InProgress;
        proposal.released_amount += &stage.amount;

        self.save_stage(proposal_id, stage_index, &stage);
        self.proposals(proposal_id).set(&proposal);

        self.stage_funds_released_event(
            proposal_id,
            stage_index,
            &proposal.recipient,
            &stage.amount,
        );
        proposal
    }

    // ========================================================
    // ENDPOINT: submitStageReport
    // Recipient-only. One evidence reference per review round; a
    // rejected reference is cleared and can be replaced.
    // ========================================================

    #[endpoint(submitStageReport)]
    fn submit_stage_report(
        &self,
        proposal_id: u64,
        stage_index: u32,
        report: ManagedBuffer,
    ) -> Stage<Self::Api> {
        require!(!report.is_empty(), ERR_EMPTY_REPORT);
        let proposal = self.load_proposal(proposal_id);
        let caller = self.blockchain().get_caller();
        require!(caller == proposal.recipient, ERR_NOT_RECIPIENT);

        let mut stage = self.load_stage(&proposal, stage_index);
        require!(
            stage.state == StageState::InProgress && stage.report.is_empty(),
            ERR_WRONG_STAGE_STATE
        );

        stage.report = report;
        self.save_stage(proposal_id, stage_index, &stage);

        self.stage_report_submitted_event(proposal_id, stage_index, &stage.report);
        stage
    }

    // ========================================================
    // ENDPOINT: voteOnStage
    // Authority-only, once per review round. A strict majority of
    // approvals completes the stage; a strict majority of rejections
    // clears the evidence and opens a new round.
    // ========================================================

    #[endpoint(voteOnStage)]
    fn vote_on_stage(
        &self,
        proposal_id: u64,
        stage_index: u32,
        approve: bool,
    ) -> Stage<Self::Api> {
        let mut proposal = self.load_proposal(proposal_id);
        let caller = self.require_authority();
        let mut stage = self.load_stage(&proposal, stage_index);
        require!(
            proposal.state == ProposalState::InProgress
                && stage.state == StageState::InProgress
                && !stage.report.is_empty(),
            ERR_WRONG_STAGE_STATE
        );
        let voted = self.stage_voted(proposal_id, stage_index, stage.round, &caller);
        require!(!voted.get(), ERR_ALREADY_VOTED);

        if approve {
            stage.approval_votes += 1;
        } else {
            stage.rejection_votes += 1;
        }
        voted.set(true);
        self.stage_vote_event(proposal_id, stage_index, &caller, approve);

        let electorate = self.authority_count();
        if is_strict_majority(stage.approval_votes, electorate) {
            stage.state = StageState::Completed;
            proposal.current_stage += 1;
            self.stage_completed_event(proposal_id, stage_index);

            if proposal.current_stage == proposal.total_stages {
                self.transition(&mut proposal, ProposalState::Completed);
            }
            self.proposals(proposal_id).set(&proposal);
        } else if is_strict_majority(stage.rejection_votes, electorate) {
            self.stage_rejected_event(proposal_id, stage_index, stage.round, &stage.report);
            stage.report = ManagedBuffer::new();
            stage.approval_votes = 0;
            stage.rejection_votes = 0;
            stage.round += 1;
        }

        self.save_stage(proposal_id, stage_index, &stage);
        stage
    }

    /// Answers for the stage's current review round.
    #[view(hasVotedOnStage)]
    fn has_voted_on_stage(
        &self,
        proposal_id: u64,
        stage_index: u32,
        authority: &ManagedAddress,
    ) -> bool {
        let proposal = self.load_proposal(proposal_id);
        let stage = self.load_stage(&proposal, stage_index);
        self.stage_voted(proposal_id, stage_index, stage.round, authority).get()
    }

    #[storage_mapper("stageVoted")]
    fn stage_voted(
        &self,
        proposal_id: u64,
        stage_index: u32,
        round: u32,
        authority: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
