multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State — top-level lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalState {
    /// Admitted into the registry. Authority voting opens in the same call.
    Created,
    /// Authorities are voting on the proposal.
    UnderAuthorityVoting,
    /// Authorities approved. Eligible voters ratify until the deadline.
    PublicVoting,
    /// Ratified. Waiting for the first stage release.
    Approved,
    /// Refused by authorities or by the public vote. Terminal state.
    Rejected,
    /// At least one stage released, not all stages completed.
    InProgress,
    /// Every stage completed. Terminal state.
    Completed,
}

impl ProposalState {
    /// Legal edges of the proposal lifecycle. Anything else is a state error.
    pub fn can_transition_to(&self, next: &ProposalState) -> bool {
        matches!(
            (self, next),
            (ProposalState::Created, ProposalState::UnderAuthorityVoting)
                | (ProposalState::UnderAuthorityVoting, ProposalState::PublicVoting)
                | (ProposalState::UnderAuthorityVoting, ProposalState::Rejected)
                | (ProposalState::PublicVoting, ProposalState::Approved)
                | (ProposalState::PublicVoting, ProposalState::Rejected)
                | (ProposalState::Approved, ProposalState::InProgress)
                | (ProposalState::InProgress, ProposalState::Completed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProposalState::Rejected | ProposalState::Completed)
    }
}

// ============================================================
// Stage State — per-milestone lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum StageState {
    NotStarted,
    /// Funds released. Waiting for the report and the authority quorum.
    InProgress,
    Completed,
}

impl StageState {
    pub fn can_transition_to(&self, next: &StageState) -> bool {
        matches!(
            (self, next),
            (StageState::NotStarted, StageState::InProgress)
                | (StageState::InProgress, StageState::Completed)
        )
    }
}

/// Strict majority: more than half of the electorate. An exact half is not enough.
pub fn is_strict_majority(votes: u64, electorate: u64) -> bool {
    votes.saturating_mul(2) > electorate
}

/// Inclusive window of at most `count` positions starting at `start`,
/// clipped to `last`. `None` when nothing falls inside.
pub fn page_window(start: u64, count: u64, last: u64) -> Option<(u64, u64)> {
    if count == 0 || start > last {
        return None;
    }
    Some((start, core::cmp::min(start.saturating_add(count - 1), last)))
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub recipient: ManagedAddress<M>,
    /// Always equal to the sum of the stage amounts
    pub total_amount: BigUint<M>,
    pub state: ProposalState,
    pub authority_yes_votes: u64,
    pub authority_no_votes: u64,
    pub public_yes_votes: u64,
    pub public_no_votes: u64,
    /// Block timestamp at which public voting ends (0 until it opens)
    pub public_voting_deadline: u64,
    /// Index of the stage being funded; equals `total_stages` once completed
    pub current_stage: u32,
    pub total_stages: u32,
    pub released_amount: BigUint<M>,
    pub created_at: u64,
}

// ============================================================
// Stage — one funding tranche of a proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Stage<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    /// Opaque evidence reference (content identifier), empty until submitted
    pub report: ManagedBuffer<M>,
    /// Tallies of the current review round only
    pub approval_votes: u64,
    pub rejection_votes: u64,
    /// Bumped each time the authorities reject the evidence
    pub round: u32,
    pub state: StageState,
}

// ============================================================
// Public Vote Record — audit trail of ratification votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct PublicVoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub approve: bool,
    pub comment: ManagedBuffer<M>,
    pub timestamp: u64,
}

// ============================================================
// Credential — non-transferable voting eligibility
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Credential {
    pub nullifier: u64,
    pub issued_at: u64,
}
