// Lifecycle tables and the majority rule. These are plain data, no VM needed.

use public_fund::types::{is_strict_majority, page_window, ProposalState, StageState};

const ALL_PROPOSAL_STATES: [ProposalState; 7] = [
    ProposalState::Created,
    ProposalState::UnderAuthorityVoting,
    ProposalState::PublicVoting,
    ProposalState::Approved,
    ProposalState::Rejected,
    ProposalState::InProgress,
    ProposalState::Completed,
];

#[test]
fn test_proposal_happy_path_is_legal() {
    let path = [
        ProposalState::Created,
        ProposalState::UnderAuthorityVoting,
        ProposalState::PublicVoting,
        ProposalState::Approved,
        ProposalState::InProgress,
        ProposalState::Completed,
    ];
    for pair in path.windows(2) {
        assert!(pair[0].can_transition_to(&pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_rejection_edges() {
    assert!(ProposalState::UnderAuthorityVoting.can_transition_to(&ProposalState::Rejected));
    assert!(ProposalState::PublicVoting.can_transition_to(&ProposalState::Rejected));
    assert!(!ProposalState::Approved.can_transition_to(&ProposalState::Rejected));
    assert!(!ProposalState::InProgress.can_transition_to(&ProposalState::Rejected));
}

#[test]
fn test_terminal_states_have_no_exits() {
    for from in [ProposalState::Rejected, ProposalState::Completed] {
        assert!(from.is_terminal());
        for to in ALL_PROPOSAL_STATES.iter() {
            assert!(!from.can_transition_to(to), "{:?} -> {:?}", from, to);
        }
    }
}

#[test]
fn test_no_backward_or_self_transitions() {
    for (i, from) in ALL_PROPOSAL_STATES.iter().enumerate() {
        assert!(!from.can_transition_to(from));
        // Rejected is a side branch, not an earlier step.
        for to in ALL_PROPOSAL_STATES[..i].iter() {
            if *to == ProposalState::Rejected {
                continue;
            }
            assert!(!from.can_transition_to(to), "{:?} -> {:?}", from, to);
        }
    }
}

#[test]
fn test_stage_transitions() {
    assert!(StageState::NotStarted.can_transition_to(&StageState::InProgress));
    assert!(StageState::InProgress.can_transition_to(&StageState::Completed));
    assert!(!StageState::NotStarted.can_transition_to(&StageState::Completed));
    assert!(!StageState::Completed.can_transition_to(&StageState::InProgress));
    assert!(!StageState::InProgress.can_transition_to(&StageState::NotStarted));
}

#[test]
fn test_strict_majority() {
    assert!(is_strict_majority(2, 3));
    assert!(!is_strict_majority(1, 3));
    assert!(!is_strict_majority(2, 4));
    assert!(is_strict_majority(3, 4));
    assert!(is_strict_majority(1, 1));
    assert!(!is_strict_majority(0, 0));
}

#[test]
fn test_page_window() {
    assert_eq!(page_window(1, 5, 3), Some((1, 3)));
    assert_eq!(page_window(2, 1, 3), Some((2, 2)));
    assert_eq!(page_window(3, u64::MAX, 3), Some((3, 3)));
    assert_eq!(page_window(4, 1, 3), None);
    assert_eq!(page_window(1, 0, 3), None);
    assert_eq!(page_window(1, 1, 0), None);
}
