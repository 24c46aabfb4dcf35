// ── Authorization ──

pub const ERR_NOT_ADMIN: &str = "Only admin can call this";
pub const ERR_NOT_AUTHORITY: &str = "Only authorities can call this";
pub const ERR_NOT_RECIPIENT: &str = "Only the proposal recipient can call this";
pub const ERR_NOT_ELIGIBLE: &str = "Caller does not hold a voting credential";

// ── Lifecycle state ──

pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_STAGE_NOT_FOUND: &str = "Stage does not exist";
pub const ERR_WRONG_STATE: &str = "Proposal is in the wrong state";
pub const ERR_WRONG_STAGE_STATE: &str = "Stage is in the wrong state";
pub const ERR_STAGE_NOT_READY: &str = "Stage is not ready for release";
pub const ERR_VOTING_STILL_OPEN: &str = "Public voting period has not ended";
pub const ERR_VOTING_ENDED: &str = "Public voting period has ended";

// ── Duplicate actions ──

pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_ALREADY_APPLIED: &str = "Application pending or credential already held";
pub const ERR_NULLIFIER_USED: &str = "Nullifier already used";

// ── Resources ──

pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient treasury balance";

// ── Validation ──

pub const ERR_EMPTY_DESCRIPTION: &str = "Description is empty";
pub const ERR_INVALID_RECIPIENT: &str = "Invalid recipient address";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_NO_STAGES: &str = "Proposal needs at least one stage";
pub const ERR_TOO_MANY_STAGES: &str = "Too many stages";
pub const ERR_STAGE_AMOUNT_MISMATCH: &str = "Stage amounts do not sum to total amount";
pub const ERR_EMPTY_REPORT: &str = "Report reference is empty";
pub const ERR_EMPTY_APPLICATION: &str = "Application reference is empty";
pub const ERR_INVALID_VOTING_PERIOD: &str = "Voting period is out of range";
pub const ERR_NO_SUCH_APPLICATION: &str = "No pending application";
