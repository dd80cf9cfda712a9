// Construction
pub const ERR_TOO_FEW_PARTNERS: &str = "Construction: at least two partners are required";
pub const ERR_DUPLICATE_PARTNER: &str = "Construction: duplicate partner";
pub const ERR_ZERO_PARTNER: &str = "Construction: partner cannot be the zero address";
pub const ERR_ZERO_CONTRIBUTION: &str = "Construction: required contribution must be positive";

// AccessDenied
pub const ERR_NOT_PARTNER: &str = "AccessDenied: caller is not a partner";
pub const ERR_NOT_FUNDED: &str = "AccessDenied: partnership is not funded";
pub const ERR_NOT_INITIATOR: &str = "AccessDenied: only the initiator can cancel";
pub const ERR_INITIATOR_CONFIRMS: &str = "AccessDenied: initiator cannot confirm own proposal";

// InvalidState
pub const ERR_DISSOLVED: &str = "InvalidState: partnership is dissolved";
pub const ERR_UNKNOWN_PROPOSAL: &str = "InvalidState: proposal does not exist";
pub const ERR_NOT_PROPOSED: &str = "InvalidState: proposal is no longer open";
pub const ERR_NOT_PASSED: &str = "InvalidState: proposal has not passed";
pub const ERR_ALREADY_CONFIRMED: &str = "InvalidState: already confirmed";

// InsufficientFunds
pub const ERR_ALREADY_CONTRIBUTED: &str = "InsufficientFunds: partner already contributed";
pub const ERR_WRONG_CONTRIBUTION: &str = "InsufficientFunds: contribution must equal the required amount";
pub const ERR_INSUFFICIENT_CREDIT: &str = "InsufficientFunds: amount exceeds credit";
