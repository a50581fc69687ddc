use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    PoolNotFound = 1,
    NotAMember = 2,
    AlreadyPaid = 3,
    WindowExpired = 4,
    InsufficientAttestedFunds = 5,
    AlreadyRegistered = 6,
    HasUnclaimedPayment = 7,
    NothingToClaim = 8,
    TransferFailed = 9,
    EmptyMembers = 10,
    DuplicateMember = 11,
    InvalidAmount = 12,
    InvalidWindow = 13,
    LastMember = 14,
    Unauthorized = 15,
}
