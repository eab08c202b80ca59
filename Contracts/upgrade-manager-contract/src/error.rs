use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ManagerError {
    // Custody
    InvalidChain = 1,
    AlreadyPrepared = 2,
    OwnershipAlreadyMoved = 3,
    NotCurrentOwner = 4,
    NotPrepared = 5,
    NotOwner = 6,
    NoCustody = 7,
    CustodyNotTransferred = 8,

    // Implementer registry
    UnsupportedImplementer = 9,
    IndexMismatch = 10,
    NoImplementers = 11,
    UpToDate = 12,

    // Upgrade primitive
    InconsistentImplementer = 13,
    ZeroImplementation = 14,
    UnexpectedSlotValue = 15,

    // Contract management
    AlreadyInitialized = 16,
    NotInitialized = 17,
}

impl fmt::Display for ManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Custody
            ManagerError::InvalidChain => write!(f, "Chain id unknown to the build registry"),
            ManagerError::AlreadyPrepared => write!(f, "Chain already registered for custody transfer"),
            ManagerError::OwnershipAlreadyMoved => write!(f, "Custodian already owned by the manager; use the admin recovery path"),
            ManagerError::NotCurrentOwner => write!(f, "Caller does not own the custodian"),
            ManagerError::NotPrepared => write!(f, "Chain not registered for custody transfer"),
            ManagerError::NotOwner => write!(f, "Caller is not the recognized owner"),
            ManagerError::NoCustody => write!(f, "Manager does not hold the custodian"),
            ManagerError::CustodyNotTransferred => write!(f, "Custodian not yet transferred to the manager"),

            // Implementer registry
            ManagerError::UnsupportedImplementer => write!(f, "Contract does not declare the implementer capabilities"),
            ManagerError::IndexMismatch => write!(f, "Implementer index does not match registry length"),
            ManagerError::NoImplementers => write!(f, "No implementers registered"),
            ManagerError::UpToDate => write!(f, "Chain is up to date"),

            // Upgrade primitive
            ManagerError::InconsistentImplementer => write!(f, "Caller is not the active implementer for the chain"),
            ManagerError::ZeroImplementation => write!(f, "Implementation address missing"),
            ManagerError::UnexpectedSlotValue => write!(f, "Storage slot does not hold the expected value"),

            // Contract management
            ManagerError::AlreadyInitialized => write!(f, "Contract is already initialized"),
            ManagerError::NotInitialized => write!(f, "Contract is not initialized"),
        }
    }
}
