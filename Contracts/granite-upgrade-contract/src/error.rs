use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GraniteError {
    NotInitialized = 100,
    AlreadyInitialized = 101,
    UnknownChain = 102,
    UnexpectedStep = 103,

    // Prior version mismatch, one code per checked contract
    UnexpectedSystemConfigVersion = 104,
    UnexpectedPortalVersion = 105,
    UnexpectedOutputOracleVersion = 106,
    UnexpectedMessengerVersion = 107,
    UnexpectedStandardBridgeVersion = 108,
    UnexpectedErc721BridgeVersion = 109,
    UnexpectedProtocolVersionsVersion = 110,
}
