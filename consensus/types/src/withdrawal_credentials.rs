use crate::{Address, ChainSpec, Hash256};

/// A 32-byte withdrawal credential, tagged by its first byte with the
/// scheme controlling the validator's funds.
pub struct WithdrawalCredentials(Hash256);

impl WithdrawalCredentials {
    /// Credentials controlled by an execution-layer address: the prefix
    /// byte, eleven zero bytes, then the 20-byte address.
    pub fn eth1(withdrawal_address: Address, spec: &ChainSpec) -> Self {
        let mut credentials = [0; 32];
        credentials[0] = spec.eth1_address_withdrawal_prefix_byte;
        credentials[12..].copy_from_slice(withdrawal_address.as_bytes());
        Self(Hash256::from_slice(&credentials))
    }
}

impl From<WithdrawalCredentials> for Hash256 {
    fn from(withdrawal_credentials: WithdrawalCredentials) -> Self {
        withdrawal_credentials.0
    }
}
