//! Operator roles and the policy guarding sensitive role grants

use ethers::types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission bit grantable to an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorRole {
    /// Full administrative control
    Admin = 1 << 0,
    /// Fill orders on the CLOB
    ClobFill = 1 << 1,
    /// Place limit orders on the CLOB
    ClobLimit = 1 << 2,
    /// Deposit into the exchange on behalf of the account
    Deposit = 1 << 3,
    /// Withdraw exchange-held funds
    Withdraw = 1 << 4,
    /// Fill launchpad orders
    LaunchpadFill = 1 << 5,
}

impl OperatorRole {
    /// Every role, in ascending bit order
    pub const ALL: [OperatorRole; 6] = [
        OperatorRole::Admin,
        OperatorRole::ClobFill,
        OperatorRole::ClobLimit,
        OperatorRole::Deposit,
        OperatorRole::Withdraw,
        OperatorRole::LaunchpadFill,
    ];

    /// Bit value of the role
    pub fn bit(self) -> u64 {
        self as u64
    }
}

impl std::fmt::Display for OperatorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatorRole::Admin => write!(f, "ADMIN"),
            OperatorRole::ClobFill => write!(f, "CLOB_FILL"),
            OperatorRole::ClobLimit => write!(f, "CLOB_LIMIT"),
            OperatorRole::Deposit => write!(f, "DEPOSIT"),
            OperatorRole::Withdraw => write!(f, "WITHDRAW"),
            OperatorRole::LaunchpadFill => write!(f, "LAUNCHPAD_FILL"),
        }
    }
}

/// OR-combine roles into the on-chain bitmask. Empty input encodes to zero.
pub fn encode_roles(roles: &[OperatorRole]) -> U256 {
    let mask = roles.iter().fold(0u64, |acc, role| acc | role.bit());
    U256::from(mask)
}

/// Roles whose bits are set in `mask`, ascending. Unknown bits are ignored.
pub fn decode_roles(mask: U256) -> Vec<OperatorRole> {
    OperatorRole::ALL
        .into_iter()
        .filter(|role| !(mask & U256::from(role.bit())).is_zero())
        .collect()
}

/// Explicit opt-ins required for sensitive role grants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsafeOptIn {
    /// Allow granting [`OperatorRole::Withdraw`]
    pub withdraw: bool,
    /// Allow granting [`OperatorRole::LaunchpadFill`]
    pub launchpad_fill: bool,
}

impl UnsafeOptIn {
    /// No opt-ins
    pub fn none() -> Self {
        Self::default()
    }

    /// Opt in to granting the withdraw role
    pub fn with_withdraw(mut self) -> Self {
        self.withdraw = true;
        self
    }

    /// Opt in to granting the launchpad-fill role
    pub fn with_launchpad_fill(mut self) -> Self {
        self.launchpad_fill = true;
        self
    }
}

/// Reason a role grant was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRejection {
    /// Withdraw requested without the unsafe-withdraw opt-in
    #[error("Unsafe withdraw must be enabled to approve withdraw role")]
    UnsafeWithdrawRequired,
    /// Launchpad fill requested without the unsafe-launchpad-fill opt-in
    #[error("Unsafe launchpad fill must be enabled to approve launchpad fill role")]
    UnsafeLaunchpadFillRequired,
}

/// Check a requested grant against the opt-ins. Withdraw is checked first.
pub fn check_role_policy(
    roles: &[OperatorRole],
    opt_in: UnsafeOptIn,
) -> std::result::Result<(), RoleRejection> {
    if roles.contains(&OperatorRole::Withdraw) && !opt_in.withdraw {
        return Err(RoleRejection::UnsafeWithdrawRequired);
    }
    if roles.contains(&OperatorRole::LaunchpadFill) && !opt_in.launchpad_fill {
        return Err(RoleRejection::UnsafeLaunchpadFillRequired);
    }
    Ok(())
}
