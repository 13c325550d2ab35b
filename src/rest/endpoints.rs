//! OKX REST API endpoint constants.
//!
//! Paths follow `/api/v5/{section}/{action}`.

/// Base URL for the OKX production API.
pub const OKX_BASE_URL: &str = "https://www.okx.com";

/// Base URL for AWS-hosted OKX accounts.
pub const OKX_AWS_BASE_URL: &str = "https://aws.okx.com";

/// Funding account endpoints (section `asset`).
pub mod asset {
    /// List currencies and their chains.
    pub const CURRENCIES: &str = "/api/v5/asset/currencies";

    /// Funding account balances.
    pub const BALANCES: &str = "/api/v5/asset/balances";

    /// Transfer funds between accounts.
    pub const TRANSFER: &str = "/api/v5/asset/transfer";

    /// Withdraw funds.
    pub const WITHDRAWAL: &str = "/api/v5/asset/withdrawal";

    /// Cancel a pending withdrawal.
    pub const CANCEL_WITHDRAWAL: &str = "/api/v5/asset/cancel-withdrawal";

    /// Withdrawal history.
    pub const WITHDRAWAL_HISTORY: &str = "/api/v5/asset/withdrawal-history";

    /// Deposit history.
    pub const DEPOSIT_HISTORY: &str = "/api/v5/asset/deposit-history";

    /// Funding account balances of a sub-account.
    pub const SUBACCOUNT_BALANCES: &str = "/api/v5/asset/subaccount/balances";
}

/// Sub-account management endpoints (section `users`).
pub mod users {
    /// List sub-accounts.
    pub const SUBACCOUNT_LIST: &str = "/api/v5/users/subaccount/list";
}
