//! Application constants

// Late-injected provider detection: probe every 300ms, ten times at most.
pub const PROVIDER_POLL_ATTEMPTS: u32 = 10;
pub const PROVIDER_POLL_INTERVAL_MS: u32 = 300;

// Simulated transactions resolve after this fixed delay.
pub const SIMULATED_TX_DELAY_MS: u32 = 2_000;

// Demo pricing and balances shown by the swap panel.
pub const DEMO_QUOTE_RATE: f64 = 1_234.56;
pub const DEMO_BALANCE_PAY: &str = "12.34";
pub const DEMO_BALANCE_RECEIVE: &str = "567.89";

// Liquidity position stub shown after a simulated add.
pub const DEMO_LP_TOKENS: &str = "123.45";

// Generative-text model for project analyses.
pub const ANALYSIS_MODEL: &str = "gemini-2.5-flash";
