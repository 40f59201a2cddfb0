use crate::{
    summary::DEFAULT_INTEREST_PAYOUT_THRESHOLD,
    types::{Amount, Pin},
};
use serde::{Deserialize, Serialize};

/// Loan requests need a movement of at least this share of the amount.
pub const DEFAULT_LOAN_ELIGIBILITY_RATIO: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSeed {
    pub owner: String,
    pub movements: Vec<Amount>,
    /// Percent, e.g. `1.2` for 1.2%.
    pub interest_rate: f64,
    pub pin: Pin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub loan_eligibility_ratio: f64,
    pub interest_payout_threshold: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            loan_eligibility_ratio:    DEFAULT_LOAN_ELIGIBILITY_RATIO,
            interest_payout_threshold: DEFAULT_INTEREST_PAYOUT_THRESHOLD,
        }
    }
}

impl RulesConfig {
    /// Both values must be finite and non-negative.
    pub fn validate(&self) -> anyhow::Result<()> {
        let checks = [
            ("loan_eligibility_ratio", self.loan_eligibility_ratio),
            ("interest_payout_threshold", self.interest_payout_threshold),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{name} must be a finite, non-negative number, got {value}");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountsFile {
    accounts: Vec<AccountSeed>,
}

#[derive(Debug, Clone)]
pub struct BankConfig {
    pub accounts: Vec<AccountSeed>,
    pub rules: RulesConfig,
}

impl BankConfig {
    /// Load from a data directory holding `accounts.json` and `rules.json`.
    /// In tests, use BankConfig::demo().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let accounts_path = format!("{data_dir}/accounts.json");
        let accounts_content = std::fs::read_to_string(&accounts_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {accounts_path}: {e}"))?;
        let accounts_file: AccountsFile = serde_json::from_str(&accounts_content)?;

        let rules_path = format!("{data_dir}/rules.json");
        let rules_content = std::fs::read_to_string(&rules_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {rules_path}: {e}"))?;
        let rules: RulesConfig = serde_json::from_str(&rules_content)?;
        rules
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid rules in {rules_path}: {e}"))?;

        log::info!(
            "Loaded {} accounts from {data_dir} (loan ratio {}, interest threshold {})",
            accounts_file.accounts.len(),
            rules.loan_eligibility_ratio,
            rules.interest_payout_threshold
        );

        Ok(Self {
            accounts: accounts_file.accounts,
            rules,
        })
    }

    /// Write `accounts.json` and `rules.json` into `data_dir`.
    pub fn save(&self, data_dir: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(data_dir)?;
        let accounts = AccountsFile { accounts: self.accounts.clone() };
        std::fs::write(
            format!("{data_dir}/accounts.json"),
            serde_json::to_string_pretty(&accounts)?,
        )?;
        std::fs::write(
            format!("{data_dir}/rules.json"),
            serde_json::to_string_pretty(&self.rules)?,
        )?;
        Ok(())
    }

    /// The six built-in Bankist customers with default rules.
    pub fn demo() -> Self {
        Self {
            accounts: vec![
                seed("Jonas Schmedtmann", &[200.0, 450.0, -400.0, 3000.0, -650.0, -130.0, 70.0, 1300.0], 1.2, 1111),
                seed("Jessica Davis", &[5000.0, 3400.0, -150.0, -790.0, -3210.0, -1000.0, 8500.0, -30.0], 1.5, 2222),
                seed("Steven Thomas Williams", &[200.0, -200.0, 340.0, -300.0, -20.0, 50.0, 400.0, -460.0], 0.7, 3333),
                seed("Sarah Smith", &[430.0, 1000.0, 700.0, 50.0, 90.0], 1.0, 4444),
                seed("Ryan Iguchi", &[500.0, 3000.0, -477.0, 300.0, -1000.0, 750.0, -490.0], 3.0, 5555),
                seed("Tamela Hedstrom", &[1500.0, 300.0, -4757.0, 3080.0, -100.0, 7500.0, -490.0], 5.0, 6666),
            ],
            rules: RulesConfig::default(),
        }
    }
}

fn seed(owner: &str, movements: &[Amount], interest_rate: f64, pin: Pin) -> AccountSeed {
    AccountSeed {
        owner: owner.to_string(),
        movements: movements.to_vec(),
        interest_rate,
        pin,
    }
}
