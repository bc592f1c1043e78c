//! Account display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::error::HorizonResult;
use crate::format::format_amount;
use crate::models::{Account, AccountSummary};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Account")]
    name: String,
    #[tabled(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Current Balance")]
    balance: String,
}

/// Format the balance box: each account, then the totals
pub fn format_account_summary(accounts: &[Account]) -> HorizonResult<String> {
    let summary = AccountSummary::from_accounts(accounts);

    let mut output = String::new();
    if !accounts.is_empty() {
        let rows = accounts
            .iter()
            .map(|a| {
                Ok(AccountRow {
                    name: a.name.clone(),
                    account_type: a.account_type.to_string(),
                    balance: format_amount(a.current_balance)?,
                })
            })
            .collect::<HorizonResult<Vec<_>>>()?;
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output.push_str(&format!("Bank Accounts: {}\n", summary.total_banks));
    output.push_str(&format!(
        "Total Current Balance: {}\n",
        format_amount(summary.total_current_balance)?
    ));
    Ok(output)
}
