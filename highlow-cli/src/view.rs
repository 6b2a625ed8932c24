use comfy_table::{presets::UTF8_FULL, Table};
use highlow_core::{is_claimable, AccountId, ClaimState, SessionSnapshot, TokenAmount};

pub fn account_line(account: Option<&AccountId>, balance: TokenAmount) -> String {
    match account {
        Some(account) => format!("{}  Balance: {}", account.shortened(), balance),
        None => "No wallet connected".to_string(),
    }
}

/// Render a session snapshot
pub fn render(snapshot: &SessionSnapshot) -> String {
    match snapshot {
        SessionSnapshot::Idle => "Guess if the number is High or Low".to_string(),
        SessionSnapshot::Resolved { result, claim } => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Your guess", "Number", "Result"]);
            table.add_row(vec![
                result.choice.to_string(),
                result.drawn.to_string(),
                result.outcome.to_string(),
            ]);

            let footer = match claim {
                ClaimState::Claimed => Some("Prize claimed!"),
                ClaimState::Unclaimed if is_claimable(snapshot) => Some("You won a prize!"),
                ClaimState::Unclaimed => None,
            };

            match footer {
                Some(line) => format!("{}\n{}", table, line),
                None => table.to_string(),
            }
        }
    }
}
