//! bankist-runner: headless driver for the Bankist demo bank.
//!
//! Usage:
//!   bankist-runner                       scripted demo session
//!   bankist-runner --data-dir ./data     seed accounts from JSON files
//!   bankist-runner --ipc-mode            one JSON command per stdin line,
//!                                        one render request per stdout line

use anyhow::Result;
use bankist_core::{
    command::BankCommand,
    config::BankConfig,
    render::{MovementKind, RenderRequest},
    SessionController,
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str());

    let config = match data_dir {
        Some(dir) => BankConfig::load(dir)?,
        None => BankConfig::demo(),
    };
    let mut controller = SessionController::from_config(&config)?;

    if ipc_mode {
        run_ipc_loop(&mut controller)?;
    } else {
        println!("Bankist: bankist-runner");
        println!("  data_dir:  {}", data_dir.unwrap_or("(built-in demo)"));
        println!("  accounts:  {}", controller.store().len());
        println!();
        let final_figures = run_demo_session(&mut controller);
        print_summary(&controller, final_figures.as_ref());
    }

    Ok(())
}

fn run_ipc_loop(controller: &mut SessionController) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        match parse_ipc_line(&buffer) {
            Ok(None) => break,
            Ok(Some(command)) => {
                let render = controller.dispatch(command);
                writeln!(stdout, "{}", serde_json::to_string(&render)?)?;
            }
            Err(e) => {
                log::warn!("Unparseable IPC line: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// `Ok(None)` for a quit line. Field-level serde errors pass through.
fn parse_ipc_line(line: &str) -> serde_json::Result<Option<BankCommand>> {
    let value: serde_json::Value = serde_json::from_str(line)?;
    if value["cmd"] == "quit" {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some)
}

/// The walk-through a user would click through in the browser demo.
/// Returns the account figures as they stood just before the close.
fn run_demo_session(controller: &mut SessionController) -> Option<RenderRequest> {
    let script = [
        BankCommand::Login { username: "js".into(), pin: 9999 },
        BankCommand::Login { username: "js".into(), pin: 1111 },
        BankCommand::Transfer { to: "jd".into(), amount: 500.0 },
        BankCommand::Transfer { to: "js".into(), amount: 10.0 },
        BankCommand::RequestLoan { amount: 1000.0 },
        BankCommand::RequestLoan { amount: 100_000.0 },
        BankCommand::ToggleSort,
        BankCommand::CloseAccount { username: "js".into(), pin: 1234 },
        BankCommand::CloseAccount { username: "js".into(), pin: 1111 },
    ];
    let mut last_visible = None;
    for command in script {
        let label = command.command_type();
        let render = controller.dispatch(command);
        println!("> {label}");
        print_render(&render);
        if render.visible {
            last_visible = Some(render);
        }
    }
    last_visible
}

fn print_render(render: &RenderRequest) {
    if !render.visible {
        println!("  (logged out)");
        return;
    }
    if let Some(welcome) = render.welcome_message() {
        println!("  {welcome}");
    }
    for row in &render.rows {
        let kind = match row.kind {
            MovementKind::Deposit    => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        };
        println!("    {:>2} {:<10} {}€", row.number, kind, row.amount);
    }
    println!(
        "  balance {}€ | in {}€ | out {}€ | interest {:.2}€",
        render.balance, render.total_in, render.total_out, render.total_interest
    );
}

fn print_summary(controller: &SessionController, final_figures: Option<&RenderRequest>) {
    let events = controller.events();
    let rejected = events
        .iter()
        .filter(|e| e.event().map(|ev| ev.is_rejection()).unwrap_or(false))
        .count();

    println!();
    println!("=== SESSION SUMMARY ===");
    println!("  session:        {:?}", controller.session());
    println!("  sorted:         {}", controller.is_sorted());
    println!("  accounts:       {}", controller.store().len());
    println!("  total holdings: {}€", controller.store().total_holdings());
    println!("  commands:       {}", events.len());
    println!("  rejected:       {rejected}");

    if let Some(figures) = final_figures {
        println!();
        println!("=== LAST ACCOUNT FIGURES ===");
        if let Some(name) = &figures.welcome_name {
            println!("  owner:          {name}");
        }
        println!("  balance:        {}€", figures.balance);
        println!("  in:             {}€", figures.total_in);
        println!("  out:            {}€", figures.total_out);
        println!("  interest:       {:.2}€", figures.total_interest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_line_ends_the_loop() {
        assert!(parse_ipc_line(r#"{"cmd":"quit"}"#).unwrap().is_none());
    }

    #[test]
    fn command_lines_parse() {
        let cmd = parse_ipc_line(r#"{"cmd":"request_loan","amount":250}"#).unwrap();
        assert_eq!(cmd, Some(BankCommand::RequestLoan { amount: 250.0 }));
    }

    #[test]
    fn missing_field_error_names_the_field() {
        let err = parse_ipc_line(r#"{"cmd":"transfer","to":"jd"}"#).unwrap_err();
        assert!(err.to_string().contains("amount"), "got {err}");
    }

    #[test]
    fn demo_session_closes_the_account_and_keeps_final_figures() {
        let mut controller = SessionController::demo().expect("demo controller");
        let figures = run_demo_session(&mut controller).expect("figures before close");

        assert!(!controller.session().is_logged_in());
        assert_eq!(controller.store().len(), 5);
        assert!(controller.store().find("js").is_none());
        // 3840 - 500 transfer + 1000 loan
        assert_eq!(figures.balance, 4340.0);
        assert_eq!(figures.welcome_name.as_deref(), Some("Jonas"));

        let last = controller.events().last().expect("events");
        assert_eq!(last.event_type, "account_closed");
    }
}
