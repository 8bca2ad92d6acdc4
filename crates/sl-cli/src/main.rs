//! Console front end for the slot engine
//!
//! Thin presentation layer: prompt loops, grid rendering, and the post-round
//! menu. All validation rules and payout math live in `sl-engine`; raw input
//! strings never cross into the core.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use sl_engine::{
    Bet, GameConfig, PayoutMode, RoundAction, RoundResult, Session, SlotEngine,
};

#[derive(Parser, Debug)]
#[command(name = "slots", version, about = "Text slot machine simulator")]
struct Args {
    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Starting balance; prompted for when omitted
    #[arg(long)]
    deposit: Option<u64>,

    /// Payout rule for winning lines
    #[arg(long, value_enum, default_value_t = PayoutModeArg::PerLine)]
    payout_mode: PayoutModeArg,

    /// Emit each round as a JSON line instead of the grid rendering
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PayoutModeArg {
    /// payout × bet per line
    PerLine,
    /// payout × bet per line × line count (historical rule)
    PerLineXLines,
}

impl From<PayoutModeArg> for PayoutMode {
    fn from(arg: PayoutModeArg) -> Self {
        match arg {
            PayoutModeArg::PerLine => PayoutMode::PerLine,
            PayoutModeArg::PerLineXLines => PayoutMode::PerLineTimesLines,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("starting slot machine session");
    run(args)
}

fn run(args: Args) -> Result<()> {
    let config = GameConfig {
        payout_mode: args.payout_mode.into(),
        ..GameConfig::default()
    };

    let mut engine = match args.seed {
        Some(seed) => SlotEngine::with_seed(config.clone(), seed),
        None => SlotEngine::new(config.clone()),
    }?;

    let deposit = match args.deposit {
        Some(n) if n > 0 => n,
        Some(_) => bail!("deposit must be positive"),
        None => prompt_deposit()?,
    };
    let mut session = Session::new(config.clone(), deposit);

    'session: while !session.is_broke() {
        let bet = prompt_bet(&session, &config)?;
        println!(
            "\nYou are betting ${} on {} lines. Total bet: ${}",
            bet.per_line,
            bet.lines,
            bet.total()
        );

        // Bounds were just validated against the balance
        session
            .place(bet)
            .map_err(|e| anyhow::anyhow!("bet no longer placeable: {e}"))?;
        print_status(&session, bet);

        if read_line("\nPress Enter to spin the slot machine.")?.is_none() {
            break 'session;
        }

        loop {
            let result = engine.spin_round(bet);
            session.settle(result.winnings);

            if args.json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                print!("{}", format_round(&result, bet.lines));
            }
            println!("Winnings: ${}", result.winnings);
            println!("Balance: ${}", session.balance());

            if session.is_broke() {
                println!("You are out of money.");
                break 'session;
            }

            match prompt_action()? {
                RoundAction::Exit => break 'session,
                RoundAction::ChangeBet => continue 'session,
                RoundAction::Continue => match session.place(bet) {
                    Ok(()) => print_status(&session, bet),
                    Err(e) => {
                        println!("{e}");
                        continue 'session;
                    }
                },
            }
        }
    }

    let stats = engine.stats();
    log::info!(
        "session over: {} spins, RTP {:.1}%, hit rate {:.1}%",
        stats.total_spins,
        stats.rtp(),
        stats.hit_rate()
    );
    println!("Final balance: ${}", session.balance());
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` means input was closed.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_deposit() -> Result<u64> {
    loop {
        let Some(line) = read_line("Enter the amount you want to deposit: $")? else {
            bail!("input closed");
        };
        match line.parse::<u64>() {
            Ok(n) if n > 0 => return Ok(n),
            Ok(_) => println!("Please enter a positive number."),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_bet(session: &Session, config: &GameConfig) -> Result<Bet> {
    let lines = loop {
        let prompt = format!(
            "Enter the number of lines you want to bet on (1-{}): ",
            config.max_lines
        );
        let Some(line) = read_line(&prompt)? else {
            bail!("input closed");
        };
        match line.parse::<usize>() {
            Ok(n) if (1..=config.max_lines).contains(&n) => break n,
            Ok(_) => println!("Please enter a number between 1 and {}.", config.max_lines),
            Err(_) => println!("Please enter a number."),
        }
    };

    loop {
        let prompt = format!(
            "Enter the amount you would like to bet per line (${}-${}): $",
            config.min_bet,
            session.max_bet_per_line(lines)
        );
        let Some(line) = read_line(&prompt)? else {
            bail!("input closed");
        };
        let Ok(per_line) = line.parse::<u64>() else {
            println!("Please enter a number.");
            continue;
        };
        match session.bet(lines, per_line) {
            Ok(bet) => return Ok(bet),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt_action() -> Result<RoundAction> {
    match read_line("\n(ENTER) to spin again\n(C)hange Bet\n(E)xit\n$ ")? {
        Some(line) => Ok(parse_action(&line)),
        None => Ok(RoundAction::Exit),
    }
}

/// Map raw menu input to the closed action set. Anything unrecognized spins
/// again, matching the original console behavior.
fn parse_action(input: &str) -> RoundAction {
    match input.trim().to_lowercase().as_str() {
        "c" => RoundAction::ChangeBet,
        "e" => RoundAction::Exit,
        _ => RoundAction::Continue,
    }
}

fn print_status(session: &Session, bet: Bet) {
    println!(
        "Balance: ${}, Lines: {}, Bet: ${}, Total Bet: ${}",
        session.balance(),
        bet.lines,
        bet.per_line,
        bet.total()
    );
}

fn format_round(result: &RoundResult, lines: usize) -> String {
    let mut out = String::from("\n");
    for (row_idx, row) in result.grid.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(|s| s.to_string()).collect();
        out.push_str(&cells.join(" | "));
        if result.is_winning_row(row_idx) {
            out.push_str(" <<< WINNER");
        } else if row_idx < lines {
            out.push_str(" < ");
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use sl_engine::{LineWin, ROWS, SpinGrid, Symbol};

    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("c"), RoundAction::ChangeBet);
        assert_eq!(parse_action(" C "), RoundAction::ChangeBet);
        assert_eq!(parse_action("e"), RoundAction::Exit);
        assert_eq!(parse_action("E"), RoundAction::Exit);
        assert_eq!(parse_action(""), RoundAction::Continue);
        assert_eq!(parse_action("anything"), RoundAction::Continue);
    }

    #[test]
    fn test_format_round_markers() {
        use Symbol::{Bell, Cherry, Lemon, Seven};

        let rows: [Vec<Symbol>; ROWS] = [
            vec![Seven, Seven, Seven],
            vec![Bell, Cherry, Lemon],
            vec![Cherry, Cherry, Cherry],
        ];
        let result = RoundResult {
            grid: SpinGrid::from_rows(rows),
            line_wins: vec![
                LineWin { line: 0, symbol: Seven, amount: 60 },
                LineWin { line: 2, symbol: Cherry, amount: 18 },
            ],
            winnings: 78,
        };

        let rendered = format_round(&result, 3);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "7 | 7 | 7 <<< WINNER");
        assert_eq!(lines[2], "B | C | L < ");
        assert_eq!(lines[3], "C | C | C <<< WINNER");
    }

    #[test]
    fn test_format_round_inactive_row_unmarked() {
        use Symbol::Lemon;

        let rows: [Vec<Symbol>; ROWS] = [
            vec![Lemon, Lemon, Lemon],
            vec![Lemon, Lemon, Lemon],
            vec![Lemon, Lemon, Lemon],
        ];
        let result = RoundResult {
            grid: SpinGrid::from_rows(rows),
            line_wins: vec![LineWin { line: 0, symbol: Lemon, amount: 4 }],
            winnings: 4,
        };

        let rendered = format_round(&result, 1);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "L | L | L <<< WINNER");
        assert_eq!(lines[2], "L | L | L");
        assert_eq!(lines[3], "L | L | L");
    }
}
