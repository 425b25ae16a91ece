//! Journal statistics — pure functions that compute trade performance.
//!
//! Every metric is a pure function: trade list in, scalar out. All
//! divisions guard the zero-denominator case by returning 0, so every
//! field is finite for every input including the empty journal.

use serde::{Deserialize, Serialize};

use crate::domain::trade::Trade;

/// Aggregate performance metrics for the trade journal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalStats {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub open_trades: usize,
    /// Percentage of closed trades won; open trades are excluded from the
    /// denominator.
    pub win_rate: f64,
    pub total_pnl: f64,
    pub total_win_pnl: f64,
    /// Gross loss as a positive magnitude.
    pub total_loss_pnl: f64,
    pub profit_factor: f64,
    pub avg_win: f64,
    /// Average loss as a positive magnitude.
    pub avg_loss: f64,
    /// Realized reward-to-risk: avg_win / avg_loss.
    pub avg_rr: f64,
    pub largest_win: f64,
    /// Largest loss as a positive magnitude.
    pub largest_loss: f64,
    pub max_consecutive_wins: usize,
    pub max_consecutive_losses: usize,
    /// Trailing streak over closed trades: +n for n wins, -n for n losses.
    pub current_streak: i32,
}

impl JournalStats {
    /// Compute all metrics from a journal snapshot.
    pub fn summarize(trades: &[Trade]) -> Self {
        let wins = trades.iter().filter(|t| t.is_win()).count();
        let losses = trades.iter().filter(|t| t.is_loss()).count();
        let open_trades = trades.iter().filter(|t| t.is_open()).count();

        let total_win_pnl = total_win_pnl(trades);
        let total_loss_pnl = total_loss_pnl(trades);

        Self {
            total_trades: trades.len(),
            wins,
            losses,
            open_trades,
            win_rate: win_rate(trades),
            total_pnl: total_pnl(trades),
            total_win_pnl,
            total_loss_pnl,
            profit_factor: profit_factor(trades),
            avg_win: avg_win(trades),
            avg_loss: avg_loss(trades),
            avg_rr: avg_rr(trades),
            largest_win: largest_win(trades),
            largest_loss: largest_loss(trades),
            max_consecutive_wins: max_consecutive(trades, true),
            max_consecutive_losses: max_consecutive(trades, false),
            current_streak: current_streak(trades),
        }
    }
}

// ─── Individual metric functions ────────────────────────────────────

/// Win rate over closed trades, as a percentage: wins / (wins + losses) × 100.
///
/// Returns 0.0 when no trade has closed yet.
pub fn win_rate(trades: &[Trade]) -> f64 {
    let wins = trades.iter().filter(|t| t.is_win()).count();
    let closed = wins + trades.iter().filter(|t| t.is_loss()).count();
    if closed == 0 {
        return 0.0;
    }
    wins as f64 / closed as f64 * 100.0
}

/// Net PnL over all trades, open included.
pub fn total_pnl(trades: &[Trade]) -> f64 {
    trades.iter().map(|t| t.pnl).sum()
}

/// Gross profit: sum of pnl over Win trades.
pub fn total_win_pnl(trades: &[Trade]) -> f64 {
    trades.iter().filter(|t| t.is_win()).map(|t| t.pnl).sum()
}

/// Gross loss as a positive magnitude: |sum of pnl over Loss trades|.
pub fn total_loss_pnl(trades: &[Trade]) -> f64 {
    trades
        .iter()
        .filter(|t| t.is_loss())
        .map(|t| t.pnl)
        .sum::<f64>()
        .abs()
}

/// Profit factor: gross profit / gross loss. 0.0 when there is no gross
/// loss to divide by.
pub fn profit_factor(trades: &[Trade]) -> f64 {
    let loss = total_loss_pnl(trades);
    if loss > 0.0 {
        total_win_pnl(trades) / loss
    } else {
        0.0
    }
}

/// Average winning trade; 0.0 with no wins.
pub fn avg_win(trades: &[Trade]) -> f64 {
    let wins = trades.iter().filter(|t| t.is_win()).count();
    if wins == 0 {
        return 0.0;
    }
    total_win_pnl(trades) / wins as f64
}

/// Average losing trade as a positive magnitude; 0.0 with no losses.
pub fn avg_loss(trades: &[Trade]) -> f64 {
    let losses = trades.iter().filter(|t| t.is_loss()).count();
    if losses == 0 {
        return 0.0;
    }
    total_loss_pnl(trades) / losses as f64
}

/// Realized reward-to-risk ratio: avg_win / avg_loss; 0.0 when the average
/// loss is zero.
pub fn avg_rr(trades: &[Trade]) -> f64 {
    let loss = avg_loss(trades);
    if loss > 0.0 {
        avg_win(trades) / loss
    } else {
        0.0
    }
}

/// Best winning trade's pnl; 0.0 with no wins.
pub fn largest_win(trades: &[Trade]) -> f64 {
    trades
        .iter()
        .filter(|t| t.is_win())
        .map(|t| t.pnl)
        .fold(0.0, f64::max)
}

/// Worst losing trade's magnitude; 0.0 with no losses.
pub fn largest_loss(trades: &[Trade]) -> f64 {
    trades
        .iter()
        .filter(|t| t.is_loss())
        .map(|t| t.pnl.abs())
        .fold(0.0, f64::max)
}

/// Longest run of wins (or losses) in journal order. Open trades break
/// both kinds of streak.
pub fn max_consecutive(trades: &[Trade], wins: bool) -> usize {
    let mut max_streak = 0;
    let mut current = 0;

    for trade in trades {
        let hit = if wins { trade.is_win() } else { trade.is_loss() };
        if hit {
            current += 1;
            if current > max_streak {
                max_streak = current;
            }
        } else {
            current = 0;
        }
    }
    max_streak
}

/// Trailing streak over closed trades: +n for n consecutive wins at the
/// end of the journal, -n for n consecutive losses, 0 for an empty or
/// all-open journal.
pub fn current_streak(trades: &[Trade]) -> i32 {
    let mut closed = trades.iter().filter(|t| !t.is_open());
    let last_was_win = match closed.next_back() {
        Some(t) => t.is_win(),
        None => return 0,
    };

    let mut streak = 1;
    for trade in closed.rev() {
        if trade.is_win() == last_was_win {
            streak += 1;
        } else {
            break;
        }
    }
    if last_was_win {
        streak
    } else {
        -streak
    }
}
