//! Neon theme tokens for the PipDesk TUI.
//!
//! Dark-terminal palette: cyan accents, neon green bulls, hot pink bears.
//! Style helpers are plain module functions so render code can call
//! `theme::bull()` inline.

use pipdesk_core::domain::signal::{SignalAction, SignalStatus};
use pipdesk_core::domain::trade::{TradeDirection, TradeStatus};
use ratatui::style::{Color, Modifier, Style};

/// Electric cyan (focus, highlights).
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon green (gains, BUY, long).
pub const BULL: Color = Color::Rgb(0, 255, 128);
/// Hot pink (losses, SELL, short).
pub const BEAR: Color = Color::Rgb(255, 20, 147);
/// Neon orange (alerts, expiring signals).
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Cool purple (secondary info).
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
/// Steel blue (muted text, disabled).
pub const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn text_bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn bull() -> Style {
    Style::default().fg(BULL)
}

pub fn bear() -> Style {
    Style::default().fg(BEAR)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Green for gains, pink for losses.
pub fn pnl(value: f64) -> Style {
    if value >= 0.0 {
        bull()
    } else {
        bear()
    }
}

pub fn pips(pips: i32) -> Style {
    if pips >= 0 {
        bull()
    } else {
        bear()
    }
}

/// Confidence badge color: 8+ is high, 6+ is medium, the rest is low.
pub fn confidence(score: f64) -> Style {
    if score >= 8.0 {
        bull()
    } else if score >= 6.0 {
        warning()
    } else {
        bear()
    }
}

pub fn action(action: SignalAction) -> Style {
    match action {
        SignalAction::Buy => bull(),
        SignalAction::Sell => bear(),
    }
}

pub fn signal_status(status: SignalStatus) -> Style {
    match status {
        SignalStatus::Active => bull(),
        SignalStatus::Expiring => warning(),
        SignalStatus::Dismissed => muted(),
    }
}

pub fn direction(direction: TradeDirection) -> Style {
    match direction {
        TradeDirection::Long => bull(),
        TradeDirection::Short => bear(),
    }
}

pub fn trade_status(status: TradeStatus) -> Style {
    match status {
        TradeStatus::Win => bull(),
        TradeStatus::Loss => bear(),
        TradeStatus::Open => warning(),
    }
}

/// Win-rate percentage color, from strong green down to orange.
pub fn win_rate(pct: f64) -> Style {
    if pct >= 65.0 {
        bull()
    } else if pct >= 50.0 {
        accent()
    } else if pct >= 40.0 {
        neutral()
    } else {
        warning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_styles() {
        assert_eq!(pnl(100.0), bull());
        assert_eq!(pnl(0.0), bull());
        assert_eq!(pnl(-50.0), bear());
    }

    #[test]
    fn confidence_bands() {
        assert_eq!(confidence(9.1), bull());
        assert_eq!(confidence(8.0), bull());
        assert_eq!(confidence(7.2), warning());
        assert_eq!(confidence(5.9), bear());
    }

    #[test]
    fn status_styles() {
        assert_eq!(signal_status(SignalStatus::Active), bull());
        assert_eq!(signal_status(SignalStatus::Expiring), warning());
        assert_eq!(signal_status(SignalStatus::Dismissed), muted());
        assert_eq!(trade_status(TradeStatus::Open), warning());
    }

    #[test]
    fn win_rate_bands() {
        assert_eq!(win_rate(71.4), bull());
        assert_eq!(win_rate(55.0), accent());
        assert_eq!(win_rate(42.0), neutral());
        assert_eq!(win_rate(30.0), warning());
    }

    #[test]
    fn panel_styles_track_focus() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
