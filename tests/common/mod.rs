// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use subtally::application::{Session, SessionConfig};
use subtally::cli::Repl;

pub const TOLERANCE: f64 = 0.005;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {} to be within {} of {}",
        actual,
        TOLERANCE,
        expected
    );
}

/// Helper to create a session using the given currency symbol
pub fn test_session(symbol: &str) -> Session {
    Session::new(SessionConfig {
        currency_symbol: symbol.to_string(),
    })
}

/// Test fixture: a typical set of streaming and software subscriptions
pub struct StandardSubscriptions;

impl StandardSubscriptions {
    pub const ALL: [(&'static str, &'static str); 4] = [
        ("Netflix", "15.99"),
        ("Spotify", "9.99"),
        ("iCloud", "2.99"),
        ("Gym", "30"),
    ];

    pub fn add_all(session: &mut Session) -> Result<()> {
        for (name, cost) in Self::ALL {
            session.add(name, cost)?;
        }
        Ok(())
    }

    pub fn monthly_total() -> f64 {
        15.99 + 9.99 + 2.99 + 30.0
    }
}

/// Feed `script` to a fresh REPL and return everything it printed
pub fn run_script(script: &str) -> Result<(String, Repl)> {
    let mut repl = Repl::new(test_session("$"));
    let mut output = Vec::new();
    repl.run(script.as_bytes(), &mut output)?;
    Ok((String::from_utf8(output)?, repl))
}
