//! Console output formatter for authentication and poll events

use colored::Colorize;
use pollcast_domain::{
    AuthenticationStatus, ChoiceTally, PollOutcome, PollResult, classify, total_votes,
};

const BAR_WIDTH: usize = 30;

/// Formats coordinator output for the console
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One-line authentication status
    pub fn format_status(status: AuthenticationStatus) -> String {
        let label = match status {
            AuthenticationStatus::Authenticated => status.as_str().green().bold(),
            AuthenticationStatus::Error => status.as_str().red().bold(),
            AuthenticationStatus::Waiting => status.as_str().yellow(),
            _ => status.as_str().normal(),
        };
        format!("{} {}", "Login:".bold(), label)
    }

    /// Prompt shown once the confirmation URL is known
    pub fn format_confirmation_prompt(url: &str) -> String {
        format!(
            "{}\n  {}",
            "Approve access in your browser:".bold(),
            url.cyan().underline()
        )
    }

    /// Live tally table with proportional bars
    pub fn format_tallies(tallies: &[ChoiceTally]) -> String {
        let total = tallies.iter().map(|t| t.votes).sum::<u64>();
        let width = tallies
            .iter()
            .map(|t| t.title.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for tally in tallies {
            let filled = if total == 0 {
                0
            } else {
                (tally.votes as usize * BAR_WIDTH) / total as usize
            };
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
            output.push_str(&format!(
                "  {:<width$}  {}  {}\n",
                tally.title,
                bar.blue(),
                tally.votes,
                width = width
            ));
        }
        output.push_str(&format!("  {} votes\n", total));
        output
    }

    /// Final result: winner, draw, or the failure reason
    pub fn format_result(result: &PollResult) -> String {
        let mut output = String::new();

        if !result.success {
            output.push_str(&format!(
                "{} {}\n",
                "Poll failed:".red().bold(),
                result.error
            ));
            if !result.tallies.is_empty() {
                output.push_str(&Self::format_tallies(&result.tallies));
            }
            return output;
        }

        output.push_str(&format!("{}\n", "Poll finished".green().bold()));
        output.push_str(&Self::format_tallies(&result.tallies));

        match classify(&result.tallies) {
            PollOutcome::SingleWinner(winner) => output.push_str(&format!(
                "{} {} ({} of {} votes)\n",
                "Winner:".bold(),
                winner.title.green().bold(),
                winner.votes,
                total_votes(&result.tallies)
            )),
            PollOutcome::Draw(tied) => {
                let names: Vec<_> = tied.iter().map(|t| t.title.as_str()).collect();
                output.push_str(&format!(
                    "{} {}\n",
                    "Draw between:".yellow().bold(),
                    names.join(", ")
                ));
            }
            PollOutcome::NoChoices => output.push_str("No choices were polled\n"),
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollcast_domain::PollFailure;

    fn tallies(entries: &[(&str, u64)]) -> Vec<ChoiceTally> {
        entries
            .iter()
            .map(|(title, votes)| ChoiceTally::new(*title, *votes))
            .collect()
    }

    #[test]
    fn test_format_winner() {
        let result = PollResult::success(tallies(&[("Cats", 5), ("Dogs", 2)]));
        let output = ConsoleFormatter::format_result(&result);
        assert!(output.contains("Winner:"));
        assert!(output.contains("Cats"));
        assert!(output.contains("7 votes"));
    }

    #[test]
    fn test_format_draw() {
        let result = PollResult::success(tallies(&[("Cats", 0), ("Dogs", 0)]));
        let output = ConsoleFormatter::format_result(&result);
        assert!(output.contains("Draw between:"));
        assert!(output.contains("Cats, Dogs"));
    }

    #[test]
    fn test_format_failure() {
        let result = PollResult::failure(&PollFailure::SessionAborted, vec![]);
        let output = ConsoleFormatter::format_result(&result);
        assert!(output.contains("Poll failed:"));
        assert!(output.contains("Poll was deleted"));
        assert!(!output.contains("votes"));
    }

    #[test]
    fn test_format_tallies_lists_every_choice() {
        let output = ConsoleFormatter::format_tallies(&tallies(&[("Red", 1), ("Blue", 3)]));
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("Red"));
        assert!(output.contains("4 votes"));
    }

    #[test]
    fn test_format_status() {
        let output = ConsoleFormatter::format_status(AuthenticationStatus::Authenticated);
        assert!(output.contains("authenticated"));
    }
}
