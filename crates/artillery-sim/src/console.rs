//! Input and output collaborators.
//!
//! The engine never touches stdin/stdout. It asks a `Console` for answers and
//! hands it lines to show. Re-prompting on bad answers happens here, driven
//! by an explicit accept/reject result rather than panics or unwinding.

use std::collections::VecDeque;

use thiserror::Error;

/// The one failure an interactive session propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("input closed before the game finished")]
    InputClosed,
}

pub trait Console {
    /// Show `prompt` and read one answer. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Append lines to the output.
    fn display(&mut self, lines: &[String]);

    fn say(&mut self, line: &str) {
        self.display(&[line.to_string()]);
    }
}

/// Ask until `accept` takes the answer. A rejection message is shown before
/// asking again.
pub fn request<T, C>(
    console: &mut C,
    prompt: &str,
    mut accept: impl FnMut(&str) -> Result<T, String>,
) -> Result<T, SessionError>
where
    C: Console + ?Sized,
{
    loop {
        let answer = console.read_line(prompt).ok_or(SessionError::InputClosed)?;
        match accept(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => {
                tracing::debug!(prompt, answer = answer.trim(), %message, "answer rejected");
                console.say(&message);
            }
        }
    }
}

/// Yes/no question. Anything starting with `Y` counts as yes.
pub fn confirm<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<bool, SessionError> {
    request(console, prompt, |answer| {
        match answer.trim().to_ascii_uppercase().chars().next() {
            Some('Y') => Ok(true),
            Some('N') => Ok(false),
            _ => Err("ANSWER YES OR NO.".to_string()),
        }
    })
}

/// Console fed from a queue of answers, recording everything it shows.
///
/// Prompts are recorded as `"PROMPT? answer"` so a transcript reads like a
/// terminal session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Whether any recorded line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let answer = self.answers.pop_front()?;
        self.transcript.push(format!("{prompt}? {answer}"));
        Some(answer)
    }

    fn display(&mut self, lines: &[String]) {
        self.transcript.extend(lines.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artillery_core::errors::parse_number;

    #[test]
    fn request_reprompts_until_accepted() {
        let mut console = ScriptedConsole::new(["abc", "-5", "12"]);
        let value = request(&mut console, "VALUE", |answer| match parse_number(answer) {
            Ok(v) if v > 0.0 => Ok(v),
            _ => Err("ERROR--POSITIVE NUMBERS ONLY.".to_string()),
        })
        .unwrap();
        assert_eq!(value, 12.0);
        let rejections = console
            .transcript()
            .iter()
            .filter(|l| l.as_str() == "ERROR--POSITIVE NUMBERS ONLY.")
            .count();
        assert_eq!(rejections, 2);
    }

    #[test]
    fn request_reports_closed_input() {
        let mut console = ScriptedConsole::new(["nope"]);
        let result = request(&mut console, "VALUE", |_| Err::<(), _>("NO".to_string()));
        assert_eq!(result, Err(SessionError::InputClosed));
    }

    #[test]
    fn confirm_accepts_yes_and_no() {
        let mut console = ScriptedConsole::new(["maybe", "yes", "NO"]);
        assert!(confirm(&mut console, "AGAIN").unwrap());
        assert!(!confirm(&mut console, "AGAIN").unwrap());
        assert!(console.saw("ANSWER YES OR NO."));
        assert!(console.saw("AGAIN? yes"));
    }
}
