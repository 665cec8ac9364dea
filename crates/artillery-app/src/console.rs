//! Terminal console over any reader/writer pair.

use std::io::{BufRead, Write};

use artillery_sim::console::Console;

/// Reads answers line by line and writes prompts as `PROMPT? `.
///
/// When answers come from a file they are echoed after the prompt so the
/// output reads like an interactive session.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
    echo: bool,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            echo: false,
        }
    }

    pub fn echo_answers(mut self) -> Self {
        self.echo = true;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_all(&mut self, text: &str) {
        if let Err(err) = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
        {
            tracing::warn!(%err, "failed to write to console");
        }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.write_all(&format!("{prompt}? "));
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim_end_matches(['\r', '\n']).to_string();
                if self.echo {
                    self.write_all(&format!("{answer}\n"));
                }
                Some(answer)
            }
            Err(err) => {
                tracing::warn!(%err, "failed to read answer");
                None
            }
        }
    }

    fn display(&mut self, lines: &[String]) {
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        self.write_all(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output_of(console: StdConsole<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn prompts_and_reads_lines() {
        let mut console = StdConsole::new(Cursor::new("12\r\nYES\n"), Vec::new());
        assert_eq!(console.read_line("FIRING ANGLE").as_deref(), Some("12"));
        assert_eq!(console.read_line("AGAIN").as_deref(), Some("YES"));
        assert_eq!(console.read_line("AGAIN"), None);
        assert_eq!(output_of(console), "FIRING ANGLE? AGAIN? AGAIN? ");
    }

    #[test]
    fn echo_mirrors_answers() {
        let mut console = StdConsole::new(Cursor::new("2\n"), Vec::new()).echo_answers();
        console.read_line("NO. OF PLAYERS");
        console.say("ROUND 1");
        assert_eq!(output_of(console), "NO. OF PLAYERS? 2\nROUND 1\n");
    }
}
