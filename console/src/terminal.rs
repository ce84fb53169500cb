use std::io::{self, BufRead, Write};

/// Line-oriented text channel the game talks through.
pub trait Console {
    /// Next line without its terminator. A closed input is `UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }
}

#[cfg(test)]
pub type ScriptedTerminal = Terminal<io::Cursor<Vec<u8>>, Vec<u8>>;

#[cfg(test)]
pub fn scripted(lines: &[&str]) -> ScriptedTerminal {
    let mut input = lines.join("\n");
    input.push('\n');
    Terminal::new(io::Cursor::new(input.into_bytes()), Vec::new())
}

#[cfg(test)]
pub fn transcript(terminal: ScriptedTerminal) -> String {
    String::from_utf8_lossy(&terminal.into_output()).into_owned()
}
