use crate::error::{EngineError, Result};
use crate::normalize::Normalizer;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Prompt printed before reading lines from the terminal.
pub const PROMPT: &str = "Input text (empty line for exit):";

/// When to stop consuming lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRule {
    EndOfInput,
    /// Stop at the first empty raw line (it is not passed on)
    FirstEmptyLine,
}

/// Read lines from the input file, or interactively from stdin when no path is given.
///
/// # Errors
///
/// Returns [`EngineError::InputOpen`] if the file cannot be opened and
/// [`EngineError::InputRead`] on a read failure.
pub fn read_input(path: Option<&Path>, normalizer: &mut Normalizer) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| EngineError::InputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            let mut reader = BufReader::new(file);
            read_lines(&mut reader, normalizer, StopRule::EndOfInput)
        }
        None => {
            let stdin = io::stdin();
            read_interactive(&mut stdin.lock(), &mut io::stdout(), normalizer)
        }
    }
}

/// Print the prompt, then read until the first empty line.
///
/// A prompt that cannot be written is reported as [`EngineError::InputRead`].
pub fn read_interactive<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
    normalizer: &mut Normalizer,
) -> Result<Vec<String>> {
    writeln!(prompt, "{PROMPT}")
        .and_then(|()| prompt.flush())
        .map_err(|source| EngineError::InputRead { source })?;
    read_lines(input, normalizer, StopRule::FirstEmptyLine)
}

/// Read raw lines, normalize each one and keep the non-empty results.
///
/// Lines end at `\n`; a trailing `\r` is stripped. Invalid UTF-8 is decoded lossily.
pub fn read_lines<R: BufRead>(
    reader: &mut R,
    normalizer: &mut Normalizer,
    stop: StopRule,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| EngineError::InputRead { source })?;
        if read == 0 {
            break;
        }

        let raw = String::from_utf8_lossy(trim_line_ending(&buf));
        if stop == StopRule::FirstEmptyLine && raw.is_empty() {
            break;
        }
        if let Some(line) = normalizer.next_line(&raw) {
            lines.push(line);
        }
    }

    Ok(lines)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SkipState;
    use std::io::{Cursor, Read, Write as _};
    use tempfile::NamedTempFile;

    fn plain() -> Normalizer {
        Normalizer::new(false, SkipState::default())
    }

    /// Yields its buffered lines, then fails every further read.
    struct FailAfter {
        inner: Cursor<&'static str>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Err(io::Error::other("disk went away"));
            }
            Ok(n)
        }
    }

    impl BufRead for FailAfter {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.inner.position() as usize >= self.inner.get_ref().len() {
                return Err(io::Error::other("disk went away"));
            }
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt);
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn mid_stream_failure_is_input_read_error() {
        let mut input = FailAfter {
            inner: Cursor::new("a\n"),
        };
        let err = read_lines(&mut input, &mut plain(), StopRule::EndOfInput).unwrap_err();
        assert!(matches!(err, EngineError::InputRead { .. }));
        assert!(err.to_string().contains("disk went away"));
    }

    #[test]
    fn unwritable_prompt_is_input_read_error() {
        let mut input = Cursor::new("a\n\n");
        let err = read_interactive(&mut input, &mut BrokenPipe, &mut plain()).unwrap_err();
        assert!(matches!(err, EngineError::InputRead { .. }));
    }

    #[test]
    fn reads_until_end_of_input() {
        let mut input = Cursor::new("apple\n\nbanana\r\napple");
        let lines = read_lines(&mut input, &mut plain(), StopRule::EndOfInput).unwrap();
        assert_eq!(lines, ["apple", "banana", "apple"]);
    }

    #[test]
    fn interactive_stops_at_empty_line() {
        let mut input = Cursor::new("one\ntwo\n\nthree\n");
        let mut prompt = Vec::new();
        let lines = read_interactive(&mut input, &mut prompt, &mut plain()).unwrap();
        assert_eq!(lines, ["one", "two"]);
        assert_eq!(String::from_utf8(prompt).unwrap(), format!("{PROMPT}\n"));
    }

    #[test]
    fn interactive_handles_eof_without_empty_line() {
        let mut input = Cursor::new("one\ntwo");
        let lines = read_interactive(&mut input, &mut Vec::new(), &mut plain()).unwrap();
        assert_eq!(lines, ["one", "two"]);
    }

    #[test]
    fn skip_budget_is_threaded_through_lines() {
        let mut input = Cursor::new("a b c\nd e\n");
        let mut normalizer = Normalizer::new(false, SkipState::new(2, 0));
        let lines = read_lines(&mut input, &mut normalizer, StopRule::EndOfInput).unwrap();
        assert_eq!(lines, ["c", "d e"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut input = Cursor::new(b"ok\n\xffbad\n".to_vec());
        let lines = read_lines(&mut input, &mut plain(), StopRule::EndOfInput).unwrap();
        assert_eq!(lines, ["ok", "\u{fffd}bad"]);
    }

    #[test]
    fn reads_named_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "x\ny\nx\n").unwrap();
        let lines = read_input(Some(file.path()), &mut plain()).unwrap();
        assert_eq!(lines, ["x", "y", "x"]);
    }

    #[test]
    fn missing_file_is_input_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_input(Some(path.as_path()), &mut plain()).unwrap_err();
        assert!(matches!(err, EngineError::InputOpen { .. }));
    }
}
