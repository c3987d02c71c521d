//! Sources of typed answer lines.

use std::collections::VecDeque;
use std::io::BufRead;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// A stream of lines typed by the user.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next line, including its line terminator.
    ///
    /// Returns `None` once the stream is closed.
    async fn next_line(&mut self) -> Option<String>;
}

/// Lines read from standard input.
///
/// A detached OS thread owns the blocking reads and hands each line over a
/// channel. A read that never completes therefore cannot hold up runtime
/// shutdown or process exit.
pub struct StdinAnswers {
    lines: mpsc::UnboundedReceiver<String>,
}

impl StdinAnswers {
    /// Start reading the process's standard input.
    pub fn spawn() -> std::io::Result<Self> {
        Self::from_reader(std::io::BufReader::new(std::io::stdin()))
    }

    /// Start reading any blocking line source on a background thread.
    pub fn from_reader<R>(mut reader: R) -> std::io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                let mut buf = Vec::new();
                loop {
                    buf.clear();
                    match reader.read_until(b'\n', &mut buf) {
                        Ok(0) => {
                            tracing::debug!("input closed");
                            break;
                        }
                        Ok(_) => {
                            let line = String::from_utf8_lossy(&buf).into_owned();
                            if tx.send(line).is_err() {
                                // Nobody is listening for answers anymore.
                                break;
                            }
                        }
                        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                        Err(e) => {
                            tracing::warn!("failed to read input: {e}");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self { lines: rx })
    }
}

#[async_trait]
impl AnswerSource for StdinAnswers {
    async fn next_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }
}

/// A pre-recorded user, for tests and demos.
///
/// Each line can be delayed to simulate typing time. Once the script runs
/// out the source either reports end of input or waits forever, like a user
/// who walked away from the keyboard.
#[derive(Debug, Clone)]
pub struct ScriptedAnswers {
    lines: VecDeque<(Duration, String)>,
    hang_when_done: bool,
}

impl ScriptedAnswers {
    /// Lines delivered immediately, then end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|l| (Duration::ZERO, l.into()))
                .collect(),
            hang_when_done: false,
        }
    }

    /// A user who never types anything.
    pub fn silent() -> Self {
        Self::new(Vec::<String>::new()).then_hang()
    }

    /// Wait `delay` before each line.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        for (d, _) in &mut self.lines {
            *d = delay;
        }
        self
    }

    /// Append one line delivered after `delay`.
    pub fn push(mut self, delay: Duration, line: impl Into<String>) -> Self {
        self.lines.push_back((delay, line.into()));
        self
    }

    /// Never report end of input; block forever instead.
    pub fn then_hang(mut self) -> Self {
        self.hang_when_done = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_line(&mut self) -> Option<String> {
        match self.lines.pop_front() {
            Some((delay, line)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Some(line)
            }
            None if self.hang_when_done => std::future::pending().await,
            None => None,
        }
    }
}
