//! # Console I/O boundary.
//!
//! `Console` is the seam between the session loop and the terminal: the
//! loop writes menu lines through it and blocks on it for one line of input
//! at a time. Swapping it out is how the loop is tested without a terminal.
//!
//! ## Contract
//! - `read_line` returns the line **without** its trailing newline.
//! - `read_line` returns `Ok(None)` on end of input (EOF); the session
//!   treats that like the empty-input sentinel and terminates normally.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Line-oriented console used by the session loop.
#[async_trait]
pub trait Console: Send + Sync {
    /// Writes one line (a newline is appended) to the output stream.
    async fn write_line(&self, line: &str) -> std::io::Result<()>;

    /// Blocks for one line of input. `None` means end of input.
    async fn read_line(&self) -> std::io::Result<Option<String>>;
}

/// Real-terminal console over stdin/stdout.
pub struct StdConsole {
    input: Mutex<BufReader<Stdin>>,
}

impl StdConsole {
    /// Creates a console reading from stdin and writing to stdout.
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdConsole {
    async fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut out = tokio::io::stdout();
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await
    }

    async fn read_line(&self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.lock().await.read_line(&mut line).await?;
        if n == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
