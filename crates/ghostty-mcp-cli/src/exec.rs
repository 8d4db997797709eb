//! Running the ghostty binary and capturing its output.

use std::future::Future;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Exit code reported when the process could not be run, was killed, or died
/// from a signal.
pub const FAILED_EXIT_CODE: i32 = -1;

/// How long to keep draining pipes once the process is gone.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Captured result of one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecOutput {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Process exit code
    pub exit_code: i32,
}

impl ExecOutput {
    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Something that can run the ghostty CLI.
///
/// Implementations never fail: every problem (missing binary, timeout,
/// non-zero exit) is reported through [`ExecOutput::exit_code`] and
/// [`ExecOutput::stderr`].
pub trait CliInvoker: Send + Sync {
    /// Run the CLI with `args`, killing it once `timeout` elapses.
    fn invoke(
        &self,
        args: Vec<String>,
        timeout: Duration,
    ) -> impl Future<Output = ExecOutput> + Send;
}

/// Invoker backed by a real `ghostty` process.
#[derive(Debug, Clone)]
pub struct GhosttyCli {
    binary: String,
}

impl GhosttyCli {
    /// Create an invoker for the given binary name or path.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Binary this invoker runs.
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for GhosttyCli {
    fn default() -> Self {
        Self::new("ghostty")
    }
}

impl CliInvoker for GhosttyCli {
    async fn invoke(&self, args: Vec<String>, timeout: Duration) -> ExecOutput {
        debug!("Running {} {:?} (timeout {:?})", self.binary, args, timeout);

        let mut child = match Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to spawn {}: {}", self.binary, e);
                return ExecOutput {
                    stdout: String::new(),
                    stderr: format!("Failed to run {}: {e}", self.binary),
                    exit_code: FAILED_EXIT_CODE,
                };
            }
        };

        let stdout = PipeCapture::spawn(child.stdout.take());
        let stderr = PipeCapture::spawn(child.stderr.take());

        let exit_code = match tokio::time::timeout(timeout, child.wait()).await {
            Ok(Ok(status)) => status.code().unwrap_or(FAILED_EXIT_CODE),
            Ok(Err(e)) => {
                warn!("Failed to wait for {}: {}", self.binary, e);
                FAILED_EXIT_CODE
            }
            Err(_) => {
                warn!(
                    "{} {:?} timed out after {:?}, killing it",
                    self.binary, args, timeout
                );
                if let Err(e) = child.kill().await {
                    warn!("Failed to kill {}: {}", self.binary, e);
                }
                FAILED_EXIT_CODE
            }
        };

        let output = ExecOutput {
            stdout: stdout.finish().await,
            stderr: stderr.finish().await,
            exit_code,
        };

        debug!(
            "{} {:?} exited with {} ({} bytes stdout, {} bytes stderr)",
            self.binary,
            args,
            output.exit_code,
            output.stdout.len(),
            output.stderr.len()
        );

        output
    }
}

/// Background reader collecting one pipe into a shared buffer, so whatever
/// arrived is still available if the reader has to be abandoned.
struct PipeCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
    task: Option<JoinHandle<()>>,
}

impl PipeCapture {
    fn spawn<R>(pipe: Option<R>) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let task = pipe.map(|mut pipe| {
            let sink = Arc::clone(&buffer);
            tokio::spawn(async move {
                let mut chunk = [0u8; 8192];
                loop {
                    match pipe.read(&mut chunk).await {
                        Ok(0) => break,
                        Ok(n) => {
                            if let Ok(mut buf) = sink.lock() {
                                buf.extend_from_slice(&chunk[..n]);
                            }
                        }
                        Err(e) => {
                            debug!("Pipe read failed: {}", e);
                            break;
                        }
                    }
                }
            })
        });
        Self { buffer, task }
    }

    /// Wait briefly for the pipe to close, then return what was captured.
    async fn finish(mut self) -> String {
        if let Some(mut task) = self.task.take() {
            if tokio::time::timeout(DRAIN_GRACE, &mut task).await.is_err() {
                debug!("Pipe still open after process exit, keeping partial output");
                task.abort();
            }
        }
        match self.buffer.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => String::new(),
        }
    }
}
