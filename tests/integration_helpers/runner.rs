use std::future::Future;
use std::net::TcpListener;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use log::{debug, info, warn};
use tokio::net::TcpStream;
use tokio::process::{Child, Command};

const STARTUP_TIMEOUT: Duration = Duration::from_secs(30);
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(15);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Path of the server executable to run.
///
/// Uses the binary built by Cargo for this test run, unless `POKEDEX_SERVER_EXE` points to
/// another (packaged) executable.
pub fn server_exe() -> String {
    std::env::var("POKEDEX_SERVER_EXE")
        .unwrap_or_else(|_| env!("CARGO_BIN_EXE_pokedex_cassandra").to_string())
}

pub fn free_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("failed to bind ephemeral port")?;
    Ok(listener.local_addr()?.port())
}

/// A running server process. Killed if dropped before [`stop`](ServerProcess::stop) completes.
pub struct ServerProcess {
    child: Child,
    port: u16,
}

impl ServerProcess {
    /// Spawns the server with `config_file` as argument, listening on `port`, then waits
    /// until the port accepts connections.
    pub async fn start(exe: &str, config_file: &Path, port: u16) -> anyhow::Result<Self> {
        info!("Starting {} on port {}", exe, port);
        let child = Command::new(exe)
            .arg(config_file)
            .current_dir(env!("CARGO_MANIFEST_DIR"))
            .env("POKEDEX__SERVER__HOST", "127.0.0.1")
            .env("POKEDEX__SERVER__PORT", port.to_string())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", exe))?;

        let mut process = Self { child, port };
        process.wait_for_port().await?;

        Ok(process)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn wait_for_port(&mut self) -> anyhow::Result<()> {
        let deadline = Instant::now() + STARTUP_TIMEOUT;

        loop {
            if let Some(status) = self.child.try_wait()? {
                bail!("server process exited during startup: {}", status);
            }
            if TcpStream::connect(("127.0.0.1", self.port)).await.is_ok() {
                debug!("Server is listening on port {}", self.port);
                return Ok(());
            }
            if Instant::now() > deadline {
                bail!("server did not open port {} within {:?}", self.port, STARTUP_TIMEOUT);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Runs `stop_command` to ask the server to exit, then waits for the process to end.
    ///
    /// The process is killed if the stop command fails or the process outlives the timeout.
    pub async fn stop<F, T>(mut self, stop_command: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        let stop_result = stop_command.await;
        if stop_result.is_err() {
            warn!("Stop command failed; killing server process");
            self.child.kill().await?;
            return stop_result;
        }

        match tokio::time::timeout(SHUTDOWN_TIMEOUT, self.child.wait()).await {
            Ok(status) => {
                let status = status?;
                info!("Server process exited: {}", status);
                if !status.success() {
                    bail!("server process exited with {}", status);
                }
            },
            Err(_) => {
                warn!("Server still running after {:?}; killing it", SHUTDOWN_TIMEOUT);
                self.child.kill().await?;
                bail!("server did not stop within {:?}", SHUTDOWN_TIMEOUT);
            },
        }

        stop_result
    }
}
