//! Helpers to connect to the Pokedex Cassandra database.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use scylla::client::execution_profile::ExecutionProfile;
use scylla::client::session_builder::SessionBuilder;
use scylla::policies::load_balancing::DefaultPolicy;

use crate::config::ConnectionConfig;
use crate::Error;

/// A session to the Cassandra cluster.
///
/// A single session is shared by all the workers of the web application. The driver is
/// asynchronous and multiplexes requests over its connections, so this is safe to share.
pub type Session = Arc<scylla::client::session::Session>;

/// Time to wait between two connection attempts in [`wait_for_database`].
pub const RETRY_INTERVAL: Duration = Duration::from_millis(250);

/// Default time to wait for the database in [`wait_for_database`].
pub const DEFAULT_READINESS_TIMEOUT: Duration = Duration::from_secs(60);

/// Opens a [`Session`] to the Cassandra cluster described by `connection`.
///
/// If a [`local_datacenter`](ConnectionConfig::local_datacenter) is configured, requests
/// will be routed to nodes of that datacenter in priority.
pub async fn connect(connection: &ConnectionConfig) -> crate::Result<Session> {
    debug!("Opening database session to {}", connection.known_node());

    let mut builder = SessionBuilder::new().known_node(connection.known_node());
    if let Some(datacenter) = &connection.local_datacenter {
        let policy = DefaultPolicy::builder()
            .prefer_datacenter(datacenter.clone())
            .build();
        let profile = ExecutionProfile::builder()
            .load_balancing_policy(policy)
            .build();
        builder = builder.default_execution_profile_handle(profile.into_handle());
    }

    Ok(Arc::new(builder.build().await?))
}

/// Waits until the database accepts sessions, or until `timeout` has elapsed.
///
/// A session is opened every [`RETRY_INTERVAL`] until one succeeds; it is then closed right away.
/// If the database is still unreachable once `timeout` has passed, returns
/// [`DatabaseNotReady`](Error::DatabaseNotReady).
pub async fn wait_for_database(
    connection: &ConnectionConfig,
    timeout: Duration,
) -> crate::Result<()> {
    let deadline = Instant::now() + timeout;

    loop {
        match connect(connection).await {
            Ok(session) => {
                info!("Database is running at {}", connection.known_node());
                drop(session);
                return Ok(());
            },
            Err(err) => {
                trace!("Connection failed: {}", err);
                if Instant::now() > deadline {
                    return Err(Error::DatabaseNotReady { timeout });
                }
                tokio::time::sleep(RETRY_INTERVAL).await;
            },
        }
    }
}
