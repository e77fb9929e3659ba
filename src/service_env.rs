//! Information about the service's runtime environment.

// Unfortunately, strum's `EnumIs` generates undocumented methods
#![allow(missing_docs)]

#[cfg(test)]
use std::cell::Cell;
use std::env;
use std::sync::LazyLock;

use strum::{AsRefStr, Display, EnumIs, EnumString};

/// Environment in which service is running.
///
/// This is controlled by the `POKEDEX_ENV` environment variable (see [`current`](ServiceEnv::current)).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, AsRefStr, Display, EnumIs, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ServiceEnv {
    /// Service is running in a development environment.
    ///
    /// When running in `Development`, exception envelopes returned by endpoints include the
    /// complete error description, with all causes.
    Development,

    /// Service is running in a production environment.
    ///
    /// When running in `Production`, exception envelopes only include the error message and
    /// its direct cause. This is the default environment value unless specified otherwise.
    #[default]
    Production,
}

impl ServiceEnv {
    /// Returns the current service runtime environment.
    ///
    /// By default, this will return [`Production`](ServiceEnv::Production) to avoid any security
    /// issue. To override this, set the `POKEDEX_ENV` environment variable to a value that
    /// corresponds to an enum variant (it is case-insensitive).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use log::info;
    /// use pokedex_cassandra::service_env::ServiceEnv;
    ///
    /// // Can be converted to a string for logging
    /// info!("Service is running in {}", ServiceEnv::current());
    ///
    /// // Can be compared to enable some features
    /// if ServiceEnv::current().is_development() {
    ///     info!("Error envelopes will include complete error descriptions");
    /// }
    /// ```
    pub fn current() -> Self {
        static CURRENT_ENV: LazyLock<ServiceEnv> = LazyLock::new(ServiceEnv::reload);

        Self::simulated().unwrap_or(*CURRENT_ENV)
    }

    /// Returns the current runtime environment, reloading it.
    ///
    /// This method should only be used in tests, when the value needs to be fresh; regular
    /// code should instead rely on [`current`](ServiceEnv::current).
    pub fn reload() -> Self {
        env::var("POKEDEX_ENV")
            .ok()
            .and_then(|env_var| env_var.as_str().try_into().ok())
            .unwrap_or_default()
    }

    /// Calls `f` while [`current`](ServiceEnv::current) returns `env` on this thread.
    ///
    /// Only available to unit tests.
    #[cfg(test)]
    pub fn simulate<F, R>(env: ServiceEnv, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let previous = SIMULATED_ENV.replace(Some(env));
        let result = f();
        SIMULATED_ENV.set(previous);

        result
    }

    #[cfg(test)]
    fn simulated() -> Option<Self> {
        SIMULATED_ENV.get()
    }

    #[cfg(not(test))]
    fn simulated() -> Option<Self> {
        None
    }
}

#[cfg(test)]
thread_local! {
    static SIMULATED_ENV: Cell<Option<ServiceEnv>> = const { Cell::new(None) };
}
