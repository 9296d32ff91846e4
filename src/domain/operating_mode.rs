//! Startup-time operating mode and the reset gate derived from it.

/// Value of `PLATFORM` that enables destructive admin operations.
pub const DEV_PLATFORM: &str = "dev";

/// Deployment mode read once at startup from `PLATFORM`.
///
/// Anything other than exactly `dev`, including an unset variable, is
/// treated as a non-development deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingMode {
    Dev,
    #[default]
    Other,
}

impl OperatingMode {
    /// Parses the raw `PLATFORM` value.
    pub fn from_platform(platform: Option<&str>) -> Self {
        match platform {
            Some(DEV_PLATFORM) => Self::Dev,
            _ => Self::Other,
        }
    }

    /// Decides whether `POST /admin/reset` may run.
    pub fn reset_permission(self) -> ResetPermission {
        match self {
            Self::Dev => ResetPermission::Allowed,
            Self::Other => ResetPermission::Forbidden,
        }
    }

    /// Label used in the startup summary.
    ///
    /// `dev` for development; every other `PLATFORM` value, including an
    /// unset one, is reported as `non-dev` since the raw value is not kept.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dev => DEV_PLATFORM,
            Self::Other => "non-dev",
        }
    }
}

/// Outcome of the reset gate, evaluated on every reset call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPermission {
    Allowed,
    Forbidden,
}
