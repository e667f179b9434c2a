// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use office_report_domain::ADMINISTRATOR_ID;
use office_report_persistence::{EmployeeData, Persistence, PersistenceError, SessionData};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Layout of session timestamps, matching `SQLite`'s `CURRENT_TIMESTAMP`.
const SESSION_TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The singleton administrator.
    ///
    /// Manages employee accounts, reviews and exports every report, and
    /// assigns and monitors tasks.
    Admin,
    /// A regular employee.
    ///
    /// Files their own daily reports and works through their own tasks.
    Employee,
}

impl Role {
    /// Canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
        }
    }

    /// The role held by the account with this ID.
    #[must_use]
    pub const fn for_employee(employee_id: i64) -> Self {
        if employee_id == ADMINISTRATOR_ID {
            Self::Admin
        } else {
            Self::Employee
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The employee record behind this session.
    pub employee_id: i64,
    /// The login name used.
    pub username: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee record behind this session
    /// * `username` - The login name used
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(employee_id: i64, username: String, role: Role) -> Self {
        Self {
            employee_id,
            username,
            role,
        }
    }

    /// Builds the actor for a stored employee.
    #[must_use]
    pub fn from_employee(employee: &EmployeeData) -> Self {
        Self::new(
            employee.employee_id,
            employee.username.clone(),
            Role::for_employee(employee.employee_id),
        )
    }
}

/// Configured administrator login.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    /// Administrator username.
    pub username: String,
    /// Administrator password, compared verbatim.
    pub password: String,
}

impl AdminCredentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the actor is the administrator.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The operation being attempted
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Employee => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from(Role::Admin.as_str()),
            }),
        }
    }

    /// Checks that the actor is a regular employee.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The operation being attempted
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is the administrator.
    pub fn require_employee(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Employee => Ok(()),
            Role::Admin => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from(Role::Employee.as_str()),
            }),
        }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session lifetime.
    const SESSION_DURATION: Duration = Duration::hours(12);

    /// Authenticates a user and creates a session.
    ///
    /// The configured administrator pair is checked first and yields a
    /// session for the administrator record. Any other login must name an
    /// active, non-administrator employee whose stored hash matches.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `admin` - The configured administrator credentials
    /// * `username` - The submitted username
    /// * `password` - The submitted password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `employee_data`)
    ///
    /// # Errors
    ///
    /// Returns the same generic authentication failure for every rejected
    /// login. Storage failures are reported as authentication failures with
    /// their cause.
    pub fn login(
        persistence: &mut Persistence,
        admin: &AdminCredentials,
        username: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, EmployeeData), AuthError> {
        let employee: EmployeeData = if admin.matches(username, password) {
            persistence
                .get_employee_by_id(ADMINISTRATOR_ID)
                .map_err(Self::map_persistence_error)?
                .ok_or_else(|| AuthError::AuthenticationFailed {
                    reason: String::from("Administrator account has not been created"),
                })?
        } else {
            Self::verify_employee(persistence, username.trim(), password)?
        };

        let session_token: String = Self::generate_session_token();
        let expires_at: String = Self::expiry_from(OffsetDateTime::now_utc())?;

        persistence
            .create_session(&session_token, employee.employee_id, &expires_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        let actor: AuthenticatedActor = AuthenticatedActor::from_employee(&employee);
        info!(
            employee_id = employee.employee_id,
            role = %actor.role,
            "Login succeeded"
        );

        Ok((session_token, actor, employee))
    }

    fn verify_employee(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<EmployeeData, AuthError> {
        let invalid = || AuthError::AuthenticationFailed {
            reason: String::from(INVALID_CREDENTIALS),
        };

        let Some(employee) = persistence
            .get_employee_by_username(username)
            .map_err(Self::map_persistence_error)?
        else {
            debug!("Login rejected: unknown username");
            return Err(invalid());
        };

        if employee.employee_id == ADMINISTRATOR_ID || !employee.is_active {
            debug!(
                employee_id = employee.employee_id,
                "Login rejected: account not eligible"
            );
            return Err(invalid());
        }

        let verified: bool = Persistence::verify_password(password, &employee.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !verified {
            debug!(employee_id = employee.employee_id, "Login rejected: bad password");
            return Err(invalid());
        }

        Ok(employee)
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// Touches the session's activity timestamp on success.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_actor`, `employee_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or its owner
    /// no longer exists or has been deactivated.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, EmployeeData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            PrimitiveDateTime::parse(&session.expires_at, SESSION_TIMESTAMP_FORMAT)
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Failed to parse session expiration: {e}"),
                })?
                .assume_utc();

        if OffsetDateTime::now_utc() > expires_at {
            warn!(session_id = session.session_id, "Rejected expired session");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let employee: EmployeeData = persistence
            .get_employee_by_id(session.employee_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Employee not found"),
            })?;

        if !employee.is_active {
            warn!(
                employee_id = employee.employee_id,
                "Rejected session for inactive employee"
            );
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Employee account is inactive"),
            });
        }

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        Ok((AuthenticatedActor::from_employee(&employee), employee))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be deleted.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })
    }

    /// Formats the expiry for a session created at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn expiry_from(now: OffsetDateTime) -> Result<String, AuthError> {
        (now + Self::SESSION_DURATION)
            .format(SESSION_TIMESTAMP_FORMAT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })
    }

    /// Generates a session token.
    ///
    /// Combines the creation time with 128 random bits.
    fn generate_session_token() -> String {
        let timestamp: i64 = OffsetDateTime::now_utc().unix_timestamp();
        format!(
            "session_{timestamp}_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
