//! User records and their input/patch types.

use campusmart_foundation::UserId;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A registered marketplace user.
///
/// Optional contact/profile fields are stored present-but-nullable: a `None`
/// means "not provided", never "field missing". Read paths rely on this.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    /// Surrogate key, assigned at registration and immutable.
    pub id: UserId,
    /// Unique login name. Uniqueness is pre-checked by the caller.
    pub username: String,
    /// Opaque hash+salt string; hashing happens in the calling layer.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Phone number, if provided.
    pub phone: Option<String>,
    /// University/college campus.
    pub campus: Option<String>,
    /// Dormitory or housing location.
    pub dormitory: Option<String>,
    /// Profile image URL.
    pub profile_image: Option<String>,
    /// Free-form bio.
    pub bio: Option<String>,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Fields accepted at registration.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Opaque password hash.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Campus.
    pub campus: Option<String>,
    /// Dormitory.
    pub dormitory: Option<String>,
    /// Profile image URL.
    pub profile_image: Option<String>,
    /// Bio.
    pub bio: Option<String>,
}

/// Partial profile update.
///
/// `None` leaves a field untouched; for nullable fields, `Some(None)` clears
/// the stored value. This replaces the source system's shallow object merge
/// with per-field intent, so an update can never null a field by accident.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// Replaces the username.
    pub username: Option<String>,
    /// Replaces the password hash.
    pub password: Option<String>,
    /// Replaces the email.
    pub email: Option<String>,
    /// Replaces the display name.
    pub name: Option<String>,
    /// Sets or clears the phone number.
    pub phone: Option<Option<String>>,
    /// Sets or clears the campus.
    pub campus: Option<Option<String>>,
    /// Sets or clears the dormitory.
    pub dormitory: Option<Option<String>>,
    /// Sets or clears the profile image.
    pub profile_image: Option<Option<String>>,
    /// Sets or clears the bio.
    pub bio: Option<Option<String>>,
}
