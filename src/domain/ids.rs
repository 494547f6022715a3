//! Type-safe numeric record identifiers.
//!
//! Every collection gets its own newtype over `u32` so that, say, a
//! [`CompanyId`] can never be passed where an [`EventId`] is expected.
//! Identifiers are assigned by the [`super::Repository`] as
//! `max(existing) + 1`, starting at 1.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw numeric identifier.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw numeric identifier.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id!(
    /// Identifier of an [`super::Event`].
    EventId
);
record_id!(
    /// Identifier of a [`super::Contact`].
    ContactId
);
record_id!(
    /// Identifier of a [`super::Company`].
    CompanyId
);
record_id!(
    /// Identifier of a [`super::Product`].
    ProductId
);
record_id!(
    /// Identifier of an [`super::Attendance`] registration.
    AttendanceId
);
record_id!(
    /// Identifier of a [`super::MeetingRequest`].
    MeetingId
);
record_id!(
    /// Identifier of a [`super::Deal`].
    DealId
);

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let Ok(json) = serde_json::to_string(&CompanyId::new(42)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "42");

        let Ok(id) = serde_json::from_str::<EventId>("7") else {
            panic!("deserialization failed");
        };
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(DealId::new(2) < DealId::new(10));
        assert_eq!(u32::from(MeetingId::from(5)), 5);
        assert_eq!(format!("{}", AttendanceId::new(3)), "3");
    }
}
