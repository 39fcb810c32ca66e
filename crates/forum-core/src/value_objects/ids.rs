//! Typed entity identifiers
//!
//! Every table uses a store-assigned 32-bit identity key. Each entity gets its
//! own newtype so a `ThreadId` can never be passed where a `ReplyId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an identifier from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create an identifier from a raw key value
            #[inline]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the inner key value
            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i32>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }
    };
}

entity_id!(
    /// User (author) identifier
    UserId
);
entity_id!(
    /// Instructor record identifier
    InstructorId
);
entity_id!(
    /// Discussion group identifier
    DiscussionGroupId
);
entity_id!(
    /// Discussion identifier
    DiscussionId
);
entity_id!(
    /// Thread identifier
    ThreadId
);
entity_id!(
    /// Reply identifier
    ReplyId
);
