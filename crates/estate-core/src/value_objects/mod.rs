//! Value objects - immutable domain primitives

mod listing_type;
mod role;
mod snowflake;

pub use listing_type::{ListingType, ListingTypeParseError};
pub use role::{Role, RoleParseError};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
