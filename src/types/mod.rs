//! Domain records for the gym dashboard
//!
//! Records are stored as camelCase JSON with SCREAMING_SNAKE_CASE enum values.
//! Each record type comes with a draft (data for `create`) and, where the
//! collection supports `update`, a patch of optional fields.

mod lead;
mod member;
mod plan;
mod trainer;
mod user;

pub use lead::*;
pub use member::*;
pub use plan::*;
pub use trainer::*;
pub use user::*;
