pub mod interests;
pub mod positions;
pub mod profiles;

pub use interests::Disposition;
pub use positions::PositionRow;
pub use profiles::ProfileRow;
