pub mod membership_level;

pub use membership_level::MembershipLevel;
