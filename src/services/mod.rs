pub mod account_stats;
pub mod dnssec;
pub mod message;
pub mod report;
pub mod rrset;
pub mod settings;
pub mod zone;
pub mod zone_stats;
