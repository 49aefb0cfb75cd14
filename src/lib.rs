//! Rust SDK for the RcodeZero Anycast DNS management API
//!
//! Supported features:
//! - Zone management (list, get, create, edit, delete, transfer)
//! - Resource record set editing via PATCH change sets
//! - DNSSEC operations (sign, unsign, key rollover, DS events)
//! - Zone and account statistics
//! - Account settings, notifications and reports
//!
//! # Example
//! ```no_run
//! use rcodezero_sdk::Client;
//!
//! # async fn run() -> Result<(), rcodezero_sdk::Error> {
//! let client = Client::new("your-api-token")?;
//!
//! for zone in client.zones().list_all().await? {
//!     println!("{}", zone.domain);
//! }
//! # Ok(())
//! # }
//! ```

// Copyright 2025 rcodezero-sdk authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod services;
pub mod utils;

pub use client::{
    Client, ClientBuilder, ListOptions, Page, StatusResponse, HEADER_RATE_LIMIT,
    HEADER_RATE_REMAINING,
};
pub use error::{Error, Result};
pub use services::account_stats::{
    AccountStatsService, CountryQueryCount, QueryCount, TopMagnitude, TopNxDomain, TopQueryName,
    TopZone,
};
pub use services::dnssec::DnssecService;
pub use services::message::{Message, MessageService};
pub use services::report::{ProblematicZone, ReportService};
pub use services::rrset::{ChangeType, RRSet, RRSetEdit, RRSetService, Record};
pub use services::settings::{GlobalSettings, SettingsService};
pub use services::zone::{Zone, ZoneCreate, ZoneEdit, ZoneService};
pub use services::zone_stats::{Magnitude, NxDomain, QueryName, QueryStat, ZoneStatsService};
