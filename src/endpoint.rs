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

//! Endpoint templates of the RcodeZero API, relative to `<base>/<version>`.
//!
//! Path parameters are written as `{name}` and filled in with
//! [`interpolate`] before the request is fired.

pub const ZONES: &str = "/zones";
pub const ZONE: &str = "/zones/{zone}";
pub const ZONE_RRSETS: &str = "/zones/{zone}/rrsets";
pub const ZONE_TRANSFER: &str = "/zones/{zone}/retrieve";

pub const DNSSEC_SIGN: &str = "/zones/{zone}/sign";
pub const DNSSEC_UNSIGN: &str = "/zones/{zone}/unsign";
pub const DNSSEC_KEY_ROLLOVER: &str = "/zones/{zone}/keyrollover";
pub const DNSSEC_DS_UPDATE: &str = "/zones/{zone}/dsupdate";
pub const DNSSEC_SIMULATE_DS_SEEN: &str = "/zones/{zone}/simulatedsseen";
pub const DNSSEC_SIMULATE_DS_REMOVED: &str = "/zones/{zone}/simulatedsremoved";

pub const ZONE_STATS_QUERIES: &str = "/zones/{zone}/stats/queries";
pub const ZONE_STATS_MAGNITUDE: &str = "/zones/{zone}/stats/magnitude";
pub const ZONE_STATS_QNAMES: &str = "/zones/{zone}/stats/qnames";
pub const ZONE_STATS_NXDOMAINS: &str = "/zones/{zone}/stats/nxdomains";

pub const ACC_STATS_QUERIES: &str = "/stats/queries";
pub const ACC_STATS_COUNTRIES: &str = "/stats/countries";
pub const ACC_STATS_TOP_QNAMES: &str = "/stats/topqnames";
pub const ACC_STATS_TOP_NXDOMAINS: &str = "/stats/topnxdomains";
pub const ACC_STATS_TOP_MAGNITUDE: &str = "/stats/topmagnitude";
pub const ACC_STATS_TOP_ZONES: &str = "/stats/topzones";

pub const ACC_SETTINGS: &str = "/settings";
pub const ACC_SECONDARIES: &str = "/settings/secondaries";
pub const ACC_TSIGOUT: &str = "/settings/tsigout";

pub const MESSAGES: &str = "/messages";
pub const MESSAGE: &str = "/messages/{id}";

pub const REPORT_PROBLEMATIC_ZONES: &str = "/reports/problematiczones";

/// Replaces every `{name}` placeholder in `template` with the matching
/// value from `params`. Placeholders without a value are left as-is.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (name, value) in params {
        path = path.replace(&format!("{{{}}}", name), value);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_fills_single_placeholder() {
        assert_eq!(
            interpolate(ZONE, &[("zone", "testzone1.at")]),
            "/zones/testzone1.at"
        );
    }

    #[test]
    fn interpolate_fills_placeholder_mid_path() {
        assert_eq!(
            interpolate(ZONE_RRSETS, &[("zone", "testzone1.at")]),
            "/zones/testzone1.at/rrsets"
        );
    }

    #[test]
    fn interpolate_without_params_returns_template() {
        assert_eq!(interpolate(ZONES, &[]), "/zones");
    }

    #[test]
    fn interpolate_ignores_unknown_params() {
        assert_eq!(interpolate(MESSAGES, &[("id", "56007")]), "/messages");
        assert_eq!(interpolate(MESSAGE, &[("id", "56007")]), "/messages/56007");
    }
}
