//! Property-test run profile shared by the hoshen suites.
//!
//! `PROPTEST_CASES` scales the case count of every suite at once and
//! `HOSHEN_PBT_FORK` runs cases in forked subprocesses. Unparsable values are
//! logged and ignored.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const HOSHEN_PBT_FORK_ENV_KEY: &str = "HOSHEN_PBT_FORK";

/// Case count and fork mode for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the process environment.
    ///
    /// Suites run in-process with `default_cases` cases unless overridden.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoshen_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(128);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self::from_lookup(default_cases, |key| env::var(key).ok())
    }

    /// Resolves the profile through `lookup` instead of the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoshen_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, |key| {
    ///     (key == "PROPTEST_CASES").then(|| "512".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 512);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup(default_cases: u32, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cases = lookup(PROPTEST_CASES_ENV_KEY)
            .and_then(|raw| accept(PROPTEST_CASES_ENV_KEY, &raw, parse_cases(&raw)))
            .unwrap_or(default_cases);
        let fork = lookup(HOSHEN_PBT_FORK_ENV_KEY)
            .and_then(|raw| accept(HOSHEN_PBT_FORK_ENV_KEY, &raw, parse_switch(&raw)))
            .unwrap_or(false);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[rustfmt::skip]
    #[must_use]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[rustfmt::skip]
    #[must_use]
    pub fn fork(&self) -> bool { self.fork }
}

fn accept<T>(key: &'static str, raw: &str, parsed: Option<T>) -> Option<T> {
    if parsed.is_none() {
        tracing::warn!(env = key, raw, "ignoring unparsable property-test override");
    }
    parsed
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&cases| cases > 0)
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
