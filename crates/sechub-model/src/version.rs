// SPDX-License-Identifier: Apache-2.0

//! Semantic-version ordering shared by every backend.
//!
//! Versions are parsed leniently: a leading `v` is accepted and a missing minor or
//! patch component is read as zero, so `v1.2` orders as `1.2.0`. Build metadata
//! never affects the order.

use semver::Version;
use std::cmp::Ordering;

#[must_use]
pub fn parse_version(input: &str) -> Option<Version> {
    let trimmed = input.trim();
    let raw = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);
    if raw.is_empty() {
        return None;
    }
    let split_at = raw.find(['-', '+']).unwrap_or(raw.len());
    let (core, suffix) = raw.split_at(split_at);
    let padded = match core.matches('.').count() {
        0 => format!("{core}.0.0{suffix}"),
        1 => format!("{core}.0{suffix}"),
        _ => raw.to_string(),
    };
    Version::parse(&padded).ok()
}

/// Total order for a newest-first listing. Unparseable versions compare equal to
/// each other and after every parseable one, so a stable sort keeps them at the
/// tail in input order.
#[must_use]
pub fn compare_versions_descending(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(va), Some(vb)) => precedence(&vb, &va),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_newest_first<T, F>(items: &mut [T], version_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_versions_descending(version_of(a), version_of(b)));
}

fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch)
        .cmp(&(b.major, b.minor, b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}
