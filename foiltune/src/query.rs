//! Query-string boundary for [`SetupInput`].
//!
//! A setup is shared as a flat `application/x-www-form-urlencoded` string
//! (for example the query part of a link), keyed by the camelCase field
//! names:
//!
//! ```text
//! riderKg=82&discipline=wing&frontAreaCm2=1400&...&trackFromTailCm=38.5
//! ```
//!
//! Parsing is forgiving about missing data: absent or empty numeric fields
//! fall back to the defaults in [`crate::setup::defaults`] (or to a caller's
//! base profile), and an absent or empty `trackFromTailCm` means "no current
//! position". It is strict about
//! wrong data: a value that is present but not a number, or names no known
//! discipline/goal, is an error.

use std::collections::HashMap;

use thiserror::Error;
use tracing::trace;

use crate::setup::{Discipline, Goal, ParseEnumError, SetupInput};

/// Result type for query parsing.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while turning a query string into a [`SetupInput`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A closed-enumeration field holds a value outside the enumeration.
    #[error("invalid value '{value}' for '{key}': {source}")]
    InvalidEnumValue {
        key: &'static str,
        value: String,
        #[source]
        source: ParseEnumError,
    },

    /// A numeric field holds something that is not a number.
    #[error("invalid number '{value}' for '{key}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Query keys, in the order [`input_to_query`] writes them.
pub mod keys {
    pub const RIDER_KG: &str = "riderKg";
    pub const DISCIPLINE: &str = "discipline";
    pub const FRONT_AREA_CM2: &str = "frontAreaCm2";
    pub const FRONT_AR: &str = "frontAR";
    pub const STAB_AREA_CM2: &str = "stabAreaCm2";
    pub const MAST_CM: &str = "mastCm";
    pub const FUSE_CM: &str = "fuseCm";
    pub const BOARD_LITERS: &str = "boardLiters";
    pub const CONDITION: &str = "condition";
    pub const GOAL: &str = "goal";
    pub const TRACK_FROM_TAIL_CM: &str = "trackFromTailCm";

    pub const ALL: [&str; 11] = [
        RIDER_KG,
        DISCIPLINE,
        FRONT_AREA_CM2,
        FRONT_AR,
        STAB_AREA_CM2,
        MAST_CM,
        FUSE_CM,
        BOARD_LITERS,
        CONDITION,
        GOAL,
        TRACK_FROM_TAIL_CM,
    ];
}

/// Decoded query parameters. The first occurrence of a repeated key wins.
struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut values = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if !keys::ALL.iter().any(|k| *k == key) {
                trace!(key = %key, "Ignoring unknown query key");
                continue;
            }
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    /// Raw value, `None` when the key is absent.
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Raw value, `None` when the key is absent or empty.
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    fn number(&self, key: &'static str, fallback: f64) -> QueryResult<f64> {
        match self.non_empty(key) {
            Some(raw) => parse_number(key, raw),
            None => Ok(fallback),
        }
    }

    fn optional_number(&self, key: &'static str) -> QueryResult<Option<f64>> {
        self.non_empty(key)
            .map(|raw| parse_number(key, raw))
            .transpose()
    }

    fn discipline(&self, fallback: Discipline) -> QueryResult<Discipline> {
        match self.non_empty(keys::DISCIPLINE) {
            Some(raw) => raw.parse().map_err(|source| QueryError::InvalidEnumValue {
                key: keys::DISCIPLINE,
                value: raw.to_string(),
                source,
            }),
            None => Ok(fallback),
        }
    }

    fn goal(&self, fallback: Goal) -> QueryResult<Goal> {
        match self.non_empty(keys::GOAL) {
            Some(raw) => raw.parse().map_err(|source| QueryError::InvalidEnumValue {
                key: keys::GOAL,
                value: raw.to_string(),
                source,
            }),
            None => Ok(fallback),
        }
    }
}

fn parse_number(key: &'static str, raw: &str) -> QueryResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| QueryError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

/// Parses a query string (with or without a leading `?`) into a
/// [`SetupInput`], using the built-in defaults for anything missing.
pub fn parse_query_to_input(query: &str) -> QueryResult<SetupInput> {
    parse_query_with_base(query, &SetupInput::default())
}

/// Parses a query string on top of `base`: absent or empty fields keep the
/// value from `base` instead of the built-in default.
///
/// Unknown keys are ignored. `condition` is taken verbatim when present,
/// even if empty.
pub fn parse_query_with_base(query: &str, base: &SetupInput) -> QueryResult<SetupInput> {
    let params = QueryParams::parse(query);

    let track_from_tail_cm = params
        .optional_number(keys::TRACK_FROM_TAIL_CM)?
        .or(base.track_from_tail_cm);

    Ok(SetupInput {
        rider_kg: params.number(keys::RIDER_KG, base.rider_kg)?,
        discipline: params.discipline(base.discipline)?,
        front_area_cm2: params.number(keys::FRONT_AREA_CM2, base.front_area_cm2)?,
        front_ar: params.number(keys::FRONT_AR, base.front_ar)?,
        stab_area_cm2: params.number(keys::STAB_AREA_CM2, base.stab_area_cm2)?,
        mast_cm: params.number(keys::MAST_CM, base.mast_cm)?,
        fuse_cm: params.number(keys::FUSE_CM, base.fuse_cm)?,
        board_liters: params.number(keys::BOARD_LITERS, base.board_liters)?,
        condition: params
            .get(keys::CONDITION)
            .unwrap_or(base.condition.as_str())
            .to_string(),
        goal: params.goal(base.goal)?,
        track_from_tail_cm,
    })
}

/// Serialises `input` as a query string without a leading `?`.
///
/// Every field is written as a string value; `trackFromTailCm` is omitted
/// when unset so that "unset" and "zero" stay distinguishable.
pub fn input_to_query(input: &SetupInput) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query
        .append_pair(keys::RIDER_KG, &input.rider_kg.to_string())
        .append_pair(keys::DISCIPLINE, input.discipline.as_str())
        .append_pair(keys::FRONT_AREA_CM2, &input.front_area_cm2.to_string())
        .append_pair(keys::FRONT_AR, &input.front_ar.to_string())
        .append_pair(keys::STAB_AREA_CM2, &input.stab_area_cm2.to_string())
        .append_pair(keys::MAST_CM, &input.mast_cm.to_string())
        .append_pair(keys::FUSE_CM, &input.fuse_cm.to_string())
        .append_pair(keys::BOARD_LITERS, &input.board_liters.to_string())
        .append_pair(keys::CONDITION, &input.condition)
        .append_pair(keys::GOAL, input.goal.as_str());
    if let Some(track) = input.track_from_tail_cm {
        query.append_pair(keys::TRACK_FROM_TAIL_CM, &track.to_string());
    }
    query.finish()
}
