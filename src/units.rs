// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denominations and denomination scales
//!
//! A [`Unit`] is one denomination of a currency (satoshi, bitcoin, gwei),
//! described by its power-of-ten scale factor. A [`Units`] scale is the
//! family of compatible denominations an [`Amount`](crate::Amount) is
//! expressed in, always kept sorted from the smallest (`base`) to the
//! largest (`top`) unit.

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::errors::UnitsError;

/// A denomination: a power-of-ten scale factor with a display name and code
///
/// The multiplier (`10^decimals`) is computed once, exactly, so converting
/// between units never goes through floating point.
///
/// # Examples
///
/// ```
/// use bigamount::{BigInt, Unit};
///
/// let gwei = Unit::new(9, "Gwei", "GWei");
/// assert_eq!(gwei.decimals(), 9);
/// assert_eq!(gwei.multiplier(), &BigInt::from(1_000_000_000u64));
/// assert_eq!(gwei.to_string(), "GWei");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UnitRepr", into = "UnitRepr")]
pub struct Unit {
    decimals: u32,
    name: String,
    code: String,
    multiplier: BigInt,
}

impl Unit {
    /// Create a unit with an explicit code
    pub fn new(decimals: u32, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            decimals,
            name: name.into(),
            code: code.into(),
            multiplier: BigInt::from(10u8).pow(decimals),
        }
    }

    /// Create a unit whose code is its name
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::Unit;
    ///
    /// let unit = Unit::with_name(0, "Wei");
    /// assert_eq!(unit.code(), "Wei");
    /// ```
    pub fn with_name(decimals: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(decimals, name.clone(), name)
    }

    /// Create a unit from a signed decimal count, rejecting negative values
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::Unit;
    ///
    /// assert!(Unit::try_new(3, "Kilo", "k").is_ok());
    /// assert!(Unit::try_new(-3, "Milli", "m").is_err());
    /// ```
    pub fn try_new(
        decimals: i64,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, UnitsError> {
        let decimals =
            u32::try_from(decimals).map_err(|_| UnitsError::invalid_decimals(decimals))?;
        Ok(Self::new(decimals, name, code))
    }

    /// Power of ten relative to the base granularity
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Human-readable name, e.g. "Bitcoin"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short code, e.g. "BTC"
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Exact `10^decimals`
    pub fn multiplier(&self) -> &BigInt {
        &self.multiplier
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[derive(Serialize, Deserialize)]
struct UnitRepr {
    decimals: i64,
    name: String,
    #[serde(default)]
    code: Option<String>,
}

impl TryFrom<UnitRepr> for Unit {
    type Error = UnitsError;

    fn try_from(repr: UnitRepr) -> Result<Self, Self::Error> {
        let code = repr.code.unwrap_or_else(|| repr.name.clone());
        Unit::try_new(repr.decimals, repr.name, code)
    }
}

impl From<Unit> for UnitRepr {
    fn from(unit: Unit) -> Self {
        Self {
            decimals: i64::from(unit.decimals),
            name: unit.name,
            code: Some(unit.code),
        }
    }
}

/// Constraints for [`Units::optimal_unit`]
///
/// All constraints are optional; the default query scans the whole scale
/// down to its base unit with no tolerance.
///
/// # Examples
///
/// ```
/// use bigamount::{BigInt, OptimalUnitQuery, Unit, Units};
///
/// let units = Units::new(vec![
///     Unit::new(0, "Some", "S"),
///     Unit::new(3, "Kilo Some", "kS"),
///     Unit::new(6, "Mega Some", "MS"),
/// ]).unwrap();
///
/// let query = OptimalUnitQuery::new().tolerance(3);
/// assert_eq!(units.optimal_unit(&BigInt::from(50), &query).code(), "kS");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimalUnitQuery {
    /// Never select a unit below this one (default: the scale's base)
    pub floor: Option<Unit>,
    /// Only consider these units (default: every unit of the scale)
    pub candidates: Option<Vec<Unit>>,
    /// Accept a coarser unit if the magnitude shows within this many fraction digits
    pub tolerance: Option<u32>,
}

impl OptimalUnitQuery {
    /// Query with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the floor unit
    pub fn floor(mut self, unit: Unit) -> Self {
        self.floor = Some(unit);
        self
    }

    /// Restrict the search to the given units
    pub fn candidates(mut self, units: impl IntoIterator<Item = Unit>) -> Self {
        self.candidates = Some(units.into_iter().collect());
        self
    }

    /// Set the decimal tolerance
    pub fn tolerance(mut self, decimals: u32) -> Self {
        self.tolerance = Some(decimals);
        self
    }
}

/// An ordered family of compatible units sharing one base
///
/// Units are sorted ascending by decimals on construction (stable for equal
/// decimals), and the scale is immutable afterwards. Cloning is cheap: all
/// clones share the same unit list.
///
/// # Examples
///
/// ```
/// use bigamount::{Unit, Units};
///
/// let units = Units::new(vec![
///     Unit::new(8, "Bitcoin", "BTC"),
///     Unit::new(0, "Satoshi", "sat"),
/// ]).unwrap();
///
/// assert_eq!(units.base().code(), "sat");
/// assert_eq!(units.top().code(), "BTC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Unit>", into = "Vec<Unit>")]
pub struct Units {
    units: Arc<[Unit]>,
}

impl Units {
    /// Create a scale, sorting the units by decimals
    ///
    /// Returns [`UnitsError::EmptyScale`] when no units are given.
    pub fn new(units: impl IntoIterator<Item = Unit>) -> Result<Self, UnitsError> {
        let mut units: Vec<Unit> = units.into_iter().collect();
        if units.is_empty() {
            return Err(UnitsError::EmptyScale);
        }
        units.sort_by_key(Unit::decimals);
        Ok(Self {
            units: units.into(),
        })
    }

    /// Create a scale from a unit and any number of others
    ///
    /// Infallible since the scale can never be empty. Units are sorted the
    /// same way as in [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Unit, Units};
    ///
    /// let units = Units::with_base(Unit::new(0, "Gram", "g"), [Unit::new(3, "Kilogram", "kg")]);
    /// assert_eq!(units.len(), 2);
    /// ```
    pub fn with_base(base: Unit, others: impl IntoIterator<Item = Unit>) -> Self {
        let mut units: Vec<Unit> = std::iter::once(base).chain(others).collect();
        units.sort_by_key(Unit::decimals);
        Self {
            units: units.into(),
        }
    }

    /// Unit with the smallest decimals, the granularity amounts are stored in
    pub fn base(&self) -> &Unit {
        // Non-empty by construction
        &self.units[0]
    }

    /// Unit with the largest decimals
    pub fn top(&self) -> &Unit {
        &self.units[self.units.len() - 1]
    }

    /// Structural membership test
    pub fn contains(&self, unit: &Unit) -> bool {
        self.units.iter().any(|u| u == unit)
    }

    /// Find a unit by code or name, ignoring case
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{Unit, Units};
    ///
    /// let units = Units::new(vec![Unit::new(0, "Satoshi", "sat"), Unit::new(8, "Bitcoin", "BTC")]).unwrap();
    /// assert_eq!(units.find("bitcoin").map(Unit::code), Some("BTC"));
    /// assert_eq!(units.find("SAT").map(Unit::code), Some("sat"));
    /// assert!(units.find("eth").is_none());
    /// ```
    pub fn find(&self, code_or_name: &str) -> Option<&Unit> {
        let wanted = code_or_name.to_lowercase();
        self.units
            .iter()
            .find(|u| u.code.to_lowercase() == wanted || u.name.to_lowercase() == wanted)
    }

    /// Same as [`find`](Self::find), failing with [`UnitsError::InvalidUnit`]
    pub fn resolve(&self, code_or_name: &str) -> Result<&Unit, UnitsError> {
        self.find(code_or_name)
            .ok_or_else(|| UnitsError::unknown_unit(code_or_name))
    }

    /// Unit at `index` in ascending order
    pub fn get(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    /// Units in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.units.iter()
    }

    /// Units in ascending order
    pub fn as_slice(&self) -> &[Unit] {
        &self.units
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false, a scale has at least one unit
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Pick the largest unit the magnitude "fills"
    ///
    /// Candidates are scanned from the largest down. A candidate is accepted
    /// when `|magnitude| >= multiplier`, or, with a tolerance, when
    /// `|magnitude| * 10^tolerance >= multiplier`. The scan stops at the floor
    /// unit and returns it when nothing above qualified, so the search always
    /// yields a unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigamount::{BigInt, OptimalUnitQuery, Unit, Units};
    ///
    /// let units = Units::new(vec![
    ///     Unit::new(0, "Some", "S"),
    ///     Unit::new(3, "Kilo Some", "kS"),
    ///     Unit::new(6, "Mega Some", "MS"),
    /// ]).unwrap();
    ///
    /// let any = OptimalUnitQuery::default();
    /// assert_eq!(units.optimal_unit(&BigInt::from(999), &any).code(), "S");
    /// assert_eq!(units.optimal_unit(&BigInt::from(-56_700), &any).code(), "kS");
    /// assert_eq!(units.optimal_unit(&BigInt::from(2_000_000), &any).code(), "MS");
    /// ```
    pub fn optimal_unit(&self, magnitude: &BigInt, query: &OptimalUnitQuery) -> Unit {
        let floor = query.floor.as_ref().unwrap_or_else(|| self.base());
        let magnitude = magnitude.magnitude();
        let tolerated = query
            .tolerance
            .map(|decimals| magnitude * BigUint::from(10u8).pow(decimals));

        let mut candidates: Vec<&Unit> = match &query.candidates {
            Some(units) => units.iter().collect(),
            None => self.units.iter().collect(),
        };
        candidates.sort_by_key(|u| u.decimals);

        for unit in candidates.into_iter().rev() {
            if unit.decimals <= floor.decimals {
                break;
            }
            let multiplier = unit.multiplier.magnitude();
            let fits = magnitude >= multiplier
                || tolerated.as_ref().is_some_and(|t| t >= multiplier);
            if fits {
                tracing::trace!(unit = %unit.code, "selected optimal unit");
                return unit.clone();
            }
        }

        tracing::trace!(unit = %floor.code, "no unit above floor qualified");
        floor.clone()
    }

    /// Short label for error messages, `"<base>..<top>"`
    pub(crate) fn label(&self) -> String {
        if self.units.len() == 1 {
            self.base().code.clone()
        } else {
            format!("{}..{}", self.base().code, self.top().code)
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base().code)
    }
}

impl TryFrom<Vec<Unit>> for Units {
    type Error = UnitsError;

    fn try_from(units: Vec<Unit>) -> Result<Self, Self::Error> {
        Units::new(units)
    }
}

impl From<Units> for Vec<Unit> {
    fn from(units: Units) -> Self {
        units.units.to_vec()
    }
}

impl<'a> IntoIterator for &'a Units {
    type Item = &'a Unit;
    type IntoIter = std::slice::Iter<'a, Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
