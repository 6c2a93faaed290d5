// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Planar coordinates of traced diagram points.
//!
//! Coordinates are compared exactly by default. Junctions detected in a
//! skeletonized image keep their pixel position, so a root hint taken from
//! the same image matches bit for bit. A tolerance can be configured for
//! hints that come from elsewhere.
//!
//! # Example
//!
//! ```rust
//! use phylo_diagram::geometry::Point2;
//!
//! let p: Point2 = "290.932, 121.022".parse().unwrap();
//! assert_eq!(p, Point2::new(290.932, 121.022));
//! assert!(p.within(&Point2::new(290.9, 121.0), 0.05));
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the image plane.
#[derive(new, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Returns true if both axes differ by at most `tolerance`.
    ///
    /// A tolerance of `0.0` is exact equality.
    pub fn within(&self, other: &Point2, tolerance: f64) -> bool {
        if tolerance == 0.0 {
            return self == other;
        }
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Display for Point2 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsePointError {
    #[error("{0:?} is not of the form \"x,y\"")]
    BadPoint(String),
    #[error("invalid coordinate: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl FromStr for Point2 {
    type Err = ParsePointError;

    /// Parses `x,y`, optionally wrapped in parentheses, as printed by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref POINT_RE: Regex =
                Regex::new(r"^\s*\(?\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)?\s*$").unwrap();
        }

        let cap = POINT_RE
            .captures(s)
            .ok_or_else(|| ParsePointError::BadPoint(s.to_owned()))?;

        Ok(Point2::new(cap[1].parse()?, cap[2].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_parenthesized() {
        assert_eq!("3,4".parse::<Point2>().unwrap(), Point2::new(3.0, 4.0));
        assert_eq!(
            " ( -1.5 , 2e1 ) ".parse::<Point2>().unwrap(),
            Point2::new(-1.5, 20.0)
        );
    }

    #[test]
    fn display_round_trips() {
        let p = Point2::new(397.018, 102.384);
        assert_eq!(p.to_string(), "(397.018,102.384)");
        assert_eq!(p.to_string().parse::<Point2>().unwrap(), p);
    }

    #[test]
    fn parse_errors() {
        match "3;4".parse::<Point2>() {
            Err(ParsePointError::BadPoint(s)) => assert_eq!(s, "3;4"),
            _ => assert!(false),
        };
        match "a,4".parse::<Point2>() {
            Err(ParsePointError::ParseFloat(_)) => (),
            _ => assert!(false),
        };
    }

    #[test]
    fn exact_and_tolerant_match() {
        let p = Point2::new(10.0, 20.0);
        assert!(p.within(&Point2::new(10.0, 20.0), 0.0));
        assert!(!p.within(&Point2::new(10.0, 20.000001), 0.0));
        assert!(p.within(&Point2::new(10.5, 19.5), 0.5));
        assert!(!p.within(&Point2::new(10.6, 20.0), 0.5));
        assert_eq!(p.distance(&Point2::new(13.0, 24.0)), 5.0);
    }
}
