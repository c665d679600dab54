//! Inclusive calendar year ranges

use crate::error::RangeError;

/// An inclusive, ascending range of calendar years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// 2010 through 2025, sixteen rows
    pub const DEFAULT: YearRange = YearRange {
        start: 2010,
        end: 2025,
    };

    pub fn new(start: i32, end: i32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering one calendar year
    #[must_use]
    pub const fn single(year: i32) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Number of years in the range (always at least one)
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Ranges can't be empty; kept for API symmetry with `len`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Iterate years in ascending order
    pub fn years(&self) -> impl Iterator<Item = i32> + use<> {
        self.start..=self.end
    }

    /// Collect the years into a vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.years().collect()
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = YearRange::default();
        assert_eq!(range.start(), 2010);
        assert_eq!(range.end(), 2025);
        assert_eq!(range.len(), 16);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            YearRange::new(2012, 2011),
            Err(RangeError::Inverted {
                start: 2012,
                end: 2011
            })
        );
    }

    #[test]
    fn test_single_year_range() {
        let range = YearRange::new(2018, 2018).unwrap();
        assert_eq!(range, YearRange::single(2018));
        assert_eq!(range.len(), 1);
        assert_eq!(range.to_vec(), vec![2018]);
    }

    #[test]
    fn test_years_ascending_and_contains() {
        let range = YearRange::new(2010, 2013).unwrap();
        assert_eq!(range.to_vec(), vec![2010, 2011, 2012, 2013]);
        assert!(range.contains(2010));
        assert!(range.contains(2013));
        assert!(!range.contains(2014));
        assert!(!range.contains(2009));
    }
}
