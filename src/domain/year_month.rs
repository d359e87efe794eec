use {
    crate::utils::last_day_of_month,
    anyhow::{Context, Result, bail},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// A cohort month key such as "2024 03".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            bail!("month {} out of range 1..=12", month);
        }
        Ok(Self { year, month })
    }

    /// Parses the export key: four year digits, one separator, two month digits.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let (Some(year), Some(month)) = (text.get(..4), text.get(5..7)) else {
            bail!("YearMonth '{}' is not in 'YYYY MM' form", text);
        };
        let year: i32 = year
            .parse()
            .with_context(|| format!("bad year in YearMonth '{}'", text))?;
        let month: u32 = month
            .parse()
            .with_context(|| format!("bad month in YearMonth '{}'", text))?;
        Self::new(year, month)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.first_day().map(last_day_of_month)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export_keys() {
        let ym = YearMonth::parse("2024 03").unwrap();
        assert_eq!((ym.year, ym.month), (2024, 3));
        assert_eq!(YearMonth::parse("2023-11").unwrap().month, 11);
        assert_eq!(ym.last_day(), NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(ym.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(YearMonth::parse("2024").is_err());
        assert!(YearMonth::parse("2024 13").is_err());
        assert!(YearMonth::parse("abcd 01").is_err());
    }
}
