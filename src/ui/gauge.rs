use crate::{analysis::BakeGauge, config::DASHBOARD};

/// Terminal progress bar: filled cells for the baked share, light cells for the rest.
pub fn gauge_bar(gauge: &BakeGauge) -> String {
    let width = DASHBOARD.gauge.bar_width;
    let filled = ((gauge.bake.value() * width as f64).round() as usize).min(width);
    format!(
        "[{}{}] {}",
        "█".repeat(filled),
        "░".repeat(width - filled),
        gauge.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{BakePct, DaysElapsed},
        domain::YearMonth,
    };

    #[test]
    fn bar_fills_proportionally() {
        let gauge = BakeGauge {
            year_month: YearMonth::new(2024, 1).unwrap(),
            days_since: DaysElapsed::new(40),
            bake: BakePct::new(0.5),
            fell_back: false,
        };
        let bar = gauge_bar(&gauge);
        assert_eq!(bar.matches('█').count(), DASHBOARD.gauge.bar_width / 2);
        assert!(bar.ends_with("50%"));
    }
}
