use {
    crate::analysis::{CostColumn, CostRow},
    tabled::{builder::Builder, settings::Style},
};

/// Renders rows as a table restricted to `columns`, in that order.
pub fn cost_table(rows: &[CostRow], columns: &[CostColumn]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.to_string()));
    for row in rows {
        builder.push_record(columns.iter().map(|c| c.cell(row)));
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// A two-column listing (e.g. the shading bands)
pub fn key_value_table<K: ToString, V: ToString>(headers: (&str, &str), pairs: &[(K, V)]) -> String {
    let mut builder = Builder::default();
    builder.push_record([headers.0.to_string(), headers.1.to_string()]);
    for (k, v) in pairs {
        builder.push_record([k.to_string(), v.to_string()]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_requested_columns_render() {
        let row = CostRow {
            year_month: "2024 03".to_string(),
            lead_source: "Acme".to_string(),
            leads: 42.0,
            allocations: 7.0,
            credits: 0.0,
            submissions: 0.0,
            closings: 0.0,
            expected_closings: 0.0,
            cost: Some(840.0),
            cost_per_lead: Some(20.0),
            cost_per_allocation: None,
            cost_per_credit: None,
            cost_per_submission: None,
            cost_per_closing: None,
            cost_per_expected_closing: None,
            pct_lead_to_allocate: None,
            pct_lead_to_credit: None,
            pct_lead_to_submit: None,
            pct_lead_to_close: None,
            pct_expected_lead_to_close: None,
        };
        let out = cost_table(&[row], &[CostColumn::LeadSource, CostColumn::Leads, CostColumn::CostPerAllocation]);
        assert!(out.contains("Lead Source"));
        assert!(out.contains("Acme"));
        assert!(out.contains("42"));
        assert!(out.contains(" - "));
        assert!(!out.contains("840"));
    }
}
