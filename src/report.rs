//! Plain-text report rendering
//!
//! The report is the crate's only wire format: a header line naming the
//! inspected token, then one section per displayed denomination in fixed
//! Wei, Gwei, Ether order. Entries are column-aligned on the longest unit
//! label so every value starts at the same column. Conversions that
//! produced no value are omitted outright, never shown blank.

use crate::units::{ConvertedForm, Denomination};

/// Name the report header leads with
pub const TOOL_NAME: &str = "Weilens";

/// One report section: a source denomination and its rendered conversions
#[derive(Debug, Clone)]
pub struct Section {
    /// Denomination the inspected value is read as within this section
    pub source: Denomination,
    /// Conversions to the other denominations and USD, in declaration order
    pub forms: Vec<ConvertedForm>,
}

/// Render the full report, or `None` when no section has anything to show
pub fn render_report(token: &str, sections: &[Section]) -> Option<String> {
    let width = sections
        .iter()
        .flat_map(|section| section.forms.iter())
        .map(|form| form.unit.len())
        .max()?;

    let mut report = format!("{TOOL_NAME}: {token}");
    let mut rendered_any = false;

    for section in sections {
        if section.forms.is_empty() {
            continue;
        }
        rendered_any = true;
        report.push('\n');
        report.push_str(section.source.label());
        for form in &section.forms {
            report.push('\n');
            let label = format!("{}:", form.unit);
            // Pad past the longest label so values share a column.
            report.push_str(&format!("{:<pad$} {}", label, form.value, pad = width + 1));
        }
    }

    rendered_any.then_some(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(unit: &'static str, value: &str) -> ConvertedForm {
        ConvertedForm {
            unit,
            value: value.to_string(),
        }
    }

    #[test]
    fn aligns_values_on_the_longest_label() {
        let sections = vec![Section {
            source: Denomination::Wei,
            forms: vec![
                form("Gwei", "0.000000255"),
                form("Ether", "0.000000000000000255"),
                form("Usd", "$0.00"),
            ],
        }];

        let report = render_report("0xff", &sections).unwrap();
        assert_eq!(
            report,
            "Weilens: 0xff\n\
             Wei\n\
             Gwei:  0.000000255\n\
             Ether: 0.000000000000000255\n\
             Usd:   $0.00"
        );
    }

    #[test]
    fn sections_keep_their_given_order() {
        let sections = vec![
            Section {
                source: Denomination::Wei,
                forms: vec![form("Gwei", "1")],
            },
            Section {
                source: Denomination::Gwei,
                forms: vec![form("Wei", "1000000000")],
            },
            Section {
                source: Denomination::Ether,
                forms: vec![form("Wei", "1000000000000000000")],
            },
        ];

        let report = render_report("1", &sections).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "Wei");
        assert_eq!(lines[3], "Gwei");
        assert_eq!(lines[5], "Ether");
    }

    #[test]
    fn empty_sections_are_skipped() {
        let sections = vec![
            Section {
                source: Denomination::Wei,
                forms: vec![],
            },
            Section {
                source: Denomination::Gwei,
                forms: vec![form("Wei", "5")],
            },
        ];

        let report = render_report("5", &sections).unwrap();
        assert!(!report.contains("\nWei\n"));
        assert!(report.contains("\nGwei\n"));
    }

    #[test]
    fn no_forms_at_all_yields_no_report() {
        let sections = vec![Section {
            source: Denomination::Wei,
            forms: vec![],
        }];
        assert!(render_report("5", &sections).is_none());
        assert!(render_report("5", &[]).is_none());
    }
}
