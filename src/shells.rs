//! Electron shell filling and shell-label parsing.

use crate::error::VizError;

/// Aufbau filling order with per-subshell capacities. The visualizer only
/// ever emits these eight shells; electrons beyond the table total are
/// dropped (documented lossy behavior, not a failure).
pub const SHELL_FILLING_ORDER: [(&str, u32); 8] = [
    ("1s", 2),
    ("2s", 2),
    ("2p", 6),
    ("3s", 2),
    ("3p", 6),
    ("4s", 2),
    ("3d", 10),
    ("4p", 6),
];

/// Sum of all capacities in [`SHELL_FILLING_ORDER`].
pub const SHELL_TABLE_CAPACITY: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitalShell {
    pub label: &'static str,
    pub capacity: u32,
    pub occupancy: u32,
}

/// Fills shells in fixed order until `electron_count` is exhausted.
/// Shells that would hold zero electrons are omitted. Total for any count;
/// occupancies sum to `min(electron_count, SHELL_TABLE_CAPACITY)`.
pub fn electron_configuration(electron_count: u32) -> Vec<OrbitalShell> {
    let mut shells = Vec::new();
    let mut remaining = electron_count;
    for (label, capacity) in SHELL_FILLING_ORDER {
        if remaining == 0 {
            break;
        }
        let occupancy = remaining.min(capacity);
        shells.push(OrbitalShell {
            label,
            capacity,
            occupancy,
        });
        remaining -= occupancy;
    }
    shells
}

/// A parsed shell label such as "2p": principal number plus subshell letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLabel {
    pub n: u32,
    pub subshell: char,
}

impl ShellLabel {
    /// Parses `"<n><subshell>"`. The leading character must be a digit 1-9;
    /// anything else is rejected before it can turn into NaN geometry.
    pub fn parse(label: &str) -> Result<Self, VizError> {
        let mut chars = label.chars();
        let n = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|&n| n >= 1)
            .ok_or_else(|| VizError::MalformedShellLabel(label.to_string()))?;
        let subshell = chars
            .next()
            .ok_or_else(|| VizError::MalformedShellLabel(label.to_string()))?;
        Ok(ShellLabel { n, subshell })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carbon_configuration() {
        let shells = electron_configuration(6);
        let summary: Vec<(&str, u32)> = shells.iter().map(|s| (s.label, s.occupancy)).collect();
        assert_eq!(summary, vec![("1s", 2), ("2s", 2), ("2p", 2)]);
    }

    #[test]
    fn test_hydrogen_configuration() {
        let shells = electron_configuration(1);
        assert_eq!(shells.len(), 1);
        assert_eq!(shells[0].label, "1s");
        assert_eq!(shells[0].occupancy, 1);
    }

    #[test]
    fn test_zero_electrons() {
        assert!(electron_configuration(0).is_empty());
    }

    #[test]
    fn test_occupancy_sums_and_bounds() {
        for count in 0..60 {
            let shells = electron_configuration(count);
            let total: u32 = shells.iter().map(|s| s.occupancy).sum();
            assert_eq!(total, count.min(SHELL_TABLE_CAPACITY));
            for shell in &shells {
                assert!(shell.occupancy >= 1);
                assert!(shell.occupancy <= shell.capacity);
            }
        }
    }

    #[test]
    fn test_filling_order_is_fixed() {
        let shells = electron_configuration(SHELL_TABLE_CAPACITY);
        let labels: Vec<&str> = shells.iter().map(|s| s.label).collect();
        let expected: Vec<&str> = SHELL_FILLING_ORDER.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_table_capacity_constant_matches_table() {
        let total: u32 = SHELL_FILLING_ORDER.iter().map(|(_, c)| c).sum();
        assert_eq!(total, SHELL_TABLE_CAPACITY);
    }

    #[test]
    fn test_excess_electrons_dropped() {
        let shells = electron_configuration(500);
        let total: u32 = shells.iter().map(|s| s.occupancy).sum();
        assert_eq!(total, SHELL_TABLE_CAPACITY);
    }

    #[test]
    fn test_shell_label_parse() {
        assert_eq!(
            ShellLabel::parse("3d").unwrap(),
            ShellLabel { n: 3, subshell: 'd' }
        );
        assert!(ShellLabel::parse("x2").is_err());
        assert!(ShellLabel::parse("0s").is_err());
        assert!(ShellLabel::parse("2").is_err());
        assert!(ShellLabel::parse("").is_err());
    }
}
