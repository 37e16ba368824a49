//! Variable Selection Module
//! Closed whitelists of the dataset columns a user may correlate.
//!
//! The explanatory list supplies the x axis, the target list the y axis.
//! Both are plain enums so a selection outside the whitelist cannot be
//! represented; text input goes through [`Variable::lookup`].

use crate::error::AnalysisError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which side of the analysis a variable is selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableRole {
    Explanatory,
    Target,
}

impl fmt::Display for VariableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableRole::Explanatory => f.write_str("explanatory"),
            VariableRole::Target => f.write_str("target"),
        }
    }
}

/// A whitelisted dataset variable: a human-readable label mapped to a column.
pub trait Variable: Copy + Eq + 'static {
    const ROLE: VariableRole;

    /// Every permitted value, in display order.
    fn all() -> &'static [Self];

    fn label(self) -> &'static str;

    fn column(self) -> &'static str;

    /// Resolve a label or column identifier (exact match).
    fn lookup(name: &str) -> Result<Self, AnalysisError> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.label() == name || v.column() == name)
            .ok_or_else(|| AnalysisError::InvalidSelection {
                name: name.to_string(),
                role: Self::ROLE,
            })
    }
}

/// Variables selectable for the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplanatoryVariable {
    TotalStores,
    ExistingStoreSalesGrowth,
    CustomerCount,
    InternationalRevenue,
    GdpGrowthRate,
    ConsumerConfidence,
    DigitalInvestment,
    CustomerSatisfaction,
}

impl ExplanatoryVariable {
    pub const ALL: [Self; 8] = [
        Self::TotalStores,
        Self::ExistingStoreSalesGrowth,
        Self::CustomerCount,
        Self::InternationalRevenue,
        Self::GdpGrowthRate,
        Self::ConsumerConfidence,
        Self::DigitalInvestment,
        Self::CustomerSatisfaction,
    ];
}

impl Variable for ExplanatoryVariable {
    const ROLE: VariableRole = VariableRole::Explanatory;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(self) -> &'static str {
        match self {
            Self::TotalStores => "Total Seven-Eleven stores",
            Self::ExistingStoreSalesGrowth => "Existing store sales growth rate",
            Self::CustomerCount => "Seven-Eleven customer count (million)",
            Self::InternationalRevenue => "International revenue (USD million)",
            Self::GdpGrowthRate => "Japan GDP growth rate (%)",
            Self::ConsumerConfidence => "Consumer confidence index",
            Self::DigitalInvestment => "Digital investment (JPY million)",
            Self::CustomerSatisfaction => "Customer satisfaction score",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::TotalStores => "Total_Stores_Seven_Eleven",
            Self::ExistingStoreSalesGrowth => "Existing_Store_Sales_Growth_Rate",
            Self::CustomerCount => "Customer_Count_Seven_Eleven_Million",
            Self::InternationalRevenue => "International_Revenue_USD_Million",
            Self::GdpGrowthRate => "GDP_Growth_Rate",
            Self::ConsumerConfidence => "Consumer_Confidence_Index",
            Self::DigitalInvestment => "Digital_Investment_Million_Yen",
            Self::CustomerSatisfaction => "Customer_Satisfaction_Score",
        }
    }
}

/// Variables selectable for the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetVariable {
    Revenue,
    OperatingIncome,
    NetIncome,
    TotalAssets,
    InternationalRevenue,
}

impl TargetVariable {
    pub const ALL: [Self; 5] = [
        Self::Revenue,
        Self::OperatingIncome,
        Self::NetIncome,
        Self::TotalAssets,
        Self::InternationalRevenue,
    ];
}

impl Variable for TargetVariable {
    const ROLE: VariableRole = VariableRole::Target;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue (JPY million)",
            Self::OperatingIncome => "Operating income (JPY million)",
            Self::NetIncome => "Net income (JPY million)",
            Self::TotalAssets => "Total assets (JPY million)",
            Self::InternationalRevenue => "International revenue (USD million)",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue_Million_Yen",
            Self::OperatingIncome => "Operating_Income_Million_Yen",
            Self::NetIncome => "Net_Income_Million_Yen",
            Self::TotalAssets => "Total_Assets_Million_Yen",
            Self::InternationalRevenue => "International_Revenue_USD_Million",
        }
    }
}

impl FromStr for ExplanatoryVariable {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl FromStr for TargetVariable {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// Label and column of a selected variable, as handed to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableRef {
    pub label: &'static str,
    pub column: &'static str,
}

impl VariableRef {
    pub fn of<V: Variable>(variable: V) -> Self {
        Self {
            label: variable.label(),
            column: variable.column(),
        }
    }
}

/// One user request: which explanatory variable against which target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSelection {
    pub x: ExplanatoryVariable,
    pub y: TargetVariable,
}

impl Default for VariableSelection {
    fn default() -> Self {
        Self {
            x: ExplanatoryVariable::ALL[0],
            y: TargetVariable::ALL[0],
        }
    }
}

impl VariableSelection {
    pub fn new(x: ExplanatoryVariable, y: TargetVariable) -> Self {
        Self { x, y }
    }

    /// Build a selection from free text (label or column identifier).
    pub fn parse(x: &str, y: &str) -> Result<Self, AnalysisError> {
        Ok(Self {
            x: x.parse()?,
            y: y.parse()?,
        })
    }
}

/// Distinct column identifiers across both whitelists, in display order.
pub fn whitelisted_columns() -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = Vec::new();
    let names = ExplanatoryVariable::ALL
        .iter()
        .map(|v| v.column())
        .chain(TargetVariable::ALL.iter().map(|v| v.column()));
    for name in names {
        if !columns.contains(&name) {
            columns.push(name);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_label_and_column() {
        assert_eq!(
            "GDP_Growth_Rate".parse::<ExplanatoryVariable>().unwrap(),
            ExplanatoryVariable::GdpGrowthRate
        );
        assert_eq!(
            "Net income (JPY million)".parse::<TargetVariable>().unwrap(),
            TargetVariable::NetIncome
        );
    }

    #[test]
    fn lookup_rejects_names_outside_whitelist() {
        let err = "Store_Manager_Age".parse::<ExplanatoryVariable>().unwrap_err();
        match err {
            AnalysisError::InvalidSelection { name, role } => {
                assert_eq!(name, "Store_Manager_Age");
                assert_eq!(role, VariableRole::Explanatory);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn target_list_does_not_accept_explanatory_columns() {
        assert!("Total_Stores_Seven_Eleven".parse::<TargetVariable>().is_err());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!("gdp_growth_rate".parse::<ExplanatoryVariable>().is_err());
    }

    #[test]
    fn shared_column_is_listed_once() {
        let columns = whitelisted_columns();
        assert_eq!(columns.len(), 12);
        assert_eq!(
            columns
                .iter()
                .filter(|c| **c == "International_Revenue_USD_Million")
                .count(),
            1
        );
    }

    #[test]
    fn parse_builds_selection() {
        let selection =
            VariableSelection::parse("Total_Stores_Seven_Eleven", "Revenue_Million_Yen").unwrap();
        assert_eq!(selection, VariableSelection::default());
    }
}
