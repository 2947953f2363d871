//! Tool domain models.

use serde::{Deserialize, Serialize};

/// Which kinds of calendar day a tool type is billed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPolicy {
    pub charges_weekdays: bool,
    pub charges_weekends: bool,
    pub charges_holidays: bool,
}

/// Type of a rentable tool. Each variant carries its own daily price and
/// billing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolType {
    /// $1.49 a day, billed on weekdays and weekends, free on holidays
    Ladder,
    /// $1.49 a day, billed on weekdays and holidays, free on weekends
    Chainsaw,
    /// $2.99 a day, billed on weekdays only
    Jackhammer,
}

impl ToolType {
    pub const ALL: [ToolType; 3] = [ToolType::Ladder, ToolType::Chainsaw, ToolType::Jackhammer];

    /// Human-readable name, as printed on rental reports.
    pub fn description(&self) -> &'static str {
        match self {
            ToolType::Ladder => "Ladder",
            ToolType::Chainsaw => "Chainsaw",
            ToolType::Jackhammer => "Jackhammer",
        }
    }

    /// Daily rental charge in cents.
    pub fn daily_charge_cents(&self) -> i64 {
        match self {
            ToolType::Ladder => 149,
            ToolType::Chainsaw => 149,
            ToolType::Jackhammer => 299,
        }
    }

    pub fn billing_policy(&self) -> BillingPolicy {
        match self {
            ToolType::Ladder => BillingPolicy {
                charges_weekdays: true,
                charges_weekends: true,
                charges_holidays: false,
            },
            ToolType::Chainsaw => BillingPolicy {
                charges_weekdays: true,
                charges_weekends: false,
                charges_holidays: true,
            },
            ToolType::Jackhammer => BillingPolicy {
                charges_weekdays: true,
                charges_weekends: false,
                charges_holidays: false,
            },
        }
    }
}

/// A rentable tool.
///
/// Tools are only handed out by a [`ToolCatalog`](super::ToolCatalog), which
/// guarantees the code is non-empty and unique within that catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    code: String,
    tool_type: ToolType,
    brand: String,
}

impl Tool {
    pub(crate) fn new(code: String, tool_type: ToolType, brand: String) -> Self {
        Tool {
            code,
            tool_type,
            brand,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}
