//! Tests for tool domain models.

#[cfg(test)]
mod tests {
    use crate::tools::{BillingPolicy, ToolCatalog, ToolType};

    // ==================== ToolType Pricing Tests ====================

    #[test]
    fn test_daily_charges() {
        assert_eq!(ToolType::Ladder.daily_charge_cents(), 149);
        assert_eq!(ToolType::Chainsaw.daily_charge_cents(), 149);
        assert_eq!(ToolType::Jackhammer.daily_charge_cents(), 299);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ToolType::Ladder.description(), "Ladder");
        assert_eq!(ToolType::Chainsaw.description(), "Chainsaw");
        assert_eq!(ToolType::Jackhammer.description(), "Jackhammer");
    }

    #[test]
    fn test_no_negative_prices() {
        for tool_type in ToolType::ALL {
            assert!(tool_type.daily_charge_cents() >= 0);
        }
    }

    // ==================== BillingPolicy Tests ====================

    #[test]
    fn test_ladder_policy() {
        assert_eq!(
            ToolType::Ladder.billing_policy(),
            BillingPolicy {
                charges_weekdays: true,
                charges_weekends: true,
                charges_holidays: false,
            }
        );
    }

    #[test]
    fn test_chainsaw_policy() {
        assert_eq!(
            ToolType::Chainsaw.billing_policy(),
            BillingPolicy {
                charges_weekdays: true,
                charges_weekends: false,
                charges_holidays: true,
            }
        );
    }

    #[test]
    fn test_jackhammer_policy() {
        assert_eq!(
            ToolType::Jackhammer.billing_policy(),
            BillingPolicy {
                charges_weekdays: true,
                charges_weekends: false,
                charges_holidays: false,
            }
        );
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_tool_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ToolType::Jackhammer).unwrap(),
            "\"JACKHAMMER\""
        );
        assert_eq!(
            serde_json::from_str::<ToolType>("\"LADDER\"").unwrap(),
            ToolType::Ladder
        );
    }

    #[test]
    fn test_tool_serialization() {
        let catalog = ToolCatalog::standard();
        let tool = catalog.get("CHNS").unwrap();
        let json = serde_json::to_value(tool).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "CHNS",
                "toolType": "CHAINSAW",
                "brand": "Stihl"
            })
        );
    }
}
