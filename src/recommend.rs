//! Advisory tips derived from the household's appliances and location.
//!
//! Rules live in an ordered table and are evaluated independently; output
//! order is table order. The last two rules always fire.

use serde::Serialize;

use crate::domain::{ApplianceCategory, ApplianceUsage, LocationType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub why: &'static str,
    pub how: &'static str,
}

/// Facts the rules are evaluated against
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub location: LocationType,
    pub appliances: &'a [ApplianceUsage],
    pub has_solar: bool,
}

impl RuleContext<'_> {
    pub fn has_category(&self, category: ApplianceCategory) -> bool {
        self.appliances.iter().any(|a| a.kind() == category)
    }
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub tip: Tip,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "led_lighting",
        applies: |ctx| ctx.has_category(ApplianceCategory::Lighting),
        tip: Tip {
            title: "Replace lamps with LEDs",
            why: "LEDs often use 5x to 10x less power for the same light output.",
            how: "Swap 60W bulbs for 7-12W LEDs and add presence detectors where possible.",
        },
    },
    Rule {
        name: "ac_usage",
        applies: |ctx| {
            ctx.has_category(ApplianceCategory::AirConditioning) && ctx.location.is_rural()
        },
        tip: Tip {
            title: "Tune air conditioning to the time of day",
            why: "Air conditioning is one of the largest consumption items.",
            how: "Set 24-26°C, keep doors and windows closed, clean the filters. With solar, run it mostly between 12:00 and 18:00.",
        },
    },
    Rule {
        name: "solar_for_ac",
        applies: |ctx| ctx.has_category(ApplianceCategory::AirConditioning) && !ctx.has_solar,
        tip: Tip {
            title: "Simple fix: solar panels to power daytime air conditioning",
            why: "Solar output peaks around midday, which matches cooling demand in hot weather.",
            how: "Run the AC mostly 12:00-18:00 on solar and limit morning and evening use on the grid.",
        },
    },
    Rule {
        name: "insulation",
        applies: |_| true,
        tip: Tip {
            title: "Cut losses: insulation and sealing",
            why: "Fewer losses mean less heating and cooling.",
            how: "Window seals, thermal curtains, roof and wall insulation where possible.",
        },
    },
    Rule {
        name: "scheduling",
        applies: |_| true,
        tip: Tip {
            title: "Scheduling: program your usage",
            why: "Shifting consumption to the cheapest (or sunniest) hours lowers the bill.",
            how: "Timers, smart plugs and scenes (water heater, washing machine) in off-peak hours or during solar production.",
        },
    },
];

/// Tips for a household, evaluated against [`RULES`] in order.
pub fn recommend(location_type: &str, appliances: &[ApplianceUsage], has_solar: bool) -> Vec<Tip> {
    let ctx = RuleContext {
        location: LocationType::classify(location_type),
        appliances,
        has_solar,
    };
    evaluate(RULES, &ctx)
}

pub fn evaluate(rules: &[Rule], ctx: &RuleContext<'_>) -> Vec<Tip> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.tip.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn titles(tips: &[Tip]) -> Vec<&'static str> {
        tips.iter().map(|t| t.title).collect()
    }

    fn rule_tip(name: &str) -> &'static str {
        RULES
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.tip.title)
            .unwrap()
    }

    fn lamp() -> ApplianceUsage {
        ApplianceUsage::new("Lamps", "Lamp", 60.0)
    }

    fn ac(tag: &str) -> ApplianceUsage {
        ApplianceUsage::new("AC", tag, 1200.0)
    }

    #[test]
    fn test_empty_household_gets_unconditional_tips() {
        let tips = recommend("city", &[], false);
        assert_eq!(titles(&tips), vec![rule_tip("insulation"), rule_tip("scheduling")]);
    }

    #[test]
    fn test_lamp_without_ac() {
        let tips = recommend("city", &[lamp()], false);
        assert_eq!(
            titles(&tips),
            vec![rule_tip("led_lighting"), rule_tip("insulation"), rule_tip("scheduling")]
        );
    }

    #[rstest]
    #[case("village", false, &["ac_usage", "solar_for_ac"])]
    #[case("Countryside", true, &["ac_usage"])]
    #[case("city", false, &["solar_for_ac"])]
    #[case("city", true, &[])]
    fn test_ac_rules(#[case] location: &str, #[case] has_solar: bool, #[case] expected: &[&str]) {
        for tag in ["ac", "AIR_CONDITIONER", "climatiseur"] {
            let tips = recommend(location, &[ac(tag)], has_solar);
            let mut want: Vec<&str> = expected.iter().map(|n| rule_tip(n)).collect();
            want.push(rule_tip("insulation"));
            want.push(rule_tip("scheduling"));
            assert_eq!(titles(&tips), want, "tag {tag} at {location}");
        }
    }

    #[test]
    fn test_all_rules_fire_in_table_order() {
        let tips = recommend("village", &[ac("ac"), lamp()], false);
        let all: Vec<&str> = RULES.iter().map(|r| r.tip.title).collect();
        assert_eq!(titles(&tips), all);
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = [Rule {
            name: "always",
            applies: |_| true,
            tip: Tip { title: "t", why: "w", how: "h" },
        }];
        let ctx = RuleContext {
            location: LocationType::City,
            appliances: &[],
            has_solar: false,
        };
        assert_eq!(evaluate(&rules, &ctx).len(), 1);
    }
}
