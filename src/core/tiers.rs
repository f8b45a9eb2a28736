use serde::{Deserialize, Serialize};

/// Traveler-count band that restricts eligible vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Small,
    Mid,
    Large,
}

/// One row of the tier table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRule {
    pub tier: Tier,
    pub min_travelers: u32,
    /// `None` means unbounded
    pub max_travelers: Option<u32>,
    pub allowed_vehicle_ids: Vec<String>,
}

impl TierRule {
    #[inline]
    pub fn covers(&self, travelers: u32) -> bool {
        travelers >= self.min_travelers
            && self.max_travelers.map_or(true, |max| travelers <= max)
    }

    #[inline]
    pub fn allows(&self, vehicle_id: &str) -> bool {
        self.allowed_vehicle_ids.iter().any(|id| id == vehicle_id)
    }
}

/// Declarative mapping from traveler counts to allowed vehicles
///
/// Rules are checked in order and the first one covering the traveler
/// count wins. A count covered by no rule allows nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    rules: Vec<TierRule>,
}

impl TierTable {
    pub fn new(rules: Vec<TierRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TierRule] {
        &self.rules
    }

    /// Rule for a traveler count
    pub fn rule_for(&self, travelers: u32) -> Option<&TierRule> {
        self.rules.iter().find(|rule| rule.covers(travelers))
    }

    pub fn tier_for(&self, travelers: u32) -> Option<Tier> {
        self.rule_for(travelers).map(|rule| rule.tier)
    }
}

impl Default for TierTable {
    /// Sedans for up to five, MUVs for six to nine, the tempo traveller beyond
    fn default() -> Self {
        let ids = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect();

        Self::new(vec![
            TierRule {
                tier: Tier::Small,
                min_travelers: 1,
                max_travelers: Some(5),
                allowed_vehicle_ids: ids(&["1", "5"]),
            },
            TierRule {
                tier: Tier::Mid,
                min_travelers: 6,
                max_travelers: Some(9),
                allowed_vehicle_ids: ids(&["2", "3", "6"]),
            },
            TierRule {
                tier: Tier::Large,
                min_travelers: 10,
                max_travelers: None,
                allowed_vehicle_ids: ids(&["4"]),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let table = TierTable::default();

        assert_eq!(table.tier_for(0), None);
        for n in 1..=5 {
            assert_eq!(table.tier_for(n), Some(Tier::Small));
        }
        for n in 6..=9 {
            assert_eq!(table.tier_for(n), Some(Tier::Mid));
        }
        assert_eq!(table.tier_for(10), Some(Tier::Large));
        assert_eq!(table.tier_for(40), Some(Tier::Large));
    }

    #[test]
    fn test_rule_allows() {
        let table = TierTable::default();
        let mid = table.rule_for(7).unwrap();

        assert!(mid.allows("2"));
        assert!(!mid.allows("4"));
    }

    #[test]
    fn test_gap_allows_nothing() {
        let table = TierTable::new(vec![TierRule {
            tier: Tier::Small,
            min_travelers: 2,
            max_travelers: Some(3),
            allowed_vehicle_ids: vec!["1".to_string()],
        }]);

        assert!(table.rule_for(1).is_none());
        assert!(table.rule_for(4).is_none());
    }
}
