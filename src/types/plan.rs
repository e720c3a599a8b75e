//! Subscription plans

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A subscription plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration_months: u32,
}

/// Data for a new plan
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub name: String,
    pub price: f64,
    pub duration_months: u32,
}

impl NewPlan {
    /// Price must be a finite non-negative amount, duration at least a month
    pub fn validate(&self) -> Result<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::invalid_input(
                "price",
                format!("{} is not a non-negative amount", self.price),
            ));
        }
        if self.duration_months == 0 {
            return Err(Error::invalid_input(
                "durationMonths",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    pub(crate) fn into_plan(self, id: String) -> Plan {
        Plan {
            id,
            name: self.name,
            price: self.price,
            duration_months: self.duration_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(price: f64, duration_months: u32) -> NewPlan {
        NewPlan {
            name: "Test".into(),
            price,
            duration_months,
        }
    }

    #[test]
    fn test_validate() {
        assert!(draft(0.0, 1).validate().is_ok());
        assert!(draft(499.99, 12).validate().is_ok());
        assert!(draft(-1.0, 1).validate().is_err());
        assert!(draft(f64::NAN, 1).validate().is_err());
        assert!(draft(10.0, 0).validate().is_err());
    }

    #[test]
    fn test_wire_format() {
        let plan = draft(29.99, 1).into_plan("p1".into());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["durationMonths"], 1);
        assert_eq!(json["price"], 29.99);
    }
}
