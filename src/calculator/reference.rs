use crate::calculator::constants::REFERENCE_WEIGHTS_KG;
use crate::calculator::energy::{calculate_der, calculate_rer};
use crate::models::{DerRange, FactorRange};

/// One row of the weight reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRow {
    pub weight_kg: u32,
    pub rer: u32,
    /// Present when the table was built for a specific life stage.
    pub der: Option<DerRange>,
}

/// RER for each whole-kilogram weight, optionally with the DER range for
/// `factors`.
pub fn reference_table(factors: Option<FactorRange>) -> Vec<ReferenceRow> {
    REFERENCE_WEIGHTS_KG
        .map(|weight_kg| {
            let rer = calculate_rer(weight_kg as f64);
            ReferenceRow {
                weight_kg,
                rer,
                der: factors.map(|f| calculate_der(rer, f.min, f.max)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_rows() {
        let table = reference_table(None);
        assert_eq!(table.len(), 15);
        assert_eq!(table[0].weight_kg, 1);
        assert!(table.iter().all(|row| row.der.is_none()));
    }

    #[test]
    fn test_reference_with_factors() {
        let table = reference_table(Some(FactorRange::new(1.0, 1.2)));
        let four = table.iter().find(|row| row.weight_kg == 4).unwrap();
        assert_eq!(four.der, Some(DerRange { min: 198, max: 238 }));
    }
}
