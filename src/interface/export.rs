use std::path::Path;

use serde::Serialize;

use crate::calculator::ReferenceRow;
use crate::error::Result;

/// Flat CSV layout of a reference row.
#[derive(Debug, Serialize)]
struct ReferenceRecord {
    weight_kg: u32,
    rer_kcal: u32,
    der_min_kcal: Option<u32>,
    der_max_kcal: Option<u32>,
}

impl From<&ReferenceRow> for ReferenceRecord {
    fn from(row: &ReferenceRow) -> Self {
        Self {
            weight_kg: row.weight_kg,
            rer_kcal: row.rer,
            der_min_kcal: row.der.map(|der| der.min),
            der_max_kcal: row.der.map(|der| der.max),
        }
    }
}

/// Write the reference table to a CSV file.
///
/// DER columns are left empty when the table has no life stage.
pub fn write_reference_csv(rows: &[ReferenceRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(ReferenceRecord::from(row))?;
    }

    wtr.flush()?;
    Ok(())
}
