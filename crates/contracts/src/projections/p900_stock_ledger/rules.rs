//! Ledger entries produced by posting each document type.

use super::dto::{LedgerDraft, LedgerLocation};
use crate::domain::a007_purchasing::Purchasing;
use crate::domain::a008_stock_movement::StockMovement;
use crate::domain::a009_color_kitchen_batch::{ColorKitchenBatch, ConsumptionLine};
use crate::domain::a010_color_kitchen_entry::ColorKitchenEntry;
use crate::domain::a011_stock_opname::StockOpname;

/// Every purchased line enters the warehouse
pub fn purchasing_entries(doc: &Purchasing) -> Vec<LedgerDraft> {
    doc.lines
        .iter()
        .filter(|l| l.quantity != 0.0)
        .map(|l| LedgerDraft::incoming(LedgerLocation::Gudang, &l.product_ref, l.quantity))
        .collect()
}

/// Warehouse to kitchen transfer
pub fn stock_movement_entries(doc: &StockMovement) -> Vec<LedgerDraft> {
    doc.lines
        .iter()
        .filter(|l| l.quantity != 0.0)
        .flat_map(|l| {
            [
                LedgerDraft::outgoing(LedgerLocation::Gudang, &l.product_ref, l.quantity),
                LedgerDraft::incoming(LedgerLocation::Kitchen, &l.product_ref, l.quantity),
            ]
        })
        .collect()
}

fn consumption_entries(lines: &[ConsumptionLine]) -> Vec<LedgerDraft> {
    lines
        .iter()
        .filter(|l| l.quantity != 0.0)
        .flat_map(|l| {
            [
                LedgerDraft::outgoing(LedgerLocation::Kitchen, &l.product_ref, l.quantity),
                LedgerDraft::incoming(LedgerLocation::Usage, &l.product_ref, l.quantity),
            ]
        })
        .collect()
}

pub fn batch_entries(doc: &ColorKitchenBatch) -> Vec<LedgerDraft> {
    consumption_entries(&doc.dyes)
}

pub fn entry_entries(doc: &ColorKitchenEntry) -> Vec<LedgerDraft> {
    consumption_entries(&doc.auxiliaries)
}

/// Positive difference: stock missing from the warehouse.
/// Negative difference: more in the warehouse than recorded, taken back from the kitchen.
pub fn opname_entries(doc: &StockOpname) -> Vec<LedgerDraft> {
    let mut out = Vec::new();
    for line in &doc.lines {
        let diff = line.calc_difference();
        if diff > 0.0 {
            out.push(LedgerDraft::outgoing(
                LedgerLocation::Gudang,
                &line.product_ref,
                diff,
            ));
        } else if diff < 0.0 {
            out.push(LedgerDraft::incoming(
                LedgerLocation::Gudang,
                &line.product_ref,
                diff.abs(),
            ));
            out.push(LedgerDraft::outgoing(
                LedgerLocation::Kitchen,
                &line.product_ref,
                diff.abs(),
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_purchasing::PurchasingLine;
    use crate::domain::a008_stock_movement::StockMovementLine;
    use crate::domain::a011_stock_opname::StockOpnameLine;

    #[test]
    fn test_purchasing_goes_into_gudang() {
        let doc = Purchasing::new_for_insert(
            "nb1",
            "2025-07-01",
            "s".into(),
            None,
            vec![PurchasingLine {
                product_ref: "p".into(),
                quantity: 25.0,
                price: 10.0,
                ..Default::default()
            }],
        );
        assert_eq!(
            purchasing_entries(&doc),
            vec![LedgerDraft::incoming(LedgerLocation::Gudang, "p", 25.0)]
        );
    }

    #[test]
    fn test_stock_movement_moves_to_kitchen() {
        let doc = StockMovement::new_for_insert(
            "sm",
            "2025-07-01",
            vec![StockMovementLine {
                product_ref: "p".into(),
                quantity: 3.0,
                unit_cost_used: 0.0,
            }],
        );
        let entries = stock_movement_entries(&doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].location, LedgerLocation::Gudang);
        assert_eq!(entries[0].quantity_out, 3.0);
        assert_eq!(entries[1].location, LedgerLocation::Kitchen);
        assert_eq!(entries[1].quantity_in, 3.0);
    }

    #[test]
    fn test_consumption_goes_to_usage() {
        let batch = ColorKitchenBatch::new_for_insert(
            "b",
            "2025-07-01",
            vec![ConsumptionLine {
                product_ref: "dye".into(),
                quantity: 1.25,
                ..Default::default()
            }],
        );
        let entries = batch_entries(&batch);
        assert_eq!(
            entries,
            vec![
                LedgerDraft::outgoing(LedgerLocation::Kitchen, "dye", 1.25),
                LedgerDraft::incoming(LedgerLocation::Usage, "dye", 1.25),
            ]
        );
    }

    #[test]
    fn test_opname_directions() {
        let doc = StockOpname::new_for_insert(
            "so",
            "2025-07-31",
            vec![
                StockOpnameLine {
                    product_ref: "short".into(),
                    system_quantity: 10.0,
                    physical_quantity: 8.0,
                    difference: 0.0,
                },
                StockOpnameLine {
                    product_ref: "excess".into(),
                    system_quantity: 5.0,
                    physical_quantity: 6.5,
                    difference: 0.0,
                },
                StockOpnameLine {
                    product_ref: "match".into(),
                    system_quantity: 4.0,
                    physical_quantity: 4.0,
                    difference: 0.0,
                },
            ],
        );
        let entries = opname_entries(&doc);
        assert_eq!(
            entries,
            vec![
                LedgerDraft::outgoing(LedgerLocation::Gudang, "short", 2.0),
                LedgerDraft::incoming(LedgerLocation::Gudang, "excess", 1.5),
                LedgerDraft::outgoing(LedgerLocation::Kitchen, "excess", 1.5),
            ]
        );
        assert!(entries
            .iter()
            .all(|e| e.quantity_in >= 0.0 && e.quantity_out >= 0.0));
    }
}
