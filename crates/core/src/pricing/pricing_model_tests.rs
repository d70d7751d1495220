//! Tests for price sheet construction, editing, and aggregation.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::money::Money;
    use crate::pricing::{aggregate, PriceSheet};
    use crate::rooms::{Room, RoomInventory};
    use crate::utils::StayRange;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flat_rates(stay: &StayRange, minor_units: i64) -> BTreeMap<NaiveDate, Money> {
        stay.nights()
            .into_iter()
            .map(|day| (day, Money::new(minor_units, "EUR")))
            .collect()
    }

    fn inventory() -> RoomInventory {
        RoomInventory::new(vec![
            Room {
                id: "room-101".to_string(),
                name: "101".to_string(),
                room_type_id: "rt-double".to_string(),
            },
            Room {
                id: "room-102".to_string(),
                name: "102".to_string(),
                room_type_id: "rt-double".to_string(),
            },
            Room {
                id: "room-301".to_string(),
                name: "301".to_string(),
                room_type_id: "rt-suite".to_string(),
            },
        ])
    }

    fn march_sheet() -> PriceSheet {
        let stay = StayRange::new(date(2024, 3, 1), date(2024, 3, 4)).unwrap();
        let rates = flat_rates(&stay, 10000);
        PriceSheet::build(stay, "rt-double", "plan-std", &rates, "EUR").unwrap()
    }

    // ==================== Construction ====================

    #[test]
    fn test_build_one_line_per_night() {
        let sheet = march_sheet();
        assert_eq!(sheet.night_count(), 3);
        let days: Vec<NaiveDate> = sheet.nights().iter().map(|l| l.day).collect();
        assert_eq!(
            days,
            vec![date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 3)]
        );
    }

    #[test]
    fn test_build_defaults_accepted_to_original() {
        let sheet = march_sheet();
        for line in sheet.nights() {
            assert_eq!(line.price_accepted.as_ref(), Some(&line.price_original));
            assert!(line.room_id.is_none());
        }
    }

    #[test]
    fn test_build_missing_nightly_rate_is_an_error() {
        let stay = StayRange::new(date(2024, 3, 1), date(2024, 3, 4)).unwrap();
        let mut rates = flat_rates(&stay, 10000);
        rates.remove(&date(2024, 3, 2));

        let result = PriceSheet::build(stay, "rt-double", "plan-std", &rates, "EUR");
        match result {
            Err(Error::MissingNightlyRate { day, plan_id }) => {
                assert_eq!(day, date(2024, 3, 2));
                assert_eq!(plan_id, "plan-std");
            }
            other => panic!("Expected MissingNightlyRate, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_foreign_currency_rate() {
        let stay = StayRange::new(date(2024, 3, 1), date(2024, 3, 3)).unwrap();
        let mut rates = flat_rates(&stay, 10000);
        rates.insert(date(2024, 3, 2), Money::new(10000, "USD"));

        let result = PriceSheet::build(stay, "rt-double", "plan-std", &rates, "EUR");
        assert!(matches!(result, Err(Error::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_build_rejects_negative_rate() {
        let stay = StayRange::new(date(2024, 3, 1), date(2024, 3, 2)).unwrap();
        let mut rates = BTreeMap::new();
        rates.insert(date(2024, 3, 1), Money::new(-100, "EUR"));

        let result = PriceSheet::build(stay, "rt-double", "plan-std", &rates, "EUR");
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_stay_round_trips_through_sheet() {
        let sheet = march_sheet();
        let stay = sheet.stay().unwrap();
        assert_eq!(stay.checkin(), date(2024, 3, 1));
        assert_eq!(stay.checkout(), date(2024, 3, 4));
    }

    // ==================== Single-line edits ====================

    #[test]
    fn test_edit_one_night_leaves_others_untouched() {
        let mut sheet = march_sheet();
        sheet
            .set_accepted_price(date(2024, 3, 2), Money::new(9000, "EUR"))
            .unwrap();

        let lines = sheet.nights();
        assert_eq!(lines[0].price_accepted, Some(Money::new(10000, "EUR")));
        assert_eq!(lines[1].price_accepted, Some(Money::new(9000, "EUR")));
        assert_eq!(lines[2].price_accepted, Some(Money::new(10000, "EUR")));
        for line in lines {
            assert_eq!(line.price_original, Money::new(10000, "EUR"));
        }
    }

    #[test]
    fn test_edit_decreases_subtotal_by_exact_difference() {
        let mut sheet = march_sheet();
        let before = aggregate(&sheet, dec!(10)).unwrap();
        sheet
            .set_accepted_price(date(2024, 3, 2), Money::new(9000, "EUR"))
            .unwrap();
        let after = aggregate(&sheet, dec!(10)).unwrap();

        assert_eq!(
            before.accepted_subtotal.minor_units - after.accepted_subtotal.minor_units,
            1000
        );
        assert_eq!(before.original_subtotal, after.original_subtotal);
    }

    #[test]
    fn test_set_accepted_price_rejects_unknown_night() {
        let mut sheet = march_sheet();
        let result = sheet.set_accepted_price(date(2024, 3, 4), Money::new(9000, "EUR"));
        assert!(result.is_err());
    }

    #[test]
    fn test_set_accepted_price_rejects_negative() {
        let mut sheet = march_sheet();
        let result = sheet.set_accepted_price(date(2024, 3, 2), Money::new(-1, "EUR"));
        assert!(result.is_err());
    }

    #[test]
    fn test_assign_room_validates_room_type() {
        let mut sheet = march_sheet();
        let inventory = inventory();

        sheet
            .assign_room(date(2024, 3, 1), "room-101", &inventory)
            .unwrap();
        assert_eq!(
            sheet.nights()[0].room_id.as_deref(),
            Some("room-101")
        );

        // A suite room cannot serve a double segment.
        let result = sheet.assign_room(date(2024, 3, 2), "room-301", &inventory);
        assert!(matches!(result, Err(Error::MissingRoom(_))));

        let result = sheet.assign_room(date(2024, 3, 2), "room-999", &inventory);
        assert!(matches!(result, Err(Error::MissingRoom(_))));
    }

    // ==================== Finalization ====================

    #[test]
    fn test_finalize_requires_every_night_assigned() {
        let mut sheet = march_sheet();
        let inventory = inventory();
        sheet
            .assign_room(date(2024, 3, 1), "room-101", &inventory)
            .unwrap();
        sheet
            .assign_room(date(2024, 3, 3), "room-101", &inventory)
            .unwrap();

        match sheet.finalize_for_save() {
            Err(Error::IncompleteAssignment { day }) => assert_eq!(day, date(2024, 3, 2)),
            other => panic!("Expected IncompleteAssignment, got {:?}", other),
        }

        sheet
            .assign_room(date(2024, 3, 2), "room-102", &inventory)
            .unwrap();
        assert!(sheet.finalize_for_save().is_ok());
    }

    // ==================== Aggregation ====================

    #[test]
    fn test_aggregate_three_nights_at_ten_percent() {
        // checkin 2024-03-01, checkout 2024-03-04, nightly 10000, 10% tax
        let sheet = march_sheet();
        let totals = aggregate(&sheet, dec!(10)).unwrap();

        assert_eq!(totals.accepted_subtotal, Money::new(30000, "EUR"));
        assert_eq!(totals.accepted_tax, Money::new(3000, "EUR"));
        assert_eq!(totals.accepted_total, Money::new(33000, "EUR"));
        assert_eq!(totals.original_subtotal, Money::new(30000, "EUR"));
        assert_eq!(totals.original_tax, Money::new(3000, "EUR"));
        assert_eq!(totals.original_total, Money::new(33000, "EUR"));
    }

    #[test]
    fn test_aggregate_zero_tax_rate() {
        let sheet = march_sheet();
        let totals = aggregate(&sheet, dec!(0)).unwrap();
        assert!(totals.accepted_tax.is_zero());
        assert!(totals.original_tax.is_zero());
        assert_eq!(totals.accepted_total, totals.accepted_subtotal);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let sheet = march_sheet();
        let first = aggregate(&sheet, dec!(7.5)).unwrap();
        let second = aggregate(&sheet, dec!(7.5)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_rounds_once_on_the_aggregate() {
        // Three nights at 3333: per-line 7% taxes would each round
        // 233.31 -> 233 and sum to 699; on the aggregate, 9999 * 7% =
        // 699.93 rounds to 700.
        let stay = StayRange::new(date(2024, 3, 1), date(2024, 3, 4)).unwrap();
        let rates = flat_rates(&stay, 3333);
        let sheet = PriceSheet::build(stay, "rt-double", "plan-std", &rates, "EUR").unwrap();

        let totals = aggregate(&sheet, dec!(7)).unwrap();
        assert_eq!(totals.accepted_tax, Money::new(700, "EUR"));
        assert_eq!(totals.accepted_total, Money::new(10699, "EUR"));
    }
}
