use addendum_common::identifier::LookupKey;
use addendum_common::listing::{page_count, page_slice, ListingQuery, StatusFilter, TextSearch, TypeFilter};
use addendum_common::model::addendum::{Addendum, AddendumStatus, AddendumType, VehicleRef};
use addendum_common::model::vehicle::{Vehicle, VehicleCategory, VehicleSummary};
use std::cell::RefCell;

use addendum_common::category::InferenceSource;
use addendum_common::error::ConsoleError;
use addendum_common::resolution::{pick_plate_match, search_plate, ResolutionState, ResolvedVehicle, Resolver};
use addendum_common::submission::can_submit;
use futures::executor::block_on;
use futures::future::ready;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn vehicle(id: String) -> Vehicle {
    Vehicle {
        id,
        plate_number: None,
        owner_name: None,
        national_id: None,
        passport_number: None,
        plate_country: None,
        vehicle_type: None,
    }
}

fn addendum_strategy() -> impl Strategy<Value = Addendum> {
    (
        "[a-f0-9]{6}",
        prop::option::of("[A-Za-z ]{0,8}"),
        prop::option::of("[A-Za-z0-9-]{0,8}"),
        0usize..AddendumType::ALL.len(),
        0usize..AddendumStatus::ALL.len(),
        any::<bool>(),
    )
        .prop_map(|(id, owner, number, t, s, embedded)| Addendum {
            vehicle: Some(if embedded {
                VehicleRef::Embedded(VehicleSummary {
                    id: None,
                    plate_number: number.clone(),
                    owner_name: owner.clone(),
                })
            } else {
                VehicleRef::Id(id.clone())
            }),
            id,
            vehicle_type: None,
            addendum_type: AddendumType::ALL[t],
            addendum_number: number,
            description: owner,
            notes: None,
            amount: None,
            issue_date: None,
            effective_date: None,
            status: AddendumStatus::ALL[s],
            created_by: None,
            issuing_center: None,
        })
}

fn type_filter_strategy() -> impl Strategy<Value = TypeFilter> {
    prop_oneof![
        Just(TypeFilter::All),
        (0usize..AddendumType::ALL.len()).prop_map(|i| TypeFilter::Only(AddendumType::ALL[i])),
    ]
}

fn status_filter_strategy() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        (0usize..AddendumStatus::ALL.len()).prop_map(|i| StatusFilter::Only(AddendumStatus::ALL[i])),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn object_ids_always_take_the_direct_path(id in "[0-9a-fA-F]{24}") {
        let mut resolver = Resolver::default();
        let request = resolver.begin(&id).expect("non-blank input");
        prop_assert_eq!(request.key, LookupKey::Direct(id.clone()));
        let eager = resolver.edit(&id).expect("eager lookup");
        prop_assert_eq!(eager.key, LookupKey::Direct(id));
    }

    #[test]
    fn other_inputs_take_the_plate_path(input in "[A-Za-z0-9]{1,23}") {
        let mut resolver = Resolver::default();
        prop_assert_eq!(resolver.edit(&input), None);
        let request = resolver.begin(&input).expect("non-blank input");
        prop_assert_eq!(request.key, LookupKey::Plate(input.clone()));

        let calls = RefCell::new(Vec::new());
        let state = block_on(search_plate(&input, |category| {
            calls.borrow_mut().push(category);
            ready(Ok(Vec::new()))
        }));
        prop_assert_eq!(calls.into_inner(), VehicleCategory::PREFERENCE.to_vec());
        prop_assert!(matches!(state, ResolutionState::NotFound(ref msg) if msg.contains(input.as_str())));
    }

    #[test]
    fn syrian_match_preferred(
        syrian in prop::collection::vec("[a-f0-9]{24}", 0..4),
        foreign in prop::collection::vec("[a-f0-9]{24}", 0..4),
    ) {
        let expected = syrian
            .first()
            .map(|id| (id.clone(), VehicleCategory::Syrian))
            .or_else(|| foreign.first().map(|id| (id.clone(), VehicleCategory::Foreign)));
        let state = block_on(search_plate("q", |category| {
            let ids = match category {
                VehicleCategory::Syrian => &syrian,
                VehicleCategory::Foreign => &foreign,
            };
            ready(Ok::<_, ConsoleError>(ids.iter().cloned().map(vehicle).collect()))
        }));
        let actual = state.resolved().map(|r| (r.vehicle.id.clone(), r.category));
        prop_assert_eq!(actual, expected);
        if let Some(resolved) = state.resolved() {
            prop_assert_eq!(resolved.source, InferenceSource::SearchCategory);
        }
    }

    #[test]
    fn submit_disabled_unless_resolved_and_typed(resolved in any::<bool>(), typed in any::<bool>()) {
        let state = if resolved {
            ResolutionState::Resolved(ResolvedVehicle::from_record(vehicle(
                "64b7f0c2a1b2c3d4e5f60718".into(),
            )))
        } else {
            ResolutionState::Idle
        };
        let addendum_type = typed.then_some(AddendumType::Copy);
        prop_assert_eq!(!can_submit(&state, addendum_type), !resolved || !typed);
    }

    #[test]
    fn editing_after_resolution_always_clears_it(input in "[A-Za-z0-9]{1,30}") {
        let mut resolver = Resolver::default();
        let request = resolver.begin("ABC123").expect("non-blank input");
        resolver.finish(request.ticket, pick_plate_match("ABC123", Ok(vec![vehicle("s1".into())]), Ok(vec![])));
        prop_assert!(resolver.resolved().is_some());
        resolver.edit(&input);
        prop_assert!(resolver.resolved().is_none());
    }

    #[test]
    fn filter_order_does_not_matter(
        addendums in prop::collection::vec(addendum_strategy(), 0..40),
        needle in "[A-Za-z]{0,2}",
        type_filter in type_filter_strategy(),
        status_filter in status_filter_strategy(),
    ) {
        let search = TextSearch::new(&needle);
        let combined: Vec<&str> = addendums
            .iter()
            .filter(|a| ListingQuery { search: search.clone(), type_filter, status_filter }.matches(a))
            .map(|a| a.id.as_str())
            .collect();
        let reversed: Vec<&str> = addendums
            .iter()
            .filter(|a| status_filter.matches(a))
            .filter(|a| type_filter.matches(a))
            .filter(|a| search.matches(a))
            .map(|a| a.id.as_str())
            .collect();
        prop_assert_eq!(combined, reversed);
    }

    #[test]
    fn pages_partition_the_filtered_set(len in 0usize..300, page_size in 1usize..80) {
        let items: Vec<usize> = (0..len).collect();
        let pages = page_count(len, page_size);
        let mut seen = Vec::with_capacity(len);
        for page in 1..=pages {
            let slice = page_slice(&items, page, page_size);
            prop_assert!(slice.len() <= page_size);
            seen.extend_from_slice(slice);
        }
        prop_assert_eq!(seen, items);
    }
}
