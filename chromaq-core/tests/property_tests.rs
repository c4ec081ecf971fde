use chromaq_core::filter::{and, cond, eq, or, Materialize};
use chromaq_core::id_generator::MAX_ID_LENGTH;
use chromaq_core::{DistanceRange, Embedding, IdGenerator, QueryResult, Sha256IdGenerator};
use proptest::prelude::*;

fn ragged() -> impl Strategy<Value = (Vec<Vec<String>>, Vec<Vec<f32>>)> {
    proptest::collection::vec(
        proptest::collection::vec(("[a-z]{1,6}", -2.0f32..2.0f32), 0..8),
        0..6,
    )
    .prop_map(|rows| {
        let ids = rows
            .iter()
            .map(|row| row.iter().map(|(id, _)| id.clone()).collect())
            .collect();
        let distances = rows
            .iter()
            .map(|row| row.iter().map(|(_, d)| *d).collect())
            .collect();
        (ids, distances)
    })
}

proptest! {
    #[test]
    fn test_generated_ids_are_deterministic(
        data in proptest::collection::vec(-100.0f32..100.0f32, 1..64)
    ) {
        let embedding = Embedding::from_vec(data);
        let first = Sha256IdGenerator.generate(&[embedding.clone()]);
        let second = Sha256IdGenerator.generate(&[embedding]);

        prop_assert_eq!(&first, &second);
        prop_assert!(first[0].len() <= MAX_ID_LENGTH);
        prop_assert!(first[0].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_vectors_get_distinct_ids(
        a in proptest::collection::vec(-1.0f32..1.0f32, 1..32),
        b in proptest::collection::vec(-1.0f32..1.0f32, 1..32)
    ) {
        prop_assume!(a != b);
        let ids = Sha256IdGenerator.generate(&[Embedding::from_vec(a), Embedding::from_vec(b)]);
        prop_assert_eq!(ids.len(), 2);
        prop_assert_ne!(&ids[0], &ids[1]);
    }

    #[test]
    fn test_composite_keeps_arity_and_order(
        values in proptest::collection::vec(any::<i64>(), 0..20),
        use_and in any::<bool>()
    ) {
        let children: Vec<_> = values.iter().map(|v| cond("field", eq(*v))).collect();
        let condition = if use_and { and(children) } else { or(children) };
        let key = if use_and { "$and" } else { "$or" };

        let json: serde_json::Value = condition.materialize().into();
        let list = json[key].as_array().cloned().unwrap_or_default();
        prop_assert_eq!(list.len(), values.len());
        for (child, value) in list.iter().zip(&values) {
            prop_assert_eq!(&child["field"]["$eq"], &serde_json::json!(value));
        }
    }

    #[test]
    fn test_distance_filter_soundness(
        (ids, distances) in ragged(),
        limit in -2.0f32..2.0f32
    ) {
        let result = QueryResult {
            ids: ids.clone(),
            distances: distances.clone(),
            ..Default::default()
        };
        let range = DistanceRange::less_than(limit);
        let filtered = result.ids_within(Some(&range));

        let expected: Vec<Vec<String>> = ids
            .iter()
            .zip(&distances)
            .map(|(row, ds)| {
                row.iter()
                    .zip(ds)
                    .filter(|(_, d)| range.in_range(**d))
                    .map(|(id, _)| id.clone())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        prop_assert_eq!(&filtered, &expected);
        prop_assert!(filtered.iter().all(|row| !row.is_empty()));
        prop_assert_eq!(result.ids_within(None), ids);
    }
}
