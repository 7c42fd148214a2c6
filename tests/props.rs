use parameter_sweep_filter::{
    scan, ConfigSpace, ConstraintSet, FilterError, ParamField, ParamValue, SweepTemplate,
};
use proptest::prelude::*;

/// Small random templates: up to three parameters with distinct generated
/// names and integer domains (an empty domain is legal).
fn templates() -> impl Strategy<Value = SweepTemplate> {
    prop::collection::vec(prop::collection::vec(-5i64..=5, 0..4), 1..4).prop_map(|domains| {
        SweepTemplate {
            params: domains
                .into_iter()
                .enumerate()
                .map(|(i, values)| ParamField {
                    name: format!("p{i}"),
                    values: values.into_iter().map(ParamValue::Int).collect(),
                })
                .collect(),
        }
    })
}

proptest! {
    #[test]
    fn matched_indices_are_a_strictly_increasing_subsequence(
        template in templates(),
        name_pick in 0usize..3,
        wanted in -5i64..=5,
    ) {
        let names = template.param_names();
        let name = names[name_pick % names.len()].to_string();
        let constraints =
            ConstraintSet::from_tokens(&[name, wanted.to_string()]).unwrap();
        let indices: Vec<usize> = scan(&template, &constraints).unwrap().collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| i < template.size()));
    }

    #[test]
    fn empty_constraint_set_matches_the_whole_space(template in templates()) {
        let indices: Vec<usize> =
            scan(&template, &ConstraintSet::default()).unwrap().collect();
        let expected: Vec<usize> = (0..template.size()).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn odd_token_lists_always_fail(
        mut tokens in prop::collection::vec("[a-z]{1,4}", 0..6),
        extra in "[a-z0-9]{1,4}",
    ) {
        if tokens.len() % 2 != 0 {
            tokens.push(extra);
        } else {
            tokens.truncate(tokens.len().saturating_sub(1));
        }
        prop_assume!(tokens.len() % 2 != 0);
        let err = ConstraintSet::from_tokens(&tokens).unwrap_err();
        prop_assert!(matches!(err, FilterError::OddPairCount));
    }
}
