//! Filter-hook behavior: uniform verdicts, per-condition overrides, and
//! fallthrough to default range logic for queries the hook abstains on.

use demq::{FilterDirective, MqParser, Options, QueryFilter};

const QUERIES: &str = "(width < 200px), (width >= 200px) and (width < 400px), (width >= 400px)";

fn with_filter(options: Options, filter: QueryFilter) -> Options {
    Options {
        filter: Some(filter),
        ..options
    }
}

fn evaluate(input: &str, options: Options) -> (bool, Option<String>) {
    let parser = MqParser::new(options).unwrap();
    let list = parser.parse(input);
    (list.matches(), list.render())
}

#[test]
fn uniform_false_removes_every_query() {
    let options = with_filter(
        Options::default(),
        Box::new(|_| FilterDirective::Uniform(false)),
    );
    let (matched, _) = evaluate(QUERIES, options);
    assert!(!matched);
}

#[test]
fn uniform_true_preserves_despite_range() {
    // 600px minimum would normally strip the first two queries.
    let options = with_filter(
        Options {
            min_value: 600.0,
            ..Options::default()
        },
        Box::new(|_| FilterDirective::Uniform(true)),
    );
    let (matched, rendered) = evaluate(QUERIES, options);
    assert!(matched);
    assert_eq!(rendered.as_deref(), Some(QUERIES));
}

#[test]
fn per_condition_true_slots_preserve_everything() {
    let options = with_filter(
        Options {
            max_value: 100.0,
            ..Options::default()
        },
        Box::new(|_| FilterDirective::PerCondition(vec![Some(true), Some(true)])),
    );
    let (matched, rendered) = evaluate(QUERIES, options);
    assert!(matched);
    assert_eq!(rendered.as_deref(), Some(QUERIES));
}

#[test]
fn per_condition_slots_select_conditions() {
    let options = with_filter(
        Options {
            max_value: 100.0,
            ..Options::default()
        },
        Box::new(|_| FilterDirective::PerCondition(vec![Some(true), Some(false)])),
    );
    let (_, rendered) = evaluate(QUERIES, options);
    assert_eq!(
        rendered.as_deref(),
        Some("(width < 200px), (width >= 200px), (width >= 400px)")
    );

    let options = with_filter(
        Options {
            max_value: 100.0,
            ..Options::default()
        },
        Box::new(|_| FilterDirective::PerCondition(vec![Some(false), Some(true)])),
    );
    let (_, rendered) = evaluate(QUERIES, options);
    assert_eq!(rendered.as_deref(), Some("(width < 400px)"));
}

#[test]
fn per_condition_all_false_collapses_instead_of_removing() {
    // A per-condition directive never vetoes the match; dropping every
    // condition collapses the block. Removal requires Uniform(false).
    let options = with_filter(
        Options::default(),
        Box::new(|_| FilterDirective::PerCondition(vec![Some(false), Some(false)])),
    );
    let (matched, rendered) = evaluate(QUERIES, options);
    assert!(matched);
    assert_eq!(rendered, None);
}

#[test]
fn hook_can_decide_on_query_source() {
    let query1 = "(width < 200px)";

    let options = with_filter(
        Options::default(),
        Box::new(move |query| FilterDirective::Uniform(query.source == query1)),
    );
    let (_, rendered) = evaluate(QUERIES, options);
    assert_eq!(rendered.as_deref(), Some(query1));

    let options = with_filter(
        Options::default(),
        Box::new(move |query| FilterDirective::Uniform(query.source != query1)),
    );
    let (_, rendered) = evaluate(QUERIES, options);
    assert_eq!(
        rendered.as_deref(),
        Some("(width >= 200px) and (width < 400px), (width >= 400px)")
    );
}

#[test]
fn abstained_queries_fall_through_to_range_logic() {
    fn strip_outer_queries() -> QueryFilter {
        Box::new(|query| {
            if query.source == "(width < 200px)" || query.source == "(width >= 400px)" {
                FilterDirective::Uniform(false)
            } else {
                FilterDirective::Auto
            }
        })
    }

    let options = with_filter(
        Options {
            max_value: 300.0,
            ..Options::default()
        },
        strip_outer_queries(),
    );
    let (_, rendered) = evaluate(QUERIES, options);
    assert_eq!(rendered.as_deref(), Some("(width >= 200px)"));

    let options = with_filter(
        Options {
            min_value: 300.0,
            ..Options::default()
        },
        strip_outer_queries(),
    );
    let (_, rendered) = evaluate(QUERIES, options);
    assert_eq!(rendered.as_deref(), Some("(width < 400px)"));
}

#[test]
fn none_slots_fall_through_per_condition() {
    let input = "(width > 100px) and (width > 200px) and (width < 400px) and (width < 500px)";

    let options = with_filter(
        Options {
            min_value: 150.0,
            max_value: 450.0,
            ..Options::default()
        },
        Box::new(|_| FilterDirective::PerCondition(vec![None, None, Some(false), Some(true)])),
    );
    let (_, rendered) = evaluate(input, options);
    assert_eq!(
        rendered.as_deref(),
        Some("(width > 200px) and (width < 500px)")
    );

    let options = with_filter(
        Options {
            min_value: 150.0,
            max_value: 450.0,
            ..Options::default()
        },
        Box::new(|_| FilterDirective::PerCondition(vec![Some(true), Some(false), None, None])),
    );
    let (_, rendered) = evaluate(input, options);
    assert_eq!(
        rendered.as_deref(),
        Some("(width > 100px) and (width < 400px)")
    );
}

#[test]
fn all_none_directive_is_equivalent_to_auto() {
    let input = "(width >= 200px) and (width <= 400px)";
    let auto_all = || -> QueryFilter { Box::new(|_| FilterDirective::PerCondition(vec![None, None])) };

    let (matched, _) = evaluate(
        input,
        with_filter(
            Options {
                max_value: 100.0,
                ..Options::default()
            },
            auto_all(),
        ),
    );
    assert!(!matched);

    let (matched, rendered) = evaluate(input, with_filter(Options::default(), auto_all()));
    assert!(matched);
    assert_eq!(rendered.as_deref(), Some(input));

    let (_, rendered) = evaluate(
        input,
        with_filter(
            Options {
                min_value: 250.0,
                ..Options::default()
            },
            auto_all(),
        ),
    );
    assert_eq!(rendered.as_deref(), Some("(width <= 400px)"));

    let (matched, rendered) = evaluate(
        input,
        with_filter(
            Options {
                min_value: 250.0,
                max_value: 350.0,
                ..Options::default()
            },
            auto_all(),
        ),
    );
    assert!(matched);
    assert_eq!(rendered, None);
}

#[test]
fn per_condition_keeps_sources_verbatim() {
    // Two-condition query: the first survives untouched, the second drops.
    let input = "(min-width: 200px) and (orientation: landscape)";
    let options = with_filter(
        Options::default(),
        Box::new(|_| FilterDirective::PerCondition(vec![Some(true), Some(false)])),
    );
    let (matched, rendered) = evaluate(input, options);
    assert!(matched);
    assert_eq!(rendered.as_deref(), Some("(min-width: 200px)"));
}

#[test]
fn hook_sees_parsed_conditions() {
    let options = with_filter(
        Options::default(),
        Box::new(|query| {
            // Keep only clauses the engine recognized as width bounds.
            FilterDirective::PerCondition(
                query
                    .conditions
                    .iter()
                    .map(|c| Some(c.is_recognized()))
                    .collect(),
            )
        }),
    );
    let (_, rendered) = evaluate("(min-width: 200px) and (orientation: landscape)", options);
    assert_eq!(rendered.as_deref(), Some("(min-width: 200px)"));
}
