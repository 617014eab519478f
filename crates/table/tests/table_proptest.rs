//! Property-based tests for sort, reduce and dot product.

use proptest::prelude::*;
use std::collections::BTreeMap;
use tabulon_core::{Cell, Literal, Row};
use tabulon_table::{AliasAccPair, Count, SortConfig, SortKey, SumInt64, Table};

/// Strategy for generating (group, value) pairs with a small group domain.
fn rows_strategy(max_rows: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-20i64..20, -1000i64..1000), 0..max_rows)
}

fn build(rows: &[(i64, i64)]) -> Table {
    let mut t = Table::new(["?g", "?v"]).unwrap();
    for (g, v) in rows {
        t.add_row(Row::from_cells([
            ("?g", Cell::Literal(Literal::Int64(*g))),
            ("?v", Cell::Literal(Literal::Int64(*v))),
        ]));
    }
    t
}

fn int_at(row: &Row, binding: &str) -> i64 {
    row.get(binding)
        .and_then(|c| c.as_literal())
        .and_then(|l| l.to_int64().ok())
        .unwrap()
}

proptest! {
    /// Sorting produces the same ordering as sorting the raw tuples.
    #[test]
    fn sort_matches_tuple_order(rows in rows_strategy(100), desc in any::<bool>()) {
        let mut t = build(&rows);
        let key = if desc { SortKey::desc("?g") } else { SortKey::asc("?g") };
        t.sort(&SortConfig::new(vec![key, SortKey::asc("?v")])).unwrap();

        let mut expected = rows.clone();
        expected.sort_by(|a, b| {
            let first = if desc { b.0.cmp(&a.0) } else { a.0.cmp(&b.0) };
            first.then(a.1.cmp(&b.1))
        });
        let got: Vec<(i64, i64)> = t.rows().iter().map(|r| (int_at(r, "?g"), int_at(r, "?v"))).collect();
        prop_assert_eq!(got, expected);
    }

    /// Reduction yields one row per distinct group with correct sums and counts.
    #[test]
    fn reduce_matches_grouped_sums(rows in rows_strategy(100)) {
        let mut expected: BTreeMap<i64, (i64, i64)> = BTreeMap::new();
        for (g, v) in &rows {
            let e = expected.entry(*g).or_default();
            e.0 += v;
            e.1 += 1;
        }

        let mut t = build(&rows);
        let mut pairs = vec![
            AliasAccPair::keep("?g", "?g"),
            AliasAccPair::aggregate("?v", "?sum", SumInt64::new(0)),
            AliasAccPair::aggregate("?v", "?count", Count::new()),
        ];
        t.reduce(&SortConfig::new(vec![SortKey::asc("?g")]), &mut pairs).unwrap();

        prop_assert_eq!(t.num_rows(), expected.len());
        for (row, (g, (sum, count))) in t.rows().iter().zip(expected.iter()) {
            prop_assert_eq!(int_at(row, "?g"), *g);
            prop_assert_eq!(int_at(row, "?sum"), *sum);
            prop_assert_eq!(int_at(row, "?count"), *count);
        }
    }

    /// Dot product size is the product of both sizes and every row is complete.
    #[test]
    fn dot_product_size(left in 0usize..30, right in 0usize..30) {
        let mut t1 = Table::new(["?a", "?b"]).unwrap();
        for i in 0..left {
            t1.add_row(Row::from_cells([("?a", i.to_string()), ("?b", i.to_string())]));
        }
        let mut t2 = Table::new(["?c"]).unwrap();
        for i in 0..right {
            t2.add_row(Row::from_cells([("?c", i.to_string())]));
        }
        t1.dot_product(&t2).unwrap();
        prop_assert_eq!(t1.num_rows(), left * right);
        prop_assert!(t1.rows().iter().all(|r| r.len() == 3));
    }

    /// Limit keeps a prefix of the original rows.
    #[test]
    fn limit_keeps_prefix(rows in rows_strategy(50), n in 0i64..80) {
        let mut t = build(&rows);
        t.limit(n).unwrap();
        let kept = rows.len().min(n as usize);
        prop_assert_eq!(t.num_rows(), kept);
        for (row, (g, v)) in t.rows().iter().zip(rows.iter()) {
            prop_assert_eq!(int_at(row, "?g"), *g);
            prop_assert_eq!(int_at(row, "?v"), *v);
        }
    }
}
