use crate::domain::model::{Bounds, Triple};

/// True while every value is strictly positive.
pub fn still_running(a: i64, b: i64, c: i64) -> bool {
    a > 0 && b > 0 && c > 0
}

pub fn triple_is_positive(triple: &Triple) -> bool {
    still_running(triple.a, triple.b, triple.c)
}

pub fn in_range(value: i64, bounds: Bounds) -> bool {
    bounds.min <= value && value <= bounds.max
}
