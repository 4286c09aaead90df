use crate::ListTodosQuery;

use googletest::prelude::*;

fn query(raw: Option<&str>) -> ListTodosQuery {
    ListTodosQuery {
        page_size: raw.map(str::to_string),
    }
}

#[test]
fn given_numeric_page_size_when_read_then_parses_value() {
    assert_that!(query(Some("3")).page_size(), some(eq(3)));
    assert_that!(query(Some(" 0 ")).page_size(), some(eq(0)));
    assert_that!(query(Some("-4")).page_size(), some(eq(-4)));
}

#[test]
fn given_missing_or_malformed_page_size_when_read_then_none() {
    assert_that!(query(None).page_size(), none());
    assert_that!(query(Some("ten")).page_size(), none());
    assert_that!(query(Some("")).page_size(), none());
}
