//! `urlrewrite normalize <raw>` – print the slug a raw URL maps to.

use urlrewrite_core::Slug;

pub fn run_normalize(raw: &str) {
    println!("{}", Slug::parse(raw));
}
