use std::collections::HashSet;

use bizline_server::domain::{
    fill_template, generate_headline, random_rating, random_review_count, RandomSource,
    SeededRandom, ThreadRandom, HEADLINE_TEMPLATES,
};

struct Constant(f64);

impl RandomSource for Constant {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

#[test]
fn test_templates_are_distinct_and_use_both_placeholders() {
    let unique: HashSet<&str> = HEADLINE_TEMPLATES.iter().copied().collect();
    assert_eq!(unique.len(), 10);

    for template in HEADLINE_TEMPLATES {
        assert!(template.contains("{businessName}"), "{template}");
        assert!(template.contains("{location}"), "{template}");
    }
}

#[test]
fn test_each_sample_band_selects_its_template() {
    for (i, template) in HEADLINE_TEMPLATES.iter().enumerate() {
        let sample = (i as f64 + 0.5) / 10.0;
        let headline = generate_headline(&Constant(sample), "Joe's Cafe", "Austin");
        assert_eq!(headline, fill_template(template, "Joe's Cafe", "Austin"));
    }
}

#[test]
fn test_fill_template_replaces_every_occurrence() {
    let filled = fill_template("{businessName} and {businessName} in {location}", "Acme", "Reno");
    assert_eq!(filled, "Acme and Acme in Reno");
}

#[test]
fn test_fill_template_inserts_values_verbatim() {
    let filled = fill_template(HEADLINE_TEMPLATES[1], "{location} <b>&</b>", "{businessName}");
    assert_eq!(
        filled,
        "The Ultimate Guide to {location} <b>&</b> in {businessName}"
    );
}

#[test]
fn test_fill_template_keeps_unrelated_braces() {
    assert_eq!(fill_template("{x} {location}", "A", "B"), "{x} B");
}

#[test]
fn test_rating_bounds_and_rounding() {
    assert_eq!(random_rating(&Constant(0.0)), 3.5);
    assert_eq!(random_rating(&Constant(0.5)), 4.3);
    assert_eq!(random_rating(&Constant(0.999_999)), 5.0);
}

#[test]
fn test_review_count_bounds() {
    assert_eq!(random_review_count(&Constant(0.0)), 50);
    assert_eq!(random_review_count(&Constant(0.5)), 175);
    assert_eq!(random_review_count(&Constant(0.999_999)), 300);
}

#[test]
fn test_out_of_range_samples_stay_in_bounds() {
    for sample in [-1.0, 1.0, 2.0, f64::NAN] {
        let source = Constant(sample);
        assert!((3.5..=5.0).contains(&random_rating(&source)));
        assert!((50..=300).contains(&random_review_count(&source)));
        assert!(!generate_headline(&source, "A", "B").contains('{'));
    }
}

#[test]
fn test_thread_random_stays_in_bounds() {
    let source = ThreadRandom;
    for _ in 0..1_000 {
        let rating = random_rating(&source);
        assert!((3.5..=5.0).contains(&rating));
        assert_eq!((rating * 10.0).round() / 10.0, rating);
        assert!((50..=300).contains(&random_review_count(&source)));
    }
}

#[test]
fn test_seeded_random_is_reproducible() {
    let a = SeededRandom::new(7);
    let b = SeededRandom::new(7);

    let from_a: Vec<String> = (0..20).map(|_| generate_headline(&a, "Joe", "Austin")).collect();
    let from_b: Vec<String> = (0..20).map(|_| generate_headline(&b, "Joe", "Austin")).collect();

    assert_eq!(from_a, from_b);
}
