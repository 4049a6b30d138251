//! Algebraic laws of exit status translation, checked over the whole
//! 6-bit status space and arbitrary reportable sets.

use proptest::prelude::*;
use pylint_exit_options::{decode, translate, Category, CategorySet};

fn any_status() -> impl Strategy<Value = i64> {
    0i64..=63
}

fn any_set() -> impl Strategy<Value = CategorySet> {
    (0u8..=63).prop_map(CategorySet::from_bits_truncate)
}

proptest! {
    #[test]
    fn new_status_is_sum_of_blocking_flags(s in any_status(), r in any_set()) {
        let t = translate(s, r);
        let expected: u8 = Category::ALL
            .into_iter()
            .filter(|c| decode(s).contains(*c) && r.contains(*c))
            .map(Category::flag)
            .sum();
        prop_assert_eq!(t.new_status, expected);
        prop_assert_eq!(t.blocking, t.signaled.intersection(r));
    }

    #[test]
    fn new_status_never_adds_bits(s in any::<i64>(), r in any_set()) {
        let t = translate(s, r);
        prop_assert!(t.new_status <= 63);
        prop_assert_eq!(i64::from(t.new_status) & !s, 0);
    }

    #[test]
    fn zero_only_when_nothing_blocks(s in any_status(), r in any_set()) {
        let t = translate(s, r);
        prop_assert_eq!(t.new_status == 0, t.blocking.is_empty());
    }

    #[test]
    fn retranslation_is_noop(s in any_status(), r in any_set()) {
        let first = translate(s, r);
        let second = translate(i64::from(first.new_status), r);
        prop_assert_eq!(second.new_status, first.new_status);
        prop_assert_eq!(second.blocking, first.blocking);
        prop_assert_eq!(second.signaled, first.blocking);
    }

    #[test]
    fn larger_reportable_set_never_drops_bits(s in any_status(), a in any_set(), b in any_set()) {
        let small = a.intersection(b);
        let big = a;
        prop_assert!(small.is_subset(big));
        let lo = translate(s, small).new_status;
        let hi = translate(s, big).new_status;
        prop_assert_eq!(lo & !hi, 0);
    }

    #[test]
    fn zero_input_never_fails(r in any_set()) {
        let t = translate(0, r);
        prop_assert_eq!(t.new_status, 0);
        prop_assert!(t.signaled.is_empty());
    }

    #[test]
    fn full_report_is_identity(s in any_status()) {
        prop_assert_eq!(i64::from(translate(s, CategorySet::ALL).new_status), s);
    }
}

#[test]
fn default_set_scenarios() {
    let t = translate(16, CategorySet::DEFAULT_REPORTABLE);
    assert_eq!(t.signaled_categories(), vec![Category::Convention]);
    assert!(t.blocking_categories().is_empty());
    assert_eq!(t.new_status, 0);

    let t = translate(33, CategorySet::DEFAULT_REPORTABLE);
    assert_eq!(t.signaled_categories(), vec![Category::Fatal, Category::Usage]);
    assert_eq!(t.blocking_categories(), vec![Category::Fatal, Category::Usage]);
    assert_eq!(t.new_status, 33);
}

#[test]
fn custom_set_scenarios() {
    let conv: CategorySet = "C".parse().unwrap();

    let t = translate(16, conv);
    assert_eq!(t.blocking_categories(), vec![Category::Convention]);
    assert_eq!(t.new_status, 16);

    let t = translate(24, conv);
    assert_eq!(
        t.signaled_categories(),
        vec![Category::Refactor, Category::Convention]
    );
    assert_eq!(t.blocking_categories(), vec![Category::Convention]);
    assert_eq!(t.new_status, 16);
}

#[test]
fn translator_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<pylint_exit_options::StatusTranslator>();
    assert_send_sync::<pylint_exit_options::Translation>();

    let translator = pylint_exit_options::StatusTranslator::default();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || translator.translate(i * 8).new_status))
        .collect();
    let results: Vec<u8> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0, 0, 0, 0]);
}
