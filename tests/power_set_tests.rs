//! Integration tests for power-set enumeration.

use linked_set::OrderedSet;
use rstest::rstest;

#[rstest]
fn test_power_set_of_empty_set_is_the_empty_set() {
    let set: OrderedSet<i32> = OrderedSet::new();
    let members: Vec<OrderedSet<i32>> = set.power_set().unwrap().collect();
    assert_eq!(members.len(), 1);
    assert!(members[0].is_empty());
}

#[rstest]
fn test_power_set_members_of_three() {
    let set: OrderedSet<char> = ['c', 'a', 'b'].into_iter().collect();
    let mut rendered: Vec<String> = set
        .power_set()
        .unwrap()
        .map(|member| member.to_string())
        .collect();
    rendered.sort();

    assert_eq!(
        rendered,
        vec!["[]", "[a, b, c]", "[a, b]", "[a, c]", "[a]", "[b, c]", "[b]", "[c]"]
    );
}

#[rstest]
fn test_power_set_leaves_source_untouched() {
    let set: OrderedSet<i32> = [1, 2].into_iter().collect();
    let total: usize = set.power_set().unwrap().map(|member| member.len()).sum();
    assert_eq!(total, 4);
    assert_eq!(set.to_string(), "[1, 2]");
}

#[rstest]
fn test_power_set_members_are_independent() {
    let set: OrderedSet<i32> = [1, 2].into_iter().collect();
    let mut members: Vec<OrderedSet<i32>> = set.power_set().unwrap().collect();
    members[3].insert(5);

    assert_eq!(members[3].to_string(), "[1, 2, 5]");
    assert_eq!(set.to_string(), "[1, 2]");
}

#[rstest]
#[case(4, 16)]
#[case(10, 1024)]
fn test_power_set_reports_exact_length(#[case] len: u8, #[case] expected: usize) {
    let set: OrderedSet<u8> = (0..len).collect();
    let power_set = set.power_set().unwrap();
    assert_eq!(power_set.len(), expected);
}
