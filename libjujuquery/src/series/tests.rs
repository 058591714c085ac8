use super::*;

fn entry(id: &str) -> BucketEntry {
    BucketEntry {
        id: id.to_string(),
        downloads: 0,
        summary: String::new(),
    }
}

#[test]
fn test_classify_namespaced_takes_precedence() {
    assert_eq!(classify("cs:~user/trusty/nova"), Some(Bucket::Namespaced));
    assert_eq!(classify("~user/precise/nova"), Some(Bucket::Namespaced));
}

#[test]
fn test_classify_series() {
    assert_eq!(classify("cs:trusty/nova-compute"), Some(Bucket::Trusty));
    assert_eq!(classify("precise/mysql-51"), Some(Bucket::Precise));
}

#[test]
fn test_classify_unknown_series_dropped() {
    assert_eq!(classify("cs:xenial/nova-compute"), None);
    assert_eq!(classify("nova-compute"), None);
}

#[test]
fn test_bucket_names_and_titles() {
    assert_eq!(Bucket::Trusty.name(), "trusty");
    assert_eq!(Bucket::Namespaced.title(), "Namespaced");
    assert_eq!(Bucket::Precise.title(), "Precise");
}

#[test]
fn test_new_buckets_are_empty() {
    let buckets = SeriesBuckets::new();
    assert!(buckets.is_empty());
    assert_eq!(buckets.len(), 0);
    assert!(buckets.hint_entry().is_none());
    assert!(buckets.get(Bucket::Trusty).is_empty());
}

#[test]
fn test_insert_drops_unclassified() {
    let mut buckets = SeriesBuckets::new();
    assert_eq!(buckets.insert(entry("xenial/nova-compute")), None);
    assert!(buckets.is_empty());
}

#[test]
fn test_insert_preserves_order_within_bucket() {
    let mut buckets = SeriesBuckets::new();
    buckets.insert(entry("trusty/nova-compute-262"));
    buckets.insert(entry("trusty/nova-cloud-controller-60"));

    let ids: Vec<&str> = buckets
        .get(Bucket::Trusty)
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["trusty/nova-compute-262", "trusty/nova-cloud-controller-60"]
    );
}

#[test]
fn test_display_order_is_reverse_lexicographic() {
    let mut buckets = SeriesBuckets::new();
    buckets.insert(entry("~user/trusty/nova"));
    buckets.insert(entry("precise/nova-compute"));
    buckets.insert(entry("trusty/nova-compute"));

    let names: Vec<&str> = buckets.non_empty().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["trusty", "precise", "namespaced"]);
}

#[test]
fn test_display_order_skips_empty_buckets() {
    let mut buckets = SeriesBuckets::new();
    buckets.insert(entry("precise/nova-compute"));

    let names: Vec<&str> = buckets.non_empty().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["precise"]);
}

#[test]
fn test_hint_entry_is_first_of_last_bucket() {
    let mut buckets = SeriesBuckets::new();
    buckets.insert(entry("trusty/nova-compute"));
    buckets.insert(entry("~user/trusty/nova"));
    buckets.insert(entry("~other/nova"));

    assert_eq!(buckets.hint_entry().unwrap().id, "~user/trusty/nova");
    assert_eq!(buckets.len(), 3);
}

#[test]
fn test_hint_entry_single_bucket() {
    let mut buckets = SeriesBuckets::new();
    buckets.insert(entry("trusty/mysql-1"));
    buckets.insert(entry("trusty/mysql-2"));

    assert_eq!(buckets.hint_entry().unwrap().id, "trusty/mysql-1");
}

#[test]
fn test_render_end_to_end_layout() {
    let mut buckets = SeriesBuckets::new();
    buckets.insert(entry("trusty/nova-compute-262"));
    buckets.insert(entry("~user/trusty/nova-3"));
    buckets.insert(entry("trusty/nova-cloud-controller-60"));

    assert_eq!(
        buckets.render(),
        "Trusty\n\
         \x20 trusty/nova-compute-262\n\
         \x20 trusty/nova-cloud-controller-60\n\
         \n\
         Namespaced\n\
         \x20 ~user/trusty/nova-3\n\
         \n\
         Example usage:\n\
         \x20 juju deploy ~user/trusty/nova-3\n\
         \x20 juju info ~user/trusty/nova-3\n"
    );
}

#[test]
fn test_render_empty_has_no_hint() {
    assert_eq!(SeriesBuckets::new().render(), "");
}

#[test]
fn test_serialize_only_non_empty_buckets_in_display_order() {
    let mut buckets = SeriesBuckets::new();
    buckets.insert(BucketEntry {
        id: "~user/nova".to_string(),
        downloads: 3,
        summary: "nova".to_string(),
    });
    buckets.insert(entry("precise/nova-compute"));

    let json = serde_json::to_string(&buckets).unwrap();
    assert_eq!(
        json,
        r#"{"precise":[{"id":"precise/nova-compute","downloads":0,"summary":""}],"namespaced":[{"id":"~user/nova","downloads":3,"summary":"nova"}]}"#
    );
}
