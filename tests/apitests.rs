use LinkedQueueMini::core::api::*;

#[test]
fn test_missing_queue_is_safe() {
    let mut buf = [b'?'; 8];
    assert_eq!(q_size(None), 0);
    assert!(!q_insert_head(None, "a"));
    assert!(!q_insert_tail(None, "a"));
    assert!(q_remove_head(None, Some(&mut buf)).is_none());
    assert!(q_remove_tail(None, None).is_none());
    assert!(!q_delete_mid(None));
    assert!(!q_delete_dup(None));
    q_swap(None);
    q_reverse(None);
    q_sort(None);
    q_shuffle(None);
    q_free(None);
    assert_eq!(buf, [b'?'; 8]);
}

#[test]
fn test_empty_queue_sentinels() {
    let mut queue = q_new().unwrap();
    assert_eq!(q_size(Some(&queue)), 0);
    assert!(q_remove_head(Some(&mut queue), None).is_none());
    assert!(!q_delete_mid(Some(&mut queue)));
    assert!(q_delete_dup(Some(&mut queue)), "empty queue dedup succeeds");

    q_swap(Some(&mut queue));
    q_reverse(Some(&mut queue));
    q_sort(Some(&mut queue));
    q_shuffle(Some(&mut queue));
    assert_eq!(q_size(Some(&queue)), 0);
    assert!(queue.is_consistent());
    q_free(Some(queue));
}

#[test]
fn test_handle_api_round_trip() {
    let mut queue = q_new().unwrap();
    assert!(q_insert_tail(Some(&mut queue), "3"));
    assert!(q_insert_tail(Some(&mut queue), "1"));
    assert!(q_insert_head(Some(&mut queue), "2"));
    assert_eq!(q_size(Some(&queue)), 3);

    q_sort(Some(&mut queue));
    let mut buf = [0u8; 2];
    let head = q_remove_head(Some(&mut queue), Some(&mut buf)).unwrap();
    assert_eq!(head.value(), "1");
    assert_eq!(&buf, b"1\0");
    q_release_element(head);

    assert!(q_delete_mid(Some(&mut queue)));
    assert_eq!(queue.values().collect::<Vec<_>>(), ["2"]);

    // freeing a populated queue releases what is left
    q_free(Some(queue));
}
